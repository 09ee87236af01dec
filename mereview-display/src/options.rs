use std::str::FromStr;

use chrono::FixedOffset;
use serde::Deserialize;

pub const DEFAULT_PROFILE_IMAGE: &str = "/testProfile.gif";

/// Zone that offset-carrying timestamps are converted into before
/// formatting. Zone-less timestamps are printed as received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum DisplayTimeZone {
    #[default]
    Local,
    Utc,
    Fixed(FixedOffset),
}

impl FromStr for DisplayTimeZone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "utc" | "z" => Ok(Self::Utc),
            other => FixedOffset::from_str(other)
                .map(Self::Fixed)
                .map_err(|_| format!("unknown time zone: {s}")),
        }
    }
}

impl TryFrom<String> for DisplayTimeZone {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Deserialize)]
struct DisplaySettings {
    #[serde(default = "default_profile_image")]
    default_profile_image: String,
    #[serde(default)]
    time_zone: DisplayTimeZone,
}

fn default_profile_image() -> String { DEFAULT_PROFILE_IMAGE.into() }

/// Rendering inputs that do not come from the review itself.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayOptions {
    base_url: String,
    pub default_profile_image: String,
    pub time_zone: DisplayTimeZone,
}

impl DisplayOptions {
    /// `base_url` is the API base that serves `/image/download/...`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            default_profile_image: default_profile_image(),
            time_zone: DisplayTimeZone::default(),
        }
    }

    /// Read `MEREVIEW_DISPLAY__DEFAULT_PROFILE_IMAGE` and
    /// `MEREVIEW_DISPLAY__TIME_ZONE`; unset or invalid values keep defaults.
    pub fn load(base_url: impl Into<String>) -> Self {
        Self::from_env_source(base_url, None)
    }

    fn from_env_source(base_url: impl Into<String>, vars: Option<config::Map<String, String>>) -> Self {
        let mut options = Self::new(base_url);
        let settings = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("MEREVIEW_DISPLAY")
                    .separator("__")
                    .source(vars),
            )
            .build()
            .and_then(|c| c.try_deserialize::<DisplaySettings>());

        match settings {
            Ok(settings) => {
                options.default_profile_image = settings.default_profile_image;
                options.time_zone = settings.time_zone;
            }
            Err(e) => tracing::warn!(error = %e, "invalid display configuration, using defaults"),
        }
        options
    }

    pub fn with_time_zone(mut self, time_zone: DisplayTimeZone) -> Self {
        self.time_zone = time_zone;
        self
    }

    pub fn with_default_profile_image(mut self, path: impl Into<String>) -> Self {
        self.default_profile_image = path.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
