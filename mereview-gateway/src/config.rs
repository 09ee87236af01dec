use serde::Deserialize;

/// Connection settings for one gateway instance.
///
/// Injected at construction; nothing here is read from process-wide state
/// after [`GatewayConfig::load`] returns.
#[derive(Debug, Deserialize, Clone)]
pub struct GatewayConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    // Resource bases, relative to `api_url`
    #[serde(default = "default_member_path")]
    pub member_path: String,
    #[serde(default = "default_member_path")]
    pub member_form_path: String,
    #[serde(default = "default_email_path")]
    pub email_path: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String { "http://localhost:8080/api".into() }
fn default_member_path() -> String { "/members".into() }
fn default_email_path() -> String { "/email".into() }
fn default_timeout_secs() -> u64 { 30 }

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            member_path: default_member_path(),
            member_form_path: default_member_path(),
            email_path: default_email_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GatewayConfig {
    /// Read `MEREVIEW_GATEWAY__*` environment variables, falling back to
    /// defaults for anything unset.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::from_env_source(None)
    }

    /// `vars` replaces the process environment when given.
    fn from_env_source(vars: Option<config::Map<String, String>>) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("MEREVIEW_GATEWAY")
                    .separator("__")
                    .source(vars),
            )
            .build()?;
        Ok(config.try_deserialize().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "invalid gateway configuration, using defaults");
            Self::default()
        }))
    }

    /// Config pointing at `api_url` with default resource paths.
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Self::default()
        }
    }

    pub fn member_base(&self) -> String {
        join(&self.api_url, &self.member_path)
    }

    pub fn member_form_base(&self) -> String {
        join(&self.api_url, &self.member_form_path)
    }

    pub fn email_base(&self) -> String {
        join(&self.api_url, &self.email_path)
    }
}

fn join(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
