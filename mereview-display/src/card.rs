//! Review → [`DisplayModel`] mapping for review cards.

use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDateTime, Timelike, Utc};
use serde::Serialize;

use mereview_shared::{Review, Timestamp};

use crate::images::{background_image_url, profile_image_url};
use crate::options::{DisplayOptions, DisplayTimeZone};

pub const GENRE_SEPARATOR: &str = ". ";
pub const THUMBS_UP_ICON: &str = "/ReviewCardDummy/thumbsup.png";
pub const THUMBS_DOWN_ICON: &str = "/ReviewCardDummy/thumbsdown.png";

/// Presentation state for one review card. Recomputed on every render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image_url: Option<String>,
    pub profile_image_url: String,
    /// `None` means no emphasis is applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment_opacity: Option<f64>,
    pub formatted_date: String,
    pub genre_label: String,
    pub recommend_icon: &'static str,
}

impl DisplayModel {
    pub fn from_review(review: &Review, options: &DisplayOptions) -> Self {
        Self {
            background_image_url: background_image_url(options, review.background_image_id),
            profile_image_url: profile_image_url(options, review.profile_image_id),
            sentiment_opacity: sentiment_opacity(review.funny_count, review.useful_count, review.dislike_count),
            formatted_date: format_timestamp(&review.create_date, options.time_zone),
            genre_label: genre_label(&review.movie_genre),
            recommend_icon: recommend_icon(review.recommend),
        }
    }
}

/// Share of positive reactions, or `None` when nobody reacted.
pub fn sentiment_opacity(funny: u32, useful: u32, dislike: u32) -> Option<f64> {
    let positive = u64::from(funny) + u64::from(useful);
    let total = positive + u64::from(dislike);
    if total == 0 {
        return None;
    }
    Some(positive as f64 / total as f64)
}

/// `YYYY-MM-DD HH:MM`, year unpadded.
pub fn format_timestamp(timestamp: &Timestamp, time_zone: DisplayTimeZone) -> String {
    let wall_clock = match timestamp {
        Timestamp::Naive(naive) => *naive,
        Timestamp::Zoned(zoned) => to_wall_clock(zoned, time_zone),
    };
    format_wall_clock(&wall_clock)
}

fn to_wall_clock(instant: &DateTime<FixedOffset>, time_zone: DisplayTimeZone) -> NaiveDateTime {
    match time_zone {
        DisplayTimeZone::Local => instant.with_timezone(&Local).naive_local(),
        DisplayTimeZone::Utc => instant.with_timezone(&Utc).naive_utc(),
        DisplayTimeZone::Fixed(offset) => instant.with_timezone(&offset).naive_local(),
    }
}

fn format_wall_clock(dt: &NaiveDateTime) -> String {
    format!(
        "{}-{:02}-{:02} {:02}:{:02}",
        dt.year(),
        dt.month(),
        dt.day(),
        dt.hour(),
        dt.minute()
    )
}

/// Joins genres for display. Not reversible: labels may contain the
/// separator themselves.
pub fn genre_label(genres: &[String]) -> String {
    genres.join(GENRE_SEPARATOR)
}

pub fn recommend_icon(recommend: bool) -> &'static str {
    if recommend {
        THUMBS_UP_ICON
    } else {
        THUMBS_DOWN_ICON
    }
}
