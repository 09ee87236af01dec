use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::member::MemberId;

pub type ReviewId = i64;

/// Review record as returned by the list/search endpoints.
///
/// Counters are unsigned, so a record carrying a negative counter fails to
/// deserialize instead of reaching the display engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub review_id: ReviewId,
    pub member_id: MemberId,
    pub nickname: String,
    #[serde(default)]
    pub profile_image_id: Option<i64>,
    #[serde(default)]
    pub background_image_id: Option<i64>,
    pub one_line_review: String,
    #[serde(default)]
    pub funny_count: u32,
    #[serde(default)]
    pub useful_count: u32,
    #[serde(default)]
    pub dislike_count: u32,
    #[serde(default)]
    pub comment_count: u32,
    pub movie_title: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub release_year: String,
    #[serde(default)]
    pub movie_genre: Vec<String>,
    pub create_date: Timestamp,
    pub recommend: bool,
}

/// Creation instant of a review.
///
/// The backend serialises `LocalDateTime` without a zone; other sources send
/// RFC 3339 with an offset. Both are kept as received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    Naive(NaiveDateTime),
    Zoned(DateTime<FixedOffset>),
}

/// Zone-less layouts accepted after RFC 3339, tried in order.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

impl Timestamp {
    /// On failure the error of the last layout tried is returned.
    pub fn parse(raw: &str) -> Result<Self, chrono::ParseError> {
        if let Ok(zoned) = DateTime::parse_from_rfc3339(raw) {
            return Ok(Self::Zoned(zoned));
        }
        NAIVE_FORMATS[1..]
            .iter()
            .fold(NaiveDateTime::parse_from_str(raw, NAIVE_FORMATS[0]), |parsed, format| {
                parsed.or_else(|_| NaiveDateTime::parse_from_str(raw, format))
            })
            .map(Self::Naive)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Naive(naive) => write!(f, "{}", naive.format("%Y-%m-%dT%H:%M:%S%.f")),
            Self::Zoned(zoned) => write!(f, "{}", zoned.to_rfc3339()),
        }
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Timestamp::parse(&raw).map_err(serde::de::Error::custom)
    }
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}
