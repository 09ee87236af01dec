//! Review-card display engine: turns a [`mereview_shared::Review`] into the
//! values a card renders (image URLs, sentiment opacity, date, genres).

pub mod card;
pub mod images;
pub mod options;

pub use card::{format_timestamp, genre_label, recommend_icon, sentiment_opacity, DisplayModel};
pub use images::{background_image_url, image_url, member_avatar_url, profile_image_url, ImageCategory};
pub use options::{DisplayOptions, DisplayTimeZone, DEFAULT_PROFILE_IMAGE};
