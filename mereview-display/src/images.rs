use mereview_shared::Member;

use crate::options::DisplayOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageCategory {
    Profiles,
    Backgrounds,
}

impl ImageCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Profiles => "profiles",
            Self::Backgrounds => "backgrounds",
        }
    }
}

/// `{base}/image/download/{category}/{id}`
pub fn image_url(options: &DisplayOptions, category: ImageCategory, id: i64) -> String {
    format!("{}/image/download/{}/{}", options.base_url(), category.as_str(), id)
}

/// Id `0` never names a stored image and counts as absent.
fn stored_image(id: Option<i64>) -> Option<i64> {
    id.filter(|id| *id != 0)
}

/// Background art is simply omitted when the review has none.
pub fn background_image_url(options: &DisplayOptions, background_image_id: Option<i64>) -> Option<String> {
    stored_image(background_image_id).map(|id| image_url(options, ImageCategory::Backgrounds, id))
}

/// Profile pictures fall back to the default asset when absent.
pub fn profile_image_url(options: &DisplayOptions, profile_image_id: Option<i64>) -> String {
    match stored_image(profile_image_id) {
        Some(id) => image_url(options, ImageCategory::Profiles, id),
        None => options.default_profile_image.clone(),
    }
}

/// Avatar for the signed-in member shown in the navigation chrome.
pub fn member_avatar_url(options: &DisplayOptions, member: &Member) -> String {
    profile_image_url(options, member.profile_image_id())
}
