use serde::{Deserialize, Serialize};

pub type MemberId = i64;

/// Reference to an uploaded profile image. The backend sends
/// `{ "id": null }` for members who never uploaded one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileImageRef {
    #[serde(default)]
    pub id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: MemberId,
    pub email: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub profile_image: Option<ProfileImageRef>,
    #[serde(default, rename = "introduce")]
    pub introduction: Option<String>,
}

impl Member {
    pub fn profile_image_id(&self) -> Option<i64> {
        self.profile_image.as_ref().and_then(|p| p.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
    Deleted,
}

// --- Requests ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestRequest {
    pub genre_id: i64,
}

/// Registration fields sent as the `request` part of the sign-up form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub nickname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    pub interest_requests: Vec<InterestRequest>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberUpdateRequest {
    pub nickname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    pub interest_requests: Vec<InterestRequest>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntroduceRequest {
    pub member_id: MemberId,
    pub introduce: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmailSendRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmailCheckRequest {
    pub email: String,
    pub code: String,
}

/// Toggle request: the backend follows when the edge is absent and
/// unfollows when present.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowRequest {
    #[serde(rename = "targetId")]
    pub followee_id: MemberId,
    #[serde(rename = "currentUserId")]
    pub follower_id: MemberId,
}

// --- Responses ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(flatten)]
    pub member: Member,
    #[serde(default)]
    pub role: Option<Role>,
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interest {
    pub genre_id: i64,
    #[serde(default)]
    pub genre_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberTier {
    #[serde(default)]
    pub genre_id: Option<i64>,
    #[serde(default)]
    pub genre_name: Option<String>,
    #[serde(default)]
    pub fun_tier: Option<String>,
    #[serde(default)]
    pub useful_tier: Option<String>,
    #[serde(default)]
    pub fun_experience: u32,
    #[serde(default)]
    pub useful_experience: u32,
}

/// Full member page payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberProfile {
    #[serde(flatten)]
    pub member: Member,
    #[serde(default)]
    pub following: u32,
    #[serde(default)]
    pub follower: u32,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub today_visit_count: u32,
    #[serde(default)]
    pub total_visit_count: u32,
    #[serde(default)]
    pub notification_count: u32,
    #[serde(default)]
    pub interests: Vec<Interest>,
    #[serde(default)]
    pub tiers: Vec<MemberTier>,
}

/// One side of a follow edge, as listed by the following/follower reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowSummary {
    pub id: MemberId,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub profile_image: Option<ProfileImageRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follow_request_uses_backend_field_names() {
        let json = serde_json::to_value(FollowRequest {
            followee_id: 7,
            follower_id: 3,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "targetId": 7, "currentUserId": 3 }));
    }

    #[test]
    fn member_with_null_profile_image_id() {
        let member: Member = serde_json::from_str(
            r#"{"id":1,"email":"a@b.c","nickname":"duljji","profileImage":{"id":null},"introduce":"hi"}"#,
        )
        .unwrap();
        assert_eq!(member.profile_image_id(), None);
        assert_eq!(member.introduction.as_deref(), Some("hi"));
    }

    #[test]
    fn login_response_flattens_member() {
        let resp: LoginResponse = serde_json::from_str(
            r#"{"id":5,"email":"a@b.c","nickname":"n","role":"USER","profileImage":{"id":12},"accessToken":"at","refreshToken":"rt"}"#,
        )
        .unwrap();
        assert_eq!(resp.member.id, 5);
        assert_eq!(resp.member.profile_image_id(), Some(12));
        assert_eq!(resp.role, Some(Role::User));
        assert_eq!(resp.access_token, "at");
    }

    #[test]
    fn member_profile_ignores_unknown_fields() {
        let profile: MemberProfile = serde_json::from_str(
            r#"{"id":2,"email":"x@y.z","following":3,"follower":4,"reviews":[],"notifications":[],
                "tiers":[{"genreId":1,"genreName":"코미디","funTier":"0","usefulTier":"0","funExperience":0,"usefulExperience":0}]}"#,
        )
        .unwrap();
        assert_eq!(profile.following, 3);
        assert_eq!(profile.follower, 4);
        assert_eq!(profile.tiers.len(), 1);
        assert_eq!(profile.tiers[0].genre_name.as_deref(), Some("코미디"));
    }

    #[test]
    fn sign_up_request_omits_absent_optionals() {
        let json = serde_json::to_value(SignUpRequest {
            email: "a@b.c".into(),
            password: "pw".into(),
            nickname: "n".into(),
            gender: None,
            birth_date: None,
            interest_requests: vec![InterestRequest { genre_id: 28 }],
        })
        .unwrap();
        assert!(json.get("gender").is_none());
        assert_eq!(json["interestRequests"][0]["genreId"], 28);
    }
}
