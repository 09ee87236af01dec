use reqwest::Method;

use mereview_shared::{
    FollowRequest, FollowSummary, GatewayError, GatewayResult, IntroduceRequest, LoginRequest, LoginResponse,
    MemberId, MemberProfile, MemberTier, MemberUpdateRequest, SignUpRequest,
};

use crate::client::{json_body, request, text_body, Gateway};
use crate::request::{ImageUpload, MultipartForm, RequestBody};
use crate::transport::HttpTransport;

impl<T: HttpTransport> Gateway<T> {
    // --- POST {form}/sign-up ---

    /// Register a member. Fields travel as a JSON `request` part, the
    /// optional profile image as a `file` part.
    pub async fn sign_up(
        &self,
        payload: &SignUpRequest,
        profile_image: Option<ImageUpload>,
    ) -> GatewayResult<MemberId> {
        let fields = serde_json::to_string(payload).map_err(GatewayError::Encode)?;
        let mut form = MultipartForm::new().json("request", fields);
        if let Some(upload) = profile_image {
            form = form.file("file", upload);
        }

        let req = request(Method::POST, &self.endpoints().member_form, "/sign-up")
            .with_body(RequestBody::Multipart(form));
        self.fetch(req).await
    }

    // --- POST {member}/login ---

    /// The credentials are serialised to text before sending, unlike every
    /// other structured payload.
    pub async fn login(&self, payload: &LoginRequest) -> GatewayResult<LoginResponse> {
        let req = request(Method::POST, &self.endpoints().member, "/login").with_body(text_body(payload)?);
        self.fetch(req).await
    }

    // --- POST {member}/introduce ---

    pub async fn update_introduction(&self, payload: &IntroduceRequest) -> GatewayResult<()> {
        let req = request(Method::POST, &self.endpoints().member, "/introduce").with_body(json_body(payload)?);
        self.submit(req).await
    }

    // --- DELETE {member}/{id} ---

    /// Hard delete; irreversible from the client's side.
    pub async fn delete_member(&self, member_id: MemberId) -> GatewayResult<()> {
        let req = request(Method::DELETE, &self.endpoints().member, &format!("/{member_id}"));
        self.submit(req).await
    }

    // --- GET {member}/{id} ---

    pub async fn get_member(&self, member_id: MemberId) -> GatewayResult<MemberProfile> {
        let req = request(Method::GET, &self.endpoints().member, &format!("/{member_id}"));
        self.fetch(req).await
    }

    // --- GET {member}/{id}/following ---

    /// Members that `member_id` follows.
    pub async fn get_following(&self, member_id: MemberId) -> GatewayResult<Vec<FollowSummary>> {
        let req = request(Method::GET, &self.endpoints().member, &format!("/{member_id}/following"));
        self.fetch(req).await
    }

    // --- GET {member}/{id}/follower ---

    /// Members following `member_id`.
    pub async fn get_followers(&self, member_id: MemberId) -> GatewayResult<Vec<FollowSummary>> {
        let req = request(Method::GET, &self.endpoints().member, &format!("/{member_id}/follower"));
        self.fetch(req).await
    }

    // --- GET {member}/{id}/genre/{genre} ---

    pub async fn get_by_genre(&self, member_id: MemberId, genre_number: i64) -> GatewayResult<Vec<MemberTier>> {
        let req = request(
            Method::GET,
            &self.endpoints().member,
            &format!("/{member_id}/genre/{genre_number}"),
        );
        self.fetch(req).await
    }

    // --- POST {member}/{id} ---

    pub async fn update_member(&self, member_id: MemberId, payload: &MemberUpdateRequest) -> GatewayResult<MemberId> {
        let req = request(Method::POST, &self.endpoints().member, &format!("/{member_id}"))
            .with_body(json_body(payload)?);
        self.fetch(req).await
    }

    // --- PUT {form}/profile-image ---

    pub async fn update_profile_image(&self, member_id: MemberId, upload: ImageUpload) -> GatewayResult<()> {
        let form = MultipartForm::new()
            .text("memberId", member_id.to_string())
            .file("file", upload);
        let req = request(Method::PUT, &self.endpoints().member_form, "/profile-image")
            .with_body(RequestBody::Multipart(form));
        self.submit(req).await
    }

    // --- POST {member}/follow ---

    /// Toggles the follower → followee edge on the backend.
    pub async fn follow(&self, payload: &FollowRequest) -> GatewayResult<()> {
        let req = request(Method::POST, &self.endpoints().member, "/follow").with_body(json_body(payload)?);
        self.submit(req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::FormPart;
    use crate::testing::{gateway, MockTransport};
    use assert_matches::assert_matches;

    const MEMBER: &str = "http://api.test/members";

    fn update_payload() -> MemberUpdateRequest {
        MemberUpdateRequest {
            nickname: "duljji".into(),
            gender: Some("MALE".into()),
            birth_date: None,
            interest_requests: vec![],
        }
    }

    #[tokio::test]
    async fn get_member_is_get_on_member_id() {
        for id in [1_i64, 42, 9_000_000_000] {
            let gateway = gateway(MockTransport::replying(200, r#"{"id":1,"email":"a@b.c"}"#));
            gateway.get_member(id).await.unwrap();

            let sent = gateway.transport().last_request();
            assert_eq!(sent.method, Method::GET);
            assert_eq!(sent.url, format!("{MEMBER}/{id}"));
            assert_eq!(sent.body, RequestBody::Empty);
        }
    }

    #[tokio::test]
    async fn read_paths_follow_the_catalogue() {
        let gateway = gateway(MockTransport::default());
        let _ = gateway.get_following(7).await;
        let _ = gateway.get_followers(7).await;
        let _ = gateway.get_by_genre(7, 28).await;
        let _ = gateway.delete_member(7).await;

        let sent: Vec<(Method, String)> = gateway
            .transport()
            .requests()
            .into_iter()
            .map(|r| (r.method, r.url))
            .collect();
        assert_eq!(
            sent,
            vec![
                (Method::GET, format!("{MEMBER}/7/following")),
                (Method::GET, format!("{MEMBER}/7/follower")),
                (Method::GET, format!("{MEMBER}/7/genre/28")),
                (Method::DELETE, format!("{MEMBER}/7")),
            ]
        );
    }

    #[tokio::test]
    async fn ids_are_interpolated_without_validation() {
        let gateway = gateway(MockTransport::replying(400, "Bad Request"));
        let result = gateway.get_by_genre(-3, 0).await;

        assert_eq!(gateway.transport().last_request().url, format!("{MEMBER}/-3/genre/0"));
        assert_matches!(result, Err(GatewayError::Server { status: 400, .. }));
    }

    #[tokio::test]
    async fn login_sends_pre_serialised_text() {
        let gateway = gateway(MockTransport::replying(
            200,
            r#"{"id":1,"email":"a@b.c","accessToken":"at","refreshToken":"rt"}"#,
        ));
        let payload = LoginRequest {
            email: "a@b.c".into(),
            password: "1234".into(),
        };
        let session = gateway.login(&payload).await.unwrap();
        assert_eq!(session.access_token, "at");

        let sent = gateway.transport().last_request();
        assert_eq!(sent.method, Method::POST);
        assert_eq!(sent.url, format!("{MEMBER}/login"));
        assert_eq!(
            sent.body,
            RequestBody::Text(r#"{"email":"a@b.c","password":"1234"}"#.into())
        );
    }

    #[tokio::test]
    async fn update_member_sends_structured_json() {
        let gateway = gateway(MockTransport::replying(200, "5"));
        let id = gateway.update_member(5, &update_payload()).await.unwrap();
        assert_eq!(id, 5);

        let sent = gateway.transport().last_request();
        assert_eq!(sent.method, Method::POST);
        assert_eq!(sent.url, format!("{MEMBER}/5"));
        assert_matches!(sent.body, RequestBody::Json(ref v) if v["nickname"] == "duljji");
        assert_eq!(sent.body.kind(), "json");
    }

    #[tokio::test]
    async fn introduce_and_follow_post_json() {
        let gateway = gateway(MockTransport::default());
        let _ = gateway
            .update_introduction(&IntroduceRequest {
                member_id: 3,
                introduce: "movie nerd".into(),
            })
            .await;
        let _ = gateway
            .follow(&FollowRequest {
                followee_id: 9,
                follower_id: 3,
            })
            .await;

        let sent = gateway.transport().requests();
        assert_eq!(sent[0].url, format!("{MEMBER}/introduce"));
        assert_eq!(
            sent[0].body,
            RequestBody::Json(serde_json::json!({ "memberId": 3, "introduce": "movie nerd" }))
        );
        assert_eq!(sent[1].url, format!("{MEMBER}/follow"));
        assert_eq!(
            sent[1].body,
            RequestBody::Json(serde_json::json!({ "targetId": 9, "currentUserId": 3 }))
        );
        assert!(sent.iter().all(|r| r.method == Method::POST));
    }

    #[tokio::test]
    async fn sign_up_is_multipart_on_form_resource() {
        let gateway = gateway(MockTransport::replying(200, r#"{"data":17}"#));
        let payload = SignUpRequest {
            email: "new@b.c".into(),
            password: "pw".into(),
            nickname: "newbie".into(),
            gender: None,
            birth_date: None,
            interest_requests: vec![],
        };
        let image = ImageUpload::new("me.gif", "image/gif", vec![0x47, 0x49, 0x46]);

        let id = gateway.sign_up(&payload, Some(image.clone())).await.unwrap();
        assert_eq!(id, 17);

        let sent = gateway.transport().last_request();
        assert_eq!(sent.method, Method::POST);
        assert_eq!(sent.url, format!("{MEMBER}/sign-up"));
        let RequestBody::Multipart(form) = sent.body else {
            panic!("sign-up must be multipart");
        };
        assert_matches!(form.part("request"), Some(FormPart::Text { value, .. }) if value.contains("\"nickname\":\"newbie\""));
        assert_eq!(form.part("file"), Some(&FormPart::File { name: "file".into(), upload: image }));
    }

    #[tokio::test]
    async fn sign_up_without_image_has_no_file_part() {
        let gateway = gateway(MockTransport::replying(200, "3"));
        let payload = SignUpRequest {
            email: "new@b.c".into(),
            password: "pw".into(),
            nickname: "newbie".into(),
            gender: None,
            birth_date: None,
            interest_requests: vec![],
        };
        gateway.sign_up(&payload, None).await.unwrap();

        let RequestBody::Multipart(form) = gateway.transport().last_request().body else {
            panic!("sign-up must be multipart");
        };
        assert!(form.part("file").is_none());
    }

    #[tokio::test]
    async fn profile_image_is_put_multipart() {
        let gateway = gateway(MockTransport::replying(200, ""));
        let upload = ImageUpload::new("avatar.png", "image/png", vec![1, 2]);
        gateway.update_profile_image(3, upload).await.unwrap();

        let sent = gateway.transport().last_request();
        assert_eq!(sent.method, Method::PUT);
        assert_eq!(sent.url, format!("{MEMBER}/profile-image"));
        let RequestBody::Multipart(form) = sent.body else {
            panic!("profile image must be multipart");
        };
        assert_matches!(form.part("memberId"), Some(FormPart::Text { value, .. }) if value == "3");
        assert_matches!(form.part("file"), Some(FormPart::File { .. }));
    }
}
