use reqwest::Method;

use mereview_shared::{EmailCheckRequest, EmailSendRequest, GatewayResult};

use crate::client::{json_body, request, Gateway};
use crate::transport::HttpTransport;

impl<T: HttpTransport> Gateway<T> {
    // --- POST {email}/send ---

    /// Ask the backend to mail a verification code to `payload.email`.
    pub async fn email_send(&self, payload: &EmailSendRequest) -> GatewayResult<()> {
        let req = request(Method::POST, &self.endpoints().email, "/send").with_body(json_body(payload)?);
        self.submit(req).await
    }

    // --- POST {email}/check ---

    pub async fn email_check(&self, payload: &EmailCheckRequest) -> GatewayResult<()> {
        let req = request(Method::POST, &self.endpoints().email, "/check").with_body(json_body(payload)?);
        self.submit(req).await
    }
}
