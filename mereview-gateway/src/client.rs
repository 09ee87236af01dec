//! Gateway handle and the request/response plumbing shared by every
//! operation.

use std::future::Future;
use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use mereview_shared::{ApiResponse, GatewayError, GatewayResult};

use crate::config::GatewayConfig;
use crate::request::{ApiRequest, RequestBody};
use crate::transport::{HttpTransport, RawResponse, ReqwestTransport};

/// Base URLs of the three backend resource groups.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub member: String,
    pub member_form: String,
    pub email: String,
}

impl From<&GatewayConfig> for Endpoints {
    fn from(config: &GatewayConfig) -> Self {
        Self {
            member: config.member_base(),
            member_form: config.member_form_base(),
            email: config.email_base(),
        }
    }
}

/// Stateless client for the member and email-verification resources.
///
/// Every operation issues exactly one request and resolves to exactly one
/// `Result`. Nothing is retried or cached.
pub struct Gateway<T = ReqwestTransport> {
    transport: T,
    endpoints: Endpoints,
}

impl Gateway<ReqwestTransport> {
    pub fn from_config(config: &GatewayConfig) -> Result<Self, reqwest::Error> {
        let transport = ReqwestTransport::new(Duration::from_secs(config.timeout_secs))?;
        Ok(Self::with_transport(transport, config))
    }
}

impl<T: HttpTransport> Gateway<T> {
    pub fn with_transport(transport: T, config: &GatewayConfig) -> Self {
        Self {
            transport,
            endpoints: Endpoints::from(config),
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // ---- shared helpers for the operation modules ----

    pub(crate) async fn execute(&self, request: ApiRequest) -> GatewayResult<RawResponse> {
        tracing::debug!(
            method = %request.method,
            url = %request.url,
            body = request.body.kind(),
            "dispatching request"
        );
        let response = self.transport.send(request).await?;
        tracing::debug!(status = response.status, "response received");
        ensure_success(response)
    }

    /// Send and decode a JSON success body (bare or `{ "data": ... }`).
    pub(crate) async fn fetch<R: DeserializeOwned>(&self, request: ApiRequest) -> GatewayResult<R> {
        let response = self.execute(request).await?;
        serde_json::from_slice::<ApiResponse<R>>(&response.body)
            .map(ApiResponse::into_inner)
            .map_err(GatewayError::Decode)
    }

    /// Send and discard the success body.
    pub(crate) async fn submit(&self, request: ApiRequest) -> GatewayResult<()> {
        self.execute(request).await?;
        Ok(())
    }
}

fn ensure_success(response: RawResponse) -> GatewayResult<RawResponse> {
    if !response.is_success() {
        return Err(GatewayError::server(response.status, response.text()));
    }
    Ok(response)
}

/// Structured payload transmitted as a JSON value.
pub(crate) fn json_body<P: Serialize>(payload: &P) -> GatewayResult<RequestBody> {
    serde_json::to_value(payload)
        .map(RequestBody::Json)
        .map_err(GatewayError::Encode)
}

/// Structured payload serialised to a single text body before transmission.
pub(crate) fn text_body<P: Serialize>(payload: &P) -> GatewayResult<RequestBody> {
    serde_json::to_string(payload)
        .map(RequestBody::Text)
        .map_err(GatewayError::Encode)
}

pub(crate) fn request(method: Method, base: &str, path: &str) -> ApiRequest {
    ApiRequest::new(method, format!("{base}{path}"))
}

/// Continuation-style adapter: awaits `operation` and invokes exactly one of
/// `on_success` / `on_failure`, exactly once.
pub async fn with_callbacks<R, F, S, E>(operation: F, on_success: S, on_failure: E)
where
    F: Future<Output = GatewayResult<R>>,
    S: FnOnce(R),
    E: FnOnce(GatewayError),
{
    match operation.await {
        Ok(response) => on_success(response),
        Err(err) => on_failure(err),
    }
}
