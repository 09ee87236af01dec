//! HTTP seam between gateway operations and the network.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};

use mereview_shared::{GatewayError, GatewayResult};

use crate::request::{ApiRequest, FormPart, MultipartForm, RequestBody};

/// Status and body of a completed exchange. Status classification is left
/// to the gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Executes one request. Only failures where no response came back are
/// errors here; any status code is a successful exchange.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> GatewayResult<RawResponse>;
}

#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client))
    }

    /// Reuse an existing client and its connection pool.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> GatewayResult<RawResponse> {
        let mut builder = self.client.request(request.method, &request.url);

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Text(text) => builder.header(CONTENT_TYPE, "application/json").body(text),
            RequestBody::Multipart(form) => builder.multipart(build_form(form)?),
        };

        let response = builder.send().await.map_err(GatewayError::network)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(GatewayError::network)?;

        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}

fn build_form(form: MultipartForm) -> GatewayResult<Form> {
    let mut out = Form::new();
    for part in form.parts {
        out = match part {
            FormPart::Text {
                name,
                value,
                content_type: None,
            } => out.text(name, value),
            FormPart::Text {
                name,
                value,
                content_type: Some(mime),
            } => {
                let part = Part::text(value).mime_str(&mime).map_err(GatewayError::network)?;
                out.part(name, part)
            }
            FormPart::File { name, upload } => {
                let part = Part::bytes(upload.bytes)
                    .file_name(upload.file_name)
                    .mime_str(&upload.content_type)
                    .map_err(GatewayError::network)?;
                out.part(name, part)
            }
        };
    }
    Ok(out)
}
