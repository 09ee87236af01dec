//! Recording transport for gateway tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use mereview_shared::{GatewayError, GatewayResult};

use crate::config::GatewayConfig;
use crate::request::ApiRequest;
use crate::transport::{HttpTransport, RawResponse};
use crate::Gateway;

pub enum Canned {
    Reply(u16, String),
    Offline,
}

#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<Canned>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn replying(status: u16, body: &str) -> Self {
        let mock = Self::default();
        mock.push(Canned::Reply(status, body.to_string()));
        mock
    }

    pub fn offline() -> Self {
        let mock = Self::default();
        mock.push(Canned::Offline);
        mock
    }

    pub fn push(&self, canned: Canned) {
        self.replies.lock().unwrap().push_back(canned);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests().pop().expect("no request was sent")
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: ApiRequest) -> GatewayResult<RawResponse> {
        self.requests.lock().unwrap().push(request);
        match self.replies.lock().unwrap().pop_front() {
            Some(Canned::Reply(status, body)) => Ok(RawResponse {
                status,
                body: body.into_bytes(),
            }),
            Some(Canned::Offline) | None => Err(GatewayError::network(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            ))),
        }
    }
}

pub fn gateway(mock: MockTransport) -> Gateway<MockTransport> {
    Gateway::with_transport(mock, &GatewayConfig::with_api_url("http://api.test"))
}
