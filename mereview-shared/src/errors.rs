use crate::types::BackendErrorBody;

/// Outcome classification for a failed gateway call.
///
/// Every gateway operation resolves to exactly one `Result`; the error side
/// is one of these variants and is handed to the caller unmodified.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The request never reached the backend or no response came back
    /// (DNS, connect, TLS, timeout, body read).
    #[error("network failure: {0}")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The backend answered with a non-2xx status.
    #[error("server rejected request ({status}): {body}")]
    Server {
        status: u16,
        body: String,
    },

    /// A 2xx response whose body does not match the expected shape.
    #[error("malformed response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request payload could not be serialised.
    #[error("failed to encode request payload: {0}")]
    Encode(#[source] serde_json::Error),
}

impl GatewayError {
    pub fn network(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Network(err.into())
    }

    pub fn server(status: u16, body: impl Into<String>) -> Self {
        Self::Server {
            status,
            body: body.into(),
        }
    }

    /// Stable machine-readable code for the failure class.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Network(_) => "network_failure",
            Self::Server { .. } => "server_error",
            Self::Decode(_) => "malformed_response",
            Self::Encode(_) => "encode_failure",
        }
    }

    /// HTTP status of a server rejection, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// The `message` field of a Spring-style error body, when the backend
    /// sent one.
    pub fn server_message(&self) -> Option<String> {
        match self {
            Self::Server { body, .. } => serde_json::from_str::<BackendErrorBody>(body)
                .ok()
                .and_then(|b| b.message),
            _ => None,
        }
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;
