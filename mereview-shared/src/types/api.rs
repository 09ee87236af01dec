use serde::{Deserialize, Serialize};

/// Success body as the backend may send it: either wrapped in a
/// `{ "data": ... }` envelope or bare.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> ApiResponse<T> {
    pub fn into_inner(self) -> T {
        match self {
            Self::Wrapped { data } => data,
            Self::Bare(data) => data,
        }
    }
}

/// Spring Boot's default error body. Every field is optional since proxies
/// and custom handlers send subsets of it.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BackendErrorBody {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
}
