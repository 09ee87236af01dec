//! REST gateway for the MeReview member, member-form and email-verification
//! resources.
//!
//! Every operation lives on [`Gateway`] and returns
//! `Result<T, GatewayError>`; [`with_callbacks`] adapts that to a
//! success/failure continuation pair.

pub mod client;
pub mod config;
pub mod request;
pub mod routes;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{with_callbacks, Endpoints, Gateway};
pub use config::GatewayConfig;
pub use request::{ApiRequest, FormPart, ImageUpload, MultipartForm, RequestBody};
pub use transport::{HttpTransport, RawResponse, ReqwestTransport};
