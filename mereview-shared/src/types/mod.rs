pub mod api;
pub mod member;
pub mod review;

pub use api::*;
pub use member::*;
pub use review::*;
