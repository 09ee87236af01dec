pub mod email;
pub mod members;
