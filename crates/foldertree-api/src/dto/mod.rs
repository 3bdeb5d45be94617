//! Request and response DTOs.

pub mod request;
pub mod response;

pub use request::ChildrenPath;
pub use response::{HealthResponse, envelope_response};
