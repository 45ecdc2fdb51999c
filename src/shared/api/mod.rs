pub mod cors;
pub mod json_config;
pub mod request_context;
pub mod response;

pub use response::{ApiError, ApiResponse};
