//! Data transfer objects.

pub mod response;

pub use response::{ApiResponse, HealthResponse};
