//! # roster-api
//!
//! HTTP API layer for Roster built on Axum.
//!
//! A thin adapter over `roster-database`: query-string binding of the search
//! condition and paging parameters, response wrapping, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use app::build_app;
pub use error::ApiError;
pub use state::AppState;
