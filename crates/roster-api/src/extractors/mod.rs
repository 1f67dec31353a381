//! Request extractors.

pub mod pagination;
pub mod path;
pub mod query;

pub use pagination::PaginationParams;
pub use query::ApiQuery;
