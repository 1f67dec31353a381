//! Abstract query-building API.
//!
//! Queries are plain data: a store implementation decides how to execute
//! them (SQL rendering for PostgreSQL, direct evaluation in memory).

pub mod expr;
pub mod join;
pub mod select;

pub use expr::{Column, Predicate, Table, Value};
pub use join::{JoinKind, JoinMode, JoinSpec};
pub use select::{CountQuery, JoinedRow, OrderSpec, SelectQuery};
