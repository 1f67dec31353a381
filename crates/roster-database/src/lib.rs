//! # roster-database
//!
//! Query model, store implementations and the member search engine.
//!
//! - [`query`] is the abstract query-building API: columns, predicates,
//!   join specs and select/count queries.
//! - [`store`] executes those queries, against PostgreSQL or in memory.
//! - [`search`] turns a `MemberSearchCondition` into queries and pages.
//! - [`repositories`] exposes the operations callers use.

pub mod connection;
pub mod migration;
pub mod query;
pub mod repositories;
pub mod search;
pub mod store;

pub use connection::connect;
pub use repositories::{MemberRepository, TeamRepository};
pub use search::SearchEngine;
pub use store::{MemoryStore, PgStore, Store, StoreManager};
