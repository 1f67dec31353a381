//! Query execution against a relational store.
//!
//! [`Store`] is the capability the search engine consumes. Implementations
//! map their native failures into `AppError` once, here, so that callers can
//! propagate them untouched.

pub mod manager;
pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use roster_core::result::AppResult;
use roster_entity::member::{CreateMember, Member};
use roster_entity::team::{CreateTeam, Team};

use crate::query::{CountQuery, JoinedRow, SelectQuery};

pub use manager::StoreManager;
pub use memory::MemoryStore;
pub use postgres::PgStore;

/// A relational store that can execute member/team queries.
///
/// Every method is a single bounded round trip. Implementations do not retry
/// and do not cache connections beyond one call.
#[async_trait]
pub trait Store: Send + Sync + std::fmt::Debug + 'static {
    /// Execute a select and return its rows in order.
    async fn fetch(&self, query: &SelectQuery) -> AppResult<Vec<JoinedRow>>;

    /// Execute a count.
    async fn count(&self, query: &CountQuery) -> AppResult<u64>;

    /// Insert a team and return it with its assigned id.
    async fn insert_team(&self, team: &CreateTeam) -> AppResult<Team>;

    /// The lowest-id team with exactly this name.
    async fn find_team_by_name(&self, name: &str) -> AppResult<Option<Team>>;

    /// Insert a member and return it with its assigned id.
    ///
    /// Fails with `InvalidArgument` when `team_id` names no team.
    async fn insert_member(&self, member: &CreateMember) -> AppResult<Member>;

    /// Check store connectivity.
    async fn health_check(&self) -> AppResult<bool>;

    /// Short backend name for logs and health output.
    fn backend(&self) -> &'static str;
}
