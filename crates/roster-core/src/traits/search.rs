//! Paged search capability trait.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::pagination::{Page, PageRequest};

/// A repository that answers optional-criteria searches one page at a time.
///
/// Implementations are stateless between calls; every invocation is an
/// independent unit of work against the backing store.
#[async_trait]
pub trait SearchRepository<Condition, Record>: Send + Sync + 'static
where
    Condition: Send + Sync + 'static,
    Record: Send + 'static,
{
    /// Return the requested window of records matching `condition`, together
    /// with the total number of matches.
    ///
    /// Fails with `InvalidArgument` on a negative offset or limit.
    async fn search(&self, condition: &Condition, page: &PageRequest) -> AppResult<Page<Record>>;
}
