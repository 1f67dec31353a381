//! Member repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use roster_core::result::AppResult;
use roster_core::traits::SearchRepository;
use roster_core::types::{CountStrategy, MemberId, Page, PageRequest};
use roster_entity::member::{CreateMember, Member, MemberWithTeam};
use roster_entity::search::{MemberSearchCondition, MemberTeamDto};

use crate::query::{Column, Predicate, SelectQuery};
use crate::search::SearchEngine;
use crate::search::projection;
use crate::store::Store;

/// Repository for member CRUD and search operations.
#[derive(Debug, Clone)]
pub struct MemberRepository {
    store: Arc<dyn Store>,
    engine: SearchEngine,
    count_strategy: CountStrategy,
}

impl MemberRepository {
    /// Create a repository whose paged [`SearchRepository::search`] uses
    /// `count_strategy`.
    pub fn new(store: Arc<dyn Store>, count_strategy: CountStrategy) -> Self {
        Self {
            engine: SearchEngine::new(store.clone()),
            store,
            count_strategy,
        }
    }

    /// Create a member.
    pub async fn create(&self, member: &CreateMember) -> AppResult<Member> {
        let created = self.store.insert_member(member).await?;
        info!(member_id = %created.id, "Member created");
        Ok(created)
    }

    /// Find a member by primary key.
    pub async fn find_by_id(&self, id: MemberId) -> AppResult<Option<Member>> {
        let query = SelectQuery::new(None, Predicate::eq(Column::MemberId, id.value())).window(0, 1);
        let rows = self.store.fetch(&query).await?;
        Ok(rows.into_iter().next().map(projection::to_member))
    }

    /// List every member in id order.
    pub async fn find_all(&self) -> AppResult<Vec<Member>> {
        let rows = self.store.fetch(&SelectQuery::new(None, Predicate::All)).await?;
        Ok(rows.into_iter().map(projection::to_member).collect())
    }

    /// List members with exactly this username.
    pub async fn find_by_username(&self, username: &str) -> AppResult<Vec<Member>> {
        let query = SelectQuery::new(None, Predicate::eq(Column::MemberUsername, username));
        let rows = self.store.fetch(&query).await?;
        Ok(rows.into_iter().map(projection::to_member).collect())
    }

    /// Every member matching `condition`, unpaged.
    pub async fn search(&self, condition: &MemberSearchCondition) -> AppResult<Vec<MemberTeamDto>> {
        self.engine.search(condition).await
    }

    /// A page of matches; the count query always runs.
    pub async fn search_page_simple(
        &self,
        condition: &MemberSearchCondition,
        page: &PageRequest,
    ) -> AppResult<Page<MemberTeamDto>> {
        self.engine
            .search_page(condition, page, CountStrategy::Always)
            .await
    }

    /// A page of matches; the count query is skipped for a short first page.
    pub async fn search_page_optimized(
        &self,
        condition: &MemberSearchCondition,
        page: &PageRequest,
    ) -> AppResult<Page<MemberTeamDto>> {
        self.engine
            .search_page(condition, page, CountStrategy::SkipOnShortFirstPage)
            .await
    }

    /// Every member matching `condition` with its team loaded.
    pub async fn search_with_team(
        &self,
        condition: &MemberSearchCondition,
    ) -> AppResult<Vec<MemberWithTeam>> {
        self.engine.search_with_team(condition).await
    }

    /// Number of members matching `condition`.
    pub async fn count(&self, condition: &MemberSearchCondition) -> AppResult<u64> {
        self.engine.count(condition).await
    }
}

#[async_trait]
impl SearchRepository<MemberSearchCondition, MemberTeamDto> for MemberRepository {
    async fn search(
        &self,
        condition: &MemberSearchCondition,
        page: &PageRequest,
    ) -> AppResult<Page<MemberTeamDto>> {
        self.engine
            .search_page(condition, page, self.count_strategy)
            .await
    }
}
