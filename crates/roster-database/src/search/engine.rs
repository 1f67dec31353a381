//! Paginated member search.

use std::sync::Arc;

use tracing::debug;

use roster_core::error::AppError;
use roster_core::result::AppResult;
use roster_core::types::{CountStrategy, Page, PageRequest, SortField};
use roster_entity::member::MemberWithTeam;
use roster_entity::search::{MemberSearchCondition, MemberTeamDto};

use super::{join, predicate, projection};
use crate::query::{Column, CountQuery, OrderSpec, SelectQuery};
use crate::store::Store;

/// Runs member searches against a [`Store`].
///
/// Holds no state besides the store handle; concurrent calls are
/// independent.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    store: Arc<dyn Store>,
}

impl SearchEngine {
    /// Create an engine over `store`.
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<dyn Store> {
        &self.store
    }

    /// All matching members projected with their team name, in id order.
    pub async fn search(&self, condition: &MemberSearchCondition) -> AppResult<Vec<MemberTeamDto>> {
        let query = SelectQuery::new(
            Some(join::for_projection()),
            predicate::build_predicate(condition),
        );
        let rows = self.store.fetch(&query).await?;
        debug!(rows = rows.len(), "Member search");
        Ok(rows.into_iter().map(projection::to_member_team).collect())
    }

    /// One page of matching members plus the total number of matches.
    ///
    /// The content fetch always runs. The count query runs unless `strategy`
    /// can derive the total from the fetched page.
    pub async fn search_page(
        &self,
        condition: &MemberSearchCondition,
        page: &PageRequest,
        strategy: CountStrategy,
    ) -> AppResult<Page<MemberTeamDto>> {
        page.validate()?;
        let order = order_terms(&page.sort)?;
        let predicate = predicate::build_predicate(condition);

        let select = SelectQuery::new(Some(join::for_projection()), predicate.clone())
            .order_by(order)
            .window(page.offset, page.limit);
        let rows = self.store.fetch(&select).await?;
        let content: Vec<MemberTeamDto> =
            rows.into_iter().map(projection::to_member_team).collect();

        let total = match strategy.elided_total(page, content.len()) {
            Some(total) => {
                debug!(
                    offset = page.offset,
                    limit = page.limit,
                    total,
                    "Count query elided for short first page"
                );
                total
            }
            None => {
                let count = CountQuery::new(join::for_filter(&predicate), predicate);
                self.store.count(&count).await?
            }
        };

        debug!(
            offset = page.offset,
            limit = page.limit,
            returned = content.len(),
            total,
            "Member page search"
        );
        Ok(Page::new(content, total, page))
    }

    /// All matching members with their teams loaded in the same round trip.
    pub async fn search_with_team(
        &self,
        condition: &MemberSearchCondition,
    ) -> AppResult<Vec<MemberWithTeam>> {
        let query = SelectQuery::new(
            Some(join::for_entity_graph()),
            predicate::build_predicate(condition),
        );
        let rows = self.store.fetch(&query).await?;
        Ok(rows
            .into_iter()
            .map(projection::to_member_with_team)
            .collect())
    }

    /// Number of matching members.
    pub async fn count(&self, condition: &MemberSearchCondition) -> AppResult<u64> {
        let predicate = predicate::build_predicate(condition);
        let query = CountQuery::new(join::for_filter(&predicate), predicate);
        self.store.count(&query).await
    }
}

fn order_terms(sort: &[SortField]) -> AppResult<Vec<OrderSpec>> {
    sort.iter()
        .map(|field| -> AppResult<OrderSpec> {
            let column = Column::from_field(&field.field).ok_or_else(|| {
                AppError::invalid_argument(format!("Unknown sort field: {}", field.field))
            })?;
            Ok(OrderSpec {
                column,
                direction: field.direction,
                nulls: field.effective_nulls(),
            })
        })
        .collect()
}
