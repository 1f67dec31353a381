//! Select and count queries over `member`, and the row they produce.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use roster_core::types::{MemberId, NullsOrder, SortDirection, TeamId};

use super::expr::{Column, Predicate};
use super::join::JoinSpec;

/// One ordering term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSpec {
    /// Column to order by.
    pub column: Column,
    /// Direction.
    pub direction: SortDirection,
    /// Where NULLs go.
    pub nulls: NullsOrder,
}

impl OrderSpec {
    /// Ascending with the default NULL placement.
    pub fn asc(column: Column) -> Self {
        Self {
            column,
            direction: SortDirection::Asc,
            nulls: NullsOrder::default_for(SortDirection::Asc),
        }
    }

    /// Descending with the default NULL placement.
    pub fn desc(column: Column) -> Self {
        Self {
            column,
            direction: SortDirection::Desc,
            nulls: NullsOrder::default_for(SortDirection::Desc),
        }
    }

    /// Override the NULL placement.
    pub fn nulls(mut self, nulls: NullsOrder) -> Self {
        self.nulls = nulls;
        self
    }
}

/// A bounded fetch of joined member rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectQuery {
    /// Join to `team`, if any.
    pub join: Option<JoinSpec>,
    /// Row filter.
    pub predicate: Predicate,
    /// Ordering terms; the store appends `member.id ASC` as a tiebreaker.
    pub order: Vec<OrderSpec>,
    /// Rows to skip.
    pub offset: Option<i64>,
    /// Maximum rows to return.
    pub limit: Option<i64>,
}

impl SelectQuery {
    /// Select members matching `predicate`, optionally joined to teams.
    pub fn new(join: Option<JoinSpec>, predicate: Predicate) -> Self {
        Self {
            join,
            predicate,
            order: Vec::new(),
            offset: None,
            limit: None,
        }
    }

    /// Set the ordering.
    pub fn order_by(mut self, order: Vec<OrderSpec>) -> Self {
        self.order = order;
        self
    }

    /// Set the window.
    pub fn window(mut self, offset: i64, limit: i64) -> Self {
        self.offset = Some(offset);
        self.limit = Some(limit);
        self
    }

    /// Whether the query needs `team` columns without joining `team`.
    pub fn is_missing_join(&self) -> bool {
        self.join.is_none()
            && (self.predicate.references(super::Table::Team)
                || self
                    .order
                    .iter()
                    .any(|o| o.column.table() == super::Table::Team))
    }
}

/// Count of members matching a predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountQuery {
    /// Join to `team`, if any.
    pub join: Option<JoinSpec>,
    /// Row filter.
    pub predicate: Predicate,
}

impl CountQuery {
    /// Count members matching `predicate`.
    pub fn new(join: Option<JoinSpec>, predicate: Predicate) -> Self {
        Self { join, predicate }
    }

    /// Whether the query needs `team` columns without joining `team`.
    pub fn is_missing_join(&self) -> bool {
        self.join.is_none() && self.predicate.references(super::Table::Team)
    }
}

/// One row of `member` joined to `team`.
///
/// `team_name` is NULL when the member has no team or the query did not
/// join `team`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct JoinedRow {
    /// `member.id`
    pub member_id: MemberId,
    /// `member.username`
    pub username: Option<String>,
    /// `member.age`
    pub age: i32,
    /// `member.team_id`, or `team.id` in fetch mode.
    pub team_id: Option<TeamId>,
    /// `team.name`
    pub team_name: Option<String>,
}
