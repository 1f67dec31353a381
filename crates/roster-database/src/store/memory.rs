//! In-process store that evaluates the query model directly.
//!
//! Comparisons follow SQL NULL semantics: a NULL column never satisfies
//! `=`, `>=` or `<=`. Orderings place NULLs as PostgreSQL does. The store
//! counts the selects and counts it serves so callers can observe how many
//! round trips an operation cost.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering as AtomicOrdering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use roster_core::error::AppError;
use roster_core::result::AppResult;
use roster_core::types::{MemberId, NullsOrder, SortDirection, TeamId};
use roster_entity::member::{CreateMember, Member};
use roster_entity::team::{CreateTeam, Team};

use super::Store;
use crate::query::{
    Column, CountQuery, JoinKind, JoinSpec, JoinedRow, OrderSpec, Predicate, SelectQuery, Value,
};

/// Number of queries served, by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueryStats {
    /// Select queries executed.
    pub selects: u64,
    /// Count queries executed.
    pub counts: u64,
}

#[derive(Debug, Default)]
struct Tables {
    teams: BTreeMap<TeamId, Team>,
    members: BTreeMap<MemberId, Member>,
    next_team_id: i64,
    next_member_id: i64,
}

/// A store holding both tables in memory.
#[derive(Debug)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    selects: AtomicU64,
    counts: AtomicU64,
    unavailable: AtomicBool,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
            selects: AtomicU64::new(0),
            counts: AtomicU64::new(0),
            unavailable: AtomicBool::new(false),
        }
    }

    /// Queries served so far.
    pub fn stats(&self) -> QueryStats {
        QueryStats {
            selects: self.selects.load(AtomicOrdering::SeqCst),
            counts: self.counts.load(AtomicOrdering::SeqCst),
        }
    }

    /// Reset the query counters.
    pub fn reset_stats(&self) {
        self.selects.store(0, AtomicOrdering::SeqCst);
        self.counts.store(0, AtomicOrdering::SeqCst);
    }

    /// Make every subsequent call fail with `ServiceUnavailable` (or succeed
    /// again when `false`).
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, AtomicOrdering::SeqCst);
    }

    fn ensure_available(&self) -> AppResult<()> {
        if self.unavailable.load(AtomicOrdering::SeqCst) {
            return Err(AppError::service_unavailable("In-memory store is unavailable"));
        }
        Ok(())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn fetch(&self, query: &SelectQuery) -> AppResult<Vec<JoinedRow>> {
        self.ensure_available()?;
        if query.is_missing_join() {
            return Err(missing_join());
        }
        self.selects.fetch_add(1, AtomicOrdering::SeqCst);

        let tables = self.tables.read().await;
        let mut rows: Vec<JoinedRow> = joined_rows(&tables, query.join)
            .filter(|row| matches(&query.predicate, row))
            .collect();
        rows.sort_by(|a, b| compare_rows(a, b, &query.order));

        let offset = query.offset.unwrap_or(0).max(0) as usize;
        let limit = query
            .limit
            .map(|l| l.max(0) as usize)
            .unwrap_or(usize::MAX);
        let rows: Vec<JoinedRow> = rows.into_iter().skip(offset).take(limit).collect();

        debug!(rows = rows.len(), "Served in-memory member select");
        Ok(rows)
    }

    async fn count(&self, query: &CountQuery) -> AppResult<u64> {
        self.ensure_available()?;
        if query.is_missing_join() {
            return Err(missing_join());
        }
        self.counts.fetch_add(1, AtomicOrdering::SeqCst);

        let tables = self.tables.read().await;
        let total = joined_rows(&tables, query.join)
            .filter(|row| matches(&query.predicate, row))
            .count() as u64;

        debug!(total, "Served in-memory member count");
        Ok(total)
    }

    async fn insert_team(&self, team: &CreateTeam) -> AppResult<Team> {
        self.ensure_available()?;
        let mut tables = self.tables.write().await;
        tables.next_team_id += 1;
        let created = Team {
            id: TeamId(tables.next_team_id),
            name: team.name.clone(),
        };
        tables.teams.insert(created.id, created.clone());
        Ok(created)
    }

    async fn find_team_by_name(&self, name: &str) -> AppResult<Option<Team>> {
        self.ensure_available()?;
        let tables = self.tables.read().await;
        Ok(tables.teams.values().find(|t| t.name == name).cloned())
    }

    async fn insert_member(&self, member: &CreateMember) -> AppResult<Member> {
        self.ensure_available()?;
        let mut tables = self.tables.write().await;
        if let Some(team_id) = member.team_id {
            if !tables.teams.contains_key(&team_id) {
                return Err(AppError::invalid_argument(format!(
                    "Team {team_id} does not exist"
                )));
            }
        }
        tables.next_member_id += 1;
        let created = Member {
            id: MemberId(tables.next_member_id),
            username: member.username.clone(),
            age: member.age,
            team_id: member.team_id,
        };
        tables.members.insert(created.id, created.clone());
        Ok(created)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(!self.unavailable.load(AtomicOrdering::SeqCst))
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

fn missing_join() -> AppError {
    AppError::invalid_argument("Query references team columns without joining team")
}

/// Produce `member` rows joined to `team` according to `join`, in id order.
fn joined_rows(tables: &Tables, join: Option<JoinSpec>) -> impl Iterator<Item = JoinedRow> + '_ {
    tables.members.values().filter_map(move |member| {
        let team = member.team_id.and_then(|id| tables.teams.get(&id));
        let team_name = match join {
            None => None,
            Some(spec) => {
                if team.is_none() && spec.kind == JoinKind::Inner {
                    return None;
                }
                team.map(|t| t.name.clone())
            }
        };
        let team_id = match join {
            Some(spec) if spec.is_fetch() => team.map(|t| t.id),
            _ => member.team_id,
        };
        Some(JoinedRow {
            member_id: member.id,
            username: member.username.clone(),
            age: member.age,
            team_id,
            team_name,
        })
    })
}

fn column_value(row: &JoinedRow, column: Column) -> Option<Value> {
    match column {
        Column::MemberId => Some(Value::Int(row.member_id.value())),
        Column::MemberUsername => row.username.clone().map(Value::Text),
        Column::MemberAge => Some(Value::from(row.age)),
        Column::MemberTeamId | Column::TeamId => row.team_id.map(|id| Value::Int(id.value())),
        Column::TeamName => row.team_name.clone().map(Value::Text),
    }
}

/// Compare a column to a literal; `None` when either side is NULL or the
/// types differ.
fn compare(row: &JoinedRow, column: Column, value: &Value) -> Option<Ordering> {
    match (column_value(row, column)?, value) {
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Text(a), Value::Text(b)) => Some(a.as_str().cmp(b.as_str())),
        _ => None,
    }
}

fn matches(predicate: &Predicate, row: &JoinedRow) -> bool {
    match predicate {
        Predicate::All => true,
        Predicate::Eq(col, value) => compare(row, *col, value) == Some(Ordering::Equal),
        Predicate::Ge(col, value) => {
            matches!(compare(row, *col, value), Some(Ordering::Greater | Ordering::Equal))
        }
        Predicate::Le(col, value) => {
            matches!(compare(row, *col, value), Some(Ordering::Less | Ordering::Equal))
        }
        Predicate::And(parts) => parts.iter().all(|p| matches(p, row)),
    }
}

fn compare_rows(a: &JoinedRow, b: &JoinedRow, order: &[OrderSpec]) -> Ordering {
    for spec in order {
        let ordering = match (column_value(a, spec.column), column_value(b, spec.column)) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => match spec.nulls {
                NullsOrder::First => Ordering::Less,
                NullsOrder::Last => Ordering::Greater,
            },
            (Some(_), None) => match spec.nulls {
                NullsOrder::First => Ordering::Greater,
                NullsOrder::Last => Ordering::Less,
            },
            (Some(x), Some(y)) => match spec.direction {
                SortDirection::Asc => x.cmp(&y),
                SortDirection::Desc => y.cmp(&x),
            },
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    a.member_id.cmp(&b.member_id)
}
