//! PostgreSQL store: renders queries with `sqlx::QueryBuilder`.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::debug;

use roster_core::error::{AppError, ErrorKind};
use roster_core::result::AppResult;
use roster_entity::member::{CreateMember, Member};
use roster_entity::team::{CreateTeam, Team};

use super::Store;
use crate::query::{
    Column, CountQuery, JoinSpec, JoinedRow, OrderSpec, Predicate, SelectQuery, Value,
};

/// Foreign key from `member.team_id` to `team.id`.
const MEMBER_TEAM_FK: &str = "member_team_id_fkey";

/// Store backed by a PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Create a store over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Return a reference to the underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Store for PgStore {
    async fn fetch(&self, query: &SelectQuery) -> AppResult<Vec<JoinedRow>> {
        if query.is_missing_join() {
            return Err(missing_join());
        }
        let mut builder = build_select(query);
        debug!(sql = builder.sql(), "Executing member select");

        builder
            .build_query_as::<JoinedRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to fetch members", e))
    }

    async fn count(&self, query: &CountQuery) -> AppResult<u64> {
        if query.is_missing_join() {
            return Err(missing_join());
        }
        let mut builder = build_count(query);
        debug!(sql = builder.sql(), "Executing member count");

        let total: i64 = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to count members", e))?;
        Ok(total.max(0) as u64)
    }

    async fn insert_team(&self, team: &CreateTeam) -> AppResult<Team> {
        sqlx::query_as::<_, Team>("INSERT INTO team (name) VALUES ($1) RETURNING id, name")
            .bind(&team.name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to create team", e))
    }

    async fn find_team_by_name(&self, name: &str) -> AppResult<Option<Team>> {
        sqlx::query_as::<_, Team>("SELECT id, name FROM team WHERE name = $1 ORDER BY id LIMIT 1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to find team by name", e))
    }

    async fn insert_member(&self, member: &CreateMember) -> AppResult<Member> {
        sqlx::query_as::<_, Member>(
            "INSERT INTO member (username, age, team_id) VALUES ($1, $2, $3) \
             RETURNING id, username, age, team_id",
        )
        .bind(&member.username)
        .bind(member.age)
        .bind(member.team_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some(MEMBER_TEAM_FK) => {
                AppError::invalid_argument(format!(
                    "Team {} does not exist",
                    member
                        .team_id
                        .map(|id| id.to_string())
                        .unwrap_or_default()
                ))
            }
            _ => map_sqlx_error("Failed to create member", e),
        })
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| map_sqlx_error("Health check failed", e))
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}

fn missing_join() -> AppError {
    AppError::invalid_argument("Query references team columns without joining team")
}

/// Classify a sqlx failure: connectivity problems become
/// `ServiceUnavailable`, everything else `Database`.
fn map_sqlx_error(context: &str, err: sqlx::Error) -> AppError {
    let kind = match err {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::WorkerCrashed => ErrorKind::ServiceUnavailable,
        _ => ErrorKind::Database,
    };
    AppError::with_source(kind, format!("{context}: {err}"), err)
}

/// Render a [`SelectQuery`].
pub(crate) fn build_select(query: &SelectQuery) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT m.id AS member_id, m.username, m.age, ");
    match query.join {
        Some(join) if join.is_fetch() => {
            builder.push("t.id AS team_id, t.name AS team_name");
        }
        Some(_) => {
            builder.push("m.team_id, t.name AS team_name");
        }
        None => {
            builder.push("m.team_id, NULL::VARCHAR AS team_name");
        }
    }
    builder.push(" FROM member m");
    push_join(&mut builder, query.join);
    push_where(&mut builder, &query.predicate);
    push_order(&mut builder, &query.order);

    if let Some(limit) = query.limit {
        builder.push(" LIMIT ").push_bind(limit);
    }
    if let Some(offset) = query.offset {
        builder.push(" OFFSET ").push_bind(offset);
    }
    builder
}

/// Render a [`CountQuery`].
pub(crate) fn build_count(query: &CountQuery) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM member m");
    push_join(&mut builder, query.join);
    push_where(&mut builder, &query.predicate);
    builder
}

fn push_join(builder: &mut QueryBuilder<'static, Postgres>, join: Option<JoinSpec>) {
    if let Some(join) = join {
        builder
            .push(" ")
            .push(join.keyword())
            .push(" team t ON t.id = m.team_id");
    }
}

fn push_where(builder: &mut QueryBuilder<'static, Postgres>, predicate: &Predicate) {
    if predicate.is_all() {
        return;
    }
    builder.push(" WHERE ");
    push_predicate(builder, predicate);
}

fn push_predicate(builder: &mut QueryBuilder<'static, Postgres>, predicate: &Predicate) {
    match predicate {
        Predicate::All => {
            builder.push("TRUE");
        }
        Predicate::Eq(column, value) => push_comparison(builder, *column, "=", value),
        Predicate::Ge(column, value) => push_comparison(builder, *column, ">=", value),
        Predicate::Le(column, value) => push_comparison(builder, *column, "<=", value),
        Predicate::And(parts) => {
            builder.push("(");
            for (i, part) in parts.iter().enumerate() {
                if i > 0 {
                    builder.push(" AND ");
                }
                push_predicate(builder, part);
            }
            builder.push(")");
        }
    }
}

fn push_comparison(
    builder: &mut QueryBuilder<'static, Postgres>,
    column: Column,
    op: &str,
    value: &Value,
) {
    builder.push(column.as_sql()).push(" ").push(op).push(" ");
    match value {
        Value::Int(v) => {
            builder.push_bind(*v);
        }
        Value::Text(v) => {
            builder.push_bind(v.clone());
        }
    }
}

fn push_order(builder: &mut QueryBuilder<'static, Postgres>, order: &[OrderSpec]) {
    builder.push(" ORDER BY ");
    for spec in order {
        builder
            .push(spec.column.as_sql())
            .push(" ")
            .push(spec.direction.as_sql())
            .push(" ")
            .push(spec.nulls.as_sql())
            .push(", ");
    }
    builder.push("m.id ASC");
}
