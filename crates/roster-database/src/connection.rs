//! Opens the PostgreSQL pool behind the `postgres` store.

use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use tracing::info;

use roster_core::config::DatabaseConfig;
use roster_core::error::{AppError, ErrorKind};
use roster_core::result::AppResult;

/// Name reported to the server in `pg_stat_activity`.
const APPLICATION_NAME: &str = "roster";

/// Connect a pool sized and timed by `config`.
///
/// A malformed URL is a `Configuration` error; a server that cannot be
/// reached within the acquire timeout is `ServiceUnavailable`.
pub async fn connect(config: &DatabaseConfig) -> AppResult<PgPool> {
    let options = connect_options(config)?;
    info!(
        host = options.get_host(),
        port = options.get_port(),
        database = options.get_database().unwrap_or_default(),
        max_connections = config.max_connections,
        "Connecting to PostgreSQL"
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
        .connect_with(options)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::ServiceUnavailable,
                format!("Failed to connect to database: {e}"),
                e,
            )
        })?;

    info!(size = pool.size(), "PostgreSQL pool ready");
    Ok(pool)
}

fn connect_options(config: &DatabaseConfig) -> AppResult<PgConnectOptions> {
    PgConnectOptions::from_str(&config.url)
        .map(|options| options.application_name(APPLICATION_NAME))
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Invalid database.url: {e}"),
                e,
            )
        })
}
