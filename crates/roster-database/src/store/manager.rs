//! Store manager that dispatches to the configured provider.

use std::sync::Arc;

use tracing::info;

use roster_core::config::DatabaseConfig;
use roster_core::error::AppError;
use roster_core::result::AppResult;

use super::Store;
use super::memory::MemoryStore;
use super::postgres::PgStore;
use crate::connection;
use crate::migration::run_migrations;

/// Holds the store selected at construction time from configuration.
#[derive(Debug, Clone)]
pub struct StoreManager {
    /// The selected store.
    inner: Arc<dyn Store>,
}

impl StoreManager {
    /// Create the configured store, connecting and migrating as needed.
    pub async fn new(config: &DatabaseConfig) -> AppResult<Self> {
        let inner: Arc<dyn Store> = match config.provider.as_str() {
            "postgres" => {
                info!("Initializing PostgreSQL store");
                let pool = connection::connect(config).await?;
                if config.run_migrations {
                    run_migrations(&pool).await?;
                }
                Arc::new(PgStore::new(pool))
            }
            "memory" => {
                info!("Initializing in-memory store");
                Arc::new(MemoryStore::new())
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown database provider: '{other}'. Supported: postgres, memory"
                )));
            }
        };

        Ok(Self { inner })
    }

    /// A shared handle to the selected store.
    pub fn store(&self) -> Arc<dyn Store> {
        Arc::clone(&self.inner)
    }

    /// The selected backend name.
    pub fn backend(&self) -> &'static str {
        self.inner.backend()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::error::ErrorKind;

    #[tokio::test]
    async fn test_memory_provider() {
        let config = DatabaseConfig {
            provider: "memory".to_string(),
            ..DatabaseConfig::default()
        };
        let manager = StoreManager::new(&config).await.expect("memory store");
        assert_eq!(manager.backend(), "memory");
        assert!(manager.store().health_check().await.expect("health"));
    }

    #[tokio::test]
    async fn test_unknown_provider() {
        let config = DatabaseConfig {
            provider: "oracle".to_string(),
            ..DatabaseConfig::default()
        };
        let err = StoreManager::new(&config).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }
}
