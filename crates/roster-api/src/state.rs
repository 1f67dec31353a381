//! Application state shared across all handlers.

use std::sync::Arc;

use roster_core::config::AppConfig;
use roster_database::{MemberRepository, Store};

/// Application state passed to every handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Backing store, for health checks
    pub store: Arc<dyn Store>,
    /// Member search and CRUD
    pub member_repo: Arc<MemberRepository>,
}

impl AppState {
    /// Build the state over `store`, with the count strategy from
    /// `config.search`.
    pub fn new(config: AppConfig, store: Arc<dyn Store>) -> Self {
        let member_repo = Arc::new(MemberRepository::new(
            Arc::clone(&store),
            config.search.count_strategy,
        ));
        Self {
            config: Arc::new(config),
            store,
            member_repo,
        }
    }
}
