//! Team repository implementation.

use std::sync::Arc;

use roster_core::error::AppError;
use roster_core::result::AppResult;
use roster_entity::team::{CreateTeam, Team};

use crate::store::Store;

/// Repository for team creation and lookup.
#[derive(Debug, Clone)]
pub struct TeamRepository {
    store: Arc<dyn Store>,
}

impl TeamRepository {
    /// Create a new team repository.
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Create a team.
    pub async fn create(&self, name: &str) -> AppResult<Team> {
        if name.trim().is_empty() {
            return Err(AppError::invalid_argument("Team name must not be blank"));
        }
        self.store.insert_team(&CreateTeam::new(name)).await
    }

    /// Find a team by exact name.
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Team>> {
        self.store.find_team_by_name(name).await
    }
}
