//! Team entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use roster_core::types::TeamId;

/// A team that members may belong to.
///
/// A team does not own its members; the relation is held on `Member`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Team {
    /// Store-assigned identifier.
    pub id: TeamId,
    /// Team name.
    pub name: String,
}

/// Data required to create a new team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTeam {
    /// Team name.
    pub name: String,
}

impl CreateTeam {
    /// Create a team payload.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
