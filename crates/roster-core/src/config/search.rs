//! Paginated search configuration.

use serde::{Deserialize, Serialize};

use crate::types::pagination::{CountStrategy, DEFAULT_PAGE_SIZE};

/// Settings for the paginated search engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// How the total count is computed for a page.
    #[serde(default)]
    pub count_strategy: CountStrategy,
    /// Page size used when a request does not name one.
    #[serde(default = "default_page_size")]
    pub default_page_size: i64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            count_strategy: CountStrategy::default(),
            default_page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}
