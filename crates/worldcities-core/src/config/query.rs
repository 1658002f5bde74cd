//! List endpoint configuration.

use serde::{Deserialize, Serialize};

/// Defaults applied by list endpoints before the query engine runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Page size used when a request does not supply `pageSize`.
    #[serde(default = "default_page_size")]
    pub default_page_size: i64,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> i64 {
    10
}
