//! Configuration types for the JSON document store.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the JSON document store.
///
/// # Examples
///
/// ```
/// use inv_json::config::JsonConfig;
/// use std::path::PathBuf;
///
/// // In-memory dataset (default)
/// let config = JsonConfig::default();
///
/// // File-backed dataset
/// let config = JsonConfig {
///     database_path: Some(PathBuf::from("db.json")),
///     create_if_missing: true,
/// };
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JsonConfig {
    /// Dataset file path. If None, the dataset is held in memory
    pub database_path: Option<PathBuf>,

    /// Whether to create an empty dataset file if it doesn't exist
    #[serde(default = "default_true")]
    pub create_if_missing: bool,
}

fn default_true() -> bool {
    true
}

impl Default for JsonConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            create_if_missing: true,
        }
    }
}
