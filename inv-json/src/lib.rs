#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

use std::path::PathBuf;
use std::sync::Arc;

use inv_core::models::Dataset;
use thiserror::Error;
use tokio::sync::RwLock;

pub mod config;
mod r#impl;

use config::JsonConfig;

/// Errors produced by the JSON document store.
#[derive(Debug, Error)]
pub enum Error {
    /// The backing file could not be read or written
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file exists but is not a well-formed dataset document
    #[error("malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configured file does not exist and creation was not requested
    #[error("dataset file {} does not exist", .0.display())]
    Missing(PathBuf),
}

/// Whole-document JSON store for the inventory dataset.
///
/// Every load reads and parses the full file; every save serializes and
/// rewrites it. There is no locking between concurrent load/save cycles:
/// the later save wins in full. Individual saves are kept intact by
/// staging the new document in a sibling file and renaming it over the
/// old one.
///
/// # Example
///
/// ```no_run
/// # use inv_json::{JsonStore, config::JsonConfig};
/// # async fn example() -> Result<(), inv_json::Error> {
/// let config = JsonConfig {
///     database_path: Some("db.json".into()),
///     create_if_missing: true,
/// };
/// let store = JsonStore::open(&config).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct JsonStore {
    backend: Arc<Backend>,
}

enum Backend {
    /// One JSON document on disk, reread and rewritten in full
    File(PathBuf),
    /// The dataset held directly in memory, for tests
    Memory(RwLock<Dataset>),
}

impl JsonStore {
    /// Open the store described by the configuration.
    ///
    /// A missing file is created empty when `create_if_missing` is set and
    /// rejected otherwise. An existing file is parsed once up front, so a
    /// malformed document fails here rather than on the first request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Missing`] when the file is absent and must not be
    /// created, [`Error::Parse`] when the existing content is not a dataset
    /// document, or [`Error::Io`] when the file cannot be read or written.
    pub async fn open(config: &JsonConfig) -> Result<Self, Error> {
        let backend = match &config.database_path {
            None => Backend::Memory(RwLock::new(Dataset::default())),
            Some(path) => {
                if tokio::fs::try_exists(path).await? {
                    r#impl::read_document(path).await?;
                } else if config.create_if_missing {
                    r#impl::write_document(path, &Dataset::default()).await?;
                } else {
                    return Err(Error::Missing(path.clone()));
                }
                Backend::File(path.clone())
            }
        };

        Ok(Self {
            backend: Arc::new(backend),
        })
    }
}
