use crate::{Backend, Error, JsonStore};
use inv_core::{models::Dataset, ports::DatasetStore};
use std::path::{Path, PathBuf};

impl DatasetStore for JsonStore {
    type Error = Error;

    async fn load(&self) -> Result<Dataset, Error> {
        match &*self.backend {
            Backend::File(path) => read_document(path).await,
            Backend::Memory(cell) => Ok(cell.read().await.clone()),
        }
    }

    async fn save(&self, dataset: Dataset) -> Result<(), Error> {
        match &*self.backend {
            Backend::File(path) => write_document(path, &dataset).await,
            Backend::Memory(cell) => {
                *cell.write().await = dataset;
                Ok(())
            }
        }
    }
}

pub(crate) async fn read_document(path: &Path) -> Result<Dataset, Error> {
    let bytes = tokio::fs::read(path).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Stage the new document in a sibling file, then rename it over the
/// target. A failure mid-write leaves the previous document intact.
pub(crate) async fn write_document(path: &Path, dataset: &Dataset) -> Result<(), Error> {
    let staged = staging_path(path);
    let bytes = serde_json::to_vec_pretty(dataset)?;
    tokio::fs::write(&staged, &bytes).await?;
    tokio::fs::rename(&staged, path).await?;
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
