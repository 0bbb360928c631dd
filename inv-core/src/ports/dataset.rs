use crate::models::Dataset;

/// Storage interface for the inventory dataset.
///
/// The dataset is persisted as a single document: implementations read and
/// rewrite it wholesale and expose no finer-grained operations. Callers
/// follow a load, mutate, save cycle per request.
///
/// # Concurrency
///
/// Two concurrent load/save cycles are not serialized against each other.
/// The later save wins in full, discarding whatever the earlier cycle wrote
/// (a lost update). Implementations are only required to keep individual
/// saves intact, never to merge them.
pub trait DatasetStore {
    /// Errors surfaced by the backing resource
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read and parse the entire persisted dataset.
    fn load(&self) -> impl Future<Output = Result<Dataset, Self::Error>> + Send;

    /// Serialize the dataset and overwrite the persisted document.
    fn save(&self, dataset: Dataset) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
