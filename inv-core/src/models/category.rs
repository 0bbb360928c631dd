use crate::models::CategoryId;
use serde::{Deserialize, Serialize};

/// A grouping reference for products.
///
/// Categories are read-only from this service's perspective: they arrive
/// with the dataset, and no operation creates, updates, or deletes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Category {
    /// Unique identifier for the category
    pub id: CategoryId,
    /// Display name
    pub name: String,
}
