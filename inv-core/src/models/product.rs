use crate::models::{CategoryId, ProductId};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::Date;

/// Maximum length of a product name, counted in characters.
pub const MAX_NAME_LEN: usize = 100;

/// A single inventory record.
///
/// Products are caller-identified: the `id` is supplied on creation and is
/// treated as the primary key from then on. Updates are whole-record
/// replacements, so every field must be resupplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier for the product
    pub id: ProductId,
    /// Display name, at most [`MAX_NAME_LEN`] characters
    pub name: String,
    /// The calendar date the product entered the inventory. The "must not
    /// lie in the future" rule is enforced by the entry form, not here.
    #[cfg_attr(feature = "schemars", schemars(with = "String"))]
    pub import_date: Date,
    /// Units currently on hand
    pub quantity: u32,
    /// The category this product is filed under. Not checked against the
    /// category list; a dangling reference is allowed.
    pub category_id: CategoryId,
}

impl Product {
    /// Check the constraints enforced on create and update.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.chars().count() > MAX_NAME_LEN {
            Err(ValidationError::NameTooLong)
        } else {
            Ok(())
        }
    }
}

/// Why a product record was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The name exceeds [`MAX_NAME_LEN`] characters
    #[error("product name must be at most {MAX_NAME_LEN} characters")]
    NameTooLong,
}

/// Query parameters for the product fetch/search operation.
///
/// `id` takes precedence: when present, the query is a point lookup and the
/// remaining filters are ignored.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct ProductQuery {
    /// Select a single product by its identifier
    pub id: Option<ProductId>,
    /// Keep only products whose name contains this substring, compared
    /// case-insensitively
    pub name: Option<String>,
    /// Keep only products filed under exactly this category
    pub category_id: Option<CategoryId>,
}
