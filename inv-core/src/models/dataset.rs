use crate::models::{Category, Product, ProductId, ProductQuery};
use serde::{Deserialize, Serialize};

/// The root container and unit of persistence.
///
/// Every load reads the whole dataset and every save rewrites it; there is
/// no finer-grained access path. Products keep their insertion order, which
/// is what makes "first match" well-defined for the lookup operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Dataset {
    /// All product records, in insertion order
    pub products: Vec<Product>,
    /// All category records. Never filtered or mutated by this service.
    pub categories: Vec<Category>,
}

impl Dataset {
    /// Find a product by id.
    ///
    /// Duplicate ids are permitted on insert, so this returns the first
    /// match in sequence order.
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Overwrite the first product whose id matches `product.id`.
    ///
    /// Returns the displaced record, or `None` (dataset untouched) when no
    /// product carries that id.
    pub fn replace(&mut self, product: Product) -> Option<Product> {
        let slot = self.products.iter_mut().find(|p| p.id == product.id)?;
        Some(std::mem::replace(slot, product))
    }

    /// Remove the first product with the given id, returning it.
    pub fn remove(&mut self, id: &ProductId) -> Option<Product> {
        let index = self.products.iter().position(|p| &p.id == id)?;
        Some(self.products.remove(index))
    }

    /// Apply the list/search operation: the optional name and category
    /// filters, then an ascending sort by quantity. Categories pass through
    /// untouched.
    pub fn search(mut self, query: &ProductQuery) -> Dataset {
        if let Some(name) = &query.name {
            let needle = name.to_lowercase();
            self.products
                .retain(|p| p.name.to_lowercase().contains(&needle));
        }
        if let Some(category_id) = &query.category_id {
            self.products.retain(|p| &p.category_id == category_id);
        }
        // sort_by_key is stable: equal quantities keep their relative order
        self.products.sort_by_key(|p| p.quantity);
        self
    }
}
