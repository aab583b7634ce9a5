//! Catalog

use crate::products::ProductKey;

/// A named grouping of products.
///
/// Pure bookkeeping: membership is append-only and duplicates are not
/// rejected.
#[derive(Debug, Clone)]
pub struct Category {
    name: String,
    products: Vec<ProductKey>,
}

impl Category {
    /// Create an empty category with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            products: Vec::new(),
        }
    }

    /// Returns the category name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a product to the category.
    pub fn add_product(&mut self, key: ProductKey) {
        self.products.push(key);
    }

    /// Returns the products in the category.
    pub fn products(&self) -> &[ProductKey] {
        &self.products
    }
}
