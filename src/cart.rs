//! Cart

use rusty_money::{Money, iso::Currency};

use crate::{
    pricing::{TotalError, total_of},
    products::ProductKey,
    store::Store,
};

/// An unordered collection of product references, one entry per unit.
///
/// A cart does not touch stock; it only references products and totals their
/// live prices. Moving units in and out of stock is the order's job.
#[derive(Debug, Default)]
pub struct Cart {
    entries: Vec<ProductKey>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product to the cart.
    pub fn add(&mut self, key: ProductKey) {
        self.entries.push(key);
    }

    /// Remove the first entry matching `key`. No-op when absent.
    pub fn remove(&mut self, key: ProductKey) {
        if let Some(position) = self.entries.iter().position(|entry| *entry == key) {
            self.entries.remove(position);
        }
    }

    /// Returns the entries currently in the cart.
    pub fn entries(&self) -> &[ProductKey] {
        &self.entries
    }

    /// Get the number of entries in the cart.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Calculate the live total of the cart.
    ///
    /// An empty cart totals zero in the store currency.
    ///
    /// # Errors
    ///
    /// Returns a [`TotalError`] if an entry no longer resolves in the store or
    /// money arithmetic fails.
    pub fn total<'a>(&self, store: &Store<'a>) -> Result<Money<'a, Currency>, TotalError> {
        total_of(store, &self.entries)
    }
}
