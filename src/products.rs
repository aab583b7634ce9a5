//! Products

use rusty_money::{Money, iso::Currency};
use slotmap::new_key_type;
use thiserror::Error;

new_key_type! {
    /// Product Key
    pub struct ProductKey;
}

/// Errors related to stock mutation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StockError {
    /// More units were requested than are currently in stock.
    #[error("insufficient stock: requested {requested}, only {available} available")]
    Insufficient {
        /// Number of units requested
        requested: u32,

        /// Number of units currently in stock
        available: u32,
    },
}

/// A product held in the store, with its live price and available stock.
#[derive(Debug, Clone)]
pub struct Product<'a> {
    name: String,
    price: Money<'a, Currency>,
    stock: u32,
}

impl<'a> Product<'a> {
    /// Create a new product with the given name, price and opening stock.
    pub fn new(name: impl Into<String>, price: Money<'a, Currency>, stock: u32) -> Self {
        Self {
            name: name.into(),
            price,
            stock,
        }
    }

    /// Returns the product name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current price.
    pub fn price(&self) -> Money<'a, Currency> {
        self.price
    }

    /// Returns the number of units currently in stock.
    pub fn stock(&self) -> u32 {
        self.stock
    }

    /// Reprice the product. Totals are computed from live prices, so open
    /// orders and carts observe the change.
    pub fn set_price(&mut self, price: Money<'a, Currency>) {
        self.price = price;
    }

    /// Remove `quantity` units from stock, as happens on a sale.
    ///
    /// The check happens before any mutation: on failure the stock count is
    /// left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`StockError::Insufficient`] if `quantity` exceeds the units
    /// currently in stock.
    pub fn decrease_stock(&mut self, quantity: u32) -> Result<(), StockError> {
        if quantity > self.stock {
            return Err(StockError::Insufficient {
                requested: quantity,
                available: self.stock,
            });
        }

        self.stock -= quantity;

        Ok(())
    }

    /// Add `quantity` units back to stock, as happens on supply, cancellation
    /// or return. Never fails; saturates at the stock type's maximum.
    pub fn restock(&mut self, quantity: u32) {
        self.stock = self.stock.saturating_add(quantity);
    }
}
