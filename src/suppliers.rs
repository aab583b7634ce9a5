//! Suppliers

use std::fmt;

use thiserror::Error;

use crate::{products::ProductKey, store::Store};

/// Errors related to supplying stock.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SupplyError {
    /// The supplied product does not resolve in the store.
    #[error("unknown product key {0:?}")]
    UnknownProduct(ProductKey),
}

/// A supplier who delivers stock into the store.
#[derive(Debug, Clone)]
pub struct Supplier {
    name: String,
    contact: String,
}

impl Supplier {
    /// Create a new supplier.
    pub fn new(name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
        }
    }

    /// Returns the supplier name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the contact details.
    pub fn contact(&self) -> &str {
        &self.contact
    }

    /// Deliver `quantity` units of a product into the store, unconditionally
    /// increasing its stock, and produce a confirmation record.
    ///
    /// # Errors
    ///
    /// Returns [`SupplyError::UnknownProduct`] if `key` does not resolve.
    pub fn supply(
        &self,
        store: &mut Store<'_>,
        key: ProductKey,
        quantity: u32,
    ) -> Result<DeliveryNote, SupplyError> {
        let product = store
            .product_mut(key)
            .ok_or(SupplyError::UnknownProduct(key))?;

        product.restock(quantity);

        Ok(DeliveryNote {
            supplier: self.name.clone(),
            product: product.name().to_string(),
            quantity,
        })
    }
}

/// Confirmation record emitted when a supplier delivers stock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryNote {
    supplier: String,
    product: String,
    quantity: u32,
}

impl DeliveryNote {
    /// Returns the supplier name.
    pub fn supplier(&self) -> &str {
        &self.supplier
    }

    /// Returns the supplied product name.
    pub fn product(&self) -> &str {
        &self.product
    }

    /// Returns the number of units delivered.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

impl fmt::Display for DeliveryNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} units of {} supplied by {}",
            self.quantity, self.product, self.supplier
        )
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso};
    use testresult::TestResult;

    use crate::products::Product;

    use super::*;

    #[test]
    fn supply_increases_stock_and_records_delivery() -> TestResult {
        let mut store = Store::new(iso::TRY);
        let cola = store.add_product(Product::new("Cola", Money::from_minor(1000, iso::TRY), 95));
        let supplier = Supplier::new("Tedarikci A.S.", "tedarikci@mail.com");

        let note = supplier.supply(&mut store, cola, 50)?;

        assert_eq!(store.product(cola).map(Product::stock), Some(145));
        assert_eq!(note.quantity(), 50);
        assert_eq!(note.product(), "Cola");
        assert_eq!(note.to_string(), "50 units of Cola supplied by Tedarikci A.S.");

        Ok(())
    }

    #[test]
    fn supply_of_unknown_product_errors() {
        let mut scratch = Store::new(iso::TRY);
        let foreign = scratch.add_product(Product::new("Cola", Money::from_minor(1000, iso::TRY), 1));

        let mut store = Store::new(iso::TRY);
        let supplier = Supplier::new("Tedarikci A.S.", "tedarikci@mail.com");

        let result = supplier.supply(&mut store, foreign, 50);

        assert_eq!(result, Err(SupplyError::UnknownProduct(foreign)));
    }
}
