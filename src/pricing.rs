//! Pricing

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::{products::ProductKey, store::Store};

/// Errors that can occur while totalling a collection of product references.
#[derive(Debug, Error, PartialEq)]
pub enum TotalError {
    /// A referenced product no longer resolves in the store.
    #[error("unknown product key {0:?}")]
    UnknownProduct(ProductKey),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Calculates the live total of a list of product references, one entry per
/// unit. Prices are read from the store at call time, not snapshotted.
///
/// An empty list totals zero in the store currency.
///
/// # Errors
///
/// - [`TotalError::UnknownProduct`]: an entry does not resolve in the store.
/// - [`TotalError::Money`]: wrapped money arithmetic or currency mismatch error.
pub fn total_of<'a>(
    store: &Store<'a>,
    entries: &[ProductKey],
) -> Result<Money<'a, Currency>, TotalError> {
    entries
        .iter()
        .try_fold(Money::from_minor(0, store.currency()), |acc, key| {
            let product = store.product(*key).ok_or(TotalError::UnknownProduct(*key))?;

            Ok(acc.add(product.price())?)
        })
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;
    use testresult::TestResult;

    use crate::products::Product;

    use super::*;

    #[test]
    fn total_sums_one_entry_per_unit() -> TestResult {
        let mut store = Store::new(iso::TRY);
        let cola = store.add_product(Product::new("Cola", Money::from_minor(1000, iso::TRY), 100));
        let soda = store.add_product(Product::new("Soda", Money::from_minor(500, iso::TRY), 100));

        let total = total_of(&store, &[cola, cola, soda])?;

        assert_eq!(total, Money::from_minor(2500, iso::TRY));

        Ok(())
    }

    #[test]
    fn total_of_no_entries_is_zero_in_store_currency() -> TestResult {
        let store = Store::new(iso::TRY);

        assert_eq!(total_of(&store, &[])?, Money::from_minor(0, iso::TRY));

        Ok(())
    }

    #[test]
    fn total_reflects_live_prices() -> TestResult {
        let mut store = Store::new(iso::TRY);
        let cola = store.add_product(Product::new("Cola", Money::from_minor(1000, iso::TRY), 100));

        if let Some(product) = store.product_mut(cola) {
            product.set_price(Money::from_minor(1200, iso::TRY));
        }

        assert_eq!(total_of(&store, &[cola])?, Money::from_minor(1200, iso::TRY));

        Ok(())
    }

    #[test]
    fn total_with_dangling_key_errors() {
        let mut scratch = Store::new(iso::TRY);
        let foreign =
            scratch.add_product(Product::new("Cola", Money::from_minor(1000, iso::TRY), 1));

        let store = Store::new(iso::TRY);

        assert!(matches!(
            total_of(&store, &[foreign]),
            Err(TotalError::UnknownProduct(_))
        ));
    }
}
