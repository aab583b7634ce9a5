//! Store

use rusty_money::iso::Currency;
use slotmap::SlotMap;

use crate::{
    customers::{Customer, CustomerKey},
    products::{Product, ProductKey},
};

/// The back-office store: the single owner of all products and customers.
///
/// Orders, carts and categories hold [`ProductKey`]s and [`CustomerKey`]s and
/// resolve them through a `Store` borrow, so every mutation of shared state
/// flows through a single `&mut Store`. All monetary values share the store
/// currency.
#[derive(Debug)]
pub struct Store<'a> {
    currency: &'static Currency,
    products: SlotMap<ProductKey, Product<'a>>,
    customers: SlotMap<CustomerKey, Customer>,
}

impl<'a> Store<'a> {
    /// Create an empty store trading in the given currency.
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            currency,
            products: SlotMap::with_key(),
            customers: SlotMap::with_key(),
        }
    }

    /// Returns the store currency.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Add a product to the store, returning its key.
    pub fn add_product(&mut self, product: Product<'a>) -> ProductKey {
        self.products.insert(product)
    }

    /// Look up a product by key.
    pub fn product(&self, key: ProductKey) -> Option<&Product<'a>> {
        self.products.get(key)
    }

    /// Look up a product by key for mutation.
    pub fn product_mut(&mut self, key: ProductKey) -> Option<&mut Product<'a>> {
        self.products.get_mut(key)
    }

    /// Iterate over all products and their keys.
    pub fn products(&self) -> impl Iterator<Item = (ProductKey, &Product<'a>)> {
        self.products.iter()
    }

    /// Add a customer to the store, returning their key.
    pub fn add_customer(&mut self, customer: Customer) -> CustomerKey {
        self.customers.insert(customer)
    }

    /// Look up a customer by key.
    pub fn customer(&self, key: CustomerKey) -> Option<&Customer> {
        self.customers.get(key)
    }

    /// Look up a customer by key for mutation.
    pub fn customer_mut(&mut self, key: CustomerKey) -> Option<&mut Customer> {
        self.customers.get_mut(key)
    }
}
