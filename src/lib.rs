//! Shopfloor
//!
//! Shopfloor is a small in-memory retail back-office domain model: products
//! with stock, customers who accrue loyalty points, payments, discounts, and
//! an order lifecycle (place → pay → prepare → deliver → cancel/return) with
//! stock reconciliation.
//!
//! A single [`store::Store`] owns every product and customer; orders, carts
//! and categories reference them by key and mutate them through a `&mut
//! Store`. Observable effects are structured outcome values, not console
//! output.

pub mod cart;
pub mod catalog;
pub mod customers;
pub mod discounts;
pub mod fixtures;
pub mod orders;
pub mod payments;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod staff;
pub mod store;
pub mod suppliers;
