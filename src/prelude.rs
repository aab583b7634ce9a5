//! Shopfloor prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::Cart,
    catalog::Category,
    customers::{Customer, CustomerKey, CustomerKind},
    discounts::{Discount, DiscountError},
    fixtures::{FixtureError, ShopFixture},
    orders::{
        CancelOutcome, Order, OrderError, OrderStatus, ProcessFailure, ProcessOutcome,
        ReturnOutcome,
    },
    payments::{Payment, PaymentMethod, SettlementNote},
    pricing::{TotalError, total_of},
    products::{Product, ProductKey, StockError},
    staff::Employee,
    store::Store,
    suppliers::{DeliveryNote, Supplier, SupplyError},
};
