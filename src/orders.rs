//! Orders
//!
//! The order lifecycle is the one part of the model with real invariants:
//! status moves forward through `Placed → Preparing → Delivered`, except that
//! cancellation and return reset a qualifying order to `Placed` while putting
//! its units back into stock.
//!
//! Two distinct failure contracts coexist here and must stay distinct:
//! [`Order::add_product`] propagates stock errors as a hard [`Result`], while
//! [`Order::process`], [`Order::cancel`] and [`Order::return_delivery`] report
//! failures and rejections inside their outcome values. A failure mid-way
//! through [`Order::process`] leaves the status wherever it had advanced to;
//! there is no rollback.

use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    customers::CustomerKey,
    payments::{Payment, SettlementNote},
    pricing::{TotalError, total_of},
    products::{ProductKey, StockError},
    store::Store,
};

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    /// Order exists and may still be changed or cancelled.
    Placed,

    /// Payment has settled and the order is being prepared.
    Preparing,

    /// Order has been handed to the customer.
    Delivered,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Placed => write!(f, "placed"),
            OrderStatus::Preparing => write!(f, "preparing"),
            OrderStatus::Delivered => write!(f, "delivered"),
        }
    }
}

/// Hard errors from order mutation.
#[derive(Debug, Error, PartialEq)]
pub enum OrderError {
    /// The product being added does not resolve in the store.
    #[error("unknown product key {0:?}")]
    UnknownProduct(ProductKey),

    /// Not enough stock to cover the purchase.
    #[error(transparent)]
    Stock(#[from] StockError),
}

/// Why processing an order failed.
#[derive(Debug, Error, PartialEq)]
pub enum ProcessFailure {
    /// No payment has been assigned to the order.
    #[error("no payment assigned to the order")]
    MissingPayment,

    /// The order's customer no longer resolves in the store.
    #[error("unknown customer key {0:?}")]
    UnknownCustomer(CustomerKey),

    /// The order total could not be computed.
    #[error(transparent)]
    Total(#[from] TotalError),

    /// The order total could not be converted into loyalty points.
    #[error("order total is not representable as loyalty points")]
    LoyaltyConversion,
}

/// Outcome of [`Order::process`].
///
/// Failures are reported here rather than raised: callers get the status the
/// order was left with, which may be partially advanced.
#[derive(Debug, PartialEq)]
pub enum ProcessOutcome<'a> {
    /// The full sequence ran: payment settled, loyalty awarded, delivered.
    Completed {
        /// Settlement confirmation from the payment
        settlement: SettlementNote<'a>,

        /// Live order total at delivery time
        total: Money<'a, Currency>,

        /// Loyalty points awarded to the customer
        loyalty_awarded: i64,
    },

    /// The sequence stopped part-way; no rollback was performed.
    Failed {
        /// Status the order was left with
        status: OrderStatus,

        /// What went wrong
        reason: ProcessFailure,
    },
}

impl fmt::Display for ProcessOutcome<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessOutcome::Completed {
                settlement,
                total,
                loyalty_awarded,
            } => write!(
                f,
                "order delivered: {settlement}, total {total}, {loyalty_awarded} loyalty points awarded"
            ),
            ProcessOutcome::Failed { status, reason } => {
                write!(f, "order processing failed ({reason}); order left {status}")
            }
        }
    }
}

/// Outcome of [`Order::cancel`].
#[derive(Debug, PartialEq, Eq)]
pub enum CancelOutcome {
    /// The order was reset to `Placed` and its units went back into stock.
    Cancelled {
        /// One unit per line entry went back into stock
        units_restocked: usize,
    },

    /// A delivered order cannot be cancelled; nothing was mutated.
    RejectedDelivered,
}

impl fmt::Display for CancelOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CancelOutcome::Cancelled { units_restocked } => {
                write!(f, "order cancelled, {units_restocked} units returned to stock")
            }
            CancelOutcome::RejectedDelivered => {
                write!(f, "a delivered order cannot be cancelled")
            }
        }
    }
}

/// Outcome of [`Order::return_delivery`].
#[derive(Debug, PartialEq, Eq)]
pub enum ReturnOutcome {
    /// The order was reset to `Placed` and its units went back into stock.
    Returned {
        /// One unit per line entry went back into stock
        units_restocked: usize,
    },

    /// Only delivered orders can be returned; nothing was mutated.
    RejectedNotDelivered,
}

impl fmt::Display for ReturnOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReturnOutcome::Returned { units_restocked } => {
                write!(f, "order returned, {units_restocked} units back in stock")
            }
            ReturnOutcome::RejectedNotDelivered => {
                write!(f, "an order cannot be returned before delivery")
            }
        }
    }
}

/// An order: purchased units, the buying customer, an optional payment and a
/// lifecycle status.
///
/// Lines hold one [`ProductKey`] entry per purchased unit, so buying five of
/// one product appends five entries. Cancellation and return restock one unit
/// per entry, mirroring the purchase decrement exactly.
#[derive(Debug)]
pub struct Order<'a> {
    lines: SmallVec<[ProductKey; 8]>,
    customer: CustomerKey,
    payment: Option<Payment<'a>>,
    status: OrderStatus,
}

impl<'a> Order<'a> {
    /// Create an empty order for a customer. Starts `Placed`, with no payment.
    pub fn new(customer: CustomerKey) -> Self {
        Self {
            lines: SmallVec::new(),
            customer,
            payment: None,
            status: OrderStatus::Placed,
        }
    }

    /// Returns the current lifecycle status.
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Returns the purchased units, one entry per unit.
    pub fn lines(&self) -> &[ProductKey] {
        &self.lines
    }

    /// Returns the buying customer's key.
    pub fn customer(&self) -> CustomerKey {
        self.customer
    }

    /// Returns the assigned payment, if any.
    pub fn payment(&self) -> Option<&Payment<'a>> {
        self.payment.as_ref()
    }

    /// Assign the payment that [`Order::process`] will settle.
    pub fn assign_payment(&mut self, payment: Payment<'a>) {
        self.payment = Some(payment);
    }

    /// Purchase `quantity` units of a product: take them out of stock, then
    /// append one line entry per unit.
    ///
    /// Atomic on failure: stock is checked and decremented before any line is
    /// appended, so a failed purchase leaves both the stock count and the
    /// order untouched.
    ///
    /// # Errors
    ///
    /// - [`OrderError::UnknownProduct`]: `key` does not resolve in the store.
    /// - [`OrderError::Stock`]: not enough units in stock; propagated from
    ///   [`crate::products::Product::decrease_stock`].
    pub fn add_product(
        &mut self,
        store: &mut Store<'a>,
        key: ProductKey,
        quantity: u32,
    ) -> Result<(), OrderError> {
        let product = store
            .product_mut(key)
            .ok_or(OrderError::UnknownProduct(key))?;

        product.decrease_stock(quantity)?;

        for _ in 0..quantity {
            self.lines.push(key);
        }

        Ok(())
    }

    /// Calculate the live total of the order.
    ///
    /// Prices are read from the store at call time; an order with no lines
    /// totals zero in the store currency.
    ///
    /// # Errors
    ///
    /// Returns a [`TotalError`] if a line no longer resolves in the store or
    /// money arithmetic fails.
    pub fn total(&self, store: &Store<'a>) -> Result<Money<'a, Currency>, TotalError> {
        total_of(store, &self.lines)
    }

    /// Run the delivery sequence: settle the payment, start preparing, award
    /// the customer loyalty points equal to the floored order total, deliver.
    ///
    /// Failures do not roll back: the returned outcome carries whatever status
    /// the order had reached. A missing payment fails before any status
    /// change; a total or customer failure fails with the order left
    /// `Preparing`.
    pub fn process(&mut self, store: &mut Store<'a>) -> ProcessOutcome<'a> {
        let Some(payment) = &self.payment else {
            return ProcessOutcome::Failed {
                status: self.status,
                reason: ProcessFailure::MissingPayment,
            };
        };

        let settlement = payment.settle();
        self.status = OrderStatus::Preparing;

        let total = match self.total(store) {
            Ok(total) => total,
            Err(error) => {
                return ProcessOutcome::Failed {
                    status: self.status,
                    reason: error.into(),
                };
            }
        };

        let Some(loyalty_awarded) = loyalty_points(total) else {
            return ProcessOutcome::Failed {
                status: self.status,
                reason: ProcessFailure::LoyaltyConversion,
            };
        };

        let Some(customer) = store.customer_mut(self.customer) else {
            return ProcessOutcome::Failed {
                status: self.status,
                reason: ProcessFailure::UnknownCustomer(self.customer),
            };
        };

        customer.add_loyalty_points(loyalty_awarded);
        self.status = OrderStatus::Delivered;

        ProcessOutcome::Completed {
            settlement,
            total,
            loyalty_awarded,
        }
    }

    /// Cancel an order that has not yet been delivered.
    ///
    /// Resets the status to `Placed` and puts one unit per line entry back
    /// into stock. Loyalty points already awarded are not reversed. A
    /// delivered order is rejected with no mutation.
    pub fn cancel(&mut self, store: &mut Store<'a>) -> CancelOutcome {
        match self.status {
            OrderStatus::Placed | OrderStatus::Preparing => {
                self.status = OrderStatus::Placed;

                CancelOutcome::Cancelled {
                    units_restocked: self.restock_lines(store),
                }
            }
            OrderStatus::Delivered => CancelOutcome::RejectedDelivered,
        }
    }

    /// Return a delivered order.
    ///
    /// Resets the status to `Placed` and restores stock exactly as
    /// cancellation does. Loyalty points already awarded are not reversed. An
    /// undelivered order is rejected with no mutation.
    pub fn return_delivery(&mut self, store: &mut Store<'a>) -> ReturnOutcome {
        match self.status {
            OrderStatus::Delivered => {
                self.status = OrderStatus::Placed;

                ReturnOutcome::Returned {
                    units_restocked: self.restock_lines(store),
                }
            }
            OrderStatus::Placed | OrderStatus::Preparing => ReturnOutcome::RejectedNotDelivered,
        }
    }

    /// Put one unit per line entry back into stock; lines whose product no
    /// longer resolves are skipped. Returns the number of units restocked.
    fn restock_lines(&self, store: &mut Store<'a>) -> usize {
        let mut restocked = 0;

        for key in &self.lines {
            if let Some(product) = store.product_mut(*key) {
                product.restock(1);
                restocked += 1;
            }
        }

        restocked
    }
}

/// Loyalty points for an order total: the total in major units, floored.
fn loyalty_points(total: Money<'_, Currency>) -> Option<i64> {
    total.amount().floor().to_i64()
}
