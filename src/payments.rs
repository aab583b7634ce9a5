//! Payments

use std::fmt;

use rusty_money::{Money, iso::Currency};

/// A payment attached to an order.
///
/// Settlement is simulated: there is no external gateway and no declined
/// state, so [`Payment::settle`] always succeeds.
#[derive(Debug, Clone, PartialEq)]
pub enum Payment<'a> {
    /// Card payment, identified by the card number on file.
    CreditCard {
        /// Amount to collect
        amount: Money<'a, Currency>,

        /// Card number on file
        card_number: String,
    },

    /// Cash handed over at the till.
    Cash {
        /// Amount to collect
        amount: Money<'a, Currency>,
    },

    /// Bank transfer from the given account.
    Transfer {
        /// Amount to collect
        amount: Money<'a, Currency>,

        /// Source bank account
        bank_account: String,
    },
}

impl<'a> Payment<'a> {
    /// Returns the amount this payment collects.
    pub fn amount(&self) -> Money<'a, Currency> {
        match self {
            Payment::CreditCard { amount, .. }
            | Payment::Cash { amount }
            | Payment::Transfer { amount, .. } => *amount,
        }
    }

    /// Returns the settlement method of this payment.
    pub fn method(&self) -> PaymentMethod {
        match self {
            Payment::CreditCard { .. } => PaymentMethod::CreditCard,
            Payment::Cash { .. } => PaymentMethod::Cash,
            Payment::Transfer { .. } => PaymentMethod::Transfer,
        }
    }

    /// Settle the payment, producing a confirmation record.
    ///
    /// Cannot fail in this design; the note is the only observable effect.
    pub fn settle(&self) -> SettlementNote<'a> {
        SettlementNote {
            method: self.method(),
            amount: self.amount(),
        }
    }
}

/// How a payment was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    /// Settled by credit card.
    CreditCard,

    /// Settled in cash.
    Cash,

    /// Settled by bank transfer.
    Transfer,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::CreditCard => write!(f, "credit card"),
            PaymentMethod::Cash => write!(f, "cash"),
            PaymentMethod::Transfer => write!(f, "bank transfer"),
        }
    }
}

/// Confirmation record emitted when a payment settles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettlementNote<'a> {
    method: PaymentMethod,
    amount: Money<'a, Currency>,
}

impl<'a> SettlementNote<'a> {
    /// Returns the settlement method.
    pub fn method(&self) -> PaymentMethod {
        self.method
    }

    /// Returns the settled amount.
    pub fn amount(&self) -> Money<'a, Currency> {
        self.amount
    }
}

impl fmt::Display for SettlementNote<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} payment of {} received", self.method, self.amount)
    }
}
