//! Customers

use std::fmt;

use slotmap::new_key_type;

new_key_type! {
    /// Customer Key
    pub struct CustomerKey;
}

/// The kind of customer account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerKind {
    /// A private individual.
    Individual,

    /// A company account, billed under the company name.
    Corporate {
        /// Registered company name
        company: String,
    },
}

/// A customer with a loyalty point accumulator.
///
/// Orders hold a [`CustomerKey`] rather than the customer itself; a customer
/// may exist with no orders and be referenced by many.
#[derive(Debug, Clone)]
pub struct Customer {
    name: String,
    contact: String,
    kind: CustomerKind,
    loyalty_points: i64,
}

impl Customer {
    /// Create an individual customer with zero loyalty points.
    pub fn individual(name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
            kind: CustomerKind::Individual,
            loyalty_points: 0,
        }
    }

    /// Create a corporate customer with zero loyalty points.
    pub fn corporate(
        name: impl Into<String>,
        contact: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
            kind: CustomerKind::Corporate {
                company: company.into(),
            },
            loyalty_points: 0,
        }
    }

    /// Returns the customer name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the contact details.
    pub fn contact(&self) -> &str {
        &self.contact
    }

    /// Returns the customer kind.
    pub fn kind(&self) -> &CustomerKind {
        &self.kind
    }

    /// Returns the accumulated loyalty points.
    pub fn loyalty_points(&self) -> i64 {
        self.loyalty_points
    }

    /// Add points to the accumulator.
    ///
    /// Unvalidated: a negative value reduces the balance. The order lifecycle
    /// only ever awards non-negative amounts.
    pub fn add_loyalty_points(&mut self, points: i64) {
        self.loyalty_points += points;
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            CustomerKind::Individual => {
                write!(f, "Individual customer: {}, contact: {}", self.name, self.contact)
            }
            CustomerKind::Corporate { company } => {
                write!(f, "Corporate customer: {company}, contact: {}", self.contact)
            }
        }
    }
}
