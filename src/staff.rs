//! Staff

use std::fmt;

/// An employee record. Display only; employees take no part in the order
/// lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    name: String,
    position: String,
    authority: String,
}

impl Employee {
    /// Create a new employee record.
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        authority: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            authority: authority.into(),
        }
    }

    /// Returns the employee name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the job position.
    pub fn position(&self) -> &str {
        &self.position
    }

    /// Returns the authority level.
    pub fn authority(&self) -> &str {
        &self.authority
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Employee: {}, position: {}, authority: {}",
            self.name, self.position, self.authority
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_all_fields() {
        let employee = Employee::new("Ayse Kaya", "Cashier", "High");

        assert_eq!(
            employee.to_string(),
            "Employee: Ayse Kaya, position: Cashier, authority: High"
        );
    }
}
