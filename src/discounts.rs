//! Discounts

use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::{FromPrimitive, ToPrimitive},
};
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

/// Errors specific to discount calculations.
#[derive(Debug, Error, PartialEq)]
pub enum DiscountError {
    /// Percentage calculation could not be safely represented.
    #[error("percentage calculation overflowed or was not representable")]
    PercentConversion,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// A flat discount over a monetary amount.
///
/// This is a standalone pure capability: order totals are undiscounted, and
/// callers apply a `Discount` to whatever amount they choose. Neither variant
/// clamps at zero, so a discount larger than the amount yields a negative
/// result.
#[derive(Debug, Clone, PartialEq)]
pub enum Discount<'a> {
    /// Reduce the amount by a percentage of itself (`amount − amount·p/100`).
    Percentage(Decimal),

    /// Reduce the amount by a fixed sum (`amount − fixed`).
    Fixed(Money<'a, Currency>),
}

impl<'a> Discount<'a> {
    /// Apply the discount to `amount`, returning the reduced amount.
    ///
    /// # Errors
    ///
    /// - [`DiscountError::PercentConversion`]: the percentage calculation
    ///   overflowed or could not be represented in minor units.
    /// - [`DiscountError::Money`]: wrapped money arithmetic or currency
    ///   mismatch error.
    pub fn apply(&self, amount: Money<'a, Currency>) -> Result<Money<'a, Currency>, DiscountError> {
        match self {
            Discount::Percentage(percent) => {
                let reduction = percent_of_minor(*percent, amount.to_minor_units())?;

                Ok(amount.sub(Money::from_minor(reduction, amount.currency()))?)
            }
            Discount::Fixed(fixed) => Ok(amount.sub(*fixed)?),
        }
    }
}

/// Calculate `percent`% of a minor unit amount, rounded half away from zero.
fn percent_of_minor(percent: Decimal, minor: i64) -> Result<i64, DiscountError> {
    let Some(minor) = Decimal::from_i64(minor) else {
        unreachable!("always returns `Some` for every `i64`")
    };

    let Some(applied) = percent.checked_mul(minor) else {
        return Err(DiscountError::PercentConversion);
    };

    let Some(scaled) = applied.checked_div(Decimal::ONE_HUNDRED) else {
        return Err(DiscountError::PercentConversion);
    };

    let rounded = scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let Some(rounded) = rounded.to_i64() else {
        return Err(DiscountError::PercentConversion);
    };

    Ok(rounded)
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::TRY;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn percentage_reduces_by_share_of_amount() -> TestResult {
        let discount = Discount::Percentage(Decimal::new(25, 0));

        let reduced = discount.apply(Money::from_minor(10_000, TRY))?;

        assert_eq!(reduced, Money::from_minor(7500, TRY));

        Ok(())
    }

    #[test]
    fn fixed_reduces_by_flat_sum() -> TestResult {
        let discount = Discount::Fixed(Money::from_minor(1500, TRY));

        let reduced = discount.apply(Money::from_minor(10_000, TRY))?;

        assert_eq!(reduced, Money::from_minor(8500, TRY));

        Ok(())
    }

    #[test]
    fn discounts_do_not_clamp_at_zero() -> TestResult {
        let fixed = Discount::Fixed(Money::from_minor(10_000, TRY));
        let percent = Discount::Percentage(Decimal::new(150, 0));

        assert_eq!(
            fixed.apply(Money::from_minor(4000, TRY))?,
            Money::from_minor(-6000, TRY)
        );
        assert_eq!(
            percent.apply(Money::from_minor(4000, TRY))?,
            Money::from_minor(-2000, TRY)
        );

        Ok(())
    }

    #[test]
    fn percentage_rounds_midpoint_away_from_zero() -> TestResult {
        // 5% of 10 minor units is 0.5, which rounds to 1.
        let discount = Discount::Percentage(Decimal::new(5, 0));

        let reduced = discount.apply(Money::from_minor(10, TRY))?;

        assert_eq!(reduced, Money::from_minor(9, TRY));

        Ok(())
    }

    #[test]
    fn fixed_with_mismatched_currency_errors() {
        let discount = Discount::Fixed(Money::from_minor(1000, rusty_money::iso::USD));

        let result = discount.apply(Money::from_minor(4000, TRY));

        assert!(matches!(result, Err(DiscountError::Money(_))));
    }

    #[test]
    fn percent_of_minor_overflow_returns_error() {
        let result = percent_of_minor(Decimal::MAX, i64::MAX);

        assert!(matches!(result, Err(DiscountError::PercentConversion)));
    }
}
