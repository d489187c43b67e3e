//! Monetary rounding helpers.
//!
//! All published dollar figures round half-up (0.5 rounds away from zero),
//! so $49.785 becomes $49.79. Intermediate category rates are kept at full
//! precision; rounding happens once when a rate or cost is published.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a value half-up to the given number of decimal places.
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a dollar value half-up to cents.
///
/// # Example
///
/// ```
/// use shiftcost::calculation::round_cents;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let value = Decimal::from_str("49.785").unwrap();
/// assert_eq!(round_cents(value), Decimal::from_str("49.79").unwrap());
/// ```
pub fn round_cents(value: Decimal) -> Decimal {
    round_half_up(value, 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_midpoint_rounds_up() {
        assert_eq!(round_cents(dec("49.785")), dec("49.79"));
        assert_eq!(round_cents(dec("149.355")), dec("149.36"));
        assert_eq!(round_cents(dec("29.205")), dec("29.21"));
    }

    #[test]
    fn test_below_midpoint_rounds_down() {
        assert_eq!(round_cents(dec("33.1842")), dec("33.18"));
        assert_eq!(round_cents(dec("43.80825")), dec("43.81"));
    }

    #[test]
    fn test_already_rounded_unchanged() {
        assert_eq!(round_cents(dec("26.55")), dec("26.55"));
        assert_eq!(round_cents(dec("0")), dec("0"));
    }

    #[test]
    fn test_other_precision() {
        assert_eq!(round_half_up(dec("1.2345"), 3), dec("1.235"));
        assert_eq!(round_half_up(dec("1.5"), 0), dec("2"));
    }
}
