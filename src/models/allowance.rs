//! Allowance records and payment-frequency metadata.
//!
//! Allowance records arrive from the reference-data collaborator with their
//! payment frequency as free text ("per hour", "per week", ...). Like penalty
//! descriptions, that text is normalized by an isolated pure function,
//! [`PaymentFrequency::parse`], so new label variants can be added without
//! touching the pricing logic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::RateUnit;

/// How often an allowance is paid, normalized from free-text metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentFrequency {
    /// Paid for every hour worked.
    PerHour,
    /// Paid once per shift.
    PerShift,
    /// Paid once per day.
    PerDay,
    /// Paid per week (pro-rated at shift level for wage allowances).
    PerWeek,
    /// Paid per fortnight (pro-rated at shift level for wage allowances).
    PerFortnight,
    /// Paid per year (pro-rated at shift level for wage allowances).
    PerYear,
    /// Paid per kilometre travelled.
    PerKilometre,
    /// Paid per occasion.
    PerOccasion,
    /// Paid per meal.
    PerMeal,
}

impl PaymentFrequency {
    /// Normalizes a free-text payment-frequency label.
    ///
    /// Returns `None` for labels that match no known frequency; such
    /// allowances are treated as not applicable rather than as errors.
    ///
    /// # Example
    ///
    /// ```
    /// use shiftcost::models::PaymentFrequency;
    ///
    /// assert_eq!(PaymentFrequency::parse("per hour"), Some(PaymentFrequency::PerHour));
    /// assert_eq!(PaymentFrequency::parse("Per Annum"), Some(PaymentFrequency::PerYear));
    /// assert_eq!(PaymentFrequency::parse("per engagement"), None);
    /// ```
    pub fn parse(text: &str) -> Option<PaymentFrequency> {
        let t = text.trim().to_lowercase();
        if t.is_empty() {
            return None;
        }
        if t.contains("fortnight") {
            return Some(PaymentFrequency::PerFortnight);
        }
        if t.contains("km") || t.contains("kilometre") || t.contains("kilometer") {
            return Some(PaymentFrequency::PerKilometre);
        }
        if t.contains("hour") {
            return Some(PaymentFrequency::PerHour);
        }
        if t.contains("shift") {
            return Some(PaymentFrequency::PerShift);
        }
        if t.contains("day") {
            return Some(PaymentFrequency::PerDay);
        }
        if t.contains("week") {
            return Some(PaymentFrequency::PerWeek);
        }
        if t.contains("annum") || t.contains("annual") || t.contains("year") {
            return Some(PaymentFrequency::PerYear);
        }
        if t.contains("occasion") {
            return Some(PaymentFrequency::PerOccasion);
        }
        if t.contains("meal") {
            return Some(PaymentFrequency::PerMeal);
        }
        None
    }

    /// Returns the pro-ration period in weeks for weekly-or-longer
    /// frequencies, or `None` for shorter ones.
    pub fn period_weeks(&self) -> Option<Decimal> {
        match self {
            PaymentFrequency::PerWeek => Some(Decimal::ONE),
            PaymentFrequency::PerFortnight => Some(Decimal::TWO),
            PaymentFrequency::PerYear => Some(Decimal::new(52, 0)),
            _ => None,
        }
    }
}

/// A wage allowance record (paid with wages, pro-rated against hours).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WageAllowance {
    /// The Fair Work award code this allowance belongs to.
    pub award_code: String,
    /// The allowance name (e.g., "First aid allowance").
    pub allowance: String,
    /// The rate value, in the unit given by `rate_unit`.
    pub rate: Option<Decimal>,
    /// The unit of `rate` (percentage of the effective rate, or dollars).
    pub rate_unit: Option<RateUnit>,
    /// A pre-computed dollar amount per payment-frequency unit.
    pub allowance_amount: Option<Decimal>,
    /// Free-text payment frequency (normalized at calculation time).
    pub payment_frequency: String,
}

/// An expense allowance record (reimbursement-style, flat or per unit).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseAllowance {
    /// The Fair Work award code this allowance belongs to.
    pub award_code: String,
    /// The allowance name (e.g., "Meal allowance").
    pub allowance: String,
    /// The dollar amount per payment-frequency unit.
    pub allowance_amount: Option<Decimal>,
    /// Free-text payment frequency (normalized at calculation time).
    pub payment_frequency: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_common_frequencies() {
        assert_eq!(PaymentFrequency::parse("per hour"), Some(PaymentFrequency::PerHour));
        assert_eq!(PaymentFrequency::parse("Per Shift"), Some(PaymentFrequency::PerShift));
        assert_eq!(PaymentFrequency::parse("per day"), Some(PaymentFrequency::PerDay));
        assert_eq!(PaymentFrequency::parse("per week"), Some(PaymentFrequency::PerWeek));
        assert_eq!(
            PaymentFrequency::parse("per fortnight"),
            Some(PaymentFrequency::PerFortnight)
        );
        assert_eq!(PaymentFrequency::parse("per annum"), Some(PaymentFrequency::PerYear));
        assert_eq!(PaymentFrequency::parse("per km"), Some(PaymentFrequency::PerKilometre));
        assert_eq!(
            PaymentFrequency::parse("per occasion"),
            Some(PaymentFrequency::PerOccasion)
        );
        assert_eq!(PaymentFrequency::parse("per meal"), Some(PaymentFrequency::PerMeal));
    }

    #[test]
    fn test_parse_fortnight_before_week() {
        // "per fortnight" must not fall into the "week" bucket even when
        // source data spells it "fortnightly (2 weeks)".
        assert_eq!(
            PaymentFrequency::parse("fortnightly (2 weeks)"),
            Some(PaymentFrequency::PerFortnight)
        );
    }

    #[test]
    fn test_parse_unknown_returns_none() {
        assert_eq!(PaymentFrequency::parse("per engagement"), None);
        assert_eq!(PaymentFrequency::parse(""), None);
    }

    #[test]
    fn test_period_weeks() {
        assert_eq!(PaymentFrequency::PerWeek.period_weeks(), Some(dec("1")));
        assert_eq!(PaymentFrequency::PerFortnight.period_weeks(), Some(dec("2")));
        assert_eq!(PaymentFrequency::PerYear.period_weeks(), Some(dec("52")));
        assert_eq!(PaymentFrequency::PerHour.period_weeks(), None);
        assert_eq!(PaymentFrequency::PerShift.period_weeks(), None);
    }

    #[test]
    fn test_wage_allowance_round_trip() {
        let allowance = WageAllowance {
            award_code: "MA000004".to_string(),
            allowance: "First aid allowance".to_string(),
            rate: Some(dec("1.05")),
            rate_unit: Some(RateUnit::Percentage),
            allowance_amount: None,
            payment_frequency: "per week".to_string(),
        };

        let json = serde_json::to_string(&allowance).unwrap();
        let deserialized: WageAllowance = serde_json::from_str(&json).unwrap();
        assert_eq!(allowance, deserialized);
    }

    #[test]
    fn test_expense_allowance_round_trip() {
        let allowance = ExpenseAllowance {
            award_code: "MA000004".to_string(),
            allowance: "Meal allowance".to_string(),
            allowance_amount: Some(dec("21.76")),
            payment_frequency: "per occasion".to_string(),
        };

        let json = serde_json::to_string(&allowance).unwrap();
        let deserialized: ExpenseAllowance = serde_json::from_str(&json).unwrap();
        assert_eq!(allowance, deserialized);
    }
}
