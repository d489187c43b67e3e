//! Wage and expense allowance cost calculators.
//!
//! Two independent pure functions pro-rate allowance records against a
//! shift, using the effective hourly rate supplied by the caller so casual
//! loading is reflected consistently. Percentage-based wage allowances
//! paid per shift assume a flat 8-hour shift regardless of the actual
//! length; this is a known approximation of the rule set, preserved as-is.
//! Weekly-or-longer expense allowances are not pro-rated at shift level
//! and return `None`.

use rust_decimal::Decimal;

use crate::models::{AllowanceLine, ExpenseAllowance, PaymentFrequency, RateUnit, WageAllowance};
use crate::rules::{PER_SHIFT_PERCENT_HOURS, STANDARD_WEEKLY_HOURS};

use super::rounding::round_cents;

/// Resolves a wage allowance's rate field to a dollar figure. Percentage
/// rates price against the effective hourly rate; a missing unit is read
/// as dollars.
fn rate_value(allowance: &WageAllowance, effective_hourly_rate: Decimal) -> Option<Decimal> {
    let rate = allowance.rate?;
    match allowance.rate_unit {
        Some(RateUnit::Percentage) => Some(effective_hourly_rate * rate / Decimal::ONE_HUNDRED),
        Some(RateUnit::Dollar) | None => Some(rate),
    }
}

/// Computes the cost of a wage allowance for one shift.
///
/// - Per-hour: the pre-computed amount (preferred) or the rate, times the
///   paid hours.
/// - Per-shift/per-day: the pre-computed amount, or for percentage rates
///   `effective rate × pct / 100 × 8` (flat 8-hour shift assumption).
/// - Weekly/fortnightly/annual: pro-rated by
///   `amount / (38 × period weeks) × paid hours`.
///
/// Returns `None` when the allowance is not applicable at shift level or
/// carries no usable value.
pub fn calculate_wage_allowance(
    allowance: &WageAllowance,
    paid_hours: Decimal,
    effective_hourly_rate: Decimal,
) -> Option<AllowanceLine> {
    let frequency = PaymentFrequency::parse(&allowance.payment_frequency)?;

    match frequency {
        PaymentFrequency::PerHour => {
            let per_hour = allowance
                .allowance_amount
                .or_else(|| rate_value(allowance, effective_hourly_rate))?;
            Some(AllowanceLine {
                allowance: allowance.allowance.clone(),
                units: paid_hours,
                rate: round_cents(per_hour),
                cost: round_cents(per_hour * paid_hours),
            })
        }
        PaymentFrequency::PerShift | PaymentFrequency::PerDay => {
            let amount = allowance.allowance_amount.or_else(|| {
                let rate = allowance.rate?;
                match allowance.rate_unit {
                    Some(RateUnit::Percentage) => {
                        Some(effective_hourly_rate * rate / Decimal::ONE_HUNDRED * PER_SHIFT_PERCENT_HOURS)
                    }
                    Some(RateUnit::Dollar) | None => Some(rate),
                }
            })?;
            Some(AllowanceLine {
                allowance: allowance.allowance.clone(),
                units: Decimal::ONE,
                rate: round_cents(amount),
                cost: round_cents(amount),
            })
        }
        PaymentFrequency::PerWeek | PaymentFrequency::PerFortnight | PaymentFrequency::PerYear => {
            let period_weeks = frequency.period_weeks()?;
            let amount = allowance.allowance_amount.or_else(|| match allowance.rate_unit {
                Some(RateUnit::Dollar) | None => allowance.rate,
                Some(RateUnit::Percentage) => None,
            })?;
            let hourly = amount / (STANDARD_WEEKLY_HOURS * period_weeks);
            Some(AllowanceLine {
                allowance: allowance.allowance.clone(),
                units: paid_hours,
                rate: round_cents(hourly),
                cost: round_cents(hourly * paid_hours),
            })
        }
        _ => None,
    }
}

/// Computes the cost of an expense allowance for one shift.
///
/// - Per-kilometre: `amount × shift kms`.
/// - Per-shift/day/occasion/meal: the flat amount.
/// - Weekly-or-longer frequencies are not pro-rated at shift level and
///   return `None`.
pub fn calculate_expense_allowance(
    allowance: &ExpenseAllowance,
    shift_kms: Option<Decimal>,
) -> Option<AllowanceLine> {
    let frequency = PaymentFrequency::parse(&allowance.payment_frequency)?;
    let amount = allowance.allowance_amount?;

    match frequency {
        PaymentFrequency::PerKilometre => {
            let kms = shift_kms?;
            if kms <= Decimal::ZERO {
                return None;
            }
            Some(AllowanceLine {
                allowance: allowance.allowance.clone(),
                units: kms,
                rate: round_cents(amount),
                cost: round_cents(amount * kms),
            })
        }
        PaymentFrequency::PerShift
        | PaymentFrequency::PerDay
        | PaymentFrequency::PerOccasion
        | PaymentFrequency::PerMeal => Some(AllowanceLine {
            allowance: allowance.allowance.clone(),
            units: Decimal::ONE,
            rate: round_cents(amount),
            cost: round_cents(amount),
        }),
        _ => None,
    }
}
