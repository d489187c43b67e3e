//! Ordinary hourly rate derivation.
//!
//! Computes a classification's ordinary dollars-per-hour figure from its
//! base/calculated rate fields, the employment type, and an optional casual
//! loading percentage. An explicit loading of 0 is honored; only an absent
//! loading falls back to the 25% default.

use rust_decimal::Decimal;

use crate::models::Classification;
use crate::rules::{DEFAULT_CASUAL_LOADING_PERCENT, STANDARD_WEEKLY_HOURS};

use super::rounding::round_cents;

/// The outcome of ordinary-rate derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedRate {
    /// The ordinary hourly rate, rounded to cents.
    pub ordinary_hourly: Decimal,
    /// Whether the casual loading multiplier entered the computation.
    pub loading_applied: bool,
}

/// Derives the ordinary hourly rate for a classification.
///
/// Priority order:
/// 1. An hourly classification-rate override from the snapshot wins
///    outright.
/// 2. If `use_loading_for_rate` is set and the base rate is weekly:
///    `(base / 38) × (1 + loading / 100)`.
/// 3. An hourly calculated rate is used directly.
/// 4. A weekly base rate: casuals get the loading applied as in (2),
///    others get `base / 38`.
/// 5. The calculated-rate value if present; otherwise 0.
///
/// The 38-hour divisor is a fixed constant of the rule set.
///
/// # Arguments
///
/// * `classification` - The classification to derive the rate for
/// * `casual_loading_percent` - Loading percentage; `None` applies the 25%
///   default, `Some(0)` is honored as zero loading
/// * `use_loading_for_rate` - Whether to derive the rate with loading applied
/// * `override_hourly` - An hourly rate override from the snapshot
///
/// # Example
///
/// ```
/// use shiftcost::calculation::derive_ordinary_rate;
/// use shiftcost::models::{Classification, RateType};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let classification = Classification {
///     award_code: "MA000004".to_string(),
///     employee_rate_type_code: "CA".to_string(),
///     classification: "Retail Employee Level 1".to_string(),
///     classification_level: 1,
///     base_rate: Some(Decimal::from_str("1008.90").unwrap()),
///     base_rate_type: Some(RateType::Weekly),
///     calculated_rate: None,
///     calculated_rate_type: None,
/// };
///
/// // (1008.90 / 38) × 1.25 = 33.19
/// let derived = derive_ordinary_rate(&classification, None, true, None);
/// assert_eq!(derived.ordinary_hourly, Decimal::from_str("33.19").unwrap());
/// assert!(derived.loading_applied);
///
/// // An explicit 0% loading is honored: 1008.90 / 38 = 26.55
/// let derived = derive_ordinary_rate(&classification, Some(Decimal::ZERO), true, None);
/// assert_eq!(derived.ordinary_hourly, Decimal::from_str("26.55").unwrap());
/// ```
pub fn derive_ordinary_rate(
    classification: &Classification,
    casual_loading_percent: Option<Decimal>,
    use_loading_for_rate: bool,
    override_hourly: Option<Decimal>,
) -> DerivedRate {
    if let Some(overridden) = override_hourly {
        return DerivedRate {
            ordinary_hourly: round_cents(overridden),
            loading_applied: false,
        };
    }

    let loading_percent = casual_loading_percent.unwrap_or(DEFAULT_CASUAL_LOADING_PERCENT);
    let loading_multiplier = Decimal::ONE + loading_percent / Decimal::ONE_HUNDRED;
    let loaded_weekly = |base: Decimal| {
        round_cents(base / STANDARD_WEEKLY_HOURS * loading_multiplier)
    };

    if use_loading_for_rate && classification.has_weekly_base() {
        let base = classification.base_rate.unwrap_or(Decimal::ZERO);
        return DerivedRate {
            ordinary_hourly: loaded_weekly(base),
            loading_applied: true,
        };
    }

    if classification.has_hourly_calculated() {
        let rate = classification.calculated_rate.unwrap_or(Decimal::ZERO);
        return DerivedRate {
            ordinary_hourly: round_cents(rate),
            loading_applied: false,
        };
    }

    if classification.has_weekly_base() {
        let base = classification.base_rate.unwrap_or(Decimal::ZERO);
        if classification.is_casual() {
            return DerivedRate {
                ordinary_hourly: loaded_weekly(base),
                loading_applied: true,
            };
        }
        return DerivedRate {
            ordinary_hourly: round_cents(base / STANDARD_WEEKLY_HOURS),
            loading_applied: false,
        };
    }

    DerivedRate {
        ordinary_hourly: round_cents(classification.calculated_rate.unwrap_or(Decimal::ZERO)),
        loading_applied: false,
    }
}
