//! Shift input model and the per-calculation parameter bundle.
//!
//! A [`ShiftInput`] carries the timing of a single shift as entered upstream;
//! the required fields are optional at the type level because an incomplete
//! form submission must surface as a soft error on the result rather than a
//! hard failure. [`CostingParams`] bundles everything else a calculation
//! needs: the classification, the penalty rows, allowance selections, the
//! public-holiday calendar and the read-only override snapshot.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{Classification, ExpenseAllowance, PenaltyRow, WageAllowance};

/// The timing of a single work shift.
///
/// # Example
///
/// ```
/// use shiftcost::models::ShiftInput;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let shift = ShiftInput {
///     date: NaiveDate::from_ymd_opt(2025, 1, 9),
///     start_time: NaiveTime::from_hms_opt(17, 0, 0),
///     duration_hours: Some(Decimal::new(4, 0)),
///     break_minutes: Decimal::ZERO,
///     shift_kms: None,
/// };
/// assert!(shift.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftInput {
    /// The calendar date the shift starts on.
    pub date: Option<NaiveDate>,
    /// The time of day the shift starts.
    pub start_time: Option<NaiveTime>,
    /// The rostered duration in hours (break inclusive).
    pub duration_hours: Option<Decimal>,
    /// Unpaid break minutes, subtracted from the front of the shift.
    #[serde(default)]
    pub break_minutes: Decimal,
    /// Kilometres travelled during the shift, for per-km expense allowances.
    pub shift_kms: Option<Decimal>,
}

impl ShiftInput {
    /// Validates the required fields and returns the shift start instant
    /// and duration.
    ///
    /// # Errors
    ///
    /// - [`EngineError::MissingField`] if date, start time or duration is
    ///   absent.
    /// - [`EngineError::NonPositiveDuration`] if the duration is zero or
    ///   negative.
    pub fn validate(&self) -> EngineResult<(NaiveDateTime, Decimal)> {
        let date = self.date.ok_or_else(|| EngineError::MissingField {
            field: "date".to_string(),
        })?;
        let start_time = self.start_time.ok_or_else(|| EngineError::MissingField {
            field: "start_time".to_string(),
        })?;
        let duration = self
            .duration_hours
            .ok_or_else(|| EngineError::MissingField {
                field: "duration_hours".to_string(),
            })?;
        if duration <= Decimal::ZERO {
            return Err(EngineError::NonPositiveDuration {
                hours: duration.to_string(),
            });
        }
        Ok((NaiveDateTime::new(date, start_time), duration))
    }
}

/// A read-only snapshot of user-entered rate corrections.
///
/// Classification-rate overrides are keyed by
/// `(award_code, classification, rate_type)` and penalty-rate overrides by
/// `(award_code, classification, penalty_description)`. The engine consults
/// the snapshot at map-build time only and never writes to it, so a single
/// snapshot can be shared across concurrent calculations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateOverrides {
    /// Classification-rate overrides, keyed by composite string.
    classification_rates: HashMap<String, Decimal>,
    /// Penalty-rate overrides, keyed by composite string.
    penalty_rates: HashMap<String, Decimal>,
}

impl RateOverrides {
    fn key(a: &str, b: &str, c: &str) -> String {
        format!("{}|{}|{}", a, b, c)
    }

    /// Records a classification-rate override.
    pub fn set_classification_rate(
        &mut self,
        award_code: &str,
        classification: &str,
        rate_type: &str,
        value: Decimal,
    ) {
        self.classification_rates
            .insert(Self::key(award_code, classification, rate_type), value);
    }

    /// Looks up a classification-rate override.
    pub fn classification_rate(
        &self,
        award_code: &str,
        classification: &str,
        rate_type: &str,
    ) -> Option<Decimal> {
        self.classification_rates
            .get(&Self::key(award_code, classification, rate_type))
            .copied()
    }

    /// Records a penalty-rate override.
    pub fn set_penalty_rate(
        &mut self,
        award_code: &str,
        classification: &str,
        penalty_description: &str,
        value: Decimal,
    ) {
        self.penalty_rates.insert(
            Self::key(award_code, classification, penalty_description),
            value,
        );
    }

    /// Looks up a penalty-rate override.
    pub fn penalty_rate(
        &self,
        award_code: &str,
        classification: &str,
        penalty_description: &str,
    ) -> Option<Decimal> {
        self.penalty_rates
            .get(&Self::key(award_code, classification, penalty_description))
            .copied()
    }

    /// Returns true if the snapshot holds no overrides at all.
    pub fn is_empty(&self) -> bool {
        self.classification_rates.is_empty() && self.penalty_rates.is_empty()
    }
}

/// Everything a shift-cost calculation needs besides the shift timing.
///
/// Built fresh by the caller per award/employment-type/classification
/// selection; the engine reads it and never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostingParams {
    /// The classification being priced. Absent ⇒ soft error on the result.
    pub classification: Option<Classification>,
    /// Candidate penalty rows for the classification.
    #[serde(default)]
    pub penalty_rows: Vec<PenaltyRow>,
    /// Wage allowances selected for the shift.
    #[serde(default)]
    pub wage_allowances: Vec<WageAllowance>,
    /// Expense allowances selected for the shift.
    #[serde(default)]
    pub expense_allowances: Vec<ExpenseAllowance>,
    /// Public-holiday dates to treat as holiday day-type.
    #[serde(default)]
    pub public_holidays: Vec<NaiveDate>,
    /// Casual loading percentage. `None` applies the 25% default; an
    /// explicit `Some(0)` is honored and never replaced.
    pub casual_loading_percent: Option<Decimal>,
    /// Whether the ordinary rate is derived with loading applied.
    #[serde(default)]
    pub use_loading_for_rate: bool,
    /// Read-only override snapshot consulted at map-build time.
    #[serde(default)]
    pub overrides: RateOverrides,
}
