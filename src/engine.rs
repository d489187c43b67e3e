//! Top-level shift and roster costing operations.
//!
//! [`calculate_shift_cost`] orchestrates the calculation building blocks for
//! one shift: derive the ordinary rate, resolve the penalty rate map, walk
//! the timeline, apply the casual minimum engagement, and price allowances.
//! [`calculate_roster_cost`] fans out to it per shift and sums results.
//!
//! Both functions are pure given their inputs plus the override snapshot:
//! calling either twice with identical inputs yields identical results, and
//! different shifts may safely be calculated concurrently.

use chrono::Duration;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::debug;

use crate::calculation::{
    apply_minimum_engagement, calculate_expense_allowance, calculate_wage_allowance,
    derive_ordinary_rate, resolve_penalty_rates, round_cents, round_half_up, segment_shift,
};
use crate::error::EngineError;
use crate::models::{CostingParams, DayType, RosterLine, RosterResult, ShiftInput, ShiftResult};

/// The classification-rate override key for the derived hourly rate.
const HOURLY_RATE_TYPE: &str = "hourly";

/// Calculates the cost of a single shift.
///
/// Never fails hard for malformed-but-plausible input: a missing date,
/// start time, duration or classification yields a result with empty
/// segments, zero totals and a descriptive `error` string; a non-positive
/// duration (or a break consuming the whole shift) yields an empty result
/// with no error. Data-quality discrepancies surface as warnings while the
/// engine self-corrects and proceeds.
///
/// # Example
///
/// ```
/// use shiftcost::engine::calculate_shift_cost;
/// use shiftcost::models::{Classification, CostingParams, RateType, ShiftInput};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let params = CostingParams {
///     classification: Some(Classification {
///         award_code: "MA000004".to_string(),
///         employee_rate_type_code: "CA".to_string(),
///         classification: "Retail Employee Level 1".to_string(),
///         classification_level: 1,
///         base_rate: Some(Decimal::from_str("1008.90").unwrap()),
///         base_rate_type: Some(RateType::Weekly),
///         calculated_rate: None,
///         calculated_rate_type: None,
///     }),
///     casual_loading_percent: Some(Decimal::ZERO),
///     ..CostingParams::default()
/// };
/// // 2025-01-09 is a Thursday: 17:00-21:00 splits at the 18:00 boundary.
/// let shift = ShiftInput {
///     date: NaiveDate::from_ymd_opt(2025, 1, 9),
///     start_time: NaiveTime::from_hms_opt(17, 0, 0),
///     duration_hours: Some(Decimal::from_str("4").unwrap()),
///     break_minutes: Decimal::ZERO,
///     shift_kms: None,
/// };
///
/// let result = calculate_shift_cost(&params, &shift);
/// assert_eq!(result.total_cost, Decimal::from_str("114.18").unwrap());
/// ```
pub fn calculate_shift_cost(params: &CostingParams, shift: &ShiftInput) -> ShiftResult {
    let Some(classification) = params.classification.as_ref() else {
        let error = EngineError::MissingField {
            field: "classification".to_string(),
        };
        let mut result = ShiftResult::with_error(error.to_string());
        result.shift_date = shift.date;
        return result;
    };

    let (start, duration_hours) = match shift.validate() {
        Ok(validated) => validated,
        Err(EngineError::NonPositiveDuration { .. }) => {
            // A valid no-op shift, not an error.
            let mut result = ShiftResult::empty();
            result.shift_date = shift.date;
            result.day_type = shift
                .date
                .map(|date| DayType::of(date, params.public_holidays.contains(&date)));
            return result;
        }
        Err(error) => {
            let mut result = ShiftResult::with_error(error.to_string());
            result.shift_date = shift.date;
            return result;
        }
    };

    debug!(date = %start.date(), classification = %classification.classification, "calculating shift cost");

    let override_hourly = params.overrides.classification_rate(
        &classification.award_code,
        &classification.classification,
        HOURLY_RATE_TYPE,
    );
    let derived = derive_ordinary_rate(
        classification,
        params.casual_loading_percent,
        params.use_loading_for_rate,
        override_hourly,
    );

    let rate_map = resolve_penalty_rates(
        &params.penalty_rows,
        derived.ordinary_hourly,
        classification,
        params.use_loading_for_rate && derived.loading_applied,
        &params.overrides,
    );

    let duration_seconds = round_half_up(duration_hours * Decimal::new(3600, 0), 0)
        .to_i64()
        .unwrap_or(0);
    let end = start + Duration::seconds(duration_seconds);

    let mut outcome = segment_shift(
        start,
        end,
        shift.break_minutes,
        &params.public_holidays,
        &rate_map,
        derived.ordinary_hourly,
    );

    let mut total_hours = outcome.paid_hours;
    if classification.is_casual() {
        total_hours = apply_minimum_engagement(
            &mut outcome,
            start,
            &params.public_holidays,
            &rate_map,
            derived.ordinary_hourly,
        );
    }

    let mut allowances = Vec::new();
    for allowance in &params.wage_allowances {
        if let Some(line) = calculate_wage_allowance(allowance, total_hours, derived.ordinary_hourly)
        {
            allowances.push(line);
        }
    }
    for allowance in &params.expense_allowances {
        if let Some(line) = calculate_expense_allowance(allowance, shift.shift_kms) {
            allowances.push(line);
        }
    }

    let segment_total: Decimal = outcome.segments.iter().map(|s| s.cost).sum();
    let allowance_total: Decimal = allowances.iter().map(|a| a.cost).sum();

    let mut warnings = rate_map.warnings().to_vec();
    warnings.extend(outcome.warnings);

    let date = start.date();
    ShiftResult {
        shift_date: Some(date),
        day_type: Some(DayType::of(date, params.public_holidays.contains(&date))),
        ordinary_hourly_rate: derived.ordinary_hourly,
        segments: outcome.segments,
        allowances,
        total_hours,
        total_cost: round_cents(segment_total + allowance_total),
        warnings,
        error: None,
    }
}

/// Calculates the cost of a roster of shifts.
///
/// Each shift is an independent single-shift calculation; totals are exact
/// sums of the per-shift values (each already rounded to cents) and
/// warnings concatenate in shift order. A shift that cannot be priced
/// contributes an errored zero-cost line and the roster continues.
pub fn calculate_roster_cost(params: &CostingParams, shifts: &[ShiftInput]) -> RosterResult {
    let mut lines = Vec::with_capacity(shifts.len());
    let mut total_cost = Decimal::ZERO;
    let mut total_hours = Decimal::ZERO;
    let mut warnings = Vec::new();

    for shift in shifts {
        let result = calculate_shift_cost(params, shift);
        total_cost += result.total_cost;
        total_hours += result.total_hours;
        warnings.extend(result.warnings.iter().cloned());
        lines.push(RosterLine {
            shift: shift.clone(),
            result,
        });
    }

    RosterResult {
        shifts: lines,
        total_cost,
        total_hours,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Classification, RateType};
    use chrono::{NaiveDate, NaiveTime};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn reference_params(loading_percent: &str) -> CostingParams {
        CostingParams {
            classification: Some(Classification {
                award_code: "MA000004".to_string(),
                employee_rate_type_code: "CA".to_string(),
                classification: "Retail Employee Level 1".to_string(),
                classification_level: 1,
                base_rate: Some(dec("1008.90")),
                base_rate_type: Some(RateType::Weekly),
                calculated_rate: None,
                calculated_rate_type: None,
            }),
            casual_loading_percent: Some(dec(loading_percent)),
            ..CostingParams::default()
        }
    }

    fn shift(date: (i32, u32, u32), start: (u32, u32), hours: &str, break_minutes: &str) -> ShiftInput {
        ShiftInput {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2),
            start_time: NaiveTime::from_hms_opt(start.0, start.1, 0),
            duration_hours: Some(dec(hours)),
            break_minutes: dec(break_minutes),
            shift_kms: None,
        }
    }

    /// EN-001: a missing classification yields a soft error
    #[test]
    fn test_missing_classification_soft_error() {
        let params = CostingParams::default();
        let result = calculate_shift_cost(&params, &shift((2025, 1, 9), (17, 0), "4", "0"));

        assert_eq!(
            result.error.as_deref(),
            Some("Missing required field: classification")
        );
        assert!(result.segments.is_empty());
        assert_eq!(result.total_cost, Decimal::ZERO);
    }

    /// EN-002: a missing date yields a soft error naming the field
    #[test]
    fn test_missing_date_soft_error() {
        let params = reference_params("0");
        let mut input = shift((2025, 1, 9), (17, 0), "4", "0");
        input.date = None;

        let result = calculate_shift_cost(&params, &input);

        assert_eq!(result.error.as_deref(), Some("Missing required field: date"));
        assert!(result.segments.is_empty());
    }

    /// EN-003: a non-positive duration is an empty no-op, not an error
    #[test]
    fn test_non_positive_duration_is_noop() {
        let params = reference_params("0");
        let result = calculate_shift_cost(&params, &shift((2025, 1, 9), (17, 0), "0", "0"));

        assert!(result.error.is_none());
        assert!(result.segments.is_empty());
        assert_eq!(result.total_hours, Decimal::ZERO);
        assert_eq!(result.day_type, Some(DayType::Weekday));
    }

    /// EN-004: a break consuming the whole shift is an empty no-op
    #[test]
    fn test_break_consuming_shift_is_noop() {
        let params = reference_params("0");
        let result = calculate_shift_cost(&params, &shift((2025, 1, 9), (17, 0), "1", "60"));

        assert!(result.error.is_none());
        assert!(result.segments.is_empty());
        assert_eq!(result.total_cost, Decimal::ZERO);
        // A zero-hour casual shift is not padded to 3 hours.
        assert_eq!(result.total_hours, Decimal::ZERO);
    }

    /// EN-005: the result reports the derived ordinary rate and day type
    #[test]
    fn test_result_reports_rate_and_day_type() {
        let params = reference_params("25");
        let result = calculate_shift_cost(&params, &shift((2025, 1, 11), (9, 0), "5", "0"));

        assert_eq!(result.ordinary_hourly_rate, dec("33.19"));
        assert_eq!(result.day_type, Some(DayType::Saturday));
        assert_eq!(result.shift_date, NaiveDate::from_ymd_opt(2025, 1, 11));
    }

    /// EN-006: a roster continues past an unpriceable shift
    #[test]
    fn test_roster_continues_past_error() {
        let params = reference_params("0");
        let mut broken = shift((2025, 1, 8), (9, 0), "5", "0");
        broken.start_time = None;
        let shifts = vec![
            shift((2025, 1, 8), (9, 0), "5", "0"),
            broken,
            shift((2025, 1, 11), (9, 0), "5", "0"),
        ];

        let roster = calculate_roster_cost(&params, &shifts);

        assert_eq!(roster.shifts.len(), 3);
        assert!(roster.shifts[1].result.error.is_some());
        assert_eq!(roster.shifts[1].result.total_cost, Decimal::ZERO);
        // Wednesday 5h ordinary (132.75) + Saturday 5h flat (165.95).
        assert_eq!(
            roster.total_cost,
            roster.shifts[0].result.total_cost + roster.shifts[2].result.total_cost
        );
    }

    /// EN-007: roster totals are exact sums of per-shift values
    #[test]
    fn test_roster_totals_sum() {
        let params = reference_params("0");
        let shifts = vec![
            shift((2025, 1, 8), (9, 0), "5", "0"),
            shift((2025, 1, 11), (9, 0), "5", "0"),
        ];

        let roster = calculate_roster_cost(&params, &shifts);

        let cost_sum: Decimal = roster.shifts.iter().map(|l| l.result.total_cost).sum();
        let hours_sum: Decimal = roster.shifts.iter().map(|l| l.result.total_hours).sum();
        assert_eq!(roster.total_cost, cost_sum);
        assert_eq!(roster.total_hours, hours_sum);
    }
}
