//! Result models for shift and roster cost calculations.
//!
//! This module contains the [`ShiftResult`] and [`RosterResult`] types that
//! capture all outputs from a costing calculation: priced segments, allowance
//! line items, totals, data-quality warnings and the soft error field.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{PenaltyKey, ShiftInput};

/// The day type of a shift or time increment, in classification priority
/// order: public holiday beats Sunday beats Saturday beats weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday.
    Weekday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
    /// A date present in the public-holiday calendar.
    PublicHoliday,
}

impl DayType {
    /// Determines the day type for a date.
    ///
    /// # Example
    ///
    /// ```
    /// use shiftcost::models::DayType;
    /// use chrono::NaiveDate;
    ///
    /// // 2025-01-11 is a Saturday
    /// let date = NaiveDate::from_ymd_opt(2025, 1, 11).unwrap();
    /// assert_eq!(DayType::of(date, false), DayType::Saturday);
    /// assert_eq!(DayType::of(date, true), DayType::PublicHoliday);
    /// ```
    pub fn of(date: NaiveDate, is_public_holiday: bool) -> DayType {
        if is_public_holiday {
            return DayType::PublicHoliday;
        }
        match date.weekday() {
            Weekday::Sat => DayType::Saturday,
            Weekday::Sun => DayType::Sunday,
            _ => DayType::Weekday,
        }
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
            DayType::PublicHoliday => write!(f, "Public holiday"),
        }
    }
}

/// The overtime tier a time increment falls into.
///
/// Overtime accrues per calendar day on weekday categories only: once 9
/// cumulative hours are worked that day, the next 3 hours pay ×1.5 and hours
/// beyond that pay ×2.0 on top of the time-of-day rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvertimeTier {
    /// Not overtime.
    None,
    /// The first 3 hours of overtime (×1.5).
    FirstThree,
    /// Overtime beyond the first 3 hours (×2.0).
    BeyondThree,
}

impl OvertimeTier {
    /// Returns the pay multiplier for this tier.
    pub fn multiplier(&self) -> Decimal {
        match self {
            OvertimeTier::None => Decimal::ONE,
            OvertimeTier::FirstThree => Decimal::new(150, 2),
            OvertimeTier::BeyondThree => Decimal::new(200, 2),
        }
    }

    /// Returns the description suffix appended to a segment's line item.
    pub fn description_suffix(&self) -> &'static str {
        match self {
            OvertimeTier::None => "",
            OvertimeTier::FirstThree => " (overtime - first 3 hours)",
            OvertimeTier::BeyondThree => " (overtime - beyond 3 hours)",
        }
    }
}

/// A priced span of shift time at one constant rate.
///
/// Segments are keyed uniquely per shift by `(penalty_key, overtime)`;
/// increments sharing a key merge into one segment with summed hours, even
/// when they are not contiguous in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Human-readable line-item description.
    pub description: String,
    /// The canonical penalty category this segment was priced under.
    pub penalty_key: PenaltyKey,
    /// The overtime tier applied on top of the category rate.
    pub overtime: OvertimeTier,
    /// Hours covered by this segment.
    pub hours: Decimal,
    /// The dollars-per-hour rate, rounded to cents.
    pub rate: Decimal,
    /// The segment cost: `round(hours × rate, 2)`.
    pub cost: Decimal,
}

/// A priced allowance line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllowanceLine {
    /// The allowance name.
    pub allowance: String,
    /// The number of units priced (hours, kilometres, or 1 for flat).
    pub units: Decimal,
    /// The dollar rate per unit, rounded to cents.
    pub rate: Decimal,
    /// The line cost, rounded to cents.
    pub cost: Decimal,
}

/// The complete result of costing a single shift.
///
/// The engine never fails hard for malformed-but-plausible input: missing
/// required fields surface here as the `error` string with empty segments
/// and zero totals, and data-quality discrepancies surface as `warnings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftResult {
    /// The shift date, when it was supplied.
    pub shift_date: Option<NaiveDate>,
    /// The day type of the shift date, when it was supplied.
    pub day_type: Option<DayType>,
    /// The ordinary hourly rate the calculation was based on.
    pub ordinary_hourly_rate: Decimal,
    /// Priced segments in first-occurrence order.
    pub segments: Vec<Segment>,
    /// Priced allowance line items.
    pub allowances: Vec<AllowanceLine>,
    /// Paid hours, after minimum-engagement padding where it applies.
    pub total_hours: Decimal,
    /// Total cost: segment costs plus allowance costs, rounded to cents.
    pub total_cost: Decimal,
    /// Data-quality and rule-application warnings, in order of discovery.
    pub warnings: Vec<String>,
    /// Set when required input was missing; callers must check this field.
    pub error: Option<String>,
}

impl ShiftResult {
    /// Creates an empty zero-cost result.
    pub fn empty() -> ShiftResult {
        ShiftResult {
            shift_date: None,
            day_type: None,
            ordinary_hourly_rate: Decimal::ZERO,
            segments: Vec::new(),
            allowances: Vec::new(),
            total_hours: Decimal::ZERO,
            total_cost: Decimal::ZERO,
            warnings: Vec::new(),
            error: None,
        }
    }

    /// Creates an empty result carrying a descriptive error string.
    pub fn with_error(error: String) -> ShiftResult {
        ShiftResult {
            error: Some(error),
            ..ShiftResult::empty()
        }
    }
}

/// One line of a roster result: the input shift and its costing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterLine {
    /// The shift as it was supplied.
    pub shift: ShiftInput,
    /// The costing result for that shift.
    pub result: ShiftResult,
}

/// The aggregated result of costing a roster of shifts.
///
/// Totals are exact sums of the per-shift values (each already rounded);
/// warnings concatenate in shift order. A shift that could not be priced
/// contributes an errored zero-cost line and the roster continues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterResult {
    /// Per-shift lines in input order.
    pub shifts: Vec<RosterLine>,
    /// Sum of per-shift total costs.
    pub total_cost: Decimal,
    /// Sum of per-shift total hours.
    pub total_hours: Decimal,
    /// All per-shift warnings, concatenated in shift order.
    pub warnings: Vec<String>,
}
