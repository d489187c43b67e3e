//! Fixed constants of the award rule set.
//!
//! These values are properties of the rules being modelled, not per-call
//! configuration: the 38-hour standard week, the casual minimum engagement,
//! the early/late time-of-day boundaries, the daily overtime threshold and
//! the expected penalty multipliers used for data-quality validation.

use rust_decimal::Decimal;

use crate::models::PenaltyKey;

/// The standard full-time weekly hours divisor for weekly-to-hourly rates.
pub const STANDARD_WEEKLY_HOURS: Decimal = Decimal::from_parts(38, 0, 0, false, 0);

/// The default casual loading percentage applied when none is supplied.
/// An explicit 0 from the caller is honored and never replaced by this.
pub const DEFAULT_CASUAL_LOADING_PERCENT: Decimal = Decimal::from_parts(25, 0, 0, false, 0);

/// The minimum paid hours for a casual engagement.
pub const MINIMUM_ENGAGEMENT_HOURS: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

/// Weekday hours before this hour attract the early/late rate.
pub const EARLY_BOUNDARY_HOUR: u32 = 7;

/// Weekday hours at or after this hour attract the early/late rate.
pub const LATE_BOUNDARY_HOUR: u32 = 18;

/// Cumulative hours worked in one calendar day before overtime begins.
pub const DAILY_ORDINARY_HOURS: i64 = 9;

/// Hours of overtime paid at ×1.5 before the ×2.0 tier begins.
pub const OVERTIME_FIRST_TIER_HOURS: i64 = 3;

/// The fixed time increment the segmentation walk advances by (6 minutes).
pub const SEGMENT_STEP_SECONDS: i64 = 360;

/// The assumed shift length, in hours, when pricing a percentage-based wage
/// allowance paid per shift or per day. A known approximation of the rule
/// set: the pro-ration ignores the actual shift length.
pub const PER_SHIFT_PERCENT_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Tolerance around an expected multiplier before a resolved penalty rate
/// is considered a transcription error and overridden.
pub const MULTIPLIER_TOLERANCE: Decimal = Decimal::from_parts(2, 0, 0, false, 2);

/// Returns the expected ratio of a category's rate to the ordinary hourly
/// rate, used by the resolver's multiplier validation.
pub fn expected_multiplier(key: PenaltyKey) -> Decimal {
    match key {
        PenaltyKey::Ordinary => Decimal::from_parts(100, 0, 0, false, 2),
        PenaltyKey::WeekdayEarlyLate => Decimal::from_parts(110, 0, 0, false, 2),
        PenaltyKey::FridayLate => Decimal::from_parts(115, 0, 0, false, 2),
        PenaltyKey::Saturday
        | PenaltyKey::SaturdayOrdinary
        | PenaltyKey::SaturdayFirst(_)
        | PenaltyKey::SaturdayAfter(_) => Decimal::from_parts(125, 0, 0, false, 2),
        PenaltyKey::Sunday => Decimal::from_parts(150, 0, 0, false, 2),
        PenaltyKey::PublicHoliday => Decimal::from_parts(225, 0, 0, false, 2),
    }
}
