//! Shift timeline segmentation.
//!
//! Walks a shift from start to end in fixed 6-minute increments, consuming
//! the unpaid break from the front, classifying each increment by day type,
//! time of day and overtime state, and merging increments that share a
//! (category, overtime tier) key into priced segments. Increments sharing a
//! key merge even when they are not contiguous in time, so separate
//! overtime stretches across a multi-day shift report as one line.
//!
//! The overtime multiplier compounds on the time-of-day rate (early/late
//! ×1.10 then ×1.5/×2.0) and never applies to Saturday, Sunday or public
//! holiday categories, whose rates come straight from the rate map.
//! TODO: confirm the compounding with a domain expert against the award
//! clause; it is kept as-is until then.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::{OvertimeTier, PenaltyKey, Segment};
use crate::rules::{
    DAILY_ORDINARY_HOURS, EARLY_BOUNDARY_HOUR, LATE_BOUNDARY_HOUR, OVERTIME_FIRST_TIER_HOURS,
    SEGMENT_STEP_SECONDS,
};

use super::resolver::PenaltyRateMap;
use super::rounding::{round_cents, round_half_up};

const SECONDS_PER_HOUR: i64 = 3600;

/// The outcome of walking one shift's timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentationOutcome {
    /// Merged priced segments in first-occurrence order.
    pub segments: Vec<Segment>,
    /// Paid hours after the break deduction (before any padding).
    pub paid_hours: Decimal,
    /// Warnings raised while walking or post-processing the shift.
    pub warnings: Vec<String>,
}

impl SegmentationOutcome {
    fn empty() -> SegmentationOutcome {
        SegmentationOutcome {
            segments: Vec::new(),
            paid_hours: Decimal::ZERO,
            warnings: Vec::new(),
        }
    }
}

/// Walks a shift and returns its merged cost segments.
///
/// The unpaid break is not positioned within the shift; it is simply
/// subtracted from the front of the walked duration. An end at or before
/// the start, or a break consuming the whole duration, yields an empty
/// outcome with zero hours (a valid no-op shift, not an error).
///
/// # Arguments
///
/// * `start` - The shift start instant
/// * `end` - The shift end instant (may be past midnight)
/// * `break_minutes` - Unpaid break minutes
/// * `public_holidays` - Dates to classify as public holiday
/// * `rate_map` - The resolved category rates
/// * `ordinary_hourly` - Fallback rate for categories absent from the map
pub fn segment_shift(
    start: NaiveDateTime,
    end: NaiveDateTime,
    break_minutes: Decimal,
    public_holidays: &[NaiveDate],
    rate_map: &PenaltyRateMap,
    ordinary_hourly: Decimal,
) -> SegmentationOutcome {
    let total_seconds = (end - start).num_seconds();
    if total_seconds <= 0 {
        return SegmentationOutcome::empty();
    }

    let break_seconds = round_half_up(break_minutes * Decimal::new(60, 0), 0)
        .to_i64()
        .unwrap_or(0)
        .max(0);
    let paid_seconds = (total_seconds - break_seconds).max(0);
    if paid_seconds == 0 {
        return SegmentationOutcome::empty();
    }

    // Accumulate worked seconds per (category, overtime tier) in
    // first-occurrence order so output is deterministic.
    let mut accumulator: Vec<(PenaltyKey, OvertimeTier, i64)> = Vec::new();
    let mut daily_worked: HashMap<NaiveDate, i64> = HashMap::new();
    let mut shift_worked_seconds: i64 = 0;
    let mut break_remaining = break_seconds;
    let mut elapsed: i64 = 0;

    while elapsed < total_seconds {
        let step = SEGMENT_STEP_SECONDS.min(total_seconds - elapsed);
        let consumed_break = step.min(break_remaining);
        break_remaining -= consumed_break;
        let worked = step - consumed_break;

        if worked > 0 {
            let cursor = start + Duration::seconds(elapsed + consumed_break);
            let date = cursor.date();
            let is_holiday = public_holidays.contains(&date);
            let worked_today = *daily_worked.get(&date).unwrap_or(&0);

            let key = classify_moment(cursor, is_holiday, rate_map, shift_worked_seconds);
            let tier = overtime_tier(cursor.weekday(), is_holiday, key, worked_today);

            merge_increment(&mut accumulator, key, tier, worked);
            *daily_worked.entry(date).or_insert(0) += worked;
            shift_worked_seconds += worked;
        }

        elapsed += step;
    }

    let segments = accumulator
        .into_iter()
        .map(|(key, tier, seconds)| {
            let hours = Decimal::new(seconds, 0) / Decimal::new(SECONDS_PER_HOUR, 0);
            let base_rate = rate_map.get(key).unwrap_or(ordinary_hourly);
            let rate = round_cents(base_rate * tier.multiplier());
            let cost = round_cents(hours * rate);
            Segment {
                description: format!("{}{}", key.description(), tier.description_suffix()),
                penalty_key: key,
                overtime: tier,
                hours,
                rate,
                cost,
            }
        })
        .collect();

    SegmentationOutcome {
        segments,
        paid_hours: Decimal::new(paid_seconds, 0) / Decimal::new(SECONDS_PER_HOUR, 0),
        warnings: Vec::new(),
    }
}

/// Classifies one instant by day-type priority: public holiday beats
/// Sunday beats Saturday beats weekday time-of-day.
fn classify_moment(
    cursor: NaiveDateTime,
    is_holiday: bool,
    rate_map: &PenaltyRateMap,
    shift_worked_seconds: i64,
) -> PenaltyKey {
    if is_holiday {
        return PenaltyKey::PublicHoliday;
    }
    match cursor.weekday() {
        Weekday::Sun => PenaltyKey::Sunday,
        Weekday::Sat => saturday_category(rate_map, shift_worked_seconds),
        weekday => {
            let time = cursor.time();
            let early = NaiveTime::from_hms_opt(EARLY_BOUNDARY_HOUR, 0, 0).expect("valid time");
            let late = NaiveTime::from_hms_opt(LATE_BOUNDARY_HOUR, 0, 0).expect("valid time");
            if time < early {
                PenaltyKey::WeekdayEarlyLate
            } else if time < late {
                PenaltyKey::Ordinary
            } else if weekday == Weekday::Fri && rate_map.contains(PenaltyKey::FridayLate) {
                PenaltyKey::FridayLate
            } else {
                PenaltyKey::WeekdayEarlyLate
            }
        }
    }
}

/// Picks the Saturday category by priority: the flat ordinary-hours rate,
/// then the flat rate, then the lowest-capacity unexhausted first-hours
/// tier (capacity compared against hours already worked this shift), then
/// the after-hours tier, and finally the ordinary fallback.
fn saturday_category(rate_map: &PenaltyRateMap, shift_worked_seconds: i64) -> PenaltyKey {
    if rate_map.contains(PenaltyKey::SaturdayOrdinary) {
        return PenaltyKey::SaturdayOrdinary;
    }
    if rate_map.contains(PenaltyKey::Saturday) {
        return PenaltyKey::Saturday;
    }
    for n in rate_map.saturday_first_tiers() {
        if shift_worked_seconds < (n as i64) * SECONDS_PER_HOUR {
            return PenaltyKey::SaturdayFirst(n);
        }
    }
    if let Some(n) = rate_map.saturday_after_tiers().last() {
        return PenaltyKey::SaturdayAfter(*n);
    }
    PenaltyKey::Ordinary
}

/// Determines the overtime tier for a weekday increment. Overtime accrues
/// per calendar day and only on weekday categories; weekend and public
/// holiday rates are taken directly from the rate map.
fn overtime_tier(
    weekday: Weekday,
    is_holiday: bool,
    key: PenaltyKey,
    worked_today_seconds: i64,
) -> OvertimeTier {
    if is_holiday || key.is_direct_rate() {
        return OvertimeTier::None;
    }
    if matches!(weekday, Weekday::Sat | Weekday::Sun) {
        return OvertimeTier::None;
    }
    let threshold = DAILY_ORDINARY_HOURS * SECONDS_PER_HOUR;
    if worked_today_seconds < threshold {
        return OvertimeTier::None;
    }
    let overtime_seconds = worked_today_seconds - threshold;
    if overtime_seconds < OVERTIME_FIRST_TIER_HOURS * SECONDS_PER_HOUR {
        OvertimeTier::FirstThree
    } else {
        OvertimeTier::BeyondThree
    }
}

fn merge_increment(
    accumulator: &mut Vec<(PenaltyKey, OvertimeTier, i64)>,
    key: PenaltyKey,
    tier: OvertimeTier,
    seconds: i64,
) {
    for (existing_key, existing_tier, total) in accumulator.iter_mut() {
        if *existing_key == key && *existing_tier == tier {
            *total += seconds;
            return;
        }
    }
    accumulator.push((key, tier, seconds));
}
