//! Casual minimum-engagement padding.
//!
//! A casual worker is paid for at least 3 hours even when the rostered
//! shift is shorter. The padding is priced by the day-type of the shift's
//! start instant, not the plain ordinary rate: a short Sunday shift pads at
//! the Sunday rate.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use rust_decimal::Decimal;

use crate::models::{OvertimeTier, PenaltyKey, Segment};
use crate::rules::MINIMUM_ENGAGEMENT_HOURS;

use super::resolver::PenaltyRateMap;
use super::rounding::round_cents;
use super::segmentation::SegmentationOutcome;

/// Applies the casual minimum-engagement rule to a walked shift.
///
/// When the raw paid hours are positive but under 3, a padding segment for
/// the shortfall is appended at the start instant's day-type rate, a
/// warning naming the actual worked hours is emitted, and the reported
/// total hours become 3. A zero-hour shift stays the empty no-op result.
///
/// Returns the total hours to report to the caller.
pub fn apply_minimum_engagement(
    outcome: &mut SegmentationOutcome,
    start: NaiveDateTime,
    public_holidays: &[NaiveDate],
    rate_map: &PenaltyRateMap,
    ordinary_hourly: Decimal,
) -> Decimal {
    let raw_hours = outcome.paid_hours;
    if raw_hours <= Decimal::ZERO || raw_hours >= MINIMUM_ENGAGEMENT_HOURS {
        return raw_hours;
    }

    let shortfall = MINIMUM_ENGAGEMENT_HOURS - raw_hours;
    let is_holiday = public_holidays.contains(&start.date());
    let key = padding_category(start.date(), is_holiday, rate_map);
    let rate = round_cents(rate_map.get(key).unwrap_or(ordinary_hourly));
    let cost = round_cents(shortfall * rate);

    outcome.segments.push(Segment {
        description: format!("Minimum engagement padding ({})", padding_label(key)),
        penalty_key: key,
        overtime: OvertimeTier::None,
        hours: shortfall,
        rate,
        cost,
    });
    outcome.warnings.push(format!(
        "Minimum casual engagement of 3 hours applied (actual hours: {:.2})",
        raw_hours
    ));

    MINIMUM_ENGAGEMENT_HOURS
}

/// Picks the padding category by day-type priority: public holiday, then
/// Sunday, then the flat Saturday category, then weekday ordinary.
fn padding_category(date: NaiveDate, is_holiday: bool, rate_map: &PenaltyRateMap) -> PenaltyKey {
    if is_holiday {
        return PenaltyKey::PublicHoliday;
    }
    match date.weekday() {
        Weekday::Sun => PenaltyKey::Sunday,
        Weekday::Sat => {
            if rate_map.contains(PenaltyKey::SaturdayOrdinary) {
                PenaltyKey::SaturdayOrdinary
            } else if rate_map.contains(PenaltyKey::Saturday) {
                PenaltyKey::Saturday
            } else {
                PenaltyKey::Ordinary
            }
        }
        _ => PenaltyKey::Ordinary,
    }
}

fn padding_label(key: PenaltyKey) -> &'static str {
    match key {
        PenaltyKey::Sunday => "Sunday rate",
        PenaltyKey::Saturday | PenaltyKey::SaturdayOrdinary => "Saturday rate",
        PenaltyKey::PublicHoliday => "Public holiday rate",
        _ => "Weekday rate",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::resolver::resolve_penalty_rates;
    use crate::calculation::segmentation::segment_shift;
    use crate::models::{Classification, PenaltyRow, RateOverrides, RateType, RateUnit};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn reference_map() -> PenaltyRateMap {
        let classification = Classification {
            award_code: "MA000004".to_string(),
            employee_rate_type_code: "CA".to_string(),
            classification: "Retail Employee Level 1".to_string(),
            classification_level: 1,
            base_rate: Some(dec("1008.90")),
            base_rate_type: Some(RateType::Weekly),
            calculated_rate: None,
            calculated_rate_type: None,
        };
        let row = |description: &str, percent: &str| PenaltyRow {
            award_code: "MA000004".to_string(),
            classification: "Retail Employee Level 1".to_string(),
            classification_level: 1,
            penalty_description: description.to_string(),
            employee_rate_type_code: "CA".to_string(),
            rate: Some(dec(percent)),
            penalty_rate_unit: RateUnit::Percentage,
            penalty_calculated_value: None,
            override_value: None,
        };
        resolve_penalty_rates(
            &[
                row("Ordinary hours", "100"),
                row("Saturday - ordinary hours", "125"),
                row("Sunday", "150"),
                row("Public holiday", "225"),
            ],
            dec("26.55"),
            &classification,
            false,
            &RateOverrides::default(),
        )
    }

    fn walk(date: &str, start: &str, end: &str) -> (SegmentationOutcome, NaiveDateTime) {
        let start_dt = make_datetime(date, start);
        let outcome = segment_shift(
            start_dt,
            make_datetime(date, end),
            Decimal::ZERO,
            &[],
            &reference_map(),
            dec("26.55"),
        );
        (outcome, start_dt)
    }

    /// ME-001: a 2-hour Sunday shift pads to 3 hours at the Sunday rate
    #[test]
    fn test_sunday_shift_pads_at_sunday_rate() {
        // 2025-01-12 is a Sunday.
        let (mut outcome, start) = walk("2025-01-12", "10:00:00", "12:00:00");
        let map = reference_map();

        let total = apply_minimum_engagement(&mut outcome, start, &[], &map, dec("26.55"));

        assert_eq!(total, dec("3"));
        assert_eq!(outcome.segments.len(), 2);

        let padding = &outcome.segments[1];
        assert_eq!(padding.description, "Minimum engagement padding (Sunday rate)");
        assert_eq!(padding.penalty_key, PenaltyKey::Sunday);
        assert_eq!(padding.hours, dec("1"));
        assert_eq!(padding.rate, dec("39.83"));
        assert_eq!(padding.cost, dec("39.83"));

        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(
            outcome.warnings[0],
            "Minimum casual engagement of 3 hours applied (actual hours: 2.00)"
        );

        let total_cost: Decimal = outcome.segments.iter().map(|s| s.cost).sum();
        assert_eq!(round_cents(total_cost), dec("119.49"));
    }

    /// ME-002: exactly 3 hours is not padded
    #[test]
    fn test_exactly_three_hours_untouched() {
        let (mut outcome, start) = walk("2025-01-12", "10:00:00", "13:00:00");
        let map = reference_map();

        let total = apply_minimum_engagement(&mut outcome, start, &[], &map, dec("26.55"));

        assert_eq!(total, dec("3"));
        assert_eq!(outcome.segments.len(), 1);
        assert!(outcome.warnings.is_empty());
    }

    /// ME-003: longer shifts are not padded
    #[test]
    fn test_longer_shift_untouched() {
        let (mut outcome, start) = walk("2025-01-12", "10:00:00", "15:00:00");
        let map = reference_map();

        let total = apply_minimum_engagement(&mut outcome, start, &[], &map, dec("26.55"));

        assert_eq!(total, dec("5"));
        assert!(outcome.warnings.is_empty());
    }

    /// ME-004: a zero-hour shift stays the empty no-op result
    #[test]
    fn test_zero_hours_not_padded() {
        let (mut outcome, start) = walk("2025-01-12", "10:00:00", "10:00:00");
        let map = reference_map();

        let total = apply_minimum_engagement(&mut outcome, start, &[], &map, dec("26.55"));

        assert_eq!(total, Decimal::ZERO);
        assert!(outcome.segments.is_empty());
        assert!(outcome.warnings.is_empty());
    }

    /// ME-005: Saturday padding uses the flat Saturday rate
    #[test]
    fn test_saturday_padding_rate() {
        // 2025-01-11 is a Saturday.
        let (mut outcome, start) = walk("2025-01-11", "09:00:00", "11:00:00");
        let map = reference_map();

        apply_minimum_engagement(&mut outcome, start, &[], &map, dec("26.55"));

        let padding = &outcome.segments[1];
        assert_eq!(padding.description, "Minimum engagement padding (Saturday rate)");
        assert_eq!(padding.rate, dec("33.19"));

        // 2h worked + 1h padding at 33.19 = 99.57.
        let total_cost: Decimal = outcome.segments.iter().map(|s| s.cost).sum();
        assert_eq!(round_cents(total_cost), dec("99.57"));
    }

    /// ME-006: public holiday padding uses the holiday rate
    #[test]
    fn test_public_holiday_padding_rate() {
        let start = make_datetime("2025-01-06", "10:00:00");
        let holiday = start.date();
        let map = reference_map();
        let mut outcome = segment_shift(
            start,
            make_datetime("2025-01-06", "12:00:00"),
            Decimal::ZERO,
            &[holiday],
            &map,
            dec("26.55"),
        );

        apply_minimum_engagement(&mut outcome, start, &[holiday], &map, dec("26.55"));

        let padding = &outcome.segments[1];
        assert_eq!(
            padding.description,
            "Minimum engagement padding (Public holiday rate)"
        );
        assert_eq!(padding.rate, dec("59.74"));
    }

    /// ME-007: a short weekday evening shift pads at the weekday ordinary
    /// rate, not the early/late rate
    #[test]
    fn test_weekday_evening_padding_uses_ordinary_rate() {
        // 2025-01-09 is a Thursday; the worked hours are early/late but
        // the padding is priced by day-type, which is weekday ordinary.
        let (mut outcome, start) = walk("2025-01-09", "19:00:00", "21:00:00");
        let map = reference_map();

        apply_minimum_engagement(&mut outcome, start, &[], &map, dec("26.55"));

        let padding = &outcome.segments[1];
        assert_eq!(padding.description, "Minimum engagement padding (Weekday rate)");
        assert_eq!(padding.penalty_key, PenaltyKey::Ordinary);
        assert_eq!(padding.rate, dec("26.55"));
    }
}
