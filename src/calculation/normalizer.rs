//! Penalty description normalization.
//!
//! Maps the free-text penalty descriptions found in source rate rows onto
//! the closed set of canonical [`PenaltyKey`] categories. The matching is
//! inherently fragile pattern matching over natural-language labels from an
//! external data source, so it lives here as an isolated pure function:
//! future label variants are added to this module without touching any
//! pricing logic. A description that matches no rule is "not applicable",
//! never an error.

use crate::models::PenaltyKey;

const WEEKDAY_NAMES: [&str; 5] = ["monday", "tuesday", "wednesday", "thursday", "friday"];

/// Normalizes a free-text penalty description to a canonical category.
///
/// Rules are ordered and the first match wins; matching is
/// case-insensitive. Returns `None` when no rule matches, which excludes
/// the row from pricing.
///
/// # Example
///
/// ```
/// use shiftcost::calculation::normalize_description;
/// use shiftcost::models::PenaltyKey;
///
/// assert_eq!(
///     normalize_description("Saturday - first 3 hours"),
///     Some(PenaltyKey::SaturdayFirst(3))
/// );
/// assert_eq!(
///     normalize_description("Friday after 6pm penalty"),
///     Some(PenaltyKey::FridayLate)
/// );
/// assert_eq!(normalize_description("Annual leave loading"), None);
/// ```
pub fn normalize_description(description: &str) -> Option<PenaltyKey> {
    let text = description.to_lowercase();

    if text.contains("saturday") {
        if text.contains("first") && text.contains("hour") {
            if let Some(n) = first_number(&text) {
                return Some(PenaltyKey::SaturdayFirst(n));
            }
        }
        if text.contains("after") && text.contains("hour") {
            if let Some(n) = first_number(&text) {
                return Some(PenaltyKey::SaturdayAfter(n));
            }
        }
        if text.contains("ordinary hours") {
            return Some(PenaltyKey::SaturdayOrdinary);
        }
        return Some(PenaltyKey::Saturday);
    }

    let early_late = text.contains("early")
        || text.contains("late")
        || text.contains("before 7")
        || text.contains("after 6");
    if early_late {
        if text.contains("friday") && (text.contains("late") || text.contains("after 6")) {
            return Some(PenaltyKey::FridayLate);
        }
        if WEEKDAY_NAMES.iter().any(|day| text.contains(day)) {
            return Some(PenaltyKey::WeekdayEarlyLate);
        }
    }

    if text.contains("ordinary hours") {
        return Some(PenaltyKey::Ordinary);
    }
    if text.contains("public holiday") {
        return Some(PenaltyKey::PublicHoliday);
    }
    if text.contains("sunday") {
        return Some(PenaltyKey::Sunday);
    }

    None
}

/// Extracts the first unsigned integer appearing in the text.
fn first_number(text: &str) -> Option<u32> {
    let mut digits = String::new();
    for c in text.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else if !digits.is_empty() {
            break;
        }
    }
    digits.parse().ok()
}
