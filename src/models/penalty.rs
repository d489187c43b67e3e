//! Penalty rate rows and the canonical penalty category keys.
//!
//! A [`PenaltyRow`] is one candidate penalty entry as supplied by the
//! reference-data collaborator; its free-text description is normalized to a
//! [`PenaltyKey`] before any pricing happens. The key set is closed: rows
//! whose descriptions match no key cannot be priced by this engine.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::EngineError;

/// The unit a penalty row's rate is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateUnit {
    /// A percentage of the ordinary hourly rate.
    Percentage,
    /// A flat dollars-per-hour amount.
    Dollar,
}

/// One candidate penalty entry for an award/classification/employment-type.
///
/// Multiple rows may exist per canonical category (e.g., tiered Saturday
/// entries); the resolver collapses them to one rate per category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenaltyRow {
    /// The Fair Work award code this row belongs to.
    pub award_code: String,
    /// The classification name this row applies to.
    pub classification: String,
    /// The classification level this row applies to.
    pub classification_level: u32,
    /// The free-text description of the penalty (normalized to a key).
    pub penalty_description: String,
    /// The employment-type code ("CA", "FT", "AD", ...).
    pub employee_rate_type_code: String,
    /// The rate value, in the unit given by `penalty_rate_unit`.
    pub rate: Option<Decimal>,
    /// The unit of `rate`.
    pub penalty_rate_unit: RateUnit,
    /// An optional pre-computed dollars-per-hour value for this row.
    pub penalty_calculated_value: Option<Decimal>,
    /// A classification-level rate correction baked into the row upstream.
    /// Treated as an override source: it beats any CSV-derived value.
    #[serde(default)]
    pub override_value: Option<Decimal>,
}

/// A canonical penalty category key.
///
/// Free-text penalty descriptions are normalized to this closed set by
/// [`crate::calculation::normalize_description`]. The wire spelling of each
/// key is its `Display` form (e.g. `saturday_first_3`, `publicholiday`).
///
/// # Example
///
/// ```
/// use shiftcost::models::PenaltyKey;
///
/// assert_eq!(PenaltyKey::SaturdayFirst(3).to_string(), "saturday_first_3");
/// assert_eq!("sunday".parse::<PenaltyKey>().unwrap(), PenaltyKey::Sunday);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PenaltyKey {
    /// Ordinary weekday hours (07:00–18:00).
    Ordinary,
    /// Weekday hours before 07:00 or after 18:00.
    WeekdayEarlyLate,
    /// Friday hours after 18:00.
    FridayLate,
    /// Saturday hours, flat rate.
    Saturday,
    /// Saturday ordinary hours, flat rate.
    SaturdayOrdinary,
    /// Tiered Saturday rate covering the first N hours of the shift.
    SaturdayFirst(u32),
    /// Tiered Saturday rate covering hours after the first N.
    SaturdayAfter(u32),
    /// Sunday hours.
    Sunday,
    /// Public holiday hours.
    PublicHoliday,
}

impl PenaltyKey {
    /// Returns true for categories priced directly from the rate map,
    /// which are never subject to the weekday overtime multiplier.
    pub fn is_direct_rate(&self) -> bool {
        matches!(
            self,
            PenaltyKey::Saturday
                | PenaltyKey::SaturdayOrdinary
                | PenaltyKey::SaturdayFirst(_)
                | PenaltyKey::SaturdayAfter(_)
                | PenaltyKey::Sunday
                | PenaltyKey::PublicHoliday
        )
    }

    /// Returns true for the tiered Saturday categories.
    pub fn is_tiered_saturday(&self) -> bool {
        matches!(
            self,
            PenaltyKey::SaturdayFirst(_) | PenaltyKey::SaturdayAfter(_)
        )
    }

    /// Returns the human-readable line-item description for this category.
    pub fn description(&self) -> String {
        match self {
            PenaltyKey::Ordinary => "Ordinary hours".to_string(),
            PenaltyKey::WeekdayEarlyLate => "Weekday early/late".to_string(),
            PenaltyKey::FridayLate => "Friday after 6pm".to_string(),
            PenaltyKey::Saturday | PenaltyKey::SaturdayOrdinary => {
                "Saturday - ordinary hours".to_string()
            }
            PenaltyKey::SaturdayFirst(n) => format!("Saturday - first {} hours", n),
            PenaltyKey::SaturdayAfter(n) => format!("Saturday - after {} hours", n),
            PenaltyKey::Sunday => "Sunday - ordinary hours".to_string(),
            PenaltyKey::PublicHoliday => "Public holiday".to_string(),
        }
    }
}

impl fmt::Display for PenaltyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PenaltyKey::Ordinary => write!(f, "ordinary"),
            PenaltyKey::WeekdayEarlyLate => write!(f, "weekday_early_late"),
            PenaltyKey::FridayLate => write!(f, "friday_late"),
            PenaltyKey::Saturday => write!(f, "saturday"),
            PenaltyKey::SaturdayOrdinary => write!(f, "saturday_ordinary"),
            PenaltyKey::SaturdayFirst(n) => write!(f, "saturday_first_{}", n),
            PenaltyKey::SaturdayAfter(n) => write!(f, "saturday_after_{}", n),
            PenaltyKey::Sunday => write!(f, "sunday"),
            PenaltyKey::PublicHoliday => write!(f, "publicholiday"),
        }
    }
}

impl FromStr for PenaltyKey {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || EngineError::UnknownCategory { key: s.to_string() };

        if let Some(n) = s.strip_prefix("saturday_first_") {
            return n.parse().map(PenaltyKey::SaturdayFirst).map_err(|_| unknown());
        }
        if let Some(n) = s.strip_prefix("saturday_after_") {
            return n.parse().map(PenaltyKey::SaturdayAfter).map_err(|_| unknown());
        }
        match s {
            "ordinary" => Ok(PenaltyKey::Ordinary),
            "weekday_early_late" => Ok(PenaltyKey::WeekdayEarlyLate),
            "friday_late" => Ok(PenaltyKey::FridayLate),
            "saturday" => Ok(PenaltyKey::Saturday),
            "saturday_ordinary" => Ok(PenaltyKey::SaturdayOrdinary),
            "sunday" => Ok(PenaltyKey::Sunday),
            "publicholiday" => Ok(PenaltyKey::PublicHoliday),
            _ => Err(unknown()),
        }
    }
}

impl Serialize for PenaltyKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PenaltyKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
