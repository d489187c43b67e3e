//! Classification model and related types.
//!
//! A classification identifies an award + employment-type + level combination
//! together with its base and pre-calculated rates. Classifications are
//! supplied by the reference-data collaborator already filtered for operative
//! dates; the engine treats them as immutable input.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Employment-type code for casual employees.
pub const CASUAL_EMPLOYMENT_CODE: &str = "CA";

/// Employment-type code meaning "applies to all employment types".
pub const ALL_EMPLOYMENT_TYPES_CODE: &str = "AD";

/// The unit a classification rate is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateType {
    /// A dollars-per-hour rate.
    Hourly,
    /// A dollars-per-week rate (converted via the 38-hour standard week).
    Weekly,
}

/// A classification record for an award/employment-type/level combination.
///
/// # Example
///
/// ```
/// use shiftcost::models::{Classification, RateType};
/// use rust_decimal::Decimal;
///
/// let classification = Classification {
///     award_code: "MA000004".to_string(),
///     employee_rate_type_code: "CA".to_string(),
///     classification: "Retail Employee Level 1".to_string(),
///     classification_level: 1,
///     base_rate: Some(Decimal::new(100890, 2)),
///     base_rate_type: Some(RateType::Weekly),
///     calculated_rate: None,
///     calculated_rate_type: None,
/// };
/// assert!(classification.is_casual());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// The Fair Work award code (e.g., "MA000004").
    pub award_code: String,
    /// The employment-type code ("CA" casual, "FT" full-time, "AD" all types).
    pub employee_rate_type_code: String,
    /// The classification name (e.g., "Retail Employee Level 1").
    pub classification: String,
    /// The classification level within the award.
    pub classification_level: u32,
    /// The base rate, in the unit given by `base_rate_type`.
    pub base_rate: Option<Decimal>,
    /// The unit of `base_rate`.
    pub base_rate_type: Option<RateType>,
    /// A pre-calculated rate, in the unit given by `calculated_rate_type`.
    pub calculated_rate: Option<Decimal>,
    /// The unit of `calculated_rate`.
    pub calculated_rate_type: Option<RateType>,
}

impl Classification {
    /// Returns true if this classification is for casual employment.
    pub fn is_casual(&self) -> bool {
        self.employee_rate_type_code == CASUAL_EMPLOYMENT_CODE
    }

    /// Returns true if the base rate is present and expressed weekly.
    pub fn has_weekly_base(&self) -> bool {
        self.base_rate.is_some() && self.base_rate_type == Some(RateType::Weekly)
    }

    /// Returns true if the calculated rate is present and expressed hourly.
    pub fn has_hourly_calculated(&self) -> bool {
        self.calculated_rate.is_some() && self.calculated_rate_type == Some(RateType::Hourly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn retail_level_1(employment_code: &str) -> Classification {
        Classification {
            award_code: "MA000004".to_string(),
            employee_rate_type_code: employment_code.to_string(),
            classification: "Retail Employee Level 1".to_string(),
            classification_level: 1,
            base_rate: Some(dec("1008.90")),
            base_rate_type: Some(RateType::Weekly),
            calculated_rate: None,
            calculated_rate_type: None,
        }
    }

    #[test]
    fn test_is_casual_for_ca_code() {
        assert!(retail_level_1("CA").is_casual());
    }

    #[test]
    fn test_is_not_casual_for_other_codes() {
        assert!(!retail_level_1("FT").is_casual());
        assert!(!retail_level_1("AD").is_casual());
    }

    #[test]
    fn test_has_weekly_base() {
        let classification = retail_level_1("CA");
        assert!(classification.has_weekly_base());
        assert!(!classification.has_hourly_calculated());
    }

    #[test]
    fn test_has_hourly_calculated() {
        let mut classification = retail_level_1("CA");
        classification.calculated_rate = Some(dec("26.55"));
        classification.calculated_rate_type = Some(RateType::Hourly);
        assert!(classification.has_hourly_calculated());
    }

    #[test]
    fn test_weekly_base_requires_weekly_type() {
        let mut classification = retail_level_1("CA");
        classification.base_rate_type = Some(RateType::Hourly);
        assert!(!classification.has_weekly_base());
    }

    #[test]
    fn test_rate_type_serialization() {
        assert_eq!(serde_json::to_string(&RateType::Hourly).unwrap(), "\"hourly\"");
        assert_eq!(serde_json::to_string(&RateType::Weekly).unwrap(), "\"weekly\"");
    }

    #[test]
    fn test_classification_round_trip() {
        let classification = retail_level_1("CA");
        let json = serde_json::to_string(&classification).unwrap();
        let deserialized: Classification = serde_json::from_str(&json).unwrap();
        assert_eq!(classification, deserialized);
    }

    #[test]
    fn test_classification_deserialization() {
        let json = r#"{
            "award_code": "MA000004",
            "employee_rate_type_code": "AD",
            "classification": "Retail Employee Level 2",
            "classification_level": 2,
            "base_rate": "1030.70",
            "base_rate_type": "weekly",
            "calculated_rate": "27.12",
            "calculated_rate_type": "hourly"
        }"#;

        let classification: Classification = serde_json::from_str(json).unwrap();
        assert_eq!(classification.classification_level, 2);
        assert_eq!(classification.base_rate, Some(dec("1030.70")));
        assert_eq!(classification.calculated_rate_type, Some(RateType::Hourly));
    }
}
