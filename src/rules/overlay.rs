//! Configuration-specific rule overlays.
//!
//! Some award configurations carry carve-outs that the general resolver must
//! not hard-code inline: the flagship reference configuration prices all
//! Saturday hours at one flat multiplier regardless of tiered source rows,
//! and re-bases its Sunday rate when the ordinary rate was derived with
//! loading. Each carve-out lives in a [`RuleOverlay`] keyed by configuration
//! identity, so further award-specific behavior is added here rather than by
//! branching into the algorithms.

use crate::models::Classification;

/// The flagship reference award code (General Retail Industry Award 2020).
pub const REFERENCE_AWARD_CODE: &str = "MA000004";

/// Identifies an award/employment-type/level configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigKey {
    /// The Fair Work award code.
    pub award_code: String,
    /// The employment-type code.
    pub employee_rate_type_code: String,
    /// The classification level.
    pub classification_level: u32,
}

impl ConfigKey {
    /// Builds the configuration key for a classification.
    pub fn of(classification: &Classification) -> ConfigKey {
        ConfigKey {
            award_code: classification.award_code.clone(),
            employee_rate_type_code: classification.employee_rate_type_code.clone(),
            classification_level: classification.classification_level,
        }
    }
}

/// A named set of rule carve-outs for one configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleOverlay {
    /// Human-readable overlay name, used in warnings and logs.
    pub name: &'static str,
    /// Discard tiered Saturday rows and force `saturday_ordinary` to
    /// ordinary × 1.25: this configuration pays all Saturday hours flat.
    pub flat_saturday: bool,
    /// When the ordinary rate was derived with loading applied, force
    /// `sunday` to ordinary × 1.50 (source Sunday rates are computed
    /// against an unloaded base and would otherwise undercount).
    pub loaded_sunday: bool,
    /// Validate resolved rates against the expected-multiplier table and
    /// self-correct out-of-tolerance values.
    pub validate_multipliers: bool,
}

/// The overlay table: (award code, employment-type code, level) → overlay.
const OVERLAYS: &[(&str, &str, u32, RuleOverlay)] = &[(
    REFERENCE_AWARD_CODE,
    "CA",
    1,
    RuleOverlay {
        name: "retail casual level 1",
        flat_saturday: true,
        loaded_sunday: true,
        validate_multipliers: true,
    },
)];

/// Looks up the rule overlay for a configuration, if one exists.
///
/// # Example
///
/// ```
/// use shiftcost::rules::{ConfigKey, overlay_for};
///
/// let key = ConfigKey {
///     award_code: "MA000004".to_string(),
///     employee_rate_type_code: "CA".to_string(),
///     classification_level: 1,
/// };
/// assert!(overlay_for(&key).is_some());
/// ```
pub fn overlay_for(key: &ConfigKey) -> Option<&'static RuleOverlay> {
    OVERLAYS
        .iter()
        .find(|(award, employment, level, _)| {
            key.award_code == *award
                && key.employee_rate_type_code == *employment
                && key.classification_level == *level
        })
        .map(|(_, _, _, overlay)| overlay)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RateType;
    use rust_decimal::Decimal;

    fn classification(award: &str, employment: &str, level: u32) -> Classification {
        Classification {
            award_code: award.to_string(),
            employee_rate_type_code: employment.to_string(),
            classification: "Retail Employee Level 1".to_string(),
            classification_level: level,
            base_rate: Some(Decimal::new(100890, 2)),
            base_rate_type: Some(RateType::Weekly),
            calculated_rate: None,
            calculated_rate_type: None,
        }
    }

    #[test]
    fn test_reference_configuration_has_overlay() {
        let key = ConfigKey::of(&classification("MA000004", "CA", 1));
        let overlay = overlay_for(&key).unwrap();
        assert!(overlay.flat_saturday);
        assert!(overlay.loaded_sunday);
        assert!(overlay.validate_multipliers);
    }

    #[test]
    fn test_other_award_has_no_overlay() {
        let key = ConfigKey::of(&classification("MA000018", "CA", 1));
        assert!(overlay_for(&key).is_none());
    }

    #[test]
    fn test_other_employment_type_has_no_overlay() {
        let key = ConfigKey::of(&classification("MA000004", "FT", 1));
        assert!(overlay_for(&key).is_none());
    }

    #[test]
    fn test_other_level_has_no_overlay() {
        let key = ConfigKey::of(&classification("MA000004", "CA", 3));
        assert!(overlay_for(&key).is_none());
    }
}
