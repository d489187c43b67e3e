//! Award rule constants and configuration-specific rule overlays.
//!
//! The constants in [`award`] are fixed properties of the rule set, not
//! per-call configuration. The [`overlay`] table carries the carve-outs that
//! apply only to specific award/employment-type/level configurations, so
//! award-specific behavior stays out of the general algorithms.

pub mod award;
pub mod overlay;

pub use award::{
    DAILY_ORDINARY_HOURS, DEFAULT_CASUAL_LOADING_PERCENT, EARLY_BOUNDARY_HOUR, LATE_BOUNDARY_HOUR,
    MINIMUM_ENGAGEMENT_HOURS, MULTIPLIER_TOLERANCE, OVERTIME_FIRST_TIER_HOURS,
    PER_SHIFT_PERCENT_HOURS, SEGMENT_STEP_SECONDS, STANDARD_WEEKLY_HOURS, expected_multiplier,
};
pub use overlay::{ConfigKey, REFERENCE_AWARD_CODE, RuleOverlay, overlay_for};
