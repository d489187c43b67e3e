//! Calculation logic for the Shift Costing Engine.
//!
//! This module contains the calculation building blocks: monetary rounding,
//! ordinary-rate derivation, penalty description normalization, penalty
//! rate resolution with validation and overlays, the 6-minute segmentation
//! walk, casual minimum-engagement padding, and the allowance calculators.
//! The top-level orchestration lives in [`crate::engine`].

mod allowances;
mod minimum_engagement;
mod normalizer;
mod rate_derivation;
mod resolver;
mod rounding;
mod segmentation;

pub use allowances::{calculate_expense_allowance, calculate_wage_allowance};
pub use minimum_engagement::apply_minimum_engagement;
pub use normalizer::normalize_description;
pub use rate_derivation::{DerivedRate, derive_ordinary_rate};
pub use resolver::{PenaltyRateMap, resolve_penalty_rates};
pub use rounding::{round_cents, round_half_up};
pub use segmentation::{SegmentationOutcome, segment_shift};
