//! Core data models for the Shift Costing Engine.
//!
//! This module contains all the domain models used throughout the engine.
//! Every entity is created fresh per calculation invocation and discarded
//! with the result; only the [`RateOverrides`] snapshot is externally owned.

mod allowance;
mod classification;
mod penalty;
mod result;
mod shift;

pub use allowance::{ExpenseAllowance, PaymentFrequency, WageAllowance};
pub use classification::{
    ALL_EMPLOYMENT_TYPES_CODE, CASUAL_EMPLOYMENT_CODE, Classification, RateType,
};
pub use penalty::{PenaltyKey, PenaltyRow, RateUnit};
pub use result::{
    AllowanceLine, DayType, OvertimeTier, RosterLine, RosterResult, Segment, ShiftResult,
};
pub use shift::{CostingParams, RateOverrides, ShiftInput};
