//! Shift and Roster Costing Engine for the General Retail Industry Award 2020 (MA000004)
//!
//! This crate computes the monetary cost of a work shift, or a roster of shifts,
//! under a wage-award rules model. Given a classification's base or derived
//! hourly rate, the applicable penalty rate rows and the shift timing, it splits
//! the shift into time segments governed by different multipliers (ordinary,
//! early/late, weekend, public holiday, overtime), resolves a dollar rate for
//! each segment and sums to a total with full line-item traceability and
//! data-quality warnings.

#![warn(missing_docs)]

pub mod calculation;
pub mod engine;
pub mod error;
pub mod models;
pub mod rules;
