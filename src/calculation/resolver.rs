//! Penalty rate resolution.
//!
//! Builds a category → dollars-per-hour map from candidate penalty rows,
//! applying override precedence, multiplier-range validation and the
//! configuration rule overlays. Upstream reference data periodically
//! contains transcription errors, so the resolver is self-correcting: an
//! out-of-tolerance rate is replaced with the expected multiple of the
//! ordinary rate and the discrepancy is reported as a warning rather than
//! propagated into pay.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::models::{Classification, PenaltyKey, PenaltyRow, RateOverrides, RateUnit};
use crate::rules::{ConfigKey, MULTIPLIER_TOLERANCE, expected_multiplier, overlay_for};

use super::normalizer::normalize_description;
use super::rounding::{round_cents, round_half_up};

/// Where a resolved rate came from, for replacement precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RateSource {
    /// A user or classification-level override; always wins.
    Override,
    /// Derived from the source row itself.
    Csv,
}

/// A category → dollars-per-hour map with override bookkeeping and the
/// ordered validation warnings gathered while building it.
///
/// Values are kept at full precision; rounding to cents happens when a
/// segment is published. Built fresh per calculation and never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PenaltyRateMap {
    rates: BTreeMap<PenaltyKey, Decimal>,
    overridden: BTreeSet<PenaltyKey>,
    sources: BTreeMap<PenaltyKey, String>,
    warnings: Vec<String>,
}

impl PenaltyRateMap {
    /// Returns the resolved rate for a category, if present.
    pub fn get(&self, key: PenaltyKey) -> Option<Decimal> {
        self.rates.get(&key).copied()
    }

    /// Returns true if the category has a resolved rate.
    pub fn contains(&self, key: PenaltyKey) -> bool {
        self.rates.contains_key(&key)
    }

    /// Returns true if the category's rate came from an override.
    pub fn is_overridden(&self, key: PenaltyKey) -> bool {
        self.overridden.contains(&key)
    }

    /// Returns the resolved categories in canonical order.
    pub fn keys(&self) -> impl Iterator<Item = PenaltyKey> + '_ {
        self.rates.keys().copied()
    }

    /// Returns the warnings gathered while building the map, in order.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Returns the capacities of the tiered Saturday first-hours
    /// categories, sorted ascending.
    pub fn saturday_first_tiers(&self) -> Vec<u32> {
        self.rates
            .keys()
            .filter_map(|key| match key {
                PenaltyKey::SaturdayFirst(n) => Some(*n),
                _ => None,
            })
            .collect()
    }

    /// Returns the capacities of the tiered Saturday after-hours
    /// categories, sorted ascending.
    pub fn saturday_after_tiers(&self) -> Vec<u32> {
        self.rates
            .keys()
            .filter_map(|key| match key {
                PenaltyKey::SaturdayAfter(n) => Some(*n),
                _ => None,
            })
            .collect()
    }

    fn insert(&mut self, key: PenaltyKey, rate: Decimal, source: RateSource, description: &str) {
        let occupied = self.rates.contains_key(&key);
        if occupied && source != RateSource::Override {
            return;
        }
        self.rates.insert(key, rate);
        self.sources.insert(key, description.to_string());
        if source == RateSource::Override {
            self.overridden.insert(key);
        }
    }

    fn set(&mut self, key: PenaltyKey, rate: Decimal) {
        self.rates.insert(key, rate);
    }

    fn remove(&mut self, key: PenaltyKey) {
        self.rates.remove(&key);
        self.sources.remove(&key);
        self.overridden.remove(&key);
    }

    fn source(&self, key: PenaltyKey) -> &str {
        self.sources.get(&key).map(String::as_str).unwrap_or("")
    }
}

/// Computes the candidate dollar rate for a row, in precedence order:
/// user override, row-level override, pre-computed dollar value,
/// percentage of the ordinary rate, flat dollar rate.
fn candidate_rate(
    row: &PenaltyRow,
    ordinary_hourly: Decimal,
    overrides: &RateOverrides,
) -> Option<(Decimal, RateSource)> {
    if let Some(value) = overrides.penalty_rate(
        &row.award_code,
        &row.classification,
        &row.penalty_description,
    ) {
        return Some((value, RateSource::Override));
    }
    if let Some(value) = row.override_value {
        return Some((value, RateSource::Override));
    }
    if let Some(value) = row.penalty_calculated_value {
        if value > Decimal::ZERO {
            return Some((value, RateSource::Csv));
        }
    }
    if let Some(rate) = row.rate {
        let value = match row.penalty_rate_unit {
            RateUnit::Percentage => ordinary_hourly * rate / Decimal::ONE_HUNDRED,
            RateUnit::Dollar => rate,
        };
        return Some((value, RateSource::Csv));
    }
    None
}

/// Resolves the penalty rate map for a classification.
///
/// For each row the description is normalized (unmatched rows are excluded
/// from the map); the candidate rate is computed with override precedence;
/// and a later row only replaces an already-resolved category when the
/// later source is an override. The reference-configuration overlay then
/// validates implied multipliers, discards tiered Saturday categories and
/// applies its unconditional force-sets, and finally the three baseline
/// categories (`ordinary`, `weekday_early_late`, `friday_late`) are
/// synthesized if still absent.
///
/// # Arguments
///
/// * `rows` - Candidate penalty rows, already filtered for operative dates
/// * `ordinary_hourly` - The derived ordinary hourly rate
/// * `classification` - The classification being priced
/// * `loading_applied_for_rate` - Whether `ordinary_hourly` was derived
///   with the "use loading for rate" path (gates the Sunday re-base)
/// * `overrides` - The read-only override snapshot
pub fn resolve_penalty_rates(
    rows: &[PenaltyRow],
    ordinary_hourly: Decimal,
    classification: &Classification,
    loading_applied_for_rate: bool,
    overrides: &RateOverrides,
) -> PenaltyRateMap {
    let mut map = PenaltyRateMap::default();

    for row in rows {
        let Some(key) = normalize_description(&row.penalty_description) else {
            debug!(
                description = %row.penalty_description,
                "penalty row matched no canonical category, excluded from map"
            );
            continue;
        };
        let Some((rate, source)) = candidate_rate(row, ordinary_hourly, overrides) else {
            debug!(
                description = %row.penalty_description,
                "penalty row carries no usable rate, excluded from map"
            );
            continue;
        };
        map.insert(key, rate, source, &row.penalty_description);
    }

    let overlay = overlay_for(&ConfigKey::of(classification));

    if let Some(overlay) = overlay {
        if overlay.validate_multipliers && ordinary_hourly > Decimal::ZERO {
            validate_multipliers(&mut map, ordinary_hourly);
        }

        if overlay.flat_saturday {
            for n in map.saturday_first_tiers() {
                debug!(tier = n, "discarding tiered Saturday first-hours category");
                map.remove(PenaltyKey::SaturdayFirst(n));
            }
            for n in map.saturday_after_tiers() {
                debug!(tier = n, "discarding tiered Saturday after-hours category");
                map.remove(PenaltyKey::SaturdayAfter(n));
            }
            force_rate(
                &mut map,
                PenaltyKey::SaturdayOrdinary,
                ordinary_hourly * expected_multiplier(PenaltyKey::SaturdayOrdinary),
                overlay.name,
            );
        }

        if overlay.loaded_sunday && loading_applied_for_rate {
            force_rate(
                &mut map,
                PenaltyKey::Sunday,
                ordinary_hourly * expected_multiplier(PenaltyKey::Sunday),
                overlay.name,
            );
        }
    }

    check_saturday_sunday_ordering(&mut map);

    // Every calculation needs these baseline categories available.
    for key in [
        PenaltyKey::Ordinary,
        PenaltyKey::WeekdayEarlyLate,
        PenaltyKey::FridayLate,
    ] {
        if !map.contains(key) {
            map.set(key, ordinary_hourly * expected_multiplier(key));
        }
    }

    map
}

/// Compares each resolved rate's implied multiplier to its expected range
/// and self-corrects out-of-tolerance values, warning about each.
fn validate_multipliers(map: &mut PenaltyRateMap, ordinary_hourly: Decimal) {
    let keys: Vec<PenaltyKey> = map.keys().collect();
    for key in keys {
        if map.is_overridden(key) {
            continue;
        }
        let rate = map.get(key).unwrap_or(Decimal::ZERO);
        let expected = expected_multiplier(key);
        let ratio = rate / ordinary_hourly;
        if (ratio - expected).abs() > MULTIPLIER_TOLERANCE {
            let corrected = ordinary_hourly * expected;
            let message = format!(
                "Penalty rate for {} (${}/hr from '{}') implies multiplier {}, outside expected {}±{}; using ${} instead",
                key,
                round_cents(rate),
                map.source(key),
                round_half_up(ratio, 2),
                expected,
                MULTIPLIER_TOLERANCE,
                round_cents(corrected),
            );
            warn!(category = %key, "{}", message);
            map.warnings.push(message);
            map.set(key, corrected);
        }
    }
}

/// Unconditionally sets a category rate for an overlay, warning when this
/// changes a value that came from source data. User overrides are left
/// alone: an override always wins over a rule carve-out.
fn force_rate(map: &mut PenaltyRateMap, key: PenaltyKey, rate: Decimal, overlay_name: &str) {
    if map.is_overridden(key) {
        return;
    }
    let previous = map.get(key);
    if let Some(previous) = previous {
        if round_cents(previous) != round_cents(rate) {
            let message = format!(
                "{} rate re-based to ${}/hr for {} (source rows gave ${}/hr)",
                key,
                round_cents(rate),
                overlay_name,
                round_cents(previous),
            );
            warn!(category = %key, "{}", message);
            map.warnings.push(message);
        }
    }
    map.set(key, rate);
}

/// A Saturday rate above the Sunday rate is a data-quality smell worth
/// surfacing; no corrective value is defined, so this only warns.
fn check_saturday_sunday_ordering(map: &mut PenaltyRateMap) {
    let saturday = map
        .get(PenaltyKey::SaturdayOrdinary)
        .or_else(|| map.get(PenaltyKey::Saturday));
    let sunday = map.get(PenaltyKey::Sunday);
    if let (Some(saturday), Some(sunday)) = (saturday, sunday) {
        if saturday > sunday {
            let message = format!(
                "Saturday rate (${}/hr) exceeds Sunday rate (${}/hr); check source data",
                round_cents(saturday),
                round_cents(sunday),
            );
            warn!("{}", message);
            map.warnings.push(message);
        }
    }
}
