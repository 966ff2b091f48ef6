#![deny(warnings)]

//! Explainability and financial scaling helpers.
//!
//! This crate provides:
//! - A coalition-weighted attribution heuristic that approximates
//!   Shapley-style feature attributions
//! - Linear MRR scaling with exact per-mille multipliers
//! - Unit conversion between currency units and lakhs

use bi_core::{AttributionMap, BusinessProfile};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::warn;

/// Fraction of the base value distributed across features.
pub const ATTRIBUTION_SHARE: f64 = 0.4;

/// Base expected value of a business, as a multiple of its MRR.
pub const BASE_VALUE_MRR_MULTIPLE: u64 = 10;

/// One lakh in currency units.
pub const LAKH: i64 = 100_000;

/// Errors produced by the attribution estimator.
#[derive(Debug, Error, PartialEq)]
pub enum AttributionError {
    /// No features were supplied.
    #[error("feature map is empty")]
    Empty,
    /// Base value must be finite.
    #[error("base value {0} is not finite")]
    NonFiniteBase(f64),
    /// Every feature value must be finite.
    #[error("feature `{0}` has a non-finite value")]
    NonFiniteFeature(String),
}

/// Estimate per-feature attributions summing to 40% of `base_value`.
///
/// Each feature's raw contribution is accumulated over hypothetical coalition
/// sizes `s = 0..n` as `n * w * (v / (s+1)) * base * (v / total)` with
/// `w = 1 / (n(n-1))`, and the raw values are then rescaled so they sum to
/// `base_value * ATTRIBUTION_SHARE`. This is a heuristic, not an exact
/// Shapley computation.
///
/// Degenerate inputs: a single feature receives the whole share; a zero
/// feature total yields all-zero attributions.
pub fn try_estimate_attribution(
    features: &AttributionMap,
    base_value: f64,
) -> Result<AttributionMap, AttributionError> {
    if features.is_empty() {
        return Err(AttributionError::Empty);
    }
    if !base_value.is_finite() {
        return Err(AttributionError::NonFiniteBase(base_value));
    }
    if let Some((k, _)) = features.iter().find(|(_, v)| !v.is_finite()) {
        return Err(AttributionError::NonFiniteFeature(k.clone()));
    }

    let target = base_value * ATTRIBUTION_SHARE;
    let n = features.len();
    if n == 1 {
        return Ok(features.keys().map(|k| (k.clone(), target)).collect());
    }

    let total: f64 = features.values().sum();
    if total == 0.0 {
        return Ok(zeroed(features));
    }

    let nf = n as f64;
    let weight = 1.0 / (nf * (nf - 1.0));
    let raw: Vec<(&String, f64)> = features
        .iter()
        .map(|(k, &v)| {
            let marginal: f64 = (0..n)
                .map(|s| weight * (v / (s as f64 + 1.0)) * base_value * (v / total) * nf)
                .sum();
            (k, marginal)
        })
        .collect();

    let total_raw: f64 = raw.iter().map(|(_, r)| r).sum();
    if total_raw == 0.0 || !total_raw.is_finite() {
        return Ok(zeroed(features));
    }
    let scale = target / total_raw;
    Ok(raw.into_iter().map(|(k, r)| (k.clone(), r * scale)).collect())
}

/// Infallible attribution used by the generators.
///
/// Invalid input yields an empty map instead of an error.
pub fn estimate_attribution(features: &AttributionMap, base_value: f64) -> AttributionMap {
    match try_estimate_attribution(features, base_value) {
        Ok(map) => map,
        Err(AttributionError::Empty) => AttributionMap::new(),
        Err(e) => {
            warn!(error = %e, "attribution input rejected");
            AttributionMap::new()
        }
    }
}

/// Attribute `value` across hand-authored feature weights.
pub fn attribute_value(weights: &[(&str, f64)], value: Decimal) -> AttributionMap {
    let features: AttributionMap = weights.iter().map(|(k, v)| (k.to_string(), *v)).collect();
    estimate_attribution(&features, value.to_f64().unwrap_or(0.0))
}

fn zeroed(features: &AttributionMap) -> AttributionMap {
    features.keys().map(|k| (k.clone(), 0.0)).collect()
}

/// Base expected value for a profile: `BASE_VALUE_MRR_MULTIPLE x MRR`.
pub fn base_expected_value(profile: &BusinessProfile) -> Decimal {
    Decimal::from(profile.mrr) * Decimal::from(BASE_VALUE_MRR_MULTIPLE)
}

/// Scale an amount by a per-mille multiplier (1000 = 1.0x), exactly.
///
/// Example:
/// let v = scale_per_mille(Decimal::new(1_000_000, 0), 2200);
/// assert_eq!(v, Decimal::new(2_200_000, 0));
pub fn scale_per_mille(amount: Decimal, per_mille: u32) -> Decimal {
    (amount * Decimal::new(i64::from(per_mille), 3)).normalize()
}

/// MRR times a per-mille multiplier.
pub fn mrr_multiple(mrr: u64, per_mille: u32) -> Decimal {
    scale_per_mille(Decimal::from(mrr), per_mille)
}

/// Express a currency amount in lakhs.
pub fn to_lakhs(amount: Decimal) -> Decimal {
    (amount / Decimal::from(LAKH)).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn features(pairs: &[(&str, f64)]) -> AttributionMap {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn sum(map: &AttributionMap) -> f64 {
        map.values().sum()
    }

    #[test]
    fn two_features_split_by_squared_weight() {
        let out = estimate_attribution(&features(&[("a", 60.0), ("b", 40.0)]), 1000.0);
        // raw contributions are proportional to v^2: 3600 vs 1600
        assert!((out["a"] - 400.0 * 3600.0 / 5200.0).abs() < 1e-9);
        assert!((out["b"] - 400.0 * 1600.0 / 5200.0).abs() < 1e-9);
        assert!((sum(&out) - 400.0).abs() < 1e-9);
    }

    #[test]
    fn single_feature_takes_whole_share() {
        let out = estimate_attribution(&features(&[("only", 5.0)]), 250.0);
        assert_eq!(out.len(), 1);
        assert_eq!(out["only"], 100.0);
    }

    #[test]
    fn zero_total_yields_zeros() {
        let out = estimate_attribution(&features(&[("a", 0.0), ("b", 0.0)]), 1000.0);
        assert_eq!(out, features(&[("a", 0.0), ("b", 0.0)]));
    }

    #[test]
    fn zero_feature_gets_zero() {
        let out = estimate_attribution(&features(&[("a", 0.0), ("b", 50.0), ("c", 50.0)]), 1000.0);
        assert_eq!(out["a"], 0.0);
        assert!((out["b"] - 200.0).abs() < 1e-9);
    }

    #[test]
    fn invalid_input_yields_empty_map() {
        assert!(estimate_attribution(&AttributionMap::new(), 1000.0).is_empty());
        assert!(estimate_attribution(&features(&[("a", 1.0)]), f64::NAN).is_empty());
        assert!(estimate_attribution(&features(&[("a", f64::INFINITY), ("b", 1.0)]), 10.0).is_empty());
        assert_eq!(
            try_estimate_attribution(&features(&[("a", 1.0)]), f64::INFINITY),
            Err(AttributionError::NonFiniteBase(f64::INFINITY))
        );
    }

    #[test]
    fn attribute_value_uses_decimal_base() {
        let out = attribute_value(
            &[("market_size", 50.0), ("competition_level", 50.0)],
            Decimal::new(2_200_000, 0),
        );
        assert!((out["market_size"] - 440_000.0).abs() < 1e-6);
        assert!((out["competition_level"] - 440_000.0).abs() < 1e-6);
    }

    #[test]
    fn scaling_is_exact() {
        let profile = BusinessProfile::default();
        let base = base_expected_value(&profile);
        assert_eq!(base, Decimal::new(1_000_000, 0));
        assert_eq!(scale_per_mille(base, 2200), Decimal::new(2_200_000, 0));
        assert_eq!(mrr_multiple(100_000, 450), Decimal::new(45_000, 0));
        assert_eq!(scale_per_mille(base, 2200).to_string(), "2200000");
        assert_eq!(to_lakhs(Decimal::new(4_500_000, 0)), Decimal::new(45, 0));
    }

    proptest! {
        #[test]
        fn attributions_sum_to_forty_percent(
            vals in proptest::collection::vec(0.1f64..100.0, 1..6),
            base in 1.0f64..1e9,
        ) {
            let map: AttributionMap = vals
                .iter()
                .enumerate()
                .map(|(i, v)| (format!("f{i}"), *v))
                .collect();
            let out = estimate_attribution(&map, base);
            let expected = base * ATTRIBUTION_SHARE;
            prop_assert_eq!(out.len(), map.len());
            prop_assert!(((sum(&out) - expected) / expected).abs() < 1e-6);
        }

        #[test]
        fn equal_inputs_get_equal_attributions(v in 0.1f64..100.0, other in 0.1f64..100.0, base in 1.0f64..1e7) {
            let out = estimate_attribution(&features(&[("x", v), ("y", v), ("z", other)]), base);
            prop_assert!((out["x"] - out["y"]).abs() <= 1e-9 * base);
        }

        #[test]
        fn scaling_is_linear_in_mrr(mrr in 0u64..10_000_000, pm in 0u32..5000) {
            prop_assert_eq!(mrr_multiple(mrr * 2, pm), mrr_multiple(mrr, pm) * Decimal::from(2));
        }
    }
}
