//! Empirical-Bayes shrinkage toward the document prior.
//!
//! ```text
//! effective_n  = 0.50·anchors + 0.35·eligible_sources + 0.15·corroborating_sources
//! λ            = n / (n + τ_axis)
//! raw_weighted = raw · (base_axis + (1 − base_axis) · reliability)
//! shrunk       = λ · raw_weighted + (1 − λ) · prior_axis
//! ```
//!
//! A claim with little independent support lands near the prior. Larger τ
//! means a stronger pull; corroboration has the largest τ because it is the
//! least stable per-claim estimate.

use serde::{Deserialize, Serialize};

use assay_core::config::{AxisLaw, EffectiveNConfig};
use assay_core::numeric::{clamp01, safe_div};

use crate::signals::ClaimSignals;

/// Weighted proxy for the independent support behind a claim, >= 0.
pub fn effective_n(signals: &ClaimSignals, config: &EffectiveNConfig) -> f64 {
    let n = config.anchor_weight * signals.anchor_count
        + config.eligible_source_weight * signals.eligible_source_count
        + config.corroboration_source_weight * signals.corroboration_eligible_source_count;
    if n.is_finite() {
        n.max(0.0)
    } else {
        0.0
    }
}

/// Shrinkage weight on the claim's own value: `n / (n + τ)`.
///
/// Tends to 0 as `n → 0` and to 1 as `n → ∞`.
pub fn lambda(n: f64, tau: f64) -> f64 {
    let n = n.max(0.0);
    clamp01(safe_div(n, n + tau.max(0.0), 0.0))
}

/// Raw value scaled by reliability: `raw · (base + (1 − base) · reliability)`.
pub fn reliability_weighted(raw: f64, base: f64, reliability: f64) -> f64 {
    clamp01(raw * (base + (1.0 - base) * clamp01(reliability)))
}

/// One axis's shrinkage result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisShrinkage {
    pub lambda: f64,
    pub raw_weighted: f64,
    pub shrunk: f64,
}

/// Shrink one axis value toward its prior under the axis's law.
pub fn shrink(raw: f64, prior: f64, reliability: f64, n: f64, law: &AxisLaw) -> AxisShrinkage {
    let lambda = lambda(n, law.tau);
    let raw_weighted = reliability_weighted(raw, law.reliability_base, reliability);
    AxisShrinkage {
        lambda,
        raw_weighted,
        shrunk: clamp01(lambda * raw_weighted + (1.0 - lambda) * clamp01(prior)),
    }
}

#[cfg(test)]
mod tests {
    use assay_core::models::Axis;

    use super::*;

    #[test]
    fn lambda_limits() {
        assert_eq!(lambda(0.0, 2.2), 0.0);
        assert!(lambda(1e12, 2.2) > 0.999_999);
        assert!((lambda(2.2, 2.2) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn corroboration_shrinks_hardest() {
        let n = 3.0;
        let custody = lambda(n, AxisLaw::contract(Axis::Custody).tau);
        let corroboration = lambda(n, AxisLaw::contract(Axis::Corroboration).tau);
        let clarity = lambda(n, AxisLaw::contract(Axis::Clarity).tau);
        assert!(corroboration < custody && custody < clarity);
    }

    #[test]
    fn zero_support_returns_the_prior() {
        let law = AxisLaw::contract(Axis::Credibility);
        let s = shrink(0.9, 0.4, 1.0, 0.0, &law);
        assert_eq!(s.shrunk, 0.4);
    }

    #[test]
    fn full_reliability_keeps_the_raw_value() {
        assert!((reliability_weighted(0.8, 0.55, 1.0) - 0.8).abs() < 1e-12);
        let low = reliability_weighted(0.8, 0.55, 0.2);
        assert!((low - 0.8 * (0.55 + 0.45 * 0.2)).abs() < 1e-12);
    }

    #[test]
    fn effective_n_weights_counts() {
        let signals = ClaimSignals {
            anchor_count: 2.0,
            eligible_source_count: 4.0,
            corroboration_eligible_source_count: 2.0,
            ..ClaimSignals::default()
        };
        let n = effective_n(&signals, &EffectiveNConfig::default());
        assert!((n - (1.0 + 1.4 + 0.3)).abs() < 1e-12);
    }
}
