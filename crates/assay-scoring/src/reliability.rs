//! Composite per-claim reliability factor.

use assay_core::config::ReliabilityConfig;
use assay_core::numeric::{clamp01, safe_div};

use crate::signals::ClaimSignals;

/// `eligible / raw`, clamped to [0, 1]; 0.0 with no raw sources.
pub fn eligibility_ratio(signals: &ClaimSignals) -> f64 {
    clamp01(safe_div(
        signals.eligible_source_count,
        signals.raw_source_count,
        0.0,
    ))
}

/// `floor + (1 − floor) · clamp01(Σ weightᵢ · signalᵢ)`.
///
/// The floor keeps reliability strictly positive so the reliability weighting
/// in shrinkage never zeroes a raw value outright.
pub fn reliability(signals: &ClaimSignals, config: &ReliabilityConfig) -> f64 {
    let composite = clamp01(
        config.grounding_weight * signals.grounding
            + config.custody_quality_weight * signals.custody_quality
            + config.eligibility_weight * eligibility_ratio(signals)
            + config.anchor_coverage_weight * signals.anchor_coverage,
    );
    config.floor + (1.0 - config.floor) * composite
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_signals_sit_on_the_floor() {
        let r = reliability(&ClaimSignals::default(), &ReliabilityConfig::default());
        assert!((r - 0.20).abs() < 1e-12);
    }

    #[test]
    fn full_signals_reach_one() {
        let signals = ClaimSignals {
            grounding: 1.0,
            custody_quality: 1.0,
            eligible_source_count: 4.0,
            raw_source_count: 4.0,
            anchor_coverage: 1.0,
            ..ClaimSignals::default()
        };
        let r = reliability(&signals, &ReliabilityConfig::default());
        assert!((r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn eligibility_ratio_is_clamped() {
        let signals = ClaimSignals {
            eligible_source_count: 9.0,
            raw_source_count: 3.0,
            ..ClaimSignals::default()
        };
        assert_eq!(eligibility_ratio(&signals), 1.0);
    }
}
