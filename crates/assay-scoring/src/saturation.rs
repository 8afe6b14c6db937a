//! Gates applied after shrinkage on quantity-sensitive axes.
//!
//! Gates are multiplicative factors in [floor, 1]. Saturation gates let
//! quantity help a little and then stop helping; the credibility quality gate
//! ignores quantity entirely.

use assay_core::config::{CustodyQuantityMix, GateLaw};
use assay_core::models::Axis;
use assay_core::numeric::clamp01;

use crate::diminishing::exp_saturation;
use crate::signals::ClaimSignals;

/// Quantity measure fed to an axis's saturation gate.
///
/// Custody uses its artifact/anchor mix and corroboration the independent
/// source quantity. Credibility, clarity and confidence carry no saturation
/// gate in the contract table; if a tuned table gives them one, credibility
/// reads source quantity and the claim-level axes read anchor coverage.
pub fn quantity(axis: Axis, signals: &ClaimSignals, mix: &CustodyQuantityMix) -> f64 {
    match axis {
        Axis::Custody => clamp01(
            mix.artifact_weight * signals.artifact_identifiers
                + mix.anchor_coverage_weight * signals.anchor_coverage,
        ),
        Axis::Credibility | Axis::Corroboration => signals.source_quantity,
        Axis::Clarity | Axis::Confidence => signals.anchor_coverage,
    }
}

/// Multiplicative gate factor for one axis.
pub fn gate_factor(
    axis: Axis,
    gate: &GateLaw,
    signals: &ClaimSignals,
    mix: &CustodyQuantityMix,
) -> f64 {
    match *gate {
        GateLaw::Open => 1.0,
        GateLaw::Saturation { floor, k } => {
            let saturation = exp_saturation(quantity(axis, signals, mix), k);
            floor + (1.0 - floor) * saturation
        }
        GateLaw::Quality {
            floor,
            quality_weight,
            diversity_weight,
        } => {
            let quality = clamp01(
                quality_weight * signals.quality_mean + diversity_weight * signals.source_diversity,
            );
            floor + (1.0 - floor) * quality
        }
    }
}
