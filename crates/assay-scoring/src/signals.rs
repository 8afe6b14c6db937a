//! Per-claim calibration inputs.
//!
//! Quantities supplied by the upstream producer in `score_details` take
//! precedence; anything it left out is derived from the base metrics.

use serde::{Deserialize, Serialize};

use assay_core::models::{Axis, Claim, PerAxis};
use assay_core::numeric::{clamp01, mean};

use crate::base::BaseMetrics;

/// Resolved inputs for reliability, shrinkage and gating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ClaimSignals {
    pub has_evidence: bool,
    pub grounding: f64,
    pub anchor_coverage: f64,
    pub anchor_count: f64,
    /// Mean of the five custody indicators.
    pub custody_quality: f64,
    pub artifact_identifiers: f64,
    pub eligible_source_count: f64,
    pub raw_source_count: f64,
    pub quality_mean: f64,
    pub source_diversity: f64,
    pub corroboration_eligible_source_count: f64,
    pub source_quantity: f64,
}

impl ClaimSignals {
    pub fn resolve(claim: &Claim, base: &BaseMetrics) -> Self {
        let up = &claim.upstream;
        let cred = &base.credibility;
        let corr = &base.corroboration;

        Self {
            has_evidence: !base.is_empty(),
            grounding: clamp01(up.grounding),
            anchor_coverage: clamp01(up.anchor_coverage),
            anchor_count: up.anchor_count.max(0.0),
            custody_quality: clamp01(up.custody.quality()),
            artifact_identifiers: clamp01(up.custody.artifact_identifiers),
            eligible_source_count: up
                .eligible_source_count
                .unwrap_or(cred.eligible_source_count as f64)
                .max(0.0),
            raw_source_count: up
                .raw_source_count
                .unwrap_or(cred.raw_source_count as f64)
                .max(0.0),
            quality_mean: clamp01(up.quality_mean.unwrap_or(cred.quality_mean)),
            source_diversity: clamp01(up.source_diversity.unwrap_or(cred.source_diversity)),
            corroboration_eligible_source_count: up
                .corroboration_eligible_source_count
                .unwrap_or(corr.eligible_origin_count as f64)
                .max(0.0),
            source_quantity: clamp01(up.source_quantity.unwrap_or(corr.source_quantity)),
        }
    }

    /// Grounding fed to belief composition. A claim with no resolved
    /// evidence composes with zero grounding whatever upstream reported.
    pub fn belief_grounding(&self) -> f64 {
        if self.has_evidence {
            self.grounding
        } else {
            0.0
        }
    }
}

/// Raw (pre-calibration) value of every axis for one claim.
///
/// The three evidence axes come from the base metrics. Clarity prefers the
/// upstream clarity score and otherwise averages coherence with compliance
/// mapping; confidence is the claim's confidence discipline.
pub fn raw_axes(claim: &Claim, base: &BaseMetrics) -> PerAxis<f64> {
    let features = &claim.claim_features;
    PerAxis::from_fn(|axis| match axis {
        Axis::Custody => base.custody.score,
        Axis::Credibility => base.credibility.score,
        Axis::Corroboration => base.corroboration.score,
        Axis::Clarity => clamp01(
            claim
                .upstream
                .clarity
                .unwrap_or_else(|| mean(&[features.coherence, features.compliance_mapping])),
        ),
        Axis::Confidence => clamp01(features.confidence_discipline),
    })
}
