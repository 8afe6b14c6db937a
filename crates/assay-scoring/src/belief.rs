//! Belief composition against a claim's required threshold.

use serde::{Deserialize, Serialize};

use assay_core::config::BeliefConfig;
use assay_core::models::PerAxis;
use assay_core::numeric::{clamp01, logistic};

/// Evidence weight, support and the resulting belief score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BeliefComposition {
    pub evidence_weight: f64,
    pub evidence_support: f64,
    pub belief_0_100: f64,
}

/// `100 / (1 + e^{−k·(support − threshold)})`.
///
/// With k = 12 the transition from "not met" to "met" happens within about
/// ±0.15 of the threshold while staying continuous. Non-decreasing in
/// `support`.
pub fn belief(support: f64, threshold: f64, steepness: f64) -> f64 {
    100.0 * logistic(steepness * (clamp01(support) - clamp01(threshold)))
}

/// Combine calibrated axes (and grounding) into a belief score.
pub fn compose(
    axes: &PerAxis<f64>,
    grounding: f64,
    threshold: f64,
    config: &BeliefConfig,
) -> BeliefComposition {
    let evidence_weight = clamp01(
        config.custody_weight * axes.custody
            + config.credibility_weight * axes.credibility
            + config.corroboration_weight * axes.corroboration
            + config.grounding_weight * clamp01(grounding),
    );
    let evidence_support = clamp01(evidence_weight * axes.clarity);
    BeliefComposition {
        evidence_weight,
        evidence_support,
        belief_0_100: belief(evidence_support, threshold, config.steepness),
    }
}
