use serde::{Deserialize, Serialize};

use super::defaults;

/// Composite reliability factor constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReliabilityConfig {
    /// Lowest reliability a claim can receive. Must stay above zero.
    pub floor: f64,
    pub grounding_weight: f64,
    pub custody_quality_weight: f64,
    pub eligibility_weight: f64,
    pub anchor_coverage_weight: f64,
}

impl Default for ReliabilityConfig {
    fn default() -> Self {
        Self {
            floor: defaults::RELIABILITY_FLOOR,
            grounding_weight: defaults::RELIABILITY_GROUNDING_WEIGHT,
            custody_quality_weight: defaults::RELIABILITY_CUSTODY_QUALITY_WEIGHT,
            eligibility_weight: defaults::RELIABILITY_ELIGIBILITY_WEIGHT,
            anchor_coverage_weight: defaults::RELIABILITY_ANCHOR_COVERAGE_WEIGHT,
        }
    }
}

/// Weights of the effective evidence count that drives shrinkage strength.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectiveNConfig {
    pub anchor_weight: f64,
    pub eligible_source_weight: f64,
    pub corroboration_source_weight: f64,
}

impl Default for EffectiveNConfig {
    fn default() -> Self {
        Self {
            anchor_weight: defaults::EFFECTIVE_N_ANCHOR_WEIGHT,
            eligible_source_weight: defaults::EFFECTIVE_N_ELIGIBLE_WEIGHT,
            corroboration_source_weight: defaults::EFFECTIVE_N_CORROBORATION_WEIGHT,
        }
    }
}
