use serde::{Deserialize, Serialize};

use super::defaults;

/// Evidence-weight coefficients and logistic steepness for the belief score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeliefConfig {
    pub custody_weight: f64,
    pub credibility_weight: f64,
    pub corroboration_weight: f64,
    pub grounding_weight: f64,
    /// Logistic slope around the required threshold.
    pub steepness: f64,
}

impl Default for BeliefConfig {
    fn default() -> Self {
        Self {
            custody_weight: defaults::BELIEF_CUSTODY_WEIGHT,
            credibility_weight: defaults::BELIEF_CREDIBILITY_WEIGHT,
            corroboration_weight: defaults::BELIEF_CORROBORATION_WEIGHT,
            grounding_weight: defaults::BELIEF_GROUNDING_WEIGHT,
            steepness: defaults::BELIEF_STEEPNESS,
        }
    }
}
