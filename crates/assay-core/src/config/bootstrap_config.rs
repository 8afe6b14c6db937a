use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::PerAxis;

/// Bootstrap resampling constants. Every series has its own fixed seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    pub iterations: u32,
    pub lower_percentile: f64,
    pub upper_percentile: f64,
    pub axis_seeds: PerAxis<u64>,
    pub belief_seed: u64,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            iterations: defaults::BOOTSTRAP_ITERATIONS,
            lower_percentile: defaults::BOOTSTRAP_LOWER_PERCENTILE,
            upper_percentile: defaults::BOOTSTRAP_UPPER_PERCENTILE,
            axis_seeds: PerAxis {
                custody: defaults::BOOTSTRAP_SEED_CUSTODY,
                credibility: defaults::BOOTSTRAP_SEED_CREDIBILITY,
                corroboration: defaults::BOOTSTRAP_SEED_CORROBORATION,
                clarity: defaults::BOOTSTRAP_SEED_CLARITY,
                confidence: defaults::BOOTSTRAP_SEED_CONFIDENCE,
            },
            belief_seed: defaults::BOOTSTRAP_SEED_BELIEF,
        }
    }
}
