use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::{Axis, PerAxis};

/// Post-shrinkage gate applied to an axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GateLaw {
    /// No gate; the shrunk value passes through unchanged.
    Open,
    /// `floor + (1 - floor) * exp_saturation(quantity, k)`.
    Saturation { floor: f64, k: f64 },
    /// `floor + (1 - floor) * (quality_weight * quality_mean + diversity_weight * diversity)`.
    /// Quantity never enters this gate.
    Quality {
        floor: f64,
        quality_weight: f64,
        diversity_weight: f64,
    },
}

/// Calibration law for one axis: shrinkage strength, reliability weighting
/// base, and gate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLaw {
    /// Prior strength. Higher means a stronger pull toward the document
    /// prior when evidence is sparse.
    pub tau: f64,
    /// Share of the raw value kept regardless of reliability.
    pub reliability_base: f64,
    pub gate: GateLaw,
}

impl AxisLaw {
    /// Contract law for the given axis.
    pub fn contract(axis: Axis) -> Self {
        match axis {
            Axis::Custody => Self {
                tau: defaults::TAU_CUSTODY,
                reliability_base: defaults::RELIABILITY_BASE_CUSTODY,
                gate: GateLaw::Saturation {
                    floor: defaults::CUSTODY_GATE_FLOOR,
                    k: defaults::CUSTODY_GATE_K,
                },
            },
            Axis::Credibility => Self {
                tau: defaults::TAU_CREDIBILITY,
                reliability_base: defaults::RELIABILITY_BASE_CREDIBILITY,
                gate: GateLaw::Quality {
                    floor: defaults::CREDIBILITY_GATE_FLOOR,
                    quality_weight: defaults::CREDIBILITY_QUALITY_WEIGHT,
                    diversity_weight: defaults::CREDIBILITY_DIVERSITY_WEIGHT,
                },
            },
            Axis::Corroboration => Self {
                tau: defaults::TAU_CORROBORATION,
                reliability_base: defaults::RELIABILITY_BASE_CORROBORATION,
                gate: GateLaw::Saturation {
                    floor: defaults::CORROBORATION_GATE_FLOOR,
                    k: defaults::CORROBORATION_GATE_K,
                },
            },
            Axis::Clarity => Self {
                tau: defaults::TAU_CLARITY,
                reliability_base: defaults::RELIABILITY_BASE_CLARITY,
                gate: GateLaw::Open,
            },
            Axis::Confidence => Self {
                tau: defaults::TAU_CONFIDENCE,
                reliability_base: defaults::RELIABILITY_BASE_CONFIDENCE,
                gate: GateLaw::Open,
            },
        }
    }
}

impl Default for PerAxis<AxisLaw> {
    fn default() -> Self {
        PerAxis::from_fn(AxisLaw::contract)
    }
}

/// Mix of custody indicators feeding the custody saturation gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustodyQuantityMix {
    pub artifact_weight: f64,
    pub anchor_coverage_weight: f64,
}

impl Default for CustodyQuantityMix {
    fn default() -> Self {
        Self {
            artifact_weight: defaults::CUSTODY_ARTIFACT_WEIGHT,
            anchor_coverage_weight: defaults::CUSTODY_ANCHOR_WEIGHT,
        }
    }
}
