//! Per-claim calibration: reliability, shrinkage, gates and belief.
//!
//! [`ClaimCalibration`] borrows the claim's [`BaseMetrics`] and never
//! mutates them; its output is appended next to the base layer's numbers.

use serde::{Deserialize, Serialize};

use assay_core::config::CalibrationConfig;
use assay_core::models::{Axis, Claim, PerAxis};
use assay_core::numeric::clamp01;

use crate::base::BaseMetrics;
use crate::belief::{self, BeliefComposition};
use crate::reliability;
use crate::saturation;
use crate::shrinkage::{self, AxisShrinkage};
use crate::signals::ClaimSignals;

/// Calibrated view of one claim.
#[derive(Debug, Clone)]
pub struct ClaimCalibration<'a> {
    pub base: &'a BaseMetrics,
    pub signals: ClaimSignals,
    pub reliability: f64,
    pub effective_n: f64,
    pub raw: PerAxis<f64>,
    pub shrinkage: PerAxis<AxisShrinkage>,
    pub saturation_factors: PerAxis<f64>,
    pub calibrated: PerAxis<f64>,
    pub composition: BeliefComposition,
    /// No evidence resolved: every calibrated axis is held at zero rather
    /// than pulled toward the document prior.
    pub degenerate: bool,
}

impl<'a> ClaimCalibration<'a> {
    pub fn calibrate(
        claim: &Claim,
        base: &'a BaseMetrics,
        signals: ClaimSignals,
        raw: PerAxis<f64>,
        priors: &PerAxis<f64>,
        config: &CalibrationConfig,
    ) -> Self {
        let reliability = reliability::reliability(&signals, &config.reliability);
        let effective_n = shrinkage::effective_n(&signals, &config.effective_n);

        let shrinkage = PerAxis::from_fn(|axis| {
            shrinkage::shrink(raw[axis], priors[axis], reliability, effective_n, config.law(axis))
        });
        let saturation_factors = PerAxis::from_fn(|axis| {
            saturation::gate_factor(axis, &config.law(axis).gate, &signals, &config.custody_quantity)
        });

        let degenerate = !signals.has_evidence;
        let calibrated = if degenerate {
            PerAxis::zeros()
        } else {
            PerAxis::from_fn(|axis| clamp01(shrinkage[axis].shrunk * saturation_factors[axis]))
        };
        let composition = belief::compose(
            &calibrated,
            signals.belief_grounding(),
            claim.required_threshold_0_1,
            &config.belief,
        );

        Self {
            base,
            signals,
            reliability,
            effective_n,
            raw,
            shrinkage,
            saturation_factors,
            calibrated,
            composition,
            degenerate,
        }
    }

    pub fn lambda(&self, axis: Axis) -> f64 {
        self.shrinkage[axis].lambda
    }

    /// The `statistical_calibration_v4` record.
    pub fn record(&self, priors: &PerAxis<f64>) -> CalibrationRecord {
        CalibrationRecord {
            reliability_factor: self.reliability,
            effective_evidence_n: self.effective_n,
            shrinkage_lambda: self.shrinkage.map(|_, s| s.lambda),
            prior_scores_0_1: *priors,
            raw_weighted_0_1: self.shrinkage.map(|_, s| s.raw_weighted),
            shrunk_0_1: self.shrinkage.map(|_, s| s.shrunk),
            saturation_factors: self.saturation_factors,
            calibrated_0_1: self.calibrated,
            degenerate: self.degenerate,
        }
    }
}

/// Serialized calibration trail for one claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationRecord {
    pub reliability_factor: f64,
    pub effective_evidence_n: f64,
    pub shrinkage_lambda: PerAxis<f64>,
    pub prior_scores_0_1: PerAxis<f64>,
    pub raw_weighted_0_1: PerAxis<f64>,
    pub shrunk_0_1: PerAxis<f64>,
    pub saturation_factors: PerAxis<f64>,
    pub calibrated_0_1: PerAxis<f64>,
    pub degenerate: bool,
}
