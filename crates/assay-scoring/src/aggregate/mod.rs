//! Document-level averages and bootstrap intervals.

pub mod bootstrap;

use serde::{Deserialize, Serialize};

use assay_core::config::BootstrapConfig;
use assay_core::models::{Axis, PerAxis};
use assay_core::numeric::{mean, weighted_mean};

pub use bootstrap::{Bootstrap, BootstrapInterval};

use crate::report::ClaimScores;

/// Per-axis document averages (0–100).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentScores {
    pub claim_count: usize,
    pub custody_avg_0_100: f64,
    pub credibility_avg_0_100: f64,
    pub corroboration_avg_0_100: f64,
    pub clarity_avg_0_100: f64,
    pub confidence_avg_0_100: f64,
    /// `0.5 · credibility_avg + 0.5 · corroboration_avg`.
    pub credibility_composite_avg_0_100: f64,
    pub evidence_weight_avg_0_100: f64,
    /// Gravity-weighted.
    pub belief_avg_0_100: f64,
}

/// Bootstrap interval per axis plus the gravity-weighted belief.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BootstrapReport {
    pub custody: BootstrapInterval,
    pub credibility: BootstrapInterval,
    pub corroboration: BootstrapInterval,
    pub clarity: BootstrapInterval,
    pub confidence: BootstrapInterval,
    pub belief: BootstrapInterval,
}

impl BootstrapReport {
    pub fn axis(&self, axis: Axis) -> &BootstrapInterval {
        match axis {
            Axis::Custody => &self.custody,
            Axis::Credibility => &self.credibility,
            Axis::Corroboration => &self.corroboration,
            Axis::Clarity => &self.clarity,
            Axis::Confidence => &self.confidence,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &BootstrapInterval)> {
        Axis::ALL
            .into_iter()
            .map(|axis| (axis.name(), self.axis(axis)))
            .chain(std::iter::once(("belief", &self.belief)))
    }
}

fn axis_column(scores: &[ClaimScores], axis: Axis) -> Vec<f64> {
    scores.iter().map(|s| s.axis_0_100(axis)).collect()
}

/// Unweighted per-axis means; belief is gravity-weighted.
pub fn document_scores(scores: &[ClaimScores], gravity: &[f64]) -> DocumentScores {
    let avg = PerAxis::from_fn(|axis| mean(&axis_column(scores, axis)));
    let evidence_weight: Vec<f64> = scores.iter().map(|s| s.evidence_weight_0_100).collect();
    let belief: Vec<f64> = scores.iter().map(|s| s.belief_0_100).collect();

    DocumentScores {
        claim_count: scores.len(),
        custody_avg_0_100: avg.custody,
        credibility_avg_0_100: avg.credibility,
        corroboration_avg_0_100: avg.corroboration,
        clarity_avg_0_100: avg.clarity,
        confidence_avg_0_100: avg.confidence,
        credibility_composite_avg_0_100: 0.5 * avg.credibility + 0.5 * avg.corroboration,
        evidence_weight_avg_0_100: mean(&evidence_weight),
        belief_avg_0_100: weighted_mean(&belief, gravity),
    }
}

/// Bootstrap each axis (unweighted) and belief (gravity-weighted), each with
/// its own fixed seed.
pub fn bootstrap_report(
    scores: &[ClaimScores],
    gravity: &[f64],
    config: &BootstrapConfig,
) -> BootstrapReport {
    let run = |seed: u64, values: &[f64], weights: Option<&[f64]>| {
        Bootstrap::new(config.iterations)
            .with_seed(seed)
            .with_percentiles(config.lower_percentile, config.upper_percentile)
            .interval(values, weights)
    };
    let axes = PerAxis::from_fn(|axis| {
        run(config.axis_seeds[axis], &axis_column(scores, axis), None)
    });
    let belief: Vec<f64> = scores.iter().map(|s| s.belief_0_100).collect();

    BootstrapReport {
        custody: axes.custody,
        credibility: axes.credibility,
        corroboration: axes.corroboration,
        clarity: axes.clarity,
        confidence: axes.confidence,
        belief: run(config.belief_seed, &belief, Some(gravity)),
    }
}
