//! # assay-scoring
//!
//! Evidentiary scoring and statistical calibration.
//!
//! Pipeline per document: evidence weights → base metrics (custody,
//! credibility, corroboration) → reliability and effective evidence count →
//! document priors → empirical-Bayes shrinkage → saturation/quality gates →
//! logistic belief → document averages with bootstrap 95% intervals.
//!
//! Every stage is a pure function of its input. No I/O happens here.

pub mod aggregate;
pub mod base;
pub mod belief;
pub mod calibration;
pub mod diminishing;
pub mod engine;
pub mod prior;
pub mod reliability;
pub mod report;
pub mod saturation;
pub mod shrinkage;
pub mod signals;
pub mod weight;

pub use aggregate::{BootstrapInterval, BootstrapReport, DocumentScores};
pub use base::{BaseMetrics, BaseMetricsEngine};
pub use calibration::{CalibrationRecord, ClaimCalibration};
pub use diminishing::{exp_saturation, noisy_or};
pub use engine::{ClaimOutcome, DocumentScoring, ScoringEngine};
pub use report::ClaimScores;
