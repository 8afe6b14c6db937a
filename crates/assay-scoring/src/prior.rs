//! Document-level priors.

use assay_core::models::{Axis, PerAxis};
use assay_core::numeric::weighted_mean;

/// Gravity-weighted mean of each axis's raw value over all claims.
///
/// Computed once per document, before any claim is shrunk. A document whose
/// total gravity is zero gets all-zero priors.
pub fn estimate_priors(raw: &[PerAxis<f64>], gravity: &[f64]) -> PerAxis<f64> {
    PerAxis::from_fn(|axis: Axis| {
        let values: Vec<f64> = raw.iter().map(|r| r[axis]).collect();
        weighted_mean(&values, gravity)
    })
}
