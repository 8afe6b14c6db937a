use serde::{Deserialize, Serialize};

use assay_core::models::EvidenceItem;
use assay_core::numeric::mean;

use super::discretize::discretize_0_5;
use crate::diminishing::noisy_or;
use crate::weight::{credibility_signal, is_eligible, weight};

/// Source credibility and the source counts derived alongside it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CredibilityMetrics {
    /// `noisy_or(I·M·P)` over items.
    pub score: f64,
    pub bin_0_5: u8,
    /// Resolved evidence items cited by the claim.
    pub raw_source_count: usize,
    /// Items whose weight is non-zero.
    pub eligible_source_count: usize,
    /// Mean item weight.
    pub quality_mean: f64,
    /// Modality diversity of the cited items.
    pub source_diversity: f64,
}

pub fn compute(items: &[&EvidenceItem], source_diversity: f64) -> CredibilityMetrics {
    let score = noisy_or(items.iter().map(|e| credibility_signal(&e.features)));
    let weights: Vec<f64> = items.iter().map(|e| weight(&e.features)).collect();

    CredibilityMetrics {
        score,
        bin_0_5: discretize_0_5(score),
        raw_source_count: items.len(),
        eligible_source_count: items.iter().filter(|e| is_eligible(&e.features)).count(),
        quality_mean: mean(&weights),
        source_diversity,
    }
}
