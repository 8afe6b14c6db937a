use serde::{Deserialize, Serialize};

use assay_core::config::EvidenceConfig;
use assay_core::models::EvidenceItem;
use assay_core::numeric::{clamp01, mean};

use super::discretize::discretize_0_5;
use crate::diminishing::noisy_or;
use crate::weight::{custody_signal, process_signal};

/// Chain-of-custody metric with its blend components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CustodyMetrics {
    /// `noisy_or(A·T)` over items.
    pub quantity: f64,
    /// `mean(A·T)`.
    pub quality: f64,
    /// `mean(M·P)`.
    pub process: f64,
    /// Weighted blend before the balance penalty.
    pub blended: f64,
    /// Multiplier from broader support (credibility, corroboration).
    pub balance_factor: f64,
    /// `blended * balance_factor`.
    pub score: f64,
    pub bin_0_5: u8,
}

/// Blend quantity, quality and process. Item count alone cannot push the
/// blend high: quality and process are means, not accumulations.
pub fn blend(items: &[&EvidenceItem], config: &EvidenceConfig) -> CustodyMetrics {
    let custody: Vec<f64> = items.iter().map(|e| custody_signal(&e.features)).collect();
    let process: Vec<f64> = items.iter().map(|e| process_signal(&e.features)).collect();

    let quantity = noisy_or(custody.iter().copied());
    let quality = mean(&custody);
    let process = mean(&process);
    let blended = clamp01(
        config.custody_quantity_weight * quantity
            + config.custody_quality_weight * quality
            + config.custody_process_weight * process,
    );

    CustodyMetrics {
        quantity,
        quality,
        process,
        blended,
        balance_factor: 1.0,
        score: blended,
        bin_0_5: discretize_0_5(blended),
    }
}

/// `floor + weight · mean(credibility, corroboration)`.
pub fn balance_factor(credibility: f64, corroboration: f64, config: &EvidenceConfig) -> f64 {
    clamp01(config.balance_floor + config.balance_weight * mean(&[clamp01(credibility), clamp01(corroboration)]))
}

impl CustodyMetrics {
    /// Apply the balance penalty once, after the blend.
    pub fn balanced(self, credibility: f64, corroboration: f64, config: &EvidenceConfig) -> Self {
        let factor = balance_factor(credibility, corroboration, config);
        let score = clamp01(self.blended * factor);
        Self {
            balance_factor: factor,
            score,
            bin_0_5: discretize_0_5(score),
            ..self
        }
    }
}
