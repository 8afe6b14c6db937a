use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use assay_core::config::EvidenceConfig;
use assay_core::models::EvidenceItem;
use assay_core::numeric::{clamp01, safe_div};

use super::discretize::discretize_0_5;
use crate::diminishing::noisy_or;
use crate::weight::{is_eligible, weight};

/// Independent-source corroboration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CorroborationMetrics {
    /// Distinct `origin_id`s among the cited items.
    pub origin_count: usize,
    /// Origins with at least one eligible item.
    pub eligible_origin_count: usize,
    /// Noisy-or across per-origin weights, before the diversity multiplier.
    /// An origin's weight is its strongest item.
    pub origin_support: f64,
    pub modality_count: usize,
    /// `min(1, distinct_modalities / cap)`.
    pub modality_diversity: f64,
    /// `min(1, eligible_origins / cap)`.
    pub source_quantity: f64,
    pub score: f64,
    pub bin_0_5: u8,
}

/// `min(1, distinct modalities / cap)`.
pub fn modality_diversity(items: &[&EvidenceItem], config: &EvidenceConfig) -> (usize, f64) {
    let modalities: BTreeSet<&str> = items
        .iter()
        .flat_map(|e| e.modalities.iter().map(String::as_str))
        .collect();
    let count = modalities.len();
    (count, clamp01(safe_div(count as f64, config.modality_cap, 0.0)))
}

/// Cluster items by origin so restated or circular citations of one source
/// count once. An origin contributes its strongest item; origins combine by
/// noisy-or; the result is scaled by modality diversity.
///
/// Combining items inside an origin by noisy-or as well would collapse to a
/// flat noisy-or over all items, letting restatements of one source score
/// exactly like independent sources.
pub fn compute(items: &[&EvidenceItem], config: &EvidenceConfig) -> CorroborationMetrics {
    let mut origins: BTreeMap<&str, Vec<&EvidenceItem>> = BTreeMap::new();
    for &item in items {
        origins.entry(item.origin_id.as_str()).or_default().push(item);
    }

    let origin_support = noisy_or(
        origins
            .values()
            .map(|cluster| cluster.iter().map(|e| weight(&e.features)).fold(0.0, f64::max)),
    );
    let eligible_origin_count = origins
        .values()
        .filter(|cluster| cluster.iter().any(|e| is_eligible(&e.features)))
        .count();

    let (modality_count, modality_diversity) = modality_diversity(items, config);
    let score = clamp01(origin_support * modality_diversity);

    CorroborationMetrics {
        origin_count: origins.len(),
        eligible_origin_count,
        origin_support,
        modality_count,
        modality_diversity,
        source_quantity: clamp01(safe_div(
            eligible_origin_count as f64,
            config.source_quantity_cap,
            0.0,
        )),
        score,
        bin_0_5: discretize_0_5(score),
    }
}
