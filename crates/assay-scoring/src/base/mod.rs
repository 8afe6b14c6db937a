//! Base metrics: custody, credibility and corroboration computed directly
//! from a claim's evidence items.
//!
//! The result is an immutable [`BaseMetrics`] value. The calibration layer
//! borrows it and never rewrites it.

pub mod corroboration;
pub mod credibility;
pub mod custody;
pub mod discretize;

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use assay_core::config::EvidenceConfig;
use assay_core::models::{Claim, EvidenceItem};

pub use corroboration::CorroborationMetrics;
pub use credibility::CredibilityMetrics;
pub use custody::CustodyMetrics;
pub use discretize::discretize_0_5;

/// Base-layer result for one claim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseMetrics {
    /// Distinct evidence items that resolved.
    pub evidence_count: usize,
    /// Cited ids with no matching evidence item.
    pub unresolved_evidence_ids: Vec<String>,
    pub custody: CustodyMetrics,
    pub credibility: CredibilityMetrics,
    pub corroboration: CorroborationMetrics,
}

impl BaseMetrics {
    /// True when no evidence item resolved for the claim.
    pub fn is_empty(&self) -> bool {
        self.evidence_count == 0
    }
}

/// Computes [`BaseMetrics`] for claims against a document's evidence index.
pub struct BaseMetricsEngine<'a> {
    config: &'a EvidenceConfig,
    index: HashMap<&'a str, &'a EvidenceItem>,
}

impl<'a> BaseMetricsEngine<'a> {
    pub fn new(config: &'a EvidenceConfig, index: HashMap<&'a str, &'a EvidenceItem>) -> Self {
        Self { config, index }
    }

    /// Resolve a claim's evidence ids. Duplicates are counted once.
    pub fn resolve(&self, claim: &Claim) -> (Vec<&'a EvidenceItem>, Vec<String>) {
        let mut seen = HashSet::new();
        let mut items = Vec::with_capacity(claim.evidence_ids.len());
        let mut unresolved = Vec::new();
        for id in &claim.evidence_ids {
            if !seen.insert(id.as_str()) {
                continue;
            }
            match self.index.get(id.as_str()) {
                Some(item) => items.push(*item),
                None => unresolved.push(id.clone()),
            }
        }
        (items, unresolved)
    }

    pub fn compute(&self, claim: &Claim) -> BaseMetrics {
        let (items, unresolved_evidence_ids) = self.resolve(claim);
        let mut metrics = compute_from_items(&items, self.config);
        metrics.unresolved_evidence_ids = unresolved_evidence_ids;
        metrics
    }
}

/// Base metrics for an already-resolved set of items.
///
/// Zero items yield all-zero metrics.
pub fn compute_from_items(items: &[&EvidenceItem], config: &EvidenceConfig) -> BaseMetrics {
    let corroboration = corroboration::compute(items, config);
    let credibility = credibility::compute(items, corroboration.modality_diversity);
    let custody = custody::blend(items, config).balanced(
        credibility.score,
        corroboration.score,
        config,
    );

    BaseMetrics {
        evidence_count: items.len(),
        unresolved_evidence_ids: Vec::new(),
        custody,
        credibility,
        corroboration,
    }
}
