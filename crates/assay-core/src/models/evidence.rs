use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The five per-item feature scores, each in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EvidenceFeatures {
    /// Importance of the item to the claim.
    #[serde(rename = "I")]
    pub importance: f64,
    /// Authenticity.
    #[serde(rename = "A")]
    pub authenticity: f64,
    /// Methodology rigor.
    #[serde(rename = "M")]
    pub methodology: f64,
    /// Procedural testing.
    #[serde(rename = "P")]
    pub procedural_testing: f64,
    /// Time proximity.
    #[serde(rename = "T")]
    pub time_proximity: f64,
}

impl EvidenceFeatures {
    /// All five features set to the same value.
    pub fn uniform(value: f64) -> Self {
        Self {
            importance: value,
            authenticity: value,
            methodology: value,
            procedural_testing: value,
            time_proximity: value,
        }
    }
}

/// One piece of evidence produced by the upstream extraction step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceItem {
    pub evidence_id: String,
    /// Independent-source cluster key. Items sharing an origin corroborate
    /// as one source.
    pub origin_id: String,
    /// Media types the item spans (document, image, log, ...).
    pub modalities: BTreeSet<String>,
    pub features: EvidenceFeatures,
}

impl EvidenceItem {
    pub fn new(
        evidence_id: impl Into<String>,
        origin_id: impl Into<String>,
        modalities: impl IntoIterator<Item = impl Into<String>>,
        features: EvidenceFeatures,
    ) -> Self {
        Self {
            evidence_id: evidence_id.into(),
            origin_id: origin_id.into(),
            modalities: modalities.into_iter().map(Into::into).collect(),
            features,
        }
    }
}
