use serde::{Deserialize, Serialize};

/// Claim-level features scored by the extraction step, each in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ClaimFeatures {
    pub coherence: f64,
    pub confidence_discipline: f64,
    pub compliance_mapping: f64,
}

/// The five custody indicators carried in `score_details.custody`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CustodyIndicators {
    pub provenance: f64,
    pub integrity: f64,
    pub time_anchors: f64,
    pub artifact_identifiers: f64,
    pub versioning: f64,
}

impl CustodyIndicators {
    /// Mean of the five indicators.
    pub fn quality(&self) -> f64 {
        crate::numeric::mean(&[
            self.provenance,
            self.integrity,
            self.time_anchors,
            self.artifact_identifiers,
            self.versioning,
        ])
    }
}

/// Quantities read from the upstream producer's `score_details`.
///
/// `None` means the producer did not supply the field, and the base layer
/// derives it from the evidence items instead. A supplied but malformed value
/// is `Some(0.0)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpstreamDetails {
    pub grounding: f64,
    pub anchor_coverage: f64,
    pub anchor_count: f64,
    pub custody: CustodyIndicators,
    pub eligible_source_count: Option<f64>,
    pub raw_source_count: Option<f64>,
    pub quality_mean: Option<f64>,
    pub source_diversity: Option<f64>,
    pub corroboration_eligible_source_count: Option<f64>,
    pub source_quantity: Option<f64>,
    pub clarity: Option<f64>,
}

/// A claim to be scored. Source fields are never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub claim_id: String,
    /// Severity multiplier for document-level aggregation, >= 0.
    pub gravity_weight: f64,
    pub evidence_ids: Vec<String>,
    /// Support level the claim must reach, in [0, 1].
    pub required_threshold_0_1: f64,
    pub claim_features: ClaimFeatures,
    pub upstream: UpstreamDetails,
}

impl Claim {
    pub fn new(claim_id: impl Into<String>) -> Self {
        Self {
            claim_id: claim_id.into(),
            gravity_weight: 1.0,
            evidence_ids: Vec::new(),
            required_threshold_0_1: 0.5,
            claim_features: ClaimFeatures::default(),
            upstream: UpstreamDetails::default(),
        }
    }

    pub fn with_evidence(mut self, ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.evidence_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_gravity(mut self, gravity_weight: f64) -> Self {
        self.gravity_weight = gravity_weight;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.required_threshold_0_1 = threshold;
        self
    }

    pub fn with_features(mut self, features: ClaimFeatures) -> Self {
        self.claim_features = features;
        self
    }

    pub fn with_upstream(mut self, upstream: UpstreamDetails) -> Self {
        self.upstream = upstream;
        self
    }
}
