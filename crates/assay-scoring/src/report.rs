//! Scored-document output.
//!
//! The input JSON is echoed unchanged and results are appended: `scores` on
//! each claim, three versioned keys inside each claim's `score_details`, and
//! document-level summary keys. Keys supplied upstream are never rewritten.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use assay_core::constants::{
    AUDIT_KEY, BASE_METRICS_KEY, BOOTSTRAP_KEY, CALIBRATION_KEY, CLAIM_SCORES_KEY,
    DOCUMENT_SCORES_KEY, RAW_SCORES_KEY, REPORT_VERSION_KEY,
};
use assay_core::errors::{AssayError, AssayResult, CoercionWarning};
use assay_core::models::{Axis, PerAxis};

use crate::belief::BeliefComposition;
use crate::engine::DocumentScoring;

/// Per-claim scores, used for both `scores` and `scores_raw_v3`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ClaimScores {
    pub custody_0_100: f64,
    pub credibility_0_100: f64,
    pub corroboration_0_100: f64,
    pub clarity_0_100: f64,
    pub confidence_0_100: f64,
    pub evidence_weight_0_100: f64,
    pub evidence_support_0_1: f64,
    pub belief_0_100: f64,
}

impl ClaimScores {
    pub fn new(axes: &PerAxis<f64>, composition: &BeliefComposition) -> Self {
        Self {
            custody_0_100: 100.0 * axes.custody,
            credibility_0_100: 100.0 * axes.credibility,
            corroboration_0_100: 100.0 * axes.corroboration,
            clarity_0_100: 100.0 * axes.clarity,
            confidence_0_100: 100.0 * axes.confidence,
            evidence_weight_0_100: 100.0 * composition.evidence_weight,
            evidence_support_0_1: composition.evidence_support,
            belief_0_100: composition.belief_0_100,
        }
    }

    pub fn axis_0_100(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Custody => self.custody_0_100,
            Axis::Credibility => self.credibility_0_100,
            Axis::Corroboration => self.corroboration_0_100,
            Axis::Clarity => self.clarity_0_100,
            Axis::Confidence => self.confidence_0_100,
        }
    }
}

/// Provenance of a scored document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Audit {
    /// BLAKE3 of the canonical input JSON.
    pub input_blake3: String,
    pub engine_version: String,
    pub coercion_warnings: Vec<CoercionWarning>,
}

/// BLAKE3 hex digest of the canonical serialization of `input`.
pub fn input_digest(input: &Value) -> AssayResult<String> {
    let bytes = serde_json::to_vec(input)?;
    Ok(blake3::hash(&bytes).to_hex().to_string())
}

/// Echo `input` with every result appended.
pub fn render(input: &Value, scoring: &DocumentScoring) -> AssayResult<Value> {
    let audit = Audit {
        input_blake3: input_digest(input)?,
        engine_version: assay_core::constants::VERSION.to_string(),
        coercion_warnings: scoring.warnings.clone(),
    };

    let mut output = input.clone();
    let root = output
        .as_object_mut()
        .ok_or_else(|| AssayError::structure("$", "expected an object"))?;

    if let Some(Value::Array(claims)) = root.get_mut("claims") {
        if claims.len() != scoring.claims.len() {
            return Err(AssayError::structure(
                "$.claims",
                format!(
                    "scored {} claims but input has {}",
                    scoring.claims.len(),
                    claims.len()
                ),
            ));
        }
        for (i, (claim, outcome)) in claims.iter_mut().zip(&scoring.claims).enumerate() {
            let obj = claim
                .as_object_mut()
                .ok_or_else(|| AssayError::structure(format!("$.claims[{i}]"), "expected an object"))?;

            obj.insert(CLAIM_SCORES_KEY.into(), serde_json::to_value(outcome.scores)?);

            let mut details = take_details(obj);
            details.insert(BASE_METRICS_KEY.into(), serde_json::to_value(&outcome.base)?);
            details.insert(RAW_SCORES_KEY.into(), serde_json::to_value(outcome.raw_scores)?);
            details.insert(CALIBRATION_KEY.into(), serde_json::to_value(&outcome.calibration)?);
            obj.insert("score_details".into(), Value::Object(details));
        }
    }

    root.insert(
        DOCUMENT_SCORES_KEY.into(),
        serde_json::to_value(scoring.document_scores)?,
    );
    root.insert(BOOTSTRAP_KEY.into(), serde_json::to_value(scoring.bootstrap_95ci)?);
    root.insert(
        REPORT_VERSION_KEY.into(),
        Value::String(scoring.report_version.clone()),
    );
    root.insert(AUDIT_KEY.into(), serde_json::to_value(audit)?);

    Ok(output)
}

/// Remove the claim's `score_details` as an object, empty when absent. A
/// malformed upstream value is kept under `upstream_raw` rather than dropped.
fn take_details(claim: &mut Map<String, Value>) -> Map<String, Value> {
    match claim.remove("score_details") {
        Some(Value::Object(map)) => map,
        None | Some(Value::Null) => Map::new(),
        Some(other) => {
            let mut wrapped = Map::new();
            wrapped.insert("upstream_raw".into(), other);
            wrapped
        }
    }
}
