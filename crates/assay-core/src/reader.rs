//! Fail-closed reader for score-ready JSON.
//!
//! Structural problems (outer value not an object, `claims` or
//! `evidence_items` not arrays, entries not objects) are fatal. Everything
//! else is coerced: malformed numerics read as 0.0, out-of-range values are
//! clamped, and each coercion is recorded as a [`CoercionWarning`].

use std::collections::{BTreeSet, HashSet};

use serde_json::{Map, Value};
use tracing::debug;

use crate::errors::{AssayError, AssayResult, CoercionReason, CoercionWarning};
use crate::models::{
    Claim, ClaimFeatures, CustodyIndicators, EvidenceFeatures, EvidenceItem, ScoreReadyDocument,
    UpstreamDetails,
};

/// Read a score-ready document from its JSON value.
pub fn read_document(value: &Value) -> AssayResult<ScoreReadyDocument> {
    let root = value
        .as_object()
        .ok_or_else(|| AssayError::structure("$", format!("expected an object, found {}", type_name(value))))?;

    let mut reader = Coercer::default();
    let doc_id = reader.string(root.get("doc_id"), "$.doc_id");

    let evidence_items = array_field(root, "evidence_items")?
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let path = format!("$.evidence_items[{i}]");
            let obj = entry.as_object().ok_or_else(|| {
                AssayError::structure(&path, format!("expected an object, found {}", type_name(entry)))
            })?;
            Ok(reader.evidence_item(obj, &path))
        })
        .collect::<AssayResult<Vec<_>>>()?;

    let mut seen = HashSet::new();
    for (i, item) in evidence_items.iter().enumerate() {
        if !seen.insert(item.evidence_id.as_str()) {
            reader.warn(
                format!("$.evidence_items[{i}].evidence_id"),
                CoercionReason::DuplicateId {
                    id: item.evidence_id.clone(),
                },
            );
        }
    }

    let claims = array_field(root, "claims")?
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let path = format!("$.claims[{i}]");
            let obj = entry.as_object().ok_or_else(|| {
                AssayError::structure(&path, format!("expected an object, found {}", type_name(entry)))
            })?;
            Ok(reader.claim(obj, &path))
        })
        .collect::<AssayResult<Vec<_>>>()?;

    for (i, claim) in claims.iter().enumerate() {
        for (j, id) in claim.evidence_ids.iter().enumerate() {
            if !seen.contains(id.as_str()) {
                reader.warn(
                    format!("$.claims[{i}].evidence_ids[{j}]"),
                    CoercionReason::UnresolvedReference { id: id.clone() },
                );
            }
        }
    }

    debug!(
        doc_id = %doc_id,
        claims = claims.len(),
        evidence_items = evidence_items.len(),
        warnings = reader.warnings.len(),
        "read score-ready document"
    );

    Ok(ScoreReadyDocument {
        doc_id,
        evidence_items,
        claims,
        warnings: reader.warnings,
    })
}

/// A missing list is an empty list; a present non-list is fatal.
fn array_field<'a>(root: &'a Map<String, Value>, key: &str) -> AssayResult<&'a [Value]> {
    match root.get(key) {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(other) => Err(AssayError::structure(
            format!("$.{key}"),
            format!("expected an array, found {}", type_name(other)),
        )),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Numbers and numeric strings read as f64; everything else fails.
fn as_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

#[derive(Default)]
struct Coercer {
    warnings: Vec<CoercionWarning>,
}

impl Coercer {
    fn warn(&mut self, path: impl Into<String>, reason: CoercionReason) {
        self.warnings.push(CoercionWarning::new(path, reason));
    }

    fn string(&mut self, value: Option<&Value>, path: &str) -> String {
        match value {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            None | Some(Value::Null) => {
                self.warn(path, CoercionReason::Missing);
                String::new()
            }
            Some(other) => {
                self.warn(
                    path,
                    CoercionReason::WrongType {
                        expected: "string".into(),
                        found: type_name(other).into(),
                    },
                );
                String::new()
            }
        }
    }

    fn strings(&mut self, value: Option<&Value>, path: &str) -> Vec<String> {
        match value {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .filter_map(|(i, item)| match item {
                    Value::String(s) => Some(s.clone()),
                    Value::Number(n) => Some(n.to_string()),
                    other => {
                        self.warn(
                            format!("{path}[{i}]"),
                            CoercionReason::WrongType {
                                expected: "string".into(),
                                found: type_name(other).into(),
                            },
                        );
                        None
                    }
                })
                .collect(),
            Some(other) => {
                self.warn(
                    path,
                    CoercionReason::WrongType {
                        expected: "array".into(),
                        found: type_name(other).into(),
                    },
                );
                Vec::new()
            }
        }
    }

    /// Optional nested object. Missing is silent; a wrong type warns.
    fn object<'a>(&mut self, value: Option<&'a Value>, path: &str) -> Option<&'a Map<String, Value>> {
        match value {
            None | Some(Value::Null) => None,
            Some(Value::Object(obj)) => Some(obj),
            Some(other) => {
                self.warn(
                    path,
                    CoercionReason::WrongType {
                        expected: "object".into(),
                        found: type_name(other).into(),
                    },
                );
                None
            }
        }
    }

    /// Present-field numeric coercion. `None` only when the field is absent.
    fn number(&mut self, value: Option<&Value>, path: &str) -> Option<f64> {
        match value {
            None | Some(Value::Null) => None,
            Some(v) => Some(as_number(v).unwrap_or_else(|| {
                self.warn(
                    path,
                    CoercionReason::NotNumeric {
                        found: type_name(v).into(),
                    },
                );
                0.0
            })),
        }
    }

    fn clamp(&mut self, value: f64, lo: f64, hi: f64, path: &str) -> f64 {
        let clamped = value.clamp(lo, hi);
        if clamped != value {
            self.warn(
                path,
                CoercionReason::OutOfRange {
                    value,
                    clamped_to: clamped,
                },
            );
        }
        clamped
    }

    /// Required [0, 1] field: missing warns and reads as 0.0.
    fn required_unit(&mut self, obj: Option<&Map<String, Value>>, key: &str, path: &str) -> f64 {
        let path = format!("{path}.{key}");
        match self.number(obj.and_then(|o| o.get(key)), &path) {
            Some(n) => self.clamp(n, 0.0, 1.0, &path),
            None => {
                self.warn(&path, CoercionReason::Missing);
                0.0
            }
        }
    }

    /// Optional [0, 1] field.
    fn optional_unit(&mut self, obj: Option<&Map<String, Value>>, key: &str, path: &str) -> Option<f64> {
        let path = format!("{path}.{key}");
        self.number(obj.and_then(|o| o.get(key)), &path)
            .map(|n| self.clamp(n, 0.0, 1.0, &path))
    }

    /// Optional non-negative count.
    fn optional_count(&mut self, obj: Option<&Map<String, Value>>, key: &str, path: &str) -> Option<f64> {
        let path = format!("{path}.{key}");
        self.number(obj.and_then(|o| o.get(key)), &path)
            .map(|n| self.clamp(n, 0.0, f64::MAX, &path))
    }

    fn evidence_item(&mut self, obj: &Map<String, Value>, path: &str) -> EvidenceItem {
        let evidence_id = self.string(obj.get("evidence_id"), &format!("{path}.evidence_id"));
        let origin_id = self.string(obj.get("origin_id"), &format!("{path}.origin_id"));
        let modalities: BTreeSet<String> = self
            .strings(obj.get("modalities"), &format!("{path}.modalities"))
            .into_iter()
            .collect();

        let features_path = format!("{path}.features");
        let features = self.object(obj.get("features"), &features_path);
        let features = EvidenceFeatures {
            importance: self.required_unit(features, "I", &features_path),
            authenticity: self.required_unit(features, "A", &features_path),
            methodology: self.required_unit(features, "M", &features_path),
            procedural_testing: self.required_unit(features, "P", &features_path),
            time_proximity: self.required_unit(features, "T", &features_path),
        };

        EvidenceItem {
            evidence_id,
            origin_id,
            modalities,
            features,
        }
    }

    fn claim(&mut self, obj: &Map<String, Value>, path: &str) -> Claim {
        let claim_id = self.string(obj.get("claim_id"), &format!("{path}.claim_id"));

        let gravity_path = format!("{path}.gravity_weight");
        let gravity_weight = match self.number(obj.get("gravity_weight"), &gravity_path) {
            Some(n) => self.clamp(n, 0.0, f64::MAX, &gravity_path),
            None => {
                self.warn(&gravity_path, CoercionReason::Missing);
                0.0
            }
        };

        let evidence_ids = self.strings(obj.get("evidence_ids"), &format!("{path}.evidence_ids"));
        let required_threshold_0_1 = self.required_unit(Some(obj), "required_threshold_0_1", path);

        let features_path = format!("{path}.claim_features");
        let features = self.object(obj.get("claim_features"), &features_path);
        let claim_features = ClaimFeatures {
            coherence: self.required_unit(features, "coherence", &features_path),
            confidence_discipline: self.required_unit(features, "confidence_discipline", &features_path),
            compliance_mapping: self.required_unit(features, "compliance_mapping", &features_path),
        };

        let upstream = self.upstream(obj.get("score_details"), &format!("{path}.score_details"));

        Claim {
            claim_id,
            gravity_weight,
            evidence_ids,
            required_threshold_0_1,
            claim_features,
            upstream,
        }
    }

    fn upstream(&mut self, value: Option<&Value>, path: &str) -> UpstreamDetails {
        let Some(details) = self.object(value, path) else {
            return UpstreamDetails::default();
        };

        let grounding_path = format!("{path}.grounding");
        let grounding = self.object(details.get("grounding"), &grounding_path);
        let custody_path = format!("{path}.custody");
        let custody = self.object(details.get("custody"), &custody_path);
        let credibility_path = format!("{path}.credibility");
        let credibility = self.object(details.get("credibility"), &credibility_path);
        let corroboration_path = format!("{path}.corroboration");
        let corroboration = self.object(details.get("corroboration"), &corroboration_path);
        let clarity_path = format!("{path}.clarity");
        let clarity = self.object(details.get("clarity"), &clarity_path);

        UpstreamDetails {
            grounding: self
                .optional_unit(grounding, "score", &grounding_path)
                .unwrap_or(0.0),
            anchor_coverage: self
                .optional_unit(grounding, "anchor_coverage", &grounding_path)
                .unwrap_or(0.0),
            anchor_count: self
                .optional_count(grounding, "anchor_count", &grounding_path)
                .unwrap_or(0.0),
            custody: CustodyIndicators {
                provenance: self.optional_unit(custody, "provenance", &custody_path).unwrap_or(0.0),
                integrity: self.optional_unit(custody, "integrity", &custody_path).unwrap_or(0.0),
                time_anchors: self.optional_unit(custody, "time_anchors", &custody_path).unwrap_or(0.0),
                artifact_identifiers: self
                    .optional_unit(custody, "artifact_identifiers", &custody_path)
                    .unwrap_or(0.0),
                versioning: self.optional_unit(custody, "versioning", &custody_path).unwrap_or(0.0),
            },
            eligible_source_count: self.optional_count(credibility, "eligible_source_count", &credibility_path),
            raw_source_count: self.optional_count(credibility, "raw_source_count", &credibility_path),
            quality_mean: self.optional_unit(credibility, "quality_mean", &credibility_path),
            source_diversity: self.optional_unit(credibility, "source_diversity", &credibility_path),
            corroboration_eligible_source_count: self.optional_count(
                corroboration,
                "eligible_source_count",
                &corroboration_path,
            ),
            source_quantity: self.optional_unit(corroboration, "source_quantity", &corroboration_path),
            clarity: self.optional_unit(clarity, "score", &clarity_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn non_object_root_is_fatal() {
        let err = read_document(&json!([1, 2])).unwrap_err();
        match err {
            AssayError::InputStructure { path, .. } => assert_eq!(path, "$"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn claims_not_a_list_is_fatal_with_path() {
        let err = read_document(&json!({"doc_id": "d", "claims": {"a": 1}})).unwrap_err();
        assert!(err.to_string().contains("$.claims"));
    }

    #[test]
    fn missing_lists_read_as_empty() {
        let doc = read_document(&json!({"doc_id": "d"})).unwrap();
        assert!(doc.claims.is_empty());
        assert!(doc.evidence_items.is_empty());
        assert!(doc.warnings.is_empty());
    }

    #[test]
    fn non_numeric_feature_coerces_to_zero_with_warning() {
        let doc = read_document(&json!({
            "doc_id": "d",
            "evidence_items": [{
                "evidence_id": "e1", "origin_id": "o1", "modalities": ["document"],
                "features": {"I": "high", "A": 1.0, "M": "0.5", "P": 1.4, "T": 1.0}
            }]
        }))
        .unwrap();

        let f = doc.evidence_items[0].features;
        assert_eq!(f.importance, 0.0);
        assert_eq!(f.methodology, 0.5);
        assert_eq!(f.procedural_testing, 1.0);
        assert_eq!(doc.warnings.len(), 2);
        assert_eq!(doc.warnings[0].path, "$.evidence_items[0].features.I");
    }

    #[test]
    fn absent_upstream_counts_stay_none() {
        let doc = read_document(&json!({
            "doc_id": "d",
            "claims": [{
                "claim_id": "c1", "gravity_weight": 1.0, "evidence_ids": [],
                "required_threshold_0_1": 0.5,
                "claim_features": {"coherence": 1, "confidence_discipline": 1, "compliance_mapping": 1},
                "score_details": {"grounding": {"score": 0.8, "anchor_count": 3}}
            }]
        }))
        .unwrap();

        let up = &doc.claims[0].upstream;
        assert_eq!(up.grounding, 0.8);
        assert_eq!(up.anchor_count, 3.0);
        assert_eq!(up.eligible_source_count, None);
        assert_eq!(up.clarity, None);
        assert!(doc.warnings.is_empty());
    }

    #[test]
    fn unresolved_evidence_ids_warn() {
        let doc = read_document(&json!({
            "doc_id": "d",
            "claims": [{"claim_id": "c1", "gravity_weight": 1, "evidence_ids": ["ghost"],
                        "required_threshold_0_1": 0.5,
                        "claim_features": {"coherence": 0, "confidence_discipline": 0, "compliance_mapping": 0}}]
        }))
        .unwrap();
        assert!(doc.warnings.iter().any(|w| matches!(
            &w.reason,
            CoercionReason::UnresolvedReference { id } if id == "ghost"
        )));
    }
}
