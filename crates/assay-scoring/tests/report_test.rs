use serde_json::{json, Value};

use assay_core::constants::REPORT_VERSION;
use assay_core::AssayError;
use assay_scoring::ScoringEngine;

fn fixture() -> Value {
    json!({
        "doc_id": "incident-42",
        "source": {"title": "Incident review", "pages": 12},
        "evidence_items": [
            {
                "evidence_id": "e1",
                "origin_id": "ops-log",
                "modalities": ["log"],
                "features": {"I": 0.9, "A": 0.95, "M": 0.8, "P": 0.85, "T": 0.9}
            },
            {
                "evidence_id": "e2",
                "origin_id": "vendor-report",
                "modalities": ["document", "image"],
                "features": {"I": 0.7, "A": 0.8, "M": 0.75, "P": 0.6, "T": 0.7}
            }
        ],
        "claims": [
            {
                "claim_id": "c1",
                "text": "The outage began at 02:14 UTC.",
                "gravity_weight": 2.0,
                "evidence_ids": ["e1", "e2"],
                "required_threshold_0_1": 0.4,
                "claim_features": {
                    "coherence": 0.9,
                    "confidence_discipline": 0.8,
                    "compliance_mapping": 0.7
                },
                "score_details": {
                    "grounding": {"score": 0.8, "anchor_coverage": 0.6, "anchor_count": 3},
                    "custody": {
                        "provenance": 0.9,
                        "integrity": 0.8,
                        "time_anchors": 0.7,
                        "artifact_identifiers": 0.6,
                        "versioning": 0.5
                    },
                    "reviewer_note": "kept verbatim"
                }
            },
            {
                "claim_id": "c2",
                "gravity_weight": 1.0,
                "evidence_ids": ["missing"],
                "required_threshold_0_1": 0.6,
                "claim_features": {
                    "coherence": 0.5,
                    "confidence_discipline": 0.5,
                    "compliance_mapping": 0.5
                }
            }
        ]
    })
}

#[test]
fn output_echoes_input_and_appends_results() {
    let input = fixture();
    let output = ScoringEngine::new().score_value(&input).unwrap();

    assert_eq!(output["doc_id"], input["doc_id"]);
    assert_eq!(output["source"], input["source"]);
    assert_eq!(output["evidence_items"], input["evidence_items"]);
    assert_eq!(output["claims"][0]["text"], input["claims"][0]["text"]);
    assert_eq!(
        output["claims"][0]["score_details"]["reviewer_note"],
        "kept verbatim"
    );
    assert_eq!(
        output["claims"][0]["score_details"]["grounding"],
        input["claims"][0]["score_details"]["grounding"]
    );

    for claim in output["claims"].as_array().unwrap() {
        let details = &claim["score_details"];
        assert!(details["base_metrics_v2"].is_object());
        assert!(details["scores_raw_v3"].is_object());
        assert!(details["statistical_calibration_v4"].is_object());
        assert!(claim["scores"]["belief_0_100"].is_number());
    }

    assert!(output["document_scores"]["belief_avg_0_100"].is_number());
    assert!(output["bootstrap_95ci"]["corroboration"]["ci95_low"].is_number());
    assert_eq!(output["report_version"], REPORT_VERSION);
    assert_eq!(output["audit"]["input_blake3"].as_str().unwrap().len(), 64);
}

#[test]
fn input_is_not_mutated() {
    let input = fixture();
    let before = input.clone();
    let _ = ScoringEngine::new().score_value(&input).unwrap();
    assert_eq!(input, before);
}

#[test]
fn scoring_is_deterministic() {
    let engine = ScoringEngine::new();
    let a = engine.score_value(&fixture()).unwrap();
    let b = engine.score_value(&fixture()).unwrap();
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn coercions_are_reported_in_the_audit() {
    let mut input = fixture();
    input["evidence_items"][1]["features"]["I"] = json!(1.7);
    input["claims"][0]["gravity_weight"] = json!("heavy");

    let output = ScoringEngine::new().score_value(&input).unwrap();
    let warnings = output["audit"]["coercion_warnings"].as_array().unwrap();
    let paths: Vec<&str> = warnings.iter().filter_map(|w| w["path"].as_str()).collect();

    assert!(paths.contains(&"$.evidence_items[1].features.I"));
    assert!(paths.contains(&"$.claims[0].gravity_weight"));
    assert!(paths.contains(&"$.claims[1].evidence_ids[0]"));
    // Echoed input keeps the raw values.
    assert_eq!(output["evidence_items"][1]["features"]["I"], json!(1.7));
}

#[test]
fn unresolved_claim_is_listed_in_base_metrics() {
    let output = ScoringEngine::new().score_value(&fixture()).unwrap();
    let base = &output["claims"][1]["score_details"]["base_metrics_v2"];
    assert_eq!(base["evidence_count"], 0);
    assert_eq!(base["unresolved_evidence_ids"], json!(["missing"]));
    assert_eq!(output["claims"][1]["scores"]["custody_0_100"], json!(0.0));
}

#[test]
fn structural_errors_fail_closed() {
    let engine = ScoringEngine::new();

    let err = engine.score_value(&json!("not a document")).unwrap_err();
    assert!(matches!(err, AssayError::InputStructure { .. }));

    let err = engine
        .score_value(&json!({"doc_id": "d", "claims": [42]}))
        .unwrap_err();
    match err {
        AssayError::InputStructure { path, .. } => assert_eq!(path, "$.claims[0]"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_score_details_are_preserved() {
    let mut input = fixture();
    input["claims"][1]["score_details"] = json!("legacy blob");
    let output = ScoringEngine::new().score_value(&input).unwrap();
    let details = &output["claims"][1]["score_details"];
    assert_eq!(details["upstream_raw"], "legacy blob");
    assert!(details["base_metrics_v2"].is_object());
}

#[test]
fn batch_keeps_input_order() {
    let mut second = fixture();
    second["doc_id"] = json!("incident-43");
    let inputs = vec![fixture(), json!([]), second];

    let results = ScoringEngine::new().score_batch(&inputs);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap()["doc_id"], "incident-42");
    assert!(results[1].is_err());
    assert_eq!(results[2].as_ref().unwrap()["doc_id"], "incident-43");
}
