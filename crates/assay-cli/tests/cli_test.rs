use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::{json, Value};

fn assay(input: &Path, output: &Path, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_assay"))
        .arg("--input")
        .arg(input)
        .arg("--output")
        .arg(output)
        .args(extra)
        .env("ASSAY_LOG", "off")
        .output()
        .expect("failed to launch assay")
}

fn sample() -> Value {
    json!({
        "doc_id": "cli-doc",
        "evidence_items": [{
            "evidence_id": "e1",
            "origin_id": "o1",
            "modalities": ["document"],
            "features": {"I": 1.0, "A": 1.0, "M": 1.0, "P": 1.0, "T": 1.0}
        }],
        "claims": [{
            "claim_id": "c1",
            "gravity_weight": 1.0,
            "evidence_ids": ["e1"],
            "required_threshold_0_1": 0.5,
            "claim_features": {"coherence": 1.0, "confidence_discipline": 1.0, "compliance_mapping": 1.0}
        }]
    })
}

#[test]
fn scores_a_document_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.json");
    let output = dir.path().join("out.json");
    fs::write(&input, serde_json::to_vec(&sample()).unwrap()).unwrap();

    let result = assay(&input, &output, &["--pretty"]);
    assert!(result.status.success(), "stderr: {}", String::from_utf8_lossy(&result.stderr));

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains('\n'));
    let scored: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(scored["doc_id"], "cli-doc");
    assert!(scored["claims"][0]["scores"]["belief_0_100"].is_number());
    assert!(scored["report_version"].is_string());
}

#[test]
fn invalid_json_fails_without_writing_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.json");
    let output = dir.path().join("out.json");
    fs::write(&input, b"{ not json").unwrap();

    let result = assay(&input, &output, &[]);
    assert!(!result.status.success());
    assert!(!output.exists());
}

#[test]
fn structural_error_fails_and_keeps_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.json");
    let output = dir.path().join("out.json");
    fs::write(&input, br#"{"doc_id": "d", "claims": "nope"}"#).unwrap();
    fs::write(&output, b"previous").unwrap();

    let result = assay(&input, &output, &[]);
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("$.claims"));
    assert_eq!(fs::read(&output).unwrap(), b"previous");
}

#[test]
fn missing_input_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = assay(&dir.path().join("absent.json"), &dir.path().join("out.json"), &[]);
    assert!(!result.status.success());
}

#[test]
fn output_is_byte_identical_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.json");
    fs::write(&input, serde_json::to_vec(&sample()).unwrap()).unwrap();

    let a = dir.path().join("a.json");
    let b = dir.path().join("b.json");
    assert!(assay(&input, &a, &[]).status.success());
    assert!(assay(&input, &b, &[]).status.success());
    assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
}
