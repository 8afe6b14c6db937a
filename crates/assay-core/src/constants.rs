/// Assay crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version stamp of the calibration contract. Any change to a constant in
/// the calibration table must ship under a new value.
pub const REPORT_VERSION: &str = "assay-calibration-v4";

// Keys appended to each claim's `score_details`. Upstream keys are never rewritten.
pub const BASE_METRICS_KEY: &str = "base_metrics_v2";
pub const RAW_SCORES_KEY: &str = "scores_raw_v3";
pub const CALIBRATION_KEY: &str = "statistical_calibration_v4";

// Keys appended to claims and to the document.
pub const CLAIM_SCORES_KEY: &str = "scores";
pub const DOCUMENT_SCORES_KEY: &str = "document_scores";
pub const BOOTSTRAP_KEY: &str = "bootstrap_95ci";
pub const REPORT_VERSION_KEY: &str = "report_version";
pub const AUDIT_KEY: &str = "audit";
