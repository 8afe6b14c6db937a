//! # assay-core
//!
//! Foundation crate for the Assay evidentiary scoring engine.
//! Defines the claim/evidence data model, errors, the calibration table,
//! numeric primitives, and the fail-closed JSON reader.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod numeric;
pub mod reader;

// Re-export the most commonly used types at the crate root.
pub use config::CalibrationConfig;
pub use errors::{AssayError, AssayResult, CoercionWarning};
pub use models::{Axis, Claim, EvidenceItem, PerAxis, ScoreReadyDocument};
