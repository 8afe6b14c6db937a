use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a field was coerced instead of read as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CoercionReason {
    /// A required field was absent; read as 0.0 (or empty for ids).
    Missing,
    /// The value was present but not a number; read as 0.0.
    NotNumeric { found: String },
    /// The value was numeric but outside its valid range and was clamped.
    OutOfRange { value: f64, clamped_to: f64 },
    /// A claim cites an evidence id that no evidence item carries.
    UnresolvedReference { id: String },
    /// A second evidence item reuses an id; the first one wins.
    DuplicateId { id: String },
    /// A non-numeric field had the wrong JSON type; its empty value was used.
    WrongType { expected: String, found: String },
}

/// Non-fatal record of a field the reader had to coerce.
///
/// Partial upstream extraction failures end up here. The coerced value is
/// always the fail-closed one, so a warning never inflates a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoercionWarning {
    /// JSONPath-style location, e.g. `$.claims[2].gravity_weight`.
    pub path: String,
    pub reason: CoercionReason,
}

impl CoercionWarning {
    pub fn new(path: impl Into<String>, reason: CoercionReason) -> Self {
        Self {
            path: path.into(),
            reason,
        }
    }
}

impl fmt::Display for CoercionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            CoercionReason::Missing => write!(f, "{}: missing, using empty default", self.path),
            CoercionReason::NotNumeric { found } => {
                write!(f, "{}: expected a number, found {found}; read as 0.0", self.path)
            }
            CoercionReason::OutOfRange { value, clamped_to } => {
                write!(f, "{}: {value} out of range, clamped to {clamped_to}", self.path)
            }
            CoercionReason::UnresolvedReference { id } => {
                write!(f, "{}: evidence id {id:?} does not resolve", self.path)
            }
            CoercionReason::DuplicateId { id } => {
                write!(f, "{}: duplicate evidence id {id:?} ignored", self.path)
            }
            CoercionReason::WrongType { expected, found } => {
                write!(f, "{}: expected {expected}, found {found}", self.path)
            }
        }
    }
}
