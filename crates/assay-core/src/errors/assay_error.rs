use super::ConfigError;

/// Top-level error type for the Assay engine.
///
/// Only structural problems are fatal. Malformed numerics never surface here;
/// they are coerced to 0.0 and reported as [`super::CoercionWarning`]s.
#[derive(Debug, thiserror::Error)]
pub enum AssayError {
    /// The outer document is not an object, or `claims` / `evidence_items`
    /// (or one of their entries) has the wrong shape.
    #[error("input structure error at {path}: {reason}")]
    InputStructure { path: String, reason: String },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl AssayError {
    /// Build an [`AssayError::InputStructure`] for the given JSON path.
    pub fn structure(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InputStructure {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
