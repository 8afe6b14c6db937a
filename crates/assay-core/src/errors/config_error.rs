/// Calibration table errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse calibration table: {reason}")]
    Parse { reason: String },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("calibration constants differ from the {version} contract; tuned tables need a new report_version")]
    UnversionedTuning { version: String },
}
