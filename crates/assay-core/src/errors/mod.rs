mod assay_error;
mod coercion;
mod config_error;

pub use assay_error::AssayError;
pub use coercion::{CoercionReason, CoercionWarning};
pub use config_error::ConfigError;

/// Convenience alias used across the workspace.
pub type AssayResult<T> = Result<T, AssayError>;
