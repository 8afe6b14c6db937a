//! Tracing initialization for the `assay` binary.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "ASSAY_LOG";

/// Initialize logging to stderr.
///
/// Reads `ASSAY_LOG` for per-module levels, e.g.
/// `ASSAY_LOG=assay_scoring=debug,assay_core=warn`. Falls back to `assay=info`
/// when unset or invalid. `json` switches to one JSON object per event.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing(json: bool) {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("assay=info"));

        let text = (!json).then(|| {
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
        });
        let structured = json.then(|| {
            fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_current_span(true)
        });

        tracing_subscriber::registry()
            .with(text)
            .with(structured)
            .with(filter)
            .init();
    });
}
