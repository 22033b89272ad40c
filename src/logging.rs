//! Diagnostic logging setup
//!
//! Diagnostics go to stderr through `tracing`; user-facing output stays on
//! stdout. The filter comes from `HULK_LOG` when set, otherwise from the
//! configured level.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV: &str = "HULK_LOG";

/// Install the global subscriber. Safe to call more than once.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
