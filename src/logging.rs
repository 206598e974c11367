//! Diagnostic logging.
//!
//! User-facing progress goes to stdout with `println!`. Diagnostics go through
//! `tracing` to stderr and stay quiet unless `SEEDREPO_LOG` asks for more,
//! e.g. `SEEDREPO_LOG=debug` or `SEEDREPO_LOG=seedrepo::forge=trace`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV_VAR: &str = "SEEDREPO_LOG";

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time()
        .try_init();
}
