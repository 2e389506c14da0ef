//! Diagnostic logging via `tracing`.
//!
//! Logs always go to stderr so stdout carries only the table or JSON document.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
fn default_filter(debug: bool) -> &'static str {
    if debug { "warn,eam_cli=debug" } else { "warn" }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `--debug`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(debug)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(debug)
        .without_time()
        .try_init();
}
