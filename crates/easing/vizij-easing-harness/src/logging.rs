//! Diagnostic output for the harness binaries.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Route `tracing` events to stderr. `RUST_LOG` overrides the default
/// `info` filter. Safe to call more than once.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
