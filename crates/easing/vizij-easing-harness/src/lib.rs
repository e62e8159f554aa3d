//! Timing and output-dump harnesses for `vizij-easing-core`.
//!
//! Both binaries share flag scanning ([`args`]), parameter resolution
//! ([`config`]) and the report sink ([`sink`]); [`perf`] and [`results`]
//! hold the two evaluation loops.

pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod perf;
pub mod results;
pub mod sink;

pub use args::{scan_args, wants_help, ScannedArgs};
pub use config::{HarnessConfig, PerfParams, ResultsParams};
pub use error::{ArgError, HarnessError};
pub use logging::init_tracing;
pub use sink::OutputSink;

/// Process arguments without the program name, exactly as the OS passed
/// them.
pub fn cli_args() -> Vec<std::ffi::OsString> {
    std::env::args_os().skip(1).collect()
}
