//! Error types for the easing harnesses.

use std::io;
use std::path::PathBuf;

/// A single `--name=value` flag that could not be accepted.
///
/// These never abort a run: the scanner logs them and keeps the default.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
    /// Nothing parseable after the prefix, or the conversion overflowed.
    #[error("Error reading argument {flag}, using default")]
    Invalid { flag: &'static str },

    /// Parsed fine but fell outside the allowed closed range.
    #[error("Value read for argument {flag} is out of range, using default")]
    OutOfRange { flag: &'static str },

    /// The flag prefix alone does not fit the path buffer.
    #[error("Prefix length of {flag} is longer than allowed")]
    PrefixTooLong { flag: &'static str },
}

/// Fatal harness errors. Any of these ends the process with exit code 1.
#[derive(thiserror::Error, Debug)]
pub enum HarnessError {
    /// `td` and `it` were both set too low, so neither can be derived from the other.
    #[error(
        "td ({td:.6}) can't be lower than {min_td:.6} and it ({it}) can't be lower than 1 at the same time"
    )]
    Underivable { td: f32, it: i64, min_td: f32 },

    #[error("Error opening file {}", path.display())]
    OpenOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, HarnessError>;
