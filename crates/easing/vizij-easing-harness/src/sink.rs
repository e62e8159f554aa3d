//! Report destination: stdout or a single output file.

use std::fs::File;
use std::io::{self, BufWriter, Stdout, Write};
use std::path::{Path, PathBuf};

use crate::error::{HarnessError, Result};

/// Where a harness writes its report.
///
/// The file variant is created (or truncated) on open and closed on drop.
pub enum OutputSink {
    Stdout(BufWriter<Stdout>),
    File { path: PathBuf, writer: BufWriter<File> },
}

impl OutputSink {
    /// `None` selects stdout. A file that cannot be created is fatal.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        match path {
            None => Ok(Self::Stdout(BufWriter::new(io::stdout()))),
            Some(path) => {
                let file = File::create(path).map_err(|source| HarnessError::OpenOutput {
                    path: path.to_path_buf(),
                    source,
                })?;
                Ok(Self::File {
                    path: path.to_path_buf(),
                    writer: BufWriter::new(file),
                })
            }
        }
    }

    /// The output file, or `None` for stdout.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Stdout(_) => None,
            Self::File { path, .. } => Some(path),
        }
    }
}

impl Write for OutputSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(w) => w.write(buf),
            Self::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File { writer, .. } => writer.flush(),
        }
    }
}
