//! Sample dump across every easing (`easings_results`).

use std::ffi::OsStr;
use std::io::{self, Write};

use tracing::info;
use vizij_easing_core::{Easing, EASINGS};

use crate::args::scan_args;
use crate::config::{HarnessConfig, ResultsParams};
use crate::error::Result;
use crate::sink::OutputSink;

pub const USAGE: &str = "vizij-easing-core test program
  usage: ./easings_results [--help]/[OPTIONS]
    Possible options are:
      --b=<val>: Makes <val> the starting value to interpolate
      --c=<val>: Makes <val> the total change in b that needs to occur
      --d=<val>: Makes <val> the total time the interpolation takes
      --td=<val>: Makes <val> the time unit advanced in each iteration
      --out=<file>: Writes the results to a stream specified by <file>
    <val> must be a floating-point value inside a range defined by the
    program for each option. <file> must be a valid path to a file or
    stream.
  If no values or invalid values are provided, the program will use a
  predefined default for each option. If no <file> is provided, the
  program will output to stdout. If any option is provided more than
  once, only the first occurrence will be taken into account.
";

/// Write one easing's block: name, separator, then one indexed line per
/// sample at `t = 0, td, 2td, ...`, then a blank line. Each sample is
/// written as soon as it is computed.
pub fn write_block<W: Write>(
    out: &mut W,
    easing: &Easing,
    params: &ResultsParams,
    iterations: u64,
) -> io::Result<()> {
    write!(out, "{}:\n--------\n", easing.name)?;
    let mut t = 0.0f32;
    for j in 0..iterations {
        let v = easing.eval(t, params.b, params.c, params.d);
        writeln!(out, "{j:>5}: {v:>12.6}")?;
        t += params.td;
    }
    writeln!(out)
}

pub fn run<W: Write>(params: &ResultsParams, out: &mut W) -> io::Result<()> {
    let iterations = params.iterations();
    info!("Doing {iterations} iterations");
    for easing in EASINGS.iter() {
        write_block(out, easing, params, iterations)?;
    }
    Ok(())
}

/// Whole `easings_results` flow after `--help` handling.
pub fn execute<S: AsRef<OsStr>>(args: &[S]) -> Result<()> {
    info!("easings_results, vizij-easing-core test program");

    let scanned = scan_args(args, &HarnessConfig::RESULTS);
    let params = ResultsParams::resolve(&scanned);

    info!(
        "Using args b = {:.6}, c = {:.6}, d = {:.6}, td = {:.6}",
        params.b, params.c, params.d, params.td
    );

    let mut sink = OutputSink::open(params.out.as_deref())?;
    if let Some(path) = sink.path() {
        info!("Using file {}", path.display());
    }
    run(&params, &mut sink)?;
    sink.flush()?;
    Ok(())
}
