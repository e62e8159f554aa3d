//! Per-call timing across every easing (`easings_perftest`).

use std::ffi::OsStr;
use std::hint::black_box;
use std::io::{self, Write};
use std::time::Duration;

use cpu_time::ProcessTime;
use tracing::info;
use vizij_easing_core::{Easing, EASINGS};

use crate::args::scan_args;
use crate::config::{HarnessConfig, PerfParams, MIN_TD};
use crate::error::Result;
use crate::sink::OutputSink;

/// Clock ticks per second; one tick is a microsecond.
pub const CLOCKS_PER_SEC: u64 = 1_000_000;

pub fn usage() -> String {
    format!(
        "vizij-easing-core performance testing program
  usage: ./easings_perftest [--help]/[OPTIONS]
    Possible options are:
      --b=<val>: Makes <val> the starting value to interpolate
      --c=<val>: Makes <val> the total change in b that needs to occur
      --d=<val>: Makes <val> the total time the interpolation takes
      --td=<val>: Makes <val> the time unit advanced in each iteration
      --it=<ival>: Makes <ival> the number of iterations used
      --out=<file>: Writes the results to a stream specified by <file>
    <val> must be a floating-point value inside a range defined by the
    program for each option. <ival> must be an integer value inside a
    range defined by the program. <file> must be a valid path to a file
    or stream.
  If no values or invalid values are provided, the program will use a
  predefined default for each option. If 'td' is set to a value below
  {MIN_TD:.6}, the time step value used will be computed from the number of
  iterations. If 'it' is set to a value below 1, the number of
  iterations will be computed from the total time duration and the time
  step set. If no <file> is provided, the program will output to
  stdout. If any option is provided more than once, only the first
  occurrence will be taken into account.
"
    )
}

/// Aggregate cost of one easing's inner loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    pub name: &'static str,
    pub clocks: u64,
    pub iterations: i64,
}

impl Timing {
    pub fn clocks_per_iter(&self) -> f64 {
        self.clocks as f64 / self.iterations as f64
    }
}

/// Whole ticks in `elapsed`, truncated.
pub fn to_clocks(elapsed: Duration) -> u64 {
    (elapsed.as_nanos() * u128::from(CLOCKS_PER_SEC) / 1_000_000_000) as u64
}

/// Process CPU time spent in `work`, in clock ticks. Time the process
/// spends descheduled or asleep is not counted.
pub fn cpu_clocks<F: FnOnce()>(work: F) -> io::Result<u64> {
    let start = ProcessTime::try_now()?;
    work();
    Ok(to_clocks(start.try_elapsed()?))
}

/// Run `easing` `params.it` times from `t = 0`, stepping by `td`, and time
/// the whole loop.
pub fn time_easing(easing: &Easing, params: &PerfParams) -> io::Result<Timing> {
    let (b, c, d, td) = (params.b, params.c, params.d, params.td);

    let clocks = cpu_clocks(|| {
        let mut t = 0.0f32;
        for _ in 0..params.it {
            // Keep the call alive; only its cost matters.
            black_box(easing.eval(black_box(t), b, c, d));
            t += td;
        }
    })?;

    Ok(Timing {
        name: easing.name,
        clocks,
        iterations: params.it,
    })
}

pub fn write_header<W: Write>(out: &mut W, params: &PerfParams) -> io::Result<()> {
    write!(
        out,
        "arg_b = {:.6},\narg_c = {:.6},\narg_d = {:.6},\narg_td = {:.6},\n",
        params.b, params.c, params.d, params.td
    )?;
    write!(out, "Doing {} iterations per function\n\n", params.it)
}

pub fn write_timing<W: Write>(out: &mut W, timing: &Timing) -> io::Result<()> {
    write!(
        out,
        "{}:\n {:>10} clocks, {:>10.6} clks / iter\n\n",
        timing.name,
        timing.clocks,
        timing.clocks_per_iter()
    )
}

/// Time every easing in table order, writing each block as soon as it is
/// measured.
pub fn run<W: Write>(params: &PerfParams, out: &mut W) -> io::Result<Vec<Timing>> {
    write_header(out, params)?;
    let mut timings = Vec::with_capacity(EASINGS.len());
    for easing in EASINGS.iter() {
        let timing = time_easing(easing, params)?;
        write_timing(out, &timing)?;
        timings.push(timing);
    }
    Ok(timings)
}

/// Whole `easings_perftest` flow after `--help` handling.
pub fn execute<S: AsRef<OsStr>>(args: &[S]) -> Result<()> {
    info!("easings_perftest, vizij-easing-core performance testing tool");

    let scanned = scan_args(args, &HarnessConfig::PERFTEST);
    // Resolve before opening the sink so a fatal config never touches the file.
    let params = PerfParams::resolve(&scanned)?;
    let mut sink = OutputSink::open(params.out.as_deref())?;
    if let Some(path) = sink.path() {
        info!("Using file {}", path.display());
    }

    info!(
        "Using args b = {:.6}, c = {:.6}, d = {:.6}, td = {:.6}",
        params.b, params.c, params.d, params.td
    );

    run(&params, &mut sink)?;
    sink.flush()?;
    Ok(())
}
