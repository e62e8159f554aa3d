use anyhow::Context;
use vizij_easing_harness::{cli_args, init_tracing, perf, wants_help};

fn main() -> anyhow::Result<()> {
    let args = cli_args();
    if wants_help(&args) {
        eprint!("{}", perf::usage());
        return Ok(());
    }

    init_tracing();
    perf::execute(&args).context("easings_perftest failed")?;
    Ok(())
}
