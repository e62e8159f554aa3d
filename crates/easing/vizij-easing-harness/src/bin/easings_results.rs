use anyhow::Context;
use vizij_easing_harness::{cli_args, init_tracing, results, wants_help};

fn main() -> anyhow::Result<()> {
    let args = cli_args();
    if wants_help(&args) {
        eprint!("{}", results::USAGE);
        return Ok(());
    }

    init_tracing();
    results::execute(&args).context("easings_results failed")?;
    Ok(())
}
