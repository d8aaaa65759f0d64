use clap::Parser;

use monty_bench::experiment::ExperimentRunner;
use monty_bench::logging::init_logging;
use monty_bench::report::{render_table, to_json};

/// Monte Carlo harness comparing the stay and switch strategies.
#[derive(Debug, Parser)]
#[command(
    name = "monty-bench",
    author,
    version,
    about = "Monty Hall stay-vs-switch Monte Carlo experiment"
)]
struct Cli {
    /// Number of paired rounds to simulate.
    #[arg(short = 'n', long, value_name = "TRIALS", default_value_t = 100)]
    trials: usize,

    /// RNG seed; drawn at random (and printed) when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Emit the structured report as JSON instead of the summary table.
    #[arg(long)]
    json: bool,

    /// Log every simulated round at DEBUG level.
    #[arg(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let seed = cli.seed.unwrap_or_else(rand::random);
    let report = ExperimentRunner::new(cli.trials, seed).run();

    if cli.json {
        println!("{}", to_json(&report)?);
    } else {
        print!("{}", render_table(&report));
    }

    Ok(())
}
