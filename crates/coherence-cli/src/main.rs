use anyhow::Result;
use clap::Parser;
use coherence_falsifier::{extract_micro_laws, run_sweep, SweepConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;
use tracing::info;

/// Fractal falsification sweep over the coherence ratio.
#[derive(Debug, Parser)]
#[command(name = "coherence-cli", version)]
struct Args {
    /// Number of parameter vectors to draw. Must be positive.
    #[arg(long, default_value_t = 100_000)]
    n_simulations: i64,

    /// RNG seed for a reproducible sweep. Unseeded runs use OS entropy.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    // Fail before any simulation work on a non-positive count.
    let config = SweepConfig::new(args.n_simulations)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!(
        n_simulations = config.n_simulations,
        "initiating fractal sweep"
    );
    let start = Instant::now();
    let table = run_sweep(config.n_simulations, &mut rng);
    info!(
        elapsed_s = start.elapsed().as_secs_f64(),
        rows = table.len(),
        "sweep complete"
    );

    let report = extract_micro_laws(&table);
    println!("{}", serde_json::to_string_pretty(&report.summary())?);
    Ok(())
}
