//! Littlewood search binary
//!
//! Generates the initial convergent pairs for a bound N, keeps one bucket,
//! and runs the parallel search on the chosen integer backend.

mod cli;

use std::time::Instant;

use clap::Parser;
use littlewood_core::Numeric;
use littlewood_search::{available_threads, run_search, SearchConfig, SearchSpace};
use num_bigint::BigInt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::{Cli, IntegerMode};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Verbosity comes from the command line only.
    tracing_subscriber::registry()
        .with(EnvFilter::new(cli.log_level()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cli.search_config()?;
    config.validate(available_threads())?;

    match cli.int {
        IntegerMode::I64 => run::<i64>(&cli, &config),
        IntegerMode::I128 => run::<i128>(&cli, &config),
        IntegerMode::Bigint => run::<BigInt>(&cli, &config),
    }
}

fn run<T: Numeric>(cli: &Cli, config: &SearchConfig) -> Result<(), Box<dyn std::error::Error>> {
    let space = SearchSpace::<T>::generate(config)?;

    if cli.print {
        for pair in &space.pairs {
            println!("{pair}");
        }
        return Ok(());
    }

    println!("Using {} threads", config.threads);
    println!("N = {}", config.n);
    println!("Integer mode: {}", T::BACKEND);
    println!("Initial pairs: {}", space.total);
    println!(
        "Processing bucket #{} of {} ({} pairs)",
        config.bucket.index(),
        config.bucket.count(),
        space.len()
    );

    let start = Instant::now();
    let report = run_search(config, space.pairs)?;
    println!("Done in {:.3} seconds", start.elapsed().as_secs_f64());
    println!("{report}");
    Ok(())
}
