//! Compares the library heuristics on random obstacle grids.
//!
//! Run: cargo run --bin gridstar-bench

use gridstar_bench::report::{format_averages, format_run};
use gridstar_bench::{BenchConfig, BenchError, compare, render};
use gridstar_paths::{Manhattan, search};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() {
    let config = BenchConfig::default();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_log_filter()));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    if let Err(e) = run(&config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(config: &BenchConfig) -> Result<(), BenchError> {
    let mut generator = config.generator();

    let sample = generator.scenario(config.size, config.size, config.obstacle_prob)?;
    let result = search(&sample.grid, sample.start, sample.goal, &Manhattan)?;
    println!("Sample Grid with Path (Manhattan heuristic):");
    print!(
        "{}",
        render(&sample.grid, sample.start, sample.goal, result.path.as_ref())
    );

    info!(runs = config.runs, size = config.size, "comparing heuristics");
    let comparison = compare(config, &mut generator)?;
    for run in &comparison.runs {
        print!("{}", format_run(run));
    }
    print!("{}", format_averages(&comparison.averages()));
    Ok(())
}
