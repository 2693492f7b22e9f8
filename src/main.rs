//! Entry point for the ZonalPlot application.
//! Sets up logging and the thread pool, then runs the fixed analysis.

use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;
use zonal_plot::cli::Args;
use zonal_plot::config::AnalysisConfig;
use zonal_plot::parallel::{get_parallel_info, ParallelConfig};
use zonal_plot::pipeline::run;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.default_log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    println!("------------------------------------------------------------------");
    println!("              ZonalPlot - zonal-mean time series");
    println!("------------------------------------------------------------------");

    ParallelConfig::new(args.threads).setup_global_pool()?;
    get_parallel_info().log();

    let config = AnalysisConfig::default();
    let series = run(&config)?;

    println!(
        "✅ Saved {} at {:?}° ({} time steps) to {}",
        series.variable_name,
        series.latitude,
        series.values.len(),
        config.output_file.display()
    );

    Ok(())
}
