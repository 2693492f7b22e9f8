//! Defines command-line interface options using `clap` for the ZonalPlot binary.
//!
//! The analysis itself (file, variable, latitude) is fixed in `config`; the
//! flags here only control logging and threading.

use clap::Parser;

/// Plots the zonal mean of a NetCDF variable at one latitude over time
#[derive(Parser, Debug)]
#[command(
    author = "Sam Green",
    version,
    name = "ZonalPlot",
    about = "Zonal-mean time series of a NetCDF field at a fixed latitude"
)]
pub struct Args {
    /// Enable verbose (debug) logging. RUST_LOG takes precedence when set.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Number of threads to use for the zonal reduction. Defaults to number of CPU cores.
    #[arg(short = 't', long)]
    pub threads: Option<usize>,
}

impl Args {
    /// Log filter used when RUST_LOG is not set
    pub fn default_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
