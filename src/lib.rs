//! ZonalPlot: zonal-mean time series from NetCDF climate output
//!
//! Reads one (time, lat, lon) variable from a NetCDF file, averages it over
//! longitude, interpolates the zonal mean linearly to one latitude and plots
//! the resulting time series to `figure.png`.
//!
//! ## Module Organization
//!
//! - [`config`]: the fixed analysis inputs
//! - [`netcdf_io`]: loading coordinates and the data variable
//! - [`statistics`]: zonal (longitude) mean
//! - [`interpolation`]: piecewise-linear interpolation along latitude
//! - [`plotting`]: chart rendering and PNG output
//! - [`pipeline`]: the stages wired together
//! - [`parallel`]: Rayon thread pool configuration
//! - [`errors`]: centralized error handling
//!
//! ## Usage
//! ```rust,no_run
//! use zonal_plot::prelude::*;
//!
//! let config = AnalysisConfig::new("data.nc", "temperature", 45.0);
//! let series = zonal_plot::pipeline::run(&config).unwrap();
//! println!("{} values written to {}", series.values.len(), config.output_file.display());
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod interpolation;
pub mod netcdf_io;
pub mod parallel;
pub mod pipeline;
pub mod plotting;
pub mod statistics;

pub use errors::{Result, ZonalPlotError};

pub mod prelude {
    //! Commonly used imports for convenience
    pub use crate::config::AnalysisConfig;
    pub use crate::errors::{Result, ZonalPlotError};
    pub use crate::interpolation::{interpolate_to_latitude, LinearInterpolator};
    pub use crate::netcdf_io::{load_field, GriddedField};
    pub use crate::parallel::ParallelConfig;
    pub use crate::pipeline::{analyze, run, ZonalSeries};
    pub use crate::plotting::{axis_extents, render_time_series, AxisExtents, FigureStyle};
    pub use crate::statistics::zonal_mean;
}
