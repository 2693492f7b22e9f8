//! The analysis pipeline: load, reduce, interpolate, render.

use crate::config::AnalysisConfig;
use crate::errors::Result;
use crate::interpolation::interpolate_to_latitude;
use crate::netcdf_io::{load_field, LON_VAR};
use crate::plotting::{render_time_series, FigureStyle};
use crate::statistics::{reduced_variable_name, zonal_mean, StatOperation};
use ndarray::Array1;
use tracing::{debug, info};

/// Zonal mean of one variable at one latitude, one value per time step
#[derive(Debug, Clone, PartialEq)]
pub struct ZonalSeries {
    pub variable_name: String,
    pub latitude: f64,
    pub time: Array1<f64>,
    pub values: Array1<f64>,
}

impl ZonalSeries {
    /// Chart title, e.g. `TOTOZ at 1.8°`
    pub fn title(&self) -> String {
        format!("{} at {:?}°", self.variable_name, self.latitude)
    }
}

/// Runs every stage except rendering.
pub fn analyze(config: &AnalysisConfig) -> Result<ZonalSeries> {
    info!(
        "📂 Reading '{}' from {}",
        config.variable_name,
        config.input_file.display()
    );
    let field = load_field(&config.input_file, &config.variable_name)?;

    let zonal = zonal_mean(&field.values)?;
    debug!(
        "✅ {} has shape {:?}",
        reduced_variable_name(&field.variable_name, StatOperation::Mean, LON_VAR),
        zonal.dim()
    );

    info!(
        "📈 Interpolating zonal mean to latitude {:?}",
        config.target_latitude
    );
    let values = interpolate_to_latitude(&field.lat, &zonal, config.target_latitude)?;

    Ok(ZonalSeries {
        variable_name: field.variable_name,
        latitude: config.target_latitude,
        time: field.time,
        values,
    })
}

/// Runs the whole pipeline and writes the figure to `config.output_file`.
pub fn run(config: &AnalysisConfig) -> Result<ZonalSeries> {
    let series = analyze(config)?;
    let extents = render_time_series(&series, &config.output_file, &FigureStyle::default())?;
    debug!("🖼 Axis extents: {:?}", extents);
    Ok(series)
}
