//! Centralized error handling for ZonalPlot
//!
//! Every stage of the pipeline (loading, reduction, interpolation, rendering)
//! reports failures through [`ZonalPlotError`]. Nothing is retried or recovered;
//! the binary prints the error and exits.

use std::fmt;

/// Main error type for ZonalPlot operations
#[derive(Debug)]
pub enum ZonalPlotError {
    /// NetCDF file operation errors (missing file, unreadable variable, ...)
    NetCDFError(netcdf::Error),

    /// Statistics computation errors
    StatisticsError(String),

    /// I/O operation errors
    IoError(std::io::Error),

    /// Variable not found in NetCDF file
    VariableNotFound { var: String, available: Vec<String> },

    /// Variable does not have the rank the pipeline needs
    ShapeMismatch {
        var: String,
        expected: usize,
        found: usize,
    },

    /// Fewer latitudes than a piecewise-linear interpolant needs
    TooFewLatitudes { found: usize },

    /// A latitude coordinate is NaN or infinite
    InvalidCoordinate { index: usize, value: f64 },

    /// Requested latitude lies outside the coordinate range
    LatitudeOutOfRange { target: f64, min: f64, max: f64 },

    /// Values and coordinates disagree in length
    LengthMismatch { expected: usize, found: usize },

    /// Thread pool configuration error
    ThreadPoolError(String),

    /// Array shape or dimension error
    ArrayError(ndarray::ShapeError),

    /// Chart drawing errors
    PlotError(String),

    /// PNG encoding errors
    ImageError(image::ImageError),
}

impl fmt::Display for ZonalPlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZonalPlotError::NetCDFError(e) => write!(f, "NetCDF error: {}", e),
            ZonalPlotError::StatisticsError(msg) => {
                write!(f, "Statistics computation error: {}", msg)
            }
            ZonalPlotError::IoError(e) => write!(f, "I/O error: {}", e),
            ZonalPlotError::VariableNotFound { var, available } => {
                write!(f, "Variable '{}' not found in file", var)?;
                if available.is_empty() {
                    write!(f, " (file has no variables)")
                } else {
                    write!(f, " (available: {})", available.join(", "))
                }
            }
            ZonalPlotError::ShapeMismatch {
                var,
                expected,
                found,
            } => write!(
                f,
                "Variable '{}' has {} dimensions, expected {} (time, lat, lon)",
                var, found, expected
            ),
            ZonalPlotError::TooFewLatitudes { found } => write!(
                f,
                "Linear interpolation needs at least 2 latitudes, got {}",
                found
            ),
            ZonalPlotError::InvalidCoordinate { index, value } => {
                write!(f, "Latitude at index {} is not finite: {}", index, value)
            }
            ZonalPlotError::LatitudeOutOfRange { target, min, max } => write!(
                f,
                "Latitude {} is outside the interpolation range [{}, {}]",
                target, min, max
            ),
            ZonalPlotError::LengthMismatch { expected, found } => write!(
                f,
                "Expected {} values along the latitude axis, got {}",
                expected, found
            ),
            ZonalPlotError::ThreadPoolError(msg) => write!(f, "Thread pool error: {}", msg),
            ZonalPlotError::ArrayError(e) => write!(f, "Array error: {}", e),
            ZonalPlotError::PlotError(msg) => write!(f, "Plotting error: {}", msg),
            ZonalPlotError::ImageError(e) => write!(f, "Image error: {}", e),
        }
    }
}

impl std::error::Error for ZonalPlotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ZonalPlotError::NetCDFError(e) => Some(e),
            ZonalPlotError::IoError(e) => Some(e),
            ZonalPlotError::ArrayError(e) => Some(e),
            ZonalPlotError::ImageError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<netcdf::Error> for ZonalPlotError {
    fn from(error: netcdf::Error) -> Self {
        ZonalPlotError::NetCDFError(error)
    }
}

impl From<std::io::Error> for ZonalPlotError {
    fn from(error: std::io::Error) -> Self {
        ZonalPlotError::IoError(error)
    }
}

impl From<ndarray::ShapeError> for ZonalPlotError {
    fn from(error: ndarray::ShapeError) -> Self {
        ZonalPlotError::ArrayError(error)
    }
}

impl From<image::ImageError> for ZonalPlotError {
    fn from(error: image::ImageError) -> Self {
        ZonalPlotError::ImageError(error)
    }
}

/// Result type alias for ZonalPlot operations
pub type Result<T> = std::result::Result<T, ZonalPlotError>;
