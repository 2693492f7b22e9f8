//! Zonal reduction of (time, lat, lon) fields
//!
//! The mean is a plain sum divided by the number of longitudes. Fill values
//! and NaNs are not masked: a NaN anywhere in a latitude row makes that row's
//! mean NaN, and a finite sentinel biases it.

use crate::errors::{Result, ZonalPlotError};
use ndarray::{Array2, Array3, Axis, Zip};
use tracing::debug;

/// Axis of a (time, lat, lon) array that holds longitude
pub const LON_AXIS: usize = 2;

/// Supported statistical operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatOperation {
    /// Arithmetic mean
    Mean,
}

impl StatOperation {
    /// Get the string representation of the operation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mean => "mean",
        }
    }
}

/// Name given to a variable after reducing it over `dim_name`.
pub fn reduced_variable_name(var_name: &str, operation: StatOperation, dim_name: &str) -> String {
    format!("{var_name}_{}_over_{dim_name}", operation.as_str())
}

/// Computes the mean over the longitude axis, turning (T, M, L) into (T, M).
///
/// Latitude rows are reduced in parallel; each row is summed sequentially, so
/// the result does not depend on the thread count.
pub fn zonal_mean(field: &Array3<f64>) -> Result<Array2<f64>> {
    let (nt, nlat, nlon) = field.dim();
    if nlon == 0 {
        return Err(ZonalPlotError::StatisticsError(
            "cannot average over an empty longitude axis".to_string(),
        ));
    }

    debug!(
        "⚡ Computing {} over {} longitudes for {}x{} (time, lat) points on {} threads",
        StatOperation::Mean.as_str(),
        nlon,
        nt,
        nlat,
        rayon::current_num_threads()
    );

    let count = nlon as f64;
    let means = Zip::from(field.lanes(Axis(LON_AXIS))).par_map_collect(|lane| lane.sum() / count);

    Ok(means)
}
