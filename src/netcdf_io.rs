//! NetCDF loading for the zonal-mean pipeline
//!
//! Reads the three coordinate variables (`time`, `lon`, `lat`) and one data
//! variable into owned `ndarray` arrays. The file handle never outlives
//! [`load_field`]; everything returned is a materialized copy.
//!
//! Packed variables (`scale_factor` / `add_offset`) are unpacked to physical
//! values on read. `_FillValue` is left alone and reaches the mean as a number.

use crate::errors::{Result, ZonalPlotError};
use ndarray::{Array1, Array3};
use netcdf::{AttributeValue, File, Variable};
use std::path::Path;
use tracing::debug;

/// Name of the time coordinate variable
pub const TIME_VAR: &str = "time";
/// Name of the longitude coordinate variable
pub const LON_VAR: &str = "lon";
/// Name of the latitude coordinate variable
pub const LAT_VAR: &str = "lat";

/// A data variable together with its coordinates.
///
/// `values` is assumed to be laid out as (time, lat, lon). Only the rank is
/// checked; the dimension names and lengths are taken on trust.
#[derive(Debug, Clone)]
pub struct GriddedField {
    pub variable_name: String,
    pub time: Array1<f64>,
    pub lon: Array1<f64>,
    pub lat: Array1<f64>,
    pub values: Array3<f64>,
}

impl GriddedField {
    /// Shape of the data variable as (time, lat, lon)
    pub fn shape(&self) -> (usize, usize, usize) {
        self.values.dim()
    }
}

/// Opens `path`, reads the coordinates and `variable_name`, and closes the file.
pub fn load_field(path: &Path, variable_name: &str) -> Result<GriddedField> {
    let file = netcdf::open(path)?;
    debug!("📂 Opened NetCDF file: {}", path.display());
    read_field(&file, variable_name)
}

/// Reads the coordinates and `variable_name` from an already open file.
pub fn read_field(file: &File, variable_name: &str) -> Result<GriddedField> {
    let time = read_coordinate(file, TIME_VAR)?;
    let lon = read_coordinate(file, LON_VAR)?;
    let lat = read_coordinate(file, LAT_VAR)?;

    let var = lookup(file, variable_name)?;
    let shape: Vec<usize> = var.dimensions().iter().map(|d| d.len()).collect();
    let &[nt, nlat, nlon] = shape.as_slice() else {
        return Err(ZonalPlotError::ShapeMismatch {
            var: variable_name.to_string(),
            expected: 3,
            found: shape.len(),
        });
    };

    let data = read_unpacked(&var)?;
    let values = Array3::from_shape_vec((nt, nlat, nlon), data)?;

    debug!(
        "🚀 Loaded '{}' with shape {:?} (time={}, lat={}, lon={})",
        variable_name,
        shape,
        time.len(),
        lat.len(),
        lon.len()
    );

    Ok(GriddedField {
        variable_name: variable_name.to_string(),
        time,
        lon,
        lat,
        values,
    })
}

/// Reads every value of a coordinate variable as a flat `f64` array.
pub fn read_coordinate(file: &File, name: &str) -> Result<Array1<f64>> {
    let var = lookup(file, name)?;
    let data = read_unpacked(&var)?;
    Ok(Array1::from(data))
}

/// Reads all values as `f64`, applying `value * scale_factor + add_offset`
/// when either attribute is present.
pub fn read_unpacked(var: &Variable<'_>) -> Result<Vec<f64>> {
    let mut data = var.get_values::<f64, _>(..)?;

    let scale = numeric_attribute(var, "scale_factor")?;
    let offset = numeric_attribute(var, "add_offset")?;
    if scale.is_some() || offset.is_some() {
        let (scale, offset) = (scale.unwrap_or(1.0), offset.unwrap_or(0.0));
        debug!(
            "📦 Unpacking '{}' with scale_factor={} add_offset={}",
            var.name(),
            scale,
            offset
        );
        data.iter_mut().for_each(|v| *v = *v * scale + offset);
    }

    Ok(data)
}

/// Value of a scalar numeric attribute, or `None` when it is absent or not numeric.
fn numeric_attribute(var: &Variable<'_>, name: &str) -> Result<Option<f64>> {
    let Some(attr) = var.attribute(name) else {
        return Ok(None);
    };
    let value = match attr.value()? {
        AttributeValue::Double(v) => Some(v),
        AttributeValue::Float(v) => Some(v as f64),
        AttributeValue::Int(v) => Some(v as f64),
        AttributeValue::Short(v) => Some(v as f64),
        AttributeValue::Doubles(v) => v.first().copied(),
        AttributeValue::Floats(v) => v.first().map(|&x| x as f64),
        _ => None,
    };
    Ok(value)
}

/// Names of all variables in the file, sorted alphabetically.
pub fn variable_names(file: &File) -> Vec<String> {
    let mut names: Vec<String> = file.variables().map(|v| v.name()).collect();
    names.sort();
    names
}

fn lookup<'f>(file: &'f File, name: &str) -> Result<Variable<'f>> {
    file.variable(name)
        .ok_or_else(|| ZonalPlotError::VariableNotFound {
            var: name.to_string(),
            available: variable_names(file),
        })
}
