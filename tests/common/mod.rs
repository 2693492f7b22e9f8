//! NetCDF fixtures shared by the integration tests

use ndarray::Array3;
use netcdf::create;
use std::path::Path;
use zonal_plot::errors::Result;

/// Writes `time`, `lat`, `lon` coordinates and a (time, lat, lon) variable.
pub fn write_zonal_fixture(
    path: &Path,
    var_name: &str,
    time: &[f64],
    lat: &[f64],
    lon: &[f64],
    values: &Array3<f32>,
) -> Result<()> {
    let mut file = create(path)?;

    file.add_dimension("time", time.len())?;
    file.add_dimension("lat", lat.len())?;
    file.add_dimension("lon", lon.len())?;

    for (name, data) in [("time", time), ("lat", lat), ("lon", lon)] {
        let mut coord = file.add_variable::<f64>(name, &[name])?;
        coord.put_values(data, ..)?;
    }

    let mut var = file.add_variable::<f32>(var_name, &["time", "lat", "lon"])?;
    var.put_attribute("units", "DU")?;
    let flat: Vec<f32> = values.iter().copied().collect();
    var.put_values(&flat, ..)?;

    Ok(())
}

/// The three-step, three-latitude, four-longitude file where the value is the latitude index.
pub fn write_index_fixture(path: &Path, var_name: &str) -> Result<()> {
    let values = Array3::from_shape_fn((3, 3, 4), |(_, m, _)| m as f32);
    write_zonal_fixture(
        path,
        var_name,
        &[0.0, 1.0, 2.0],
        &[-10.0, 0.0, 10.0],
        &[0.0, 90.0, 180.0, 270.0],
        &values,
    )
}
