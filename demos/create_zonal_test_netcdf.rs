//! Creates a sample ECHAM-like NetCDF file for trying out ZonalPlot.
//!
//! The file has a 6-hourly time axis, a north-to-south latitude axis and a
//! total-ozone-like `TOTOZ` field laid out as (time, lat, lon). Point
//! `config::INPUT_FILE` at it to produce a figure without real model output.

use ndarray::Array3;
use netcdf::create;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_path = Path::new("zonal_test_data.nc");

    println!("🔨 Creating test NetCDF file: {}", output_path.display());

    if output_path.exists() {
        std::fs::remove_file(output_path)?
    }

    let mut file = create(output_path)?;

    file.add_attribute("title", "Synthetic total ozone")?;
    file.add_attribute("institution", "ZonalPlot Test Suite")?;
    file.add_attribute("created_by", "create_zonal_test_netcdf.rs")?;

    let n_time = 120; // 30 days of 6-hourly output
    let n_lat = 32;
    let n_lon = 64;

    file.add_dimension("time", n_time)?;
    file.add_dimension("lat", n_lat)?;
    file.add_dimension("lon", n_lon)?;

    let time: Vec<f64> = (0..n_time).map(|i| i as f64 * 0.25).collect();
    // north to south, like ECHAM's Gaussian grid
    let lat: Vec<f64> = (0..n_lat)
        .map(|j| 90.0 - (j as f64 + 0.5) * 180.0 / n_lat as f64)
        .collect();
    let lon: Vec<f64> = (0..n_lon).map(|i| i as f64 * 360.0 / n_lon as f64).collect();

    {
        let mut time_var = file.add_variable::<f64>("time", &["time"])?;
        time_var.put_attribute("units", "days since 2076-04-01 00:00:00")?;
        time_var.put_attribute("calendar", "standard")?;
        time_var.put_values(&time, ..)?;
    }

    {
        let mut lat_var = file.add_variable::<f64>("lat", &["lat"])?;
        lat_var.put_attribute("units", "degrees_north")?;
        lat_var.put_attribute("long_name", "latitude")?;
        lat_var.put_values(&lat, ..)?;
    }

    {
        let mut lon_var = file.add_variable::<f64>("lon", &["lon"])?;
        lon_var.put_attribute("units", "degrees_east")?;
        lon_var.put_attribute("long_name", "longitude")?;
        lon_var.put_values(&lon, ..)?;
    }

    {
        let mut ozone_var = file.add_variable::<f32>("TOTOZ", &["time", "lat", "lon"])?;
        ozone_var.put_attribute("units", "DU")?;
        ozone_var.put_attribute("long_name", "total ozone column")?;

        let ozone = Array3::from_shape_fn((n_time, n_lat, n_lon), |(t, j, i)| {
            let phi = lat[j].to_radians();
            let lambda = lon[i].to_radians();
            let base = 260.0 + 90.0 * phi.sin().powi(2); // more ozone toward the poles
            let wave = 15.0 * lambda.cos() * phi.cos(); // averages out zonally
            let drift = 5.0 * (time[t] * std::f64::consts::PI / 15.0).sin();
            (base + wave + drift) as f32
        });
        let flat: Vec<f32> = ozone.iter().copied().collect();
        ozone_var.put_values(&flat, ..)?;
    }

    println!("✅ Successfully created test NetCDF file with:");
    println!("   📏 Dimensions: time({n_time}), lat({n_lat}), lon({n_lon})");
    println!("   📈 Variables: time, lat, lon, TOTOZ");

    Ok(())
}
