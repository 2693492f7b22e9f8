//! Loader and error-type tests against real NetCDF files
//!
//! These tests create small files in a temporary directory and check what the
//! loader hands to the rest of the pipeline.

mod common;

use common::{write_index_fixture, write_zonal_fixture};
use ndarray::{array, Array3};
use netcdf::{create, open};
use tempfile::tempdir;
use zonal_plot::{
    config::AnalysisConfig,
    errors::{Result, ZonalPlotError},
    netcdf_io::{load_field, read_coordinate, read_field, variable_names},
    pipeline::analyze,
    statistics::zonal_mean,
};

#[test]
fn test_error_types() {
    let var_err = ZonalPlotError::VariableNotFound {
        var: "temp".to_string(),
        available: vec!["lat".to_string()],
    };
    assert!(format!("{}", var_err).contains("Variable 'temp' not found"));

    let shape_err = ZonalPlotError::ShapeMismatch {
        var: "temp".to_string(),
        expected: 3,
        found: 2,
    };
    assert_eq!(
        format!("{}", shape_err),
        "Variable 'temp' has 2 dimensions, expected 3 (time, lat, lon)"
    );

    let plot_err = ZonalPlotError::PlotError("boom".to_string());
    assert_eq!(format!("{}", plot_err), "Plotting error: boom");
}

#[test]
fn test_load_field_materializes_everything() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("index.nc");
    write_index_fixture(&file_path, "TOTOZ")?;

    let field = load_field(&file_path, "TOTOZ")?;

    // the file can be removed once loading returns
    drop(temp_dir);

    assert_eq!(field.variable_name, "TOTOZ");
    assert_eq!(field.shape(), (3, 3, 4));
    assert_eq!(field.time, array![0.0, 1.0, 2.0]);
    assert_eq!(field.lat, array![-10.0, 0.0, 10.0]);
    assert_eq!(field.lon, array![0.0, 90.0, 180.0, 270.0]);
    assert_eq!(field.values[[2, 2, 3]], 2.0);
    assert_eq!(field.values[[1, 0, 0]], 0.0);

    Ok(())
}

#[test]
fn test_zonal_mean_of_loaded_field() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("mean.nc");

    // value = 10*m + l over 2 time steps, 3 latitudes, 4 longitudes
    let values = Array3::from_shape_fn((2, 3, 4), |(_, m, l)| (10 * m + l) as f32);
    write_zonal_fixture(
        &file_path,
        "temperature",
        &[0.0, 6.0],
        &[-45.0, 0.0, 45.0],
        &[0.0, 90.0, 180.0, 270.0],
        &values,
    )?;

    let field = load_field(&file_path, "temperature")?;
    let zm = zonal_mean(&field.values)?;

    assert_eq!(zm.dim(), (2, 3));
    // mean of l over 0..4 is 1.5
    assert_eq!(zm.row(0).to_vec(), vec![1.5, 11.5, 21.5]);
    assert_eq!(zm.row(1).to_vec(), vec![1.5, 11.5, 21.5]);

    Ok(())
}

#[test]
fn test_variable_with_wrong_rank() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("rank2.nc");

    {
        let mut file = create(&file_path)?;
        file.add_dimension("time", 2)?;
        file.add_dimension("lat", 2)?;
        file.add_dimension("lon", 1)?;
        file.add_variable::<f64>("time", &["time"])?
            .put_values(&[0.0, 1.0], ..)?;
        file.add_variable::<f64>("lat", &["lat"])?
            .put_values(&[-1.0, 1.0], ..)?;
        file.add_variable::<f64>("lon", &["lon"])?
            .put_values(&[0.0], ..)?;
        file.add_variable::<f32>("surface", &["time", "lat"])?
            .put_values(&[1.0f32, 2.0, 3.0, 4.0], ..)?;
    }

    match load_field(&file_path, "surface") {
        Err(ZonalPlotError::ShapeMismatch {
            var,
            expected,
            found,
        }) => {
            assert_eq!(var, "surface");
            assert_eq!(expected, 3);
            assert_eq!(found, 2);
        }
        other => panic!("Expected ShapeMismatch, got {:?}", other),
    }

    Ok(())
}

#[test]
fn test_missing_coordinate() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("no_lon.nc");

    {
        let mut file = create(&file_path)?;
        file.add_dimension("time", 1)?;
        file.add_dimension("lat", 2)?;
        file.add_variable::<f64>("time", &["time"])?
            .put_values(&[0.0], ..)?;
        file.add_variable::<f64>("lat", &["lat"])?
            .put_values(&[-1.0, 1.0], ..)?;
    }

    match load_field(&file_path, "TOTOZ") {
        Err(ZonalPlotError::VariableNotFound { var, available }) => {
            assert_eq!(var, "lon");
            assert_eq!(available, vec!["lat", "time"]);
        }
        other => panic!("Expected VariableNotFound for lon, got {:?}", other),
    }

    Ok(())
}

#[test]
fn test_open_file_helpers() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("index.nc");
    write_index_fixture(&file_path, "TOTOZ")?;

    let file = open(&file_path)?;
    assert_eq!(
        variable_names(&file),
        vec!["TOTOZ", "lat", "lon", "time"]
    );
    assert_eq!(read_coordinate(&file, "lat")?, array![-10.0, 0.0, 10.0]);

    let field = read_field(&file, "TOTOZ")?;
    assert_eq!(field.shape(), (3, 3, 4));

    Ok(())
}

#[test]
fn test_packed_variables_are_unpacked() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("packed.nc");

    // packed = 2*m, physical = packed * 0.5 + 100; one fill value stays unmasked
    let mut packed = Array3::from_shape_fn((3, 3, 4), |(_, m, _)| (2 * m) as i16);
    packed[[0, 2, 0]] = -999;

    {
        let mut file = create(&file_path)?;
        file.add_dimension("time", 3)?;
        file.add_dimension("lat", 3)?;
        file.add_dimension("lon", 4)?;

        file.add_variable::<f64>("time", &["time"])?
            .put_values(&[0.0, 1.0, 2.0], ..)?;
        file.add_variable::<f64>("lon", &["lon"])?
            .put_values(&[0.0, 90.0, 180.0, 270.0], ..)?;

        let mut lat = file.add_variable::<i16>("lat", &["lat"])?;
        lat.put_attribute("scale_factor", 0.1f32)?;
        lat.put_values(&[-100i16, 0, 100], ..)?;

        let mut var = file.add_variable::<i16>("TOTOZ", &["time", "lat", "lon"])?;
        var.put_attribute("scale_factor", 0.5f32)?;
        var.put_attribute("add_offset", 100.0f32)?;
        var.put_attribute("_FillValue", -999i16)?;
        let flat: Vec<i16> = packed.iter().copied().collect();
        var.put_values(&flat, ..)?;
    }

    let field = load_field(&file_path, "TOTOZ")?;
    assert_eq!(field.values[[1, 1, 3]], 101.0);
    assert_eq!(field.values[[0, 2, 0]], -999.0 * 0.5 + 100.0);
    for (&got, want) in field.lat.iter().zip([-10.0, 0.0, 10.0]) {
        assert!((got - want).abs() < 1e-6, "lat {} != {}", got, want);
    }

    let zm = zonal_mean(&field.values)?;
    assert_eq!(zm[[1, 2]], 102.0);
    // (-399.5 + 3 * 102) / 4
    assert_eq!(zm[[0, 2]], -23.375);

    let series = analyze(&AnalysisConfig::new(&file_path, "TOTOZ", 0.0))?;
    assert_eq!(series.values, array![101.0, 101.0, 101.0]);

    Ok(())
}
