//! Analysis inputs
//!
//! The file, variable and latitude are fixed at compile time. Edit the
//! constants below to analyse something else; `ncdump -h <file>` lists the
//! variable names a file contains.

use std::path::PathBuf;

/// ECHAM5 chemistry output analysed by the binary
pub const INPUT_FILE: &str = "/chemie/pavlea/p100m0-gm/echam5/p100m0-gm_CHEM_6h_207604.nc";

/// Variable to reduce, laid out as (time, lat, lon) in the file
pub const VARIABLE_NAME: &str = "TOTOZ";

/// Latitude (degrees north) the zonal mean is interpolated to
pub const TARGET_LATITUDE: f64 = 1.8;

/// Figure written to the current working directory
pub const OUTPUT_FILE: &str = "figure.png";

/// Everything one pipeline run needs to know
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub input_file: PathBuf,
    pub variable_name: String,
    pub target_latitude: f64,
    pub output_file: PathBuf,
}

impl AnalysisConfig {
    /// Configuration for an arbitrary file, writing to [`OUTPUT_FILE`]
    pub fn new(
        input_file: impl Into<PathBuf>,
        variable_name: impl Into<String>,
        target_latitude: f64,
    ) -> Self {
        Self {
            input_file: input_file.into(),
            variable_name: variable_name.into(),
            target_latitude,
            output_file: PathBuf::from(OUTPUT_FILE),
        }
    }

    /// Redirect the figure somewhere other than the working directory
    pub fn with_output_file(mut self, output_file: impl Into<PathBuf>) -> Self {
        self.output_file = output_file.into();
        self
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::new(INPUT_FILE, VARIABLE_NAME, TARGET_LATITUDE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_compiled_constants() {
        let config = AnalysisConfig::default();
        assert_eq!(config.input_file, PathBuf::from(INPUT_FILE));
        assert_eq!(config.variable_name, "TOTOZ");
        assert_eq!(config.target_latitude, 1.8);
        assert_eq!(config.output_file, PathBuf::from("figure.png"));
    }

    #[test]
    fn output_file_can_be_redirected() {
        let config = AnalysisConfig::new("in.nc", "T", 0.0).with_output_file("/tmp/out.png");
        assert_eq!(config.output_file, PathBuf::from("/tmp/out.png"));
        assert_eq!(config.input_file, PathBuf::from("in.nc"));
    }
}
