use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Everything one conversion run needs, built once at startup and passed
/// into the pipeline. An empty path string disables that stage, matching
/// the flag semantics of the CLI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    /// Source occupancy map; empty skips scanning and transform entirely.
    pub input: String,
    /// Destination for the feature record; empty skips the write.
    pub json_out: String,
    /// Destination for the cropped routing grid.
    pub pgm_out: String,
    /// Optional PNG copy of the routing grid; empty skips it.
    pub png_out: String,
    pub calibration: Calibration,
}

/// Placeholder geospatial factors carried verbatim into the feature
/// record. The conversion itself does no projection math with them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Calibration {
    /// Multiplier converting pixel units to geospatial units downstream.
    pub scale: f64,
    pub d_lon: f64,
    pub d_lat: f64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: "projection_edit.pgm".to_string(),
            json_out: "out.json".to_string(),
            pgm_out: "out.pgm".to_string(),
            png_out: String::new(),
            calibration: Calibration::default(),
        }
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            scale: 1.0,
            d_lon: 0.0,
            d_lat: 0.0,
        }
    }
}

impl RunConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config {}: {}", path.display(), e))?;

        if content.trim_start().starts_with('{') {
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(toml::from_str(&content)?)
        }
    }

    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !self.input.is_empty() && self.pgm_out.is_empty() {
            errors.push("pgm output path must be set when an input raster is given".to_string());
        }

        if self.calibration.scale <= 0.0 {
            errors.push("calibration scale must be positive".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
