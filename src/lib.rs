pub mod config;
pub mod io;
pub mod pipeline;
pub mod scan;
pub mod transform;

pub use scan::*;
pub use transform::*;

use serde::{Deserialize, Serialize};

use crate::config::Calibration;

/// Crop metadata handed to the downstream router alongside the grid.
///
/// Field names come from the routing record the consumer expects: the
/// lon/lat values are raw pixel coordinates in the source image at this
/// stage, reinterpreted as geospatial extents only after an external
/// consumer applies `scale`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct BoundingFeature {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
    pub d_lon: f64,
    pub d_lat: f64,
    pub count: u64,
    pub scale: f64,
    #[serde(rename = "PGMFile")]
    pub pgm_file: String,
    #[serde(rename = "PGMWidth")]
    pub pgm_width: u32,
    #[serde(rename = "PGMHeight")]
    pub pgm_height: u32,
}

impl BoundingFeature {
    /// Finalize a scan into a feature record. Fails when the scan found no
    /// drawn pixel, since the crop dimensions would be meaningless.
    pub fn from_scan(stats: &ScanStats, calibration: &Calibration) -> Result<Self> {
        let bounds = stats.bounds.ok_or_else(|| {
            anyhow::anyhow!(
                "no drawn pixels below intensity {} found, refusing to derive an empty crop",
                scan::threshold::LUMA_THRESHOLD
            )
        })?;

        Ok(Self {
            min_lon: bounds.min_x as f64,
            min_lat: bounds.min_y as f64,
            max_lon: bounds.max_x as f64,
            max_lat: bounds.max_y as f64,
            d_lon: calibration.d_lon,
            d_lat: calibration.d_lat,
            count: stats.count,
            scale: calibration.scale,
            pgm_file: String::new(),
            pgm_width: bounds.width(),
            pgm_height: bounds.height(),
        })
    }
}

pub type Result<T> = anyhow::Result<T>;
