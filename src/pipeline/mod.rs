use log::{debug, info};
use std::path::Path;

use crate::config::RunConfig;
use crate::{io, scan, transform, BoundingFeature};

/// Runs one conversion end to end: load, scan, finalize, crop, write.
///
/// Strictly sequential, one pass, no retries. Every failure is fatal and
/// names the offending path; outputs already written stay on disk.
/// Returns the finalized feature, or `None` when no input was configured
/// (a default all-zero record is still serialized in that case so the
/// metadata sink always sees a file).
pub fn run(config: &RunConfig) -> crate::Result<Option<BoundingFeature>> {
    let mut feature = None;

    if !config.input.is_empty() {
        let input = Path::new(&config.input);
        let img = io::load_gray(input)?;
        info!("loaded {} ({}x{})", input.display(), img.width(), img.height());

        let stats = scan::scan_image(&img);
        debug!(
            "scan found {} drawn pixels, bounds {:?}",
            stats.count, stats.bounds
        );

        let mut record = BoundingFeature::from_scan(&stats, &config.calibration)
            .map_err(|e| anyhow::anyhow!("{}: {}", input.display(), e))?;

        let grid = transform::crop_and_binarize(&img, &record)?;

        let pgm_out = Path::new(&config.pgm_out);
        io::write_pgm(&grid, pgm_out)?;
        info!(
            "wrote routing grid {} ({}x{})",
            pgm_out.display(),
            grid.width(),
            grid.height()
        );
        record.pgm_file = config.pgm_out.clone();

        if !config.png_out.is_empty() {
            let png_out = Path::new(&config.png_out);
            io::write_png(&grid, png_out)?;
            info!("wrote preview {}", png_out.display());
        }

        feature = Some(record);
    }

    if !config.json_out.is_empty() {
        let record = feature.clone().unwrap_or_default();
        let json_out = Path::new(&config.json_out);
        io::write_feature_json(&record, json_out)?;
        info!("wrote feature record {}", json_out.display());
    }

    Ok(feature)
}
