use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ExtendedColorType, GrayImage, ImageEncoder, ImageFormat};
use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::BoundingFeature;

/// Writes the routing grid as a binary (raw) PGM, the lossless format the
/// router consumes.
pub fn write_pgm(img: &GrayImage, path: &Path) -> crate::Result<()> {
    let file = File::create(path)
        .map_err(|e| anyhow::anyhow!("can't create PGM file {}: {}", path.display(), e))?;

    let encoder = PnmEncoder::new(BufWriter::new(file))
        .with_subtype(PnmSubtype::Graymap(SampleEncoding::Binary));
    encoder
        .write_image(img.as_raw(), img.width(), img.height(), ExtendedColorType::L8)
        .map_err(|e| anyhow::anyhow!("failed to encode PGM {}: {}", path.display(), e))?;
    Ok(())
}

/// Optional PNG copy of the same grid, for viewing in ordinary tools.
pub fn write_png(img: &GrayImage, path: &Path) -> crate::Result<()> {
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|e| anyhow::anyhow!("can't write PNG file {}: {}", path.display(), e))
}

/// Serializes the feature record as indented JSON.
pub fn write_feature_json(feature: &BoundingFeature, path: &Path) -> crate::Result<()> {
    let json = serde_json::to_string_pretty(feature)?;
    fs::write(path, json)
        .map_err(|e| anyhow::anyhow!("can't write feature record {}: {}", path.display(), e))?;
    Ok(())
}
