use image::GrayImage;
use std::path::Path;

/// Decodes the source occupancy map and converts it to 8-bit grayscale
/// using the standard luminance weighting. PGM, PNG and the other formats
/// the image crate understands are all accepted.
pub fn load_gray(path: &Path) -> crate::Result<GrayImage> {
    if !path.exists() {
        return Err(anyhow::anyhow!(
            "input raster does not exist: {}",
            path.display()
        ));
    }

    let img = image::open(path)
        .map_err(|e| anyhow::anyhow!("failed to decode raster {}: {}", path.display(), e))?;
    Ok(img.to_luma8())
}
