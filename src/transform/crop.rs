use image::{GrayImage, Luma};

use crate::scan::threshold::binarize;
use crate::BoundingFeature;

/// Crops the source raster to the feature's bounding box and re-renders
/// every cell through the inverted-polarity binarization: clear area
/// becomes 255, drawn (and exactly-on-threshold) cells stay 0.
///
/// The downstream router reads white cells as traversable, so the
/// polarity flip relative to the scan's drawn test is load-bearing.
pub fn crop_and_binarize(src: &GrayImage, feature: &BoundingFeature) -> crate::Result<GrayImage> {
    let x0 = feature.min_lon.floor() as i64;
    let y0 = feature.min_lat.floor() as i64;
    let out_w = feature.pgm_width;
    let out_h = feature.pgm_height;

    if out_w == 0 || out_h == 0 {
        return Err(anyhow::anyhow!(
            "refusing to render an empty {}x{} crop",
            out_w,
            out_h
        ));
    }

    // The box normally comes straight from a scan of this image, but a
    // feature loaded from elsewhere may not fit. Fail instead of sampling
    // out of bounds.
    if x0 < 0
        || y0 < 0
        || x0 + out_w as i64 > src.width() as i64
        || y0 + out_h as i64 > src.height() as i64
    {
        return Err(anyhow::anyhow!(
            "crop box {}x{} at ({}, {}) does not fit inside the {}x{} source raster",
            out_w,
            out_h,
            x0,
            y0,
            src.width(),
            src.height()
        ));
    }

    let mut out = GrayImage::new(out_w, out_h);
    for y in 0..out_h {
        for x in 0..out_w {
            let luma = src.get_pixel(x0 as u32 + x, y0 as u32 + y).0[0];
            out.put_pixel(x, y, Luma([binarize(luma)]));
        }
    }

    Ok(out)
}
