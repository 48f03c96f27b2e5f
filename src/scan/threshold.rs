//! Fixed luminance classification shared by the scanner and the transformer.
//!
//! The two sides of the threshold are deliberately not symmetric: the scan
//! looks for drawn content (strictly below the cutoff) while the output
//! grid marks clear area (strictly above the cutoff) as white. A pixel
//! sitting exactly on the cutoff is neither drawn nor clear: it does not
//! grow the bounding box and stays black in the output.

/// Grayscale cutoff separating drawn map content from clear area.
pub const LUMA_THRESHOLD: u8 = 100;

/// Maximal brightness written for clear cells in the routing grid.
pub const CLEAR_INTENSITY: u8 = 255;

/// True iff the pixel counts as drawn map content for the bounding-box scan.
pub fn is_drawn(luma: u8) -> bool {
    luma < LUMA_THRESHOLD
}

/// Inverted-polarity remap used when rendering the routing grid: clear
/// area becomes white, everything at or below the cutoff stays black.
pub fn binarize(luma: u8) -> u8 {
    if luma > LUMA_THRESHOLD {
        CLEAR_INTENSITY
    } else {
        0
    }
}
