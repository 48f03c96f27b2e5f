use image::GrayImage;
use rayon::prelude::*;

use super::threshold::is_drawn;

/// Inclusive axis-aligned bounding box in source pixel coordinates.
///
/// Only constructed once at least one drawn pixel exists, so the min/max
/// fields never hold sentinel values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBounds {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl PixelBounds {
    pub fn single(x: u32, y: u32) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    pub fn include(&mut self, x: u32, y: u32) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }

    pub fn union(a: Self, b: Self) -> Self {
        Self {
            min_x: a.min_x.min(b.min_x),
            min_y: a.min_y.min(b.min_y),
            max_x: a.max_x.max(b.max_x),
            max_y: a.max_y.max(b.max_y),
        }
    }

    /// Width of the inclusive box, both boundary columns included.
    pub fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    /// Height of the inclusive box, both boundary rows included.
    pub fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }
}

/// Accumulated result of one bounding-box scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Bounding box of drawn pixels; `None` until the first one is seen.
    pub bounds: Option<PixelBounds>,
    /// Number of pixels classified as drawn.
    pub count: u64,
}

impl ScanStats {
    pub fn record(&mut self, x: u32, y: u32) {
        match &mut self.bounds {
            Some(bounds) => bounds.include(x, y),
            None => self.bounds = Some(PixelBounds::single(x, y)),
        }
        self.count += 1;
    }

    /// Associative combine of two partial scans, so disjoint pixel ranges
    /// can be scanned independently and merged in any order.
    pub fn merge(self, other: Self) -> Self {
        let bounds = match (self.bounds, other.bounds) {
            (Some(a), Some(b)) => Some(PixelBounds::union(a, b)),
            (a, b) => a.or(b),
        };
        Self {
            bounds,
            count: self.count + other.count,
        }
    }
}

/// Visits every pixel exactly once and accumulates the bounding box of
/// drawn content plus its pixel count. Rows are scanned in parallel and
/// merged; the min/max/sum accumulation is order-independent, so the
/// result never depends on scheduling.
pub fn scan_image(img: &GrayImage) -> ScanStats {
    let width = img.width() as usize;
    if width == 0 || img.height() == 0 {
        return ScanStats::default();
    }

    img.as_raw()
        .par_chunks_exact(width)
        .enumerate()
        .map(|(y, row)| {
            let mut stats = ScanStats::default();
            for (x, &luma) in row.iter().enumerate() {
                if is_drawn(luma) {
                    stats.record(x as u32, y as u32);
                }
            }
            stats
        })
        .reduce(ScanStats::default, ScanStats::merge)
}
