use gridcrop::config::Calibration;
use gridcrop::scan::scan_image;
use gridcrop::transform::crop_and_binarize;
use gridcrop::BoundingFeature;
use image::{GrayImage, Luma};

fn feature_for(img: &GrayImage) -> BoundingFeature {
    let stats = scan_image(img);
    BoundingFeature::from_scan(&stats, &Calibration::default()).unwrap()
}

#[test]
fn test_center_pixel_roundtrip() {
    let mut img = GrayImage::from_pixel(3, 3, Luma([200]));
    img.put_pixel(1, 1, Luma([50]));

    let feature = feature_for(&img);
    assert_eq!(feature.min_lon, 1.0);
    assert_eq!(feature.min_lat, 1.0);
    assert_eq!(feature.max_lon, 1.0);
    assert_eq!(feature.max_lat, 1.0);
    assert_eq!(feature.count, 1);
    assert_eq!(feature.pgm_width, 1);
    assert_eq!(feature.pgm_height, 1);
    assert_eq!(feature.scale, 1.0);

    // The single cropped cell is the drawn center pixel: stays black.
    let grid = crop_and_binarize(&img, &feature).unwrap();
    assert_eq!(grid.dimensions(), (1, 1));
    assert_eq!(grid.get_pixel(0, 0).0[0], 0);
}

#[test]
fn test_crop_dimensions_inclusive() {
    // Drawn rectangle spanning (2,3)..(5,7) inclusive.
    let img = GrayImage::from_fn(10, 12, |x, y| {
        if (2..=5).contains(&x) && (3..=7).contains(&y) {
            Luma([10])
        } else {
            Luma([240])
        }
    });

    let feature = feature_for(&img);
    assert_eq!(feature.pgm_width, 4);
    assert_eq!(feature.pgm_height, 5);
    assert_eq!(feature.count, 4 * 5);

    let grid = crop_and_binarize(&img, &feature).unwrap();
    assert_eq!(grid.dimensions(), (4, 5));
}

#[test]
fn test_inverted_output_marks_clear_area() {
    // Dark one-pixel frame around a bright interior: the crop covers the
    // whole image and the interior must come out white.
    let img = GrayImage::from_fn(5, 5, |x, y| {
        if x == 0 || y == 0 || x == 4 || y == 4 {
            Luma([0])
        } else {
            Luma([200])
        }
    });

    let feature = feature_for(&img);
    assert_eq!(feature.count, 16);
    assert_eq!(feature.pgm_width, 5);
    assert_eq!(feature.pgm_height, 5);

    let grid = crop_and_binarize(&img, &feature).unwrap();
    for (x, y, p) in grid.enumerate_pixels() {
        let on_frame = x == 0 || y == 0 || x == 4 || y == 4;
        let expected = if on_frame { 0 } else { 255 };
        assert_eq!(p.0[0], expected, "wrong value at ({}, {})", x, y);
    }
}

#[test]
fn test_on_threshold_pixel_stays_black() {
    let mut img = GrayImage::from_pixel(3, 1, Luma([200]));
    img.put_pixel(0, 0, Luma([0]));
    img.put_pixel(1, 0, Luma([100]));

    let feature = feature_for(&img);
    // Only the 0-valued pixel is drawn; the 100-valued one is not.
    assert_eq!(feature.count, 1);
    assert_eq!(feature.pgm_width, 1);

    // Widen the box by hand to cover the on-threshold pixel.
    let mut wide = feature.clone();
    wide.max_lon = 1.0;
    wide.pgm_width = 2;

    let grid = crop_and_binarize(&img, &wide).unwrap();
    assert_eq!(grid.get_pixel(0, 0).0[0], 0);
    assert_eq!(grid.get_pixel(1, 0).0[0], 0);
}

#[test]
fn test_reclassifying_binarized_output() {
    let img = GrayImage::from_fn(5, 5, |x, y| {
        if x == 0 || y == 0 || x == 4 || y == 4 {
            Luma([0])
        } else {
            Luma([200])
        }
    });
    let grid = crop_and_binarize(&img, &feature_for(&img)).unwrap();

    // The output holds only 0 and 255, so a rescan sees exactly the black
    // cells as drawn content: the 16-pixel frame spanning the whole grid.
    let stats = scan_image(&grid);
    assert_eq!(stats.count, 16);
    let bounds = stats.bounds.unwrap();
    assert_eq!((bounds.min_x, bounds.min_y), (0, 0));
    assert_eq!((bounds.max_x, bounds.max_y), (4, 4));
}

#[test]
fn test_degenerate_scan_rejected() {
    let img = GrayImage::from_pixel(6, 6, Luma([220]));
    let stats = scan_image(&img);
    let err = BoundingFeature::from_scan(&stats, &Calibration::default()).unwrap_err();
    assert!(err.to_string().contains("no drawn pixels"));
}

#[test]
fn test_out_of_bounds_box_rejected() {
    let mut img = GrayImage::from_pixel(4, 4, Luma([200]));
    img.put_pixel(2, 2, Luma([10]));

    let mut feature = feature_for(&img);
    feature.pgm_width = 10;

    let err = crop_and_binarize(&img, &feature).unwrap_err();
    assert!(err.to_string().contains("does not fit"));
}

#[test]
fn test_empty_box_rejected() {
    let mut img = GrayImage::from_pixel(4, 4, Luma([200]));
    img.put_pixel(2, 2, Luma([10]));

    let mut feature = feature_for(&img);
    feature.pgm_height = 0;

    let err = crop_and_binarize(&img, &feature).unwrap_err();
    assert!(err.to_string().contains("empty"));
}

#[test]
fn test_calibration_carried_into_feature() {
    let mut img = GrayImage::from_pixel(3, 3, Luma([200]));
    img.put_pixel(0, 2, Luma([10]));

    let calibration = Calibration {
        scale: 0.5,
        d_lon: 0.001,
        d_lat: -0.002,
    };
    let stats = scan_image(&img);
    let feature = BoundingFeature::from_scan(&stats, &calibration).unwrap();

    assert_eq!(feature.scale, 0.5);
    assert_eq!(feature.d_lon, 0.001);
    assert_eq!(feature.d_lat, -0.002);
}
