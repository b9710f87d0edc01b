mod common;

use common::synthetic_image::{card_with_marks, paint_square, white_card};
use punch_detector::image::{GrayView, RgbView, SourceImage};
use punch_detector::{Boundary, DetectParams, Point, PunchDetector};

fn gray_source(data: &[u8], w: usize, h: usize) -> SourceImage<'_> {
    SourceImage::Gray(GrayView {
        w,
        h,
        stride: w,
        data,
    })
}

fn full_frame_boundary(w: usize, h: usize) -> Boundary {
    Boundary::quad([
        Point::new(0.0, 0.0),
        Point::new(w as f64 - 1.0, 0.0),
        Point::new(w as f64 - 1.0, h as f64 - 1.0),
        Point::new(0.0, h as f64 - 1.0),
    ])
    .expect("frame boundary is valid")
}

#[test]
fn grid_and_axes_have_requested_shape() {
    let img = card_with_marks(140, 100, &[(30, 30), (100, 60)], 10);
    let detector = PunchDetector::new(DetectParams::default());
    let detection = detector.detect(&gray_source(&img, 140, 100), &full_frame_boundary(140, 100), 7, 5);

    assert_eq!(detection.grid.cols(), 7);
    assert_eq!(detection.grid.rows(), 5);
    assert_eq!(detection.col_centers.len(), 7);
    assert_eq!(detection.row_centers.len(), 5);
    assert_eq!(detection.cell_px, 10);
}

#[test]
fn axes_are_strictly_increasing() {
    let img = card_with_marks(140, 100, &[(30, 30), (100, 60), (70, 80)], 10);
    let detector = PunchDetector::new(DetectParams::default());
    let detection = detector.detect(&gray_source(&img, 140, 100), &full_frame_boundary(140, 100), 7, 5);

    for axis in [&detection.col_centers, &detection.row_centers] {
        for pair in axis.windows(2) {
            assert!(pair[0] < pair[1], "axis must increase strictly: {axis:?}");
        }
    }
}

#[test]
fn identical_inputs_give_identical_grids() {
    let img = card_with_marks(100, 100, &[(20, 20), (50, 50), (80, 20)], 12);
    let params = DetectParams {
        blob_size_percent: 30.0,
        ..Default::default()
    };
    let source = gray_source(&img, 100, 100);
    let boundary = full_frame_boundary(100, 100);
    let detector = PunchDetector::new(params);

    let first = detector.detect(&source, &boundary, 10, 10);
    let second = detector.detect(&source, &boundary, 10, 10);
    assert_eq!(first.grid, second.grid, "detection must be deterministic");
    assert_eq!(first.col_centers, second.col_centers);
    assert_eq!(first.row_centers, second.row_centers);
}

#[test]
fn higher_sensitivity_never_adds_punches() {
    // One pitch-black mark and one mid-gray mark; raising the sensitivity
    // may only remove punches.
    let mut img = white_card(100, 100);
    paint_square(&mut img, 100, 100, 30, 30, 12, 0);
    paint_square(&mut img, 100, 100, 70, 70, 12, 200);
    let source = gray_source(&img, 100, 100);
    let boundary = full_frame_boundary(100, 100);

    let loose = PunchDetector::new(DetectParams {
        sensitivity: 30.0,
        ..Default::default()
    })
    .detect(&source, &boundary, 10, 10);
    let strict = PunchDetector::new(DetectParams {
        sensitivity: 60.0,
        ..Default::default()
    })
    .detect(&source, &boundary, 10, 10);

    assert!(
        loose.grid.punched_count() >= 2,
        "both marks should pass at low sensitivity"
    );
    for row in 0..10 {
        for col in 0..10 {
            if strict.grid.get(row, col) {
                assert!(
                    loose.grid.get(row, col),
                    "cell ({row}, {col}) punched at high sensitivity but not at low"
                );
            }
        }
    }
    assert!(
        strict.grid.punched_count() < loose.grid.punched_count(),
        "the mid-gray mark should drop out at high sensitivity"
    );
}

#[test]
fn rgb_and_grayscale_sources_agree() {
    let gray = card_with_marks(100, 100, &[(50, 50)], 12);
    let rgb: Vec<u8> = gray.iter().flat_map(|&v| [v, v, v]).collect();
    let boundary = full_frame_boundary(100, 100);
    let detector = PunchDetector::new(DetectParams::default());

    let from_gray = detector.detect(&gray_source(&gray, 100, 100), &boundary, 10, 10);
    let from_rgb = detector.detect(
        &SourceImage::Rgb(RgbView {
            w: 100,
            h: 100,
            stride: 300,
            data: &rgb,
        }),
        &boundary,
        10,
        10,
    );
    assert_eq!(from_gray.grid, from_rgb.grid);
}
