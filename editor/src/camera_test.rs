#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;

const TOLERANCE: f64 = 1e-3;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= TOLERANCE
}

fn metrics() -> ImageMetrics {
    ImageMetrics::new(400.0, 500.0)
}

// --- Offset ---

#[test]
fn offset_add() {
    let a = Offset::new(1.0, 2.0) + Offset::new(3.0, -5.0);
    assert_eq!(a, Offset::new(4.0, -3.0));
}

#[test]
fn offset_length() {
    assert_eq!(Offset::new(3.0, 4.0).length(), 5.0);
    assert_eq!(Offset::ZERO.length(), 0.0);
}

// --- ImageMetrics ---

#[test]
fn metrics_default_not_ready() {
    assert!(!ImageMetrics::default().is_ready());
}

#[test]
fn metrics_zero_side_not_ready() {
    assert!(!ImageMetrics::new(400.0, 0.0).is_ready());
    assert!(!ImageMetrics::new(0.0, 500.0).is_ready());
}

#[test]
fn metrics_positive_is_ready() {
    assert!(metrics().is_ready());
}

#[test]
fn metrics_nan_not_ready() {
    assert!(!ImageMetrics::new(f64::NAN, 10.0).is_ready());
}

// --- Camera defaults and clamping ---

#[test]
fn camera_default_zoom_is_one() {
    assert_eq!(Camera::default().zoom(), 1.0);
}

#[test]
fn camera_new_clamps_to_floor() {
    assert_eq!(Camera::new(0.0).zoom(), MIN_ZOOM);
    assert_eq!(Camera::new(-3.0).zoom(), MIN_ZOOM);
}

#[test]
fn camera_set_zoom_reports_change() {
    let mut cam = Camera::default();
    assert!(cam.set_zoom(2.0));
    assert!(!cam.set_zoom(2.0));
    assert_eq!(cam.zoom(), 2.0);
}

#[test]
fn camera_set_zoom_ignores_nan() {
    let mut cam = Camera::new(1.5);
    assert!(!cam.set_zoom(f64::NAN));
    assert!(!cam.set_zoom(f64::INFINITY));
    assert_eq!(cam.zoom(), 1.5);
}

#[test]
fn camera_custom_floor() {
    let mut cam = Camera::with_min_zoom(0.5);
    cam.set_zoom(0.2);
    assert_eq!(cam.zoom(), 0.5);
    assert_eq!(cam.min_zoom(), 0.5);
}

#[test]
fn camera_invalid_floor_falls_back() {
    assert_eq!(Camera::with_min_zoom(-1.0).min_zoom(), MIN_ZOOM);
    assert_eq!(Camera::with_min_zoom(f64::NAN).min_zoom(), MIN_ZOOM);
}

#[test]
fn camera_floor_above_one_raises_zoom() {
    assert_eq!(Camera::with_min_zoom(2.0).zoom(), 2.0);
}

#[test]
fn handle_scale_is_inverse_zoom() {
    assert_eq!(Camera::new(4.0).handle_scale(), 0.25);
}

#[test]
fn container_transform_format() {
    assert_eq!(Camera::new(2.5).container_transform(), "scale(2.5)");
}

// --- offset_to_point ---

#[test]
fn offset_to_point_concrete_click() {
    let p = Camera::default().offset_to_point(metrics(), Offset::new(40.0, 100.0));
    assert_eq!(p, Some(Point::new(20.0, 10.0)));
}

#[test]
fn offset_to_point_zoom_invariant() {
    let at_one = Camera::new(1.0).offset_to_point(metrics(), Offset::new(123.0, 321.0));
    let at_two = Camera::new(2.0).offset_to_point(metrics(), Offset::new(123.0, 321.0));
    assert_eq!(at_one, at_two);
}

#[test]
fn offset_to_point_not_ready_is_none() {
    let p = Camera::default().offset_to_point(ImageMetrics::default(), Offset::new(1.0, 1.0));
    assert_eq!(p, None);
}

#[test]
fn offset_to_point_round_trips_within_tolerance() {
    let cam = Camera::new(1.7);
    let m = ImageMetrics::new(333.0, 777.0);
    for (x, y) in [(0.0, 0.0), (1.0, 1.0), (123.0, 456.0), (332.0, 776.0), (-5.0, 800.0)] {
        let p = cam.offset_to_point(m, Offset::new(x, y)).unwrap_or_default();
        // Stored percent is within rounding of the exact percent.
        assert!(approx_eq(p.left, x / m.width * 100.0));
        assert!(approx_eq(p.top, y / m.height * 100.0));
    }
}

// --- delta_to_percent ---

#[test]
fn delta_to_percent_concrete_drag() {
    let d = Camera::default().delta_to_percent(metrics(), Offset::new(20.0, -50.0));
    assert_eq!(d, Some(Point::new(-10.0, 5.0)));
}

#[test]
fn delta_to_percent_divides_by_zoom() {
    let at_one = Camera::new(1.0).delta_to_percent(metrics(), Offset::new(20.0, -50.0));
    let at_two = Camera::new(2.0).delta_to_percent(metrics(), Offset::new(40.0, -100.0));
    assert_eq!(at_one, at_two);
}

#[test]
fn delta_to_percent_not_ready_is_none() {
    assert_eq!(Camera::default().delta_to_percent(ImageMetrics::default(), Offset::new(1.0, 1.0)), None);
}
