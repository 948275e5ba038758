use super::*;

fn metrics() -> ImageMetrics {
    ImageMetrics::new(400.0, 500.0)
}

// =============================================================
// region_at
// =============================================================

fn square(top: f64, left: f64, size: f64) -> Vec<Point> {
    vec![
        Point::new(top, left),
        Point::new(top, left + size),
        Point::new(top + size, left + size),
        Point::new(top + size, left),
    ]
}

#[test]
fn region_at_finds_containing_region() {
    let regions = vec![square(0.0, 0.0, 20.0), square(50.0, 50.0, 20.0)];
    // 60% of 400 = 240, 60% of 500 = 300.
    assert_eq!(region_at(&regions, metrics(), Offset::new(240.0, 300.0)), Some(1));
}

#[test]
fn region_at_prefers_topmost() {
    let regions = vec![square(0.0, 0.0, 100.0), square(40.0, 40.0, 20.0)];
    assert_eq!(region_at(&regions, metrics(), Offset::new(200.0, 250.0)), Some(1));
    assert_eq!(region_at(&regions, metrics(), Offset::new(20.0, 20.0)), Some(0));
}

#[test]
fn region_at_miss() {
    let regions = vec![square(0.0, 0.0, 20.0)];
    assert_eq!(region_at(&regions, metrics(), Offset::new(390.0, 490.0)), None);
}

#[test]
fn region_at_ignores_degenerate() {
    let regions = vec![vec![Point::new(0.0, 0.0), Point::new(100.0, 100.0)]];
    assert_eq!(region_at(&regions, metrics(), Offset::new(200.0, 250.0)), None);
}

#[test]
fn region_at_not_ready_is_none() {
    let regions = vec![square(0.0, 0.0, 100.0)];
    assert_eq!(region_at(&regions, ImageMetrics::default(), Offset::new(1.0, 1.0)), None);
}
