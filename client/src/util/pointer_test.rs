use super::*;

// =============================================================
// vertex_index
// =============================================================

#[test]
fn vertex_index_parses_number() {
    assert_eq!(vertex_index(Some("3")), Some(3));
    assert_eq!(vertex_index(Some(" 12 ")), Some(12));
}

#[test]
fn vertex_index_rejects_garbage() {
    assert_eq!(vertex_index(None), None);
    assert_eq!(vertex_index(Some("")), None);
    assert_eq!(vertex_index(Some("-1")), None);
    assert_eq!(vertex_index(Some("one")), None);
}

// =============================================================
// to_local
// =============================================================

#[test]
fn to_local_subtracts_origin() {
    let local = to_local(Offset::new(150.0, 80.0), Offset::new(100.0, 50.0), 1.0);
    assert_eq!(local, Offset::new(50.0, 30.0));
}

#[test]
fn to_local_divides_by_zoom() {
    let local = to_local(Offset::new(180.0, 90.0), Offset::new(100.0, 50.0), 2.0);
    assert_eq!(local, Offset::new(40.0, 20.0));
}

#[test]
fn to_local_ignores_bad_zoom() {
    let local = to_local(Offset::new(150.0, 80.0), Offset::new(100.0, 50.0), 0.0);
    assert_eq!(local, Offset::new(50.0, 30.0));
}

// =============================================================
// to_anchor
// =============================================================

#[test]
fn to_anchor_without_scroll_is_box_relative() {
    let anchor = to_anchor(Offset::new(150.0, 80.0), Offset::new(100.0, 50.0), Offset::ZERO);
    assert_eq!(anchor, Offset::new(50.0, 30.0));
}

#[test]
fn to_anchor_adds_scroll_offsets() {
    let anchor = to_anchor(Offset::new(150.0, 80.0), Offset::new(100.0, 50.0), Offset::new(240.0, 35.0));
    assert_eq!(anchor, Offset::new(290.0, 65.0));
}
