use super::*;

// =============================================================
// Button
// =============================================================

#[test]
fn button_from_dom_codes() {
    assert_eq!(Button::from_dom(0), Button::Primary);
    assert_eq!(Button::from_dom(1), Button::Middle);
    assert_eq!(Button::from_dom(2), Button::Secondary);
}

#[test]
fn button_from_dom_unknown_is_primary() {
    assert_eq!(Button::from_dom(4), Button::Primary);
    assert_eq!(Button::from_dom(-1), Button::Primary);
}

// =============================================================
// PointerTarget
// =============================================================

#[test]
fn pointer_target_equality() {
    assert_eq!(PointerTarget::Handle(2), PointerTarget::Handle(2));
    assert_ne!(PointerTarget::Handle(2), PointerTarget::Handle(3));
    assert_ne!(PointerTarget::Canvas, PointerTarget::Handle(0));
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    let state = InputState::default();
    assert_eq!(state, InputState::Idle);
    assert_eq!(state.active_index(), None);
}

#[test]
fn pressed_empty_has_no_active_index() {
    let state = InputState::PressedEmpty { menu_dismissed: false, travel: Offset::ZERO };
    assert_ne!(state, InputState::Idle);
    assert_eq!(state.active_index(), None);
}

#[test]
fn dragging_reports_active_index() {
    let state = InputState::Dragging(DragState {
        index: 4,
        start: Offset::new(1.0, 2.0),
        accumulated: Offset::ZERO,
    });
    assert_eq!(state.active_index(), Some(4));
    assert_ne!(state, InputState::Idle);
}

// =============================================================
// DragState::preview
// =============================================================

fn drag(index: usize, dx: f64, dy: f64) -> DragState {
    DragState { index, start: Offset::ZERO, accumulated: Offset::new(dx, dy) }
}

#[test]
fn preview_adds_percent_delta() {
    let points = vec![Point::new(20.0, 10.0)];
    let preview = drag(0, 20.0, -50.0).preview(&points, &Camera::default(), ImageMetrics::new(400.0, 500.0));
    assert_eq!(preview, Some(Point::new(10.0, 15.0)));
}

#[test]
fn preview_missing_vertex_is_none() {
    let points = vec![Point::new(20.0, 10.0)];
    let preview = drag(1, 1.0, 1.0).preview(&points, &Camera::default(), ImageMetrics::new(400.0, 500.0));
    assert_eq!(preview, None);
}

#[test]
fn preview_without_metrics_is_none() {
    let points = vec![Point::new(20.0, 10.0)];
    let preview = drag(0, 1.0, 1.0).preview(&points, &Camera::default(), ImageMetrics::default());
    assert_eq!(preview, None);
}
