#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// editor_config
// =============================================================

#[test]
fn shipped_editor_config_is_valid() {
    assert!(EditorConfig::from_json(EDITOR_CONFIG).is_ok());
    assert_eq!(editor_config(EDITOR_CONFIG).handle_size_px, 10.0);
}

#[test]
fn partial_editor_config_keeps_other_defaults() {
    let config = editor_config(r#"{"min_zoom": 0.5}"#);
    assert_eq!(config.min_zoom, 0.5);
    assert_eq!(config.handle_border_px, EditorConfig::default().handle_border_px);
}

#[test]
fn rejected_editor_config_falls_back_to_defaults() {
    assert_eq!(editor_config("{not json"), EditorConfig::default());
    assert_eq!(editor_config(r#"{"min_zoom": -1}"#), EditorConfig::default());
}
