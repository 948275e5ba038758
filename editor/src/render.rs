//! Rendering: the editor's view model and the live-drag DOM patch.
//!
//! [`scene`] turns engine state into plain values (styles, path data, handle
//! visibility) that any host can bind to elements. [`patch_drag`] is the only
//! place that touches the DOM: during a drag it rewrites the outline path and
//! the dragged handle's transform in place, bypassing the host's re-render.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement};

use crate::camera::{Camera, ImageMetrics, Offset};
use crate::config::EditorConfig;
use crate::consts::{CURSOR_CANVAS, CURSOR_DRAGGING, CURSOR_HANDLE, ROUND_DIGITS, VIEWBOX_SIZE};
use crate::engine::DragPreview;
use crate::geom::{fmt_coord, round, to_percent};
use crate::input::InputState;
use crate::polygon::{self, Point};

/// Attribute marking the outline `<path>` inside the editor container.
pub const OUTLINE_ATTR: &str = "data-outline";

/// Attribute carrying a handle's vertex index.
pub const HANDLE_INDEX_ATTR: &str = "data-vertex";

/// Presentation of one vertex handle.
#[derive(Debug, Clone, PartialEq)]
pub struct HandleView {
    pub index: usize,
    /// CSS `top` in percent, already shifted so the box is centered on the vertex.
    pub top: f64,
    /// CSS `left` in percent, already shifted so the box is centered on the vertex.
    pub left: f64,
    /// Inner edge length in unscaled pixels.
    pub size: f64,
    pub border: f64,
    pub transform: String,
    pub cursor: &'static str,
    pub visible: bool,
}

impl HandleView {
    /// Inline style for the handle element.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "top: {}%; left: {}%; width: {}px; height: {}px; border-width: {}px; transform: {}; cursor: {}; display: {};",
            fmt_coord(self.top),
            fmt_coord(self.left),
            fmt_coord(self.size),
            fmt_coord(self.size),
            fmt_coord(self.border),
            self.transform,
            self.cursor,
            if self.visible { "block" } else { "none" },
        )
    }
}

/// Everything the host needs to draw the editor.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// CSS transform for the zoomed container.
    pub container_transform: String,
    /// SVG `viewBox` of the outline overlay.
    pub view_box: String,
    /// SVG path data for the outline, including any live-drag preview.
    pub path: String,
    pub handles: Vec<HandleView>,
    /// Cursor for the container.
    pub cursor: &'static str,
}

/// `viewBox` spanning the logical percent square.
#[must_use]
pub fn view_box() -> String {
    format!("0 0 {VIEWBOX_SIZE} {VIEWBOX_SIZE}")
}

/// Handle transform: inverse zoom scale, plus the drag translation while dragging.
#[must_use]
pub fn handle_transform(camera: &Camera, drag: Option<Offset>) -> String {
    let scale = format!("scale({})", camera.handle_scale());
    match drag {
        Some(d) => format!("{scale} translate3d({}px, {}px, 0px)", fmt_coord(d.x), fmt_coord(d.y)),
        None => scale,
    }
}

/// Build the view model for the current engine state.
#[must_use]
pub fn scene(
    points: &[Point],
    input: &InputState,
    camera: &Camera,
    metrics: ImageMetrics,
    config: &EditorConfig,
    hide_handles: bool,
) -> Scene {
    let drag = match input {
        InputState::Dragging(drag) => Some(*drag),
        _ => None,
    };
    let preview = drag.and_then(|d| d.preview(points, camera, metrics).map(|p| (d.index, p)));

    // Handle boxes are sized in unscaled pixels, so the centering shift is a
    // percentage of the unscaled image.
    let radius = config.handle_radius_px();
    let top_shift = to_percent(radius, metrics.height).unwrap_or_default();
    let left_shift = to_percent(radius, metrics.width).unwrap_or_default();

    let handles = points
        .iter()
        .enumerate()
        .map(|(index, p)| {
            let active = drag.is_some_and(|d| d.index == index);
            HandleView {
                index,
                top: round(p.top - top_shift, ROUND_DIGITS),
                left: round(p.left - left_shift, ROUND_DIGITS),
                size: config.handle_size_px,
                border: config.handle_border_px,
                transform: handle_transform(camera, drag.filter(|_| active).map(|d| d.accumulated)),
                cursor: if active { CURSOR_DRAGGING } else { CURSOR_HANDLE },
                visible: !hide_handles && (drag.is_none() || active),
            }
        })
        .collect();

    Scene {
        container_transform: camera.container_transform(),
        view_box: view_box(),
        path: polygon::path_command_with(points, preview),
        handles,
        cursor: if drag.is_some() { CURSOR_DRAGGING } else { CURSOR_CANVAS },
    }
}

/// Apply a live-drag patch to the editor's DOM.
///
/// Rewrites the `d` attribute of the outline path and the transform of the
/// dragged handle inside `container`. Missing elements are skipped.
///
/// # Errors
///
/// Returns `Err` if a selector query or attribute write fails.
pub fn patch_drag(container: &Element, preview: &DragPreview) -> Result<(), JsValue> {
    if let Some(path) = container.query_selector(&format!("path[{OUTLINE_ATTR}]"))? {
        path.set_attribute("d", &preview.path)?;
    }

    let selector = format!("[{HANDLE_INDEX_ATTR}=\"{}\"]", preview.index);
    if let Some(handle) = container.query_selector(&selector)? {
        if let Some(handle) = handle.dyn_ref::<HtmlElement>() {
            handle.style().set_property("transform", &preview.transform)?;
        }
    }
    Ok(())
}
