//! Input model: pointer buttons, event targets, and the gesture state machine.
//!
//! `InputState` is the active gesture tracked between pointer-down and
//! pointer-up. A press on empty canvas waits in `PressedEmpty` until release
//! decides whether it was a click that adds a vertex; a press on a handle
//! enters `Dragging` and accumulates screen-space movement until release.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::{Camera, ImageMetrics, Offset};
use crate::polygon::Point;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub fn from_dom(button: i16) -> Self {
        match button {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// The element a pointer event landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The image, the SVG overlay, or anything else that is not a handle.
    Canvas,
    /// The handle of the vertex at this index.
    Handle(usize),
}

/// Context for a vertex drag in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Index of the vertex being dragged.
    pub index: usize,
    /// Local pixel position of the press that grabbed the handle.
    pub start: Offset,
    /// Screen-pixel movement summed since the press.
    pub accumulated: Offset,
}

impl DragState {
    /// Where the dragged vertex would land if released now.
    ///
    /// `None` if the vertex no longer exists or the image metrics are not ready.
    #[must_use]
    pub fn preview(&self, points: &[Point], camera: &Camera, metrics: ImageMetrics) -> Option<Point> {
        let origin = points.get(self.index)?;
        let delta = camera.delta_to_percent(metrics, self.accumulated)?;
        Some(origin.translated(delta))
    }
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// Primary button went down on empty canvas; release decides whether a vertex is added.
    PressedEmpty {
        /// The press closed an open menu, so release must not add a vertex.
        menu_dismissed: bool,
        /// Screen-pixel movement since the press.
        travel: Offset,
    },
    /// A vertex handle is being dragged.
    Dragging(DragState),
}

impl InputState {
    /// Index of the vertex being dragged, if any.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        match self {
            Self::Dragging(drag) => Some(drag.index),
            _ => None,
        }
    }
}
