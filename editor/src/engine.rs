//! The editing engine: pointer-driven state machine over a borrowed point list.
//!
//! The engine never owns the committed polygon. It keeps the last snapshot the
//! host handed down through [`Engine::set_points`], derives new sequences from
//! it, and reports them as [`Action::PointsChanged`]. The host decides whether
//! to keep a change and hands the result back down.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::camera::{Camera, ImageMetrics, Offset};
use crate::config::EditorConfig;
use crate::consts::{CLICK_SLOP_PX, CURSOR_CANVAS, CURSOR_DRAGGING};
use crate::input::{Button, DragState, InputState, PointerTarget};
use crate::menu::{Menu, MenuItem};
use crate::polygon::{self, Point};
use crate::render::{self, Scene};

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The polygon changed; the payload is the complete new sequence.
    PointsChanged(Vec<Point>),
    /// Live-drag patch for the dragged handle and the outline. Not a commit.
    DragPreview(DragPreview),
    /// The vertex menu opened for `index` at `anchor`.
    MenuOpened { index: usize, anchor: Offset },
    MenuClosed,
    SetCursor(&'static str),
    RenderNeeded,
}

/// Transient drag state published on every pointer move.
#[derive(Debug, Clone, PartialEq)]
pub struct DragPreview {
    /// Index of the dragged vertex.
    pub index: usize,
    /// Where the vertex would land if released now.
    pub preview: Point,
    /// Screen-pixel movement since the press.
    pub delta: Offset,
    /// Outline path data with the preview substituted.
    pub path: String,
    /// Transform for the dragged handle.
    pub transform: String,
}

/// Operations offered by the vertex context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexAction {
    /// Remove the vertex.
    Delete,
    /// Rotate the polygon so the vertex becomes index 0.
    SetStart,
}

/// Items of the vertex context menu, in display order.
#[must_use]
pub fn vertex_menu_items() -> Vec<MenuItem<VertexAction>> {
    vec![
        MenuItem::new("Delete point", VertexAction::Delete).with_icon("delete"),
        MenuItem::new("Set as start", VertexAction::SetStart).with_icon("flag"),
    ]
}

/// Engine state. Browser-independent; the host binds DOM events to it.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    pub config: EditorConfig,
    pub camera: Camera,
    pub metrics: ImageMetrics,
    pub input: InputState,
    pub menu: Menu<VertexAction>,
    menu_target: Option<usize>,
    hide_handles: bool,
    points: Vec<Point>,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EditorConfig) -> Self {
        Self { camera: Camera::with_min_zoom(config.min_zoom), config, ..Self::default() }
    }

    // --- Data inputs ---

    /// Accept a new point snapshot from the owner.
    ///
    /// A drag or an open vertex menu whose index no longer exists is aborted.
    pub fn set_points(&mut self, points: Vec<Point>) -> Vec<Action> {
        self.points = points;
        let len = self.points.len();
        let mut actions = Vec::new();

        if let Some(index) = self.input.active_index() {
            if index >= len {
                log::warn!("vertex {index} vanished mid-drag ({len} points left); aborting drag");
                self.input = InputState::Idle;
                actions.push(Action::SetCursor(CURSOR_CANVAS));
            }
        }

        if self.menu_target.is_some_and(|target| target >= len) {
            self.menu_target = None;
            if self.menu.close() {
                actions.push(Action::MenuClosed);
            }
        }

        if !actions.is_empty() {
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    /// Set the zoom factor (clamped to the configured floor).
    pub fn set_zoom(&mut self, zoom: f64) -> Vec<Action> {
        if self.camera.set_zoom(zoom) { vec![Action::RenderNeeded] } else { Vec::new() }
    }

    /// Hide or show every vertex handle.
    pub fn set_hide_handles(&mut self, hide: bool) -> Vec<Action> {
        if self.hide_handles == hide {
            return Vec::new();
        }
        self.hide_handles = hide;
        vec![Action::RenderNeeded]
    }

    /// Record the rendered size of the loaded image.
    ///
    /// Zero or non-finite dimensions are ignored; the image is not ready yet.
    pub fn on_image_load(&mut self, width: f64, height: f64) -> Vec<Action> {
        let metrics = ImageMetrics::new(width, height);
        if !metrics.is_ready() {
            log::debug!("ignoring image metrics {width}x{height}");
            return Vec::new();
        }
        log::debug!("image metrics {width}x{height}");
        self.metrics = metrics;
        vec![Action::RenderNeeded]
    }

    // --- Pointer input ---

    /// Pointer pressed on `target` at local pixel `offset`.
    ///
    /// A primary press during a drag whose release was never seen commits that
    /// drag first. Secondary presses leave it running.
    pub fn on_pointer_down(&mut self, target: PointerTarget, offset: Offset, button: Button) -> Vec<Action> {
        let mut actions = Vec::new();
        if button == Button::Primary {
            if let InputState::Dragging(drag) = self.input {
                log::debug!("press while dragging vertex {}; committing", drag.index);
                actions.extend(self.commit_drag(drag));
            }
        }
        let menu_dismissed = self.dismiss_menu(&mut actions);
        if button != Button::Primary {
            return actions;
        }

        match target {
            PointerTarget::Handle(index) if index < self.points.len() => {
                log::debug!("grabbed vertex {index}");
                self.input = InputState::Dragging(DragState { index, start: offset, accumulated: Offset::ZERO });
                actions.push(Action::SetCursor(CURSOR_DRAGGING));
                actions.push(Action::RenderNeeded);
            }
            PointerTarget::Handle(index) => {
                log::warn!("press on unknown vertex {index}");
                self.input = InputState::Idle;
            }
            PointerTarget::Canvas => {
                self.input = InputState::PressedEmpty { menu_dismissed, travel: Offset::ZERO };
            }
        }
        actions
    }

    /// Pointer moved by `movement` screen pixels.
    ///
    /// While dragging this only publishes a [`DragPreview`]; nothing is committed.
    pub fn on_pointer_move(&mut self, movement: Offset) -> Vec<Action> {
        let drag = match &mut self.input {
            InputState::Idle => return Vec::new(),
            InputState::PressedEmpty { travel, .. } => {
                *travel = *travel + movement;
                return Vec::new();
            }
            InputState::Dragging(drag) => {
                drag.accumulated = drag.accumulated + movement;
                *drag
            }
        };

        if drag.index >= self.points.len() {
            log::warn!("vertex {} vanished mid-drag; aborting drag", drag.index);
            return self.abort_drag();
        }
        log::trace!("vertex {} dragged by {:?}", drag.index, drag.accumulated);
        self.drag_preview(&drag).map(Action::DragPreview).into_iter().collect()
    }

    /// Pointer released at local pixel `offset`.
    pub fn on_pointer_up(&mut self, offset: Offset, button: Button) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Idle => Vec::new(),
            InputState::PressedEmpty { menu_dismissed, travel } => {
                if button != Button::Primary || menu_dismissed || travel.length() > CLICK_SLOP_PX {
                    return Vec::new();
                }
                self.add_point(offset)
            }
            InputState::Dragging(drag) => self.commit_drag(drag),
        }
    }

    /// Pointer left the editor container. An active drag commits as on release.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Dragging(drag) => self.commit_drag(drag),
            _ => Vec::new(),
        }
    }

    // --- Vertex menu ---

    /// Secondary action on the handle of vertex `index`. Drag state is untouched.
    pub fn on_context_menu(&mut self, index: usize, anchor: Offset) -> Vec<Action> {
        if index >= self.points.len() {
            return Vec::new();
        }
        self.menu.open_at(anchor, vertex_menu_items());
        self.menu_target = Some(index);
        vec![Action::MenuOpened { index, anchor }, Action::RenderNeeded]
    }

    /// The user picked menu item `item`. The menu closes before the action runs.
    pub fn on_menu_select(&mut self, item: usize) -> Vec<Action> {
        let Some(action) = self.menu.select(item) else {
            return Vec::new();
        };
        let mut actions = vec![Action::MenuClosed];
        if let Some(index) = self.menu_target.take() {
            actions.extend(self.apply_vertex_action(action, index));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// The menu was dismissed without choosing an item.
    pub fn on_menu_close(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        self.dismiss_menu(&mut actions);
        actions
    }

    // --- Queries ---

    /// The last point snapshot handed down by the owner.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Index of the vertex being dragged, if any.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.input.active_index()
    }

    /// Vertex the open menu acts on, if any.
    #[must_use]
    pub fn menu_target(&self) -> Option<usize> {
        self.menu_target
    }

    #[must_use]
    pub fn hide_handles(&self) -> bool {
        self.hide_handles
    }

    /// Where the dragged vertex would land if released now.
    #[must_use]
    pub fn drag_preview_point(&self) -> Option<Point> {
        match self.input {
            InputState::Dragging(drag) => drag.preview(&self.points, &self.camera, self.metrics),
            _ => None,
        }
    }

    /// View model for the host.
    #[must_use]
    pub fn scene(&self) -> Scene {
        render::scene(&self.points, &self.input, &self.camera, self.metrics, &self.config, self.hide_handles)
    }

    // --- Internals ---

    fn dismiss_menu(&mut self, actions: &mut Vec<Action>) -> bool {
        self.menu_target = None;
        if !self.menu.close() {
            return false;
        }
        actions.push(Action::MenuClosed);
        actions.push(Action::RenderNeeded);
        true
    }

    fn add_point(&self, offset: Offset) -> Vec<Action> {
        let Some(point) = self.camera.offset_to_point(self.metrics, offset) else {
            log::debug!("image not loaded; ignoring click");
            return Vec::new();
        };
        log::debug!("adding vertex {} at {point:?}", self.points.len());
        vec![Action::PointsChanged(polygon::append(&self.points, point))]
    }

    fn drag_preview(&self, drag: &DragState) -> Option<DragPreview> {
        let preview = drag.preview(&self.points, &self.camera, self.metrics)?;
        Some(DragPreview {
            index: drag.index,
            preview,
            delta: drag.accumulated,
            path: polygon::path_command_with(&self.points, Some((drag.index, preview))),
            transform: render::handle_transform(&self.camera, Some(drag.accumulated)),
        })
    }

    fn commit_drag(&mut self, drag: DragState) -> Vec<Action> {
        self.input = InputState::Idle;
        let mut actions = Vec::new();
        let next = drag
            .preview(&self.points, &self.camera, self.metrics)
            .and_then(|p| polygon::replace_vertex(&self.points, drag.index, p));
        match next {
            Some(next) => {
                log::debug!("vertex {} committed at {:?}", drag.index, next[drag.index]);
                actions.push(Action::PointsChanged(next));
            }
            None => log::warn!("discarding drag of vertex {}: vertex missing or image not loaded", drag.index),
        }
        actions.push(Action::SetCursor(CURSOR_CANVAS));
        actions.push(Action::RenderNeeded);
        actions
    }

    fn abort_drag(&mut self) -> Vec<Action> {
        self.input = InputState::Idle;
        vec![Action::SetCursor(CURSOR_CANVAS), Action::RenderNeeded]
    }

    fn apply_vertex_action(&mut self, action: VertexAction, index: usize) -> Vec<Action> {
        let len = self.points.len();
        let next = match action {
            VertexAction::Delete => polygon::remove_vertex(&self.points, index),
            VertexAction::SetStart => polygon::set_start(&self.points, index),
        };
        let Some(next) = next else {
            log::warn!("{action:?} on missing vertex {index}");
            return Vec::new();
        };

        let mut actions = Vec::new();
        let remapped = self.input.active_index().map(|active| match action {
            VertexAction::Delete if active == index => None,
            VertexAction::Delete if active > index => Some(active - 1),
            VertexAction::Delete => Some(active),
            VertexAction::SetStart => Some((active + len - index) % len),
        });
        match remapped {
            Some(None) => {
                log::debug!("deleted vertex {index} while dragging it; drag cleared");
                self.input = InputState::Idle;
                actions.push(Action::SetCursor(CURSOR_CANVAS));
            }
            Some(Some(new_index)) => {
                if let InputState::Dragging(drag) = &mut self.input {
                    drag.index = new_index;
                }
            }
            None => {}
        }

        log::debug!("{action:?} vertex {index}");
        actions.push(Action::PointsChanged(next));
        actions
    }
}
