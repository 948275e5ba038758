//! Gallery state: the draft polygon under edit and the saved polygons.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gallery page owns the committed copy of every polygon. The builder
//! reports each change of the draft through its `on_change` callback; the
//! gallery keeps it, and on save moves it into the saved list. Saved polygons
//! are shown as clickable regions over a preview image.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use editor::camera::{Camera, ImageMetrics, Offset};
use editor::consts::ROUND_DIGITS;
use editor::geom::round;
use editor::hit;
use editor::menu::{Menu, MenuItem};
use editor::polygon::{self, Point};
use uuid::Uuid;

/// Added to the zoom factor by the zoom-in button.
pub const ZOOM_IN_STEP: f64 = 0.5;
/// Subtracted from the zoom factor by the zoom-out button.
pub const ZOOM_OUT_STEP: f64 = 0.2;
/// Zoom factor restored by the reset button.
pub const ZOOM_RESET: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GalleryError {
    #[error("polygon needs at least 3 points, got {0}")]
    TooFewPoints(usize),
    #[error("no saved polygon {0}")]
    NotFound(Uuid),
}

/// A committed polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedPolygon {
    pub id: Uuid,
    pub points: Vec<Point>,
}

impl SavedPolygon {
    /// CSS `clip-path` for this polygon's region.
    pub fn clip_path(&self) -> String {
        polygon::clip_path(&self.points)
    }
}

impl AsRef<[Point]> for SavedPolygon {
    fn as_ref(&self) -> &[Point] {
        &self.points
    }
}

/// Actions offered by the saved-region menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryAction {
    Edit,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryState {
    /// Points of the polygon currently in the builder.
    pub draft: Vec<Point>,
    pub zoom: f64,
    pub hide_handles: bool,
    pub saved: Vec<SavedPolygon>,
    /// Saved polygon loaded into the draft; saving replaces it in place.
    pub editing: Option<Uuid>,
    pub menu: Menu<GalleryAction>,
    menu_target: Option<Uuid>,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            draft: Vec::new(),
            zoom: ZOOM_RESET,
            hide_handles: false,
            saved: Vec::new(),
            editing: None,
            menu: Menu::new(),
            menu_target: None,
        }
    }
}

impl GalleryState {
    // --- Draft ---

    pub fn set_draft(&mut self, points: Vec<Point>) {
        self.draft = points;
    }

    pub fn can_save(&self) -> bool {
        polygon::is_closed_area(&self.draft)
    }

    /// Commit the draft. Returns the id it was saved under.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::TooFewPoints`] when the draft encloses no area.
    pub fn save(&mut self) -> Result<Uuid, GalleryError> {
        if !self.can_save() {
            return Err(GalleryError::TooFewPoints(self.draft.len()));
        }
        let points = std::mem::take(&mut self.draft);
        let existing = self
            .editing
            .take()
            .and_then(|id| self.saved.iter_mut().find(|saved| saved.id == id));

        let id = match existing {
            Some(saved) => {
                saved.points = points;
                log::debug!("updated polygon {}", saved.id);
                saved.id
            }
            None => {
                let id = Uuid::new_v4();
                log::debug!("saved polygon {id} ({} points)", points.len());
                self.saved.push(SavedPolygon { id, points });
                id
            }
        };
        Ok(id)
    }

    /// Drop the draft and stop editing.
    pub fn clear(&mut self) {
        self.draft.clear();
        self.editing = None;
    }

    // --- Zoom ---

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_IN_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_OUT_STEP);
    }

    pub fn reset_zoom(&mut self) {
        self.zoom = ZOOM_RESET;
    }

    fn set_zoom(&mut self, zoom: f64) {
        self.zoom = Camera::new(round(zoom, ROUND_DIGITS)).zoom();
    }

    // --- Saved polygons ---

    /// Load a saved polygon into the draft.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::NotFound`] for an unknown id.
    pub fn edit(&mut self, id: Uuid) -> Result<(), GalleryError> {
        let saved = self.find(id)?;
        self.draft = saved.points.clone();
        self.editing = Some(id);
        Ok(())
    }

    /// Remove a saved polygon.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::NotFound`] for an unknown id.
    pub fn delete(&mut self, id: Uuid) -> Result<SavedPolygon, GalleryError> {
        let pos = self
            .saved
            .iter()
            .position(|saved| saved.id == id)
            .ok_or(GalleryError::NotFound(id))?;
        if self.editing == Some(id) {
            self.editing = None;
        }
        log::debug!("deleted polygon {id}");
        Ok(self.saved.remove(pos))
    }

    /// Topmost saved polygon under a pixel offset on the preview image.
    pub fn region_at(&self, metrics: ImageMetrics, offset: Offset) -> Option<Uuid> {
        hit::region_at(&self.saved, metrics, offset).map(|idx| self.saved[idx].id)
    }

    fn find(&self, id: Uuid) -> Result<&SavedPolygon, GalleryError> {
        self.saved.iter().find(|saved| saved.id == id).ok_or(GalleryError::NotFound(id))
    }

    // --- Region menu ---

    /// Open the region menu for saved polygon `id` at `anchor`.
    ///
    /// Returns `false` for an unknown id.
    pub fn open_menu(&mut self, id: Uuid, anchor: Offset) -> bool {
        if self.find(id).is_err() {
            return false;
        }
        self.menu.open_at(
            anchor,
            vec![
                MenuItem::new("Edit", GalleryAction::Edit).with_icon("edit"),
                MenuItem::new("Delete", GalleryAction::Delete).with_icon("delete"),
            ],
        );
        self.menu_target = Some(id);
        true
    }

    /// A click on the preview image at `at`. Opens the region menu there for
    /// the topmost saved polygon; a miss leaves the menu alone.
    pub fn click_region(&mut self, metrics: ImageMetrics, at: Offset) -> bool {
        match self.region_at(metrics, at) {
            Some(id) => self.open_menu(id, at),
            None => false,
        }
    }

    pub fn close_menu(&mut self) {
        self.menu.close();
        self.menu_target = None;
    }

    pub fn menu_target(&self) -> Option<Uuid> {
        self.menu_target
    }

    /// Run menu item `item` against the menu's target. The menu closes first.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::NotFound`] if the target vanished while the
    /// menu was open.
    pub fn select_menu(&mut self, item: usize) -> Result<Option<GalleryAction>, GalleryError> {
        let Some(action) = self.menu.select(item) else {
            return Ok(None);
        };
        let Some(id) = self.menu_target.take() else {
            return Ok(None);
        };
        match action {
            GalleryAction::Edit => self.edit(id)?,
            GalleryAction::Delete => {
                self.delete(id)?;
            }
        }
        Ok(Some(action))
    }
}
