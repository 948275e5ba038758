//! Shared numeric constants for the editor crate.

// ── Coordinates ─────────────────────────────────────────────────

/// Decimal places kept on stored percent coordinates.
pub const ROUND_DIGITS: u8 = 3;

/// Logical edge length of the SVG overlay; percent coordinates map 1:1 onto it.
pub const VIEWBOX_SIZE: f64 = 100.0;

// ── Zoom ────────────────────────────────────────────────────────

/// Smallest zoom factor the camera accepts.
pub const MIN_ZOOM: f64 = 0.1;

// ── Handles ─────────────────────────────────────────────────────

/// Inner edge length of a vertex handle box, in screen pixels.
pub const POINT_BOX_SIZE: f64 = 10.0;

/// Border width of a vertex handle box, in screen pixels.
pub const POINT_BOX_BORDER: f64 = 2.0;

// ── Gestures ────────────────────────────────────────────────────

/// Screen-pixel travel beyond which a press on empty canvas no longer counts as a click.
pub const CLICK_SLOP_PX: f64 = 3.0;

// ── Polygons ────────────────────────────────────────────────────

/// Fewest points that draw a visible outline.
pub const MIN_PATH_POINTS: usize = 2;

/// Fewest points that enclose an area usable as a hit region.
pub const MIN_AREA_POINTS: usize = 3;

// ── Cursors ─────────────────────────────────────────────────────

pub const CURSOR_CANVAS: &str = "crosshair";
pub const CURSOR_HANDLE: &str = "grab";
pub const CURSOR_DRAGGING: &str = "grabbing";
