//! Zoom and image metrics: the two inputs every pixel-to-percent conversion needs.
//!
//! The editor container is scaled with a CSS transform, but percentage
//! positioning is resolved against the unscaled element box. Conversions
//! therefore divide by the unscaled image size, and screen-space deltas are
//! first divided by the zoom factor.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use std::ops::Add;

use crate::consts::MIN_ZOOM;
use crate::geom::to_percent;
use crate::polygon::Point;

/// A pixel position or pixel delta.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length of this offset.
    #[must_use]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl Add for Offset {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

/// Rendered size of the unscaled image in device pixels.
///
/// Zero until the image finishes loading.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImageMetrics {
    pub width: f64,
    pub height: f64,
}

impl ImageMetrics {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both dimensions are known and positive.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Zoom state for the editor container.
///
/// `zoom` is a scale factor (1.0 = no zoom), never below `min_zoom`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    zoom: f64,
    min_zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { zoom: 1.0, min_zoom: MIN_ZOOM }
    }
}

impl Camera {
    /// Camera at `zoom`, clamped to the default floor.
    #[must_use]
    pub fn new(zoom: f64) -> Self {
        let mut camera = Self::default();
        camera.set_zoom(zoom);
        camera
    }

    /// Camera with a custom zoom floor. Non-positive floors fall back to the default.
    #[must_use]
    pub fn with_min_zoom(min_zoom: f64) -> Self {
        let min_zoom = if min_zoom.is_finite() && min_zoom > 0.0 { min_zoom } else { MIN_ZOOM };
        Self { zoom: 1.0_f64.max(min_zoom), min_zoom }
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    /// Set the zoom factor, clamped to the floor. Non-finite values are ignored.
    ///
    /// Returns `true` if the stored zoom changed.
    pub fn set_zoom(&mut self, zoom: f64) -> bool {
        if !zoom.is_finite() {
            return false;
        }
        let next = zoom.max(self.min_zoom);
        if (next - self.zoom).abs() < f64::EPSILON {
            return false;
        }
        self.zoom = next;
        true
    }

    /// Scale applied to handles so they keep a constant on-screen size.
    #[must_use]
    pub fn handle_scale(&self) -> f64 {
        1.0 / self.zoom
    }

    /// Convert a position in the container's local (unscaled) pixel space to a point.
    ///
    /// Local offsets already live in the unscaled box, so zoom cancels out.
    /// `None` while the image metrics are not ready.
    #[must_use]
    pub fn offset_to_point(&self, metrics: ImageMetrics, offset: Offset) -> Option<Point> {
        if !metrics.is_ready() {
            return None;
        }
        Some(Point {
            top: to_percent(offset.y * self.zoom, metrics.height * self.zoom)?,
            left: to_percent(offset.x * self.zoom, metrics.width * self.zoom)?,
        })
    }

    /// Convert a screen-space pixel delta to a percent delta.
    ///
    /// `None` while the image metrics are not ready.
    #[must_use]
    pub fn delta_to_percent(&self, metrics: ImageMetrics, delta: Offset) -> Option<Point> {
        if !metrics.is_ready() {
            return None;
        }
        Some(Point {
            top: to_percent(delta.y, metrics.height * self.zoom)?,
            left: to_percent(delta.x, metrics.width * self.zoom)?,
        })
    }

    /// CSS transform for the zoomed container.
    #[must_use]
    pub fn container_transform(&self) -> String {
        format!("scale({})", self.zoom)
    }
}
