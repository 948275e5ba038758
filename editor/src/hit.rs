//! Hit-testing of saved regions against a raw pointer position.
//!
//! Vertex handles are DOM elements and report their own index, so only
//! preview regions need a geometric lookup.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::{Camera, ImageMetrics, Offset};
use crate::polygon::{self, Point};

/// Index of the topmost region containing `offset` (local pixels of the preview image).
///
/// Later regions are stacked above earlier ones and win. Regions with fewer
/// than three points never match.
#[must_use]
pub fn region_at<R: AsRef<[Point]>>(regions: &[R], metrics: ImageMetrics, offset: Offset) -> Option<usize> {
    let p = Camera::default().offset_to_point(metrics, offset)?;
    regions
        .iter()
        .enumerate()
        .rev()
        .find(|(_, region)| polygon::contains(region.as_ref(), p))
        .map(|(idx, _)| idx)
}
