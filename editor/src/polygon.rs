//! Polygon model: percent-space points and everything derived from them.
//!
//! A polygon is an ordered `&[Point]`. Insertion order is edge order, and the
//! last point always connects back to the first. Every edit here returns a new
//! `Vec<Point>` instead of mutating in place; the owner of the list decides
//! whether to keep it.

#[cfg(test)]
#[path = "polygon_test.rs"]
mod polygon_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MIN_AREA_POINTS, MIN_PATH_POINTS, ROUND_DIGITS};
use crate::geom::{fmt_coord, round};

/// A polygon vertex as percentages of the unscaled image box.
///
/// Values outside `[0, 100]` are legal and place the vertex outside the image.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Distance from the top edge, in percent of image height.
    pub top: f64,
    /// Distance from the left edge, in percent of image width.
    pub left: f64,
}

impl Point {
    #[must_use]
    pub fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }

    /// Offset this point by a percent delta, rounding the result.
    #[must_use]
    pub fn translated(self, delta: Point) -> Self {
        Self {
            top: round(self.top + delta.top, ROUND_DIGITS),
            left: round(self.left + delta.left, ROUND_DIGITS),
        }
    }
}

/// SVG path data for the closed outline through `points`.
///
/// Empty when fewer than two points exist.
#[must_use]
pub fn path_command(points: &[Point]) -> String {
    path_command_with(points, None)
}

/// SVG path data with one vertex substituted, used for the live-drag preview.
///
/// `replace` carries `(index, point)`; an out-of-range index is ignored. Point
/// order and closure are the same as [`path_command`].
#[must_use]
pub fn path_command_with(points: &[Point], replace: Option<(usize, Point)>) -> String {
    if points.len() < MIN_PATH_POINTS {
        return String::new();
    }

    let vertex = |idx: usize, p: Point| match replace {
        Some((active, preview)) if active == idx => preview,
        _ => p,
    };

    let mut parts = Vec::with_capacity(points.len() + 1);
    for (idx, p) in points.iter().enumerate() {
        let p = vertex(idx, *p);
        let cmd = if idx == 0 { 'M' } else { 'L' };
        parts.push(format!("{cmd} {},{}", fmt_coord(p.left), fmt_coord(p.top)));
    }
    parts.push("z".to_owned());
    parts.join(" ")
}

/// Ordered `"left% top%"` tokens for a polygon clipping primitive.
#[must_use]
pub fn hit_region_spec(points: &[Point]) -> Vec<String> {
    points
        .iter()
        .map(|p| format!("{}% {}%", fmt_coord(p.left), fmt_coord(p.top)))
        .collect()
}

/// CSS `clip-path` value, e.g. `polygon(10% 20%, 50% 20%, 30% 60%)`.
#[must_use]
pub fn clip_path(points: &[Point]) -> String {
    format!("polygon({})", hit_region_spec(points).join(", "))
}

/// Whether `points` enclose an area (three or more vertices).
#[must_use]
pub fn is_closed_area(points: &[Point]) -> bool {
    points.len() >= MIN_AREA_POINTS
}

/// Ray-casting point-in-polygon test in percent space.
///
/// Always false for polygons that do not enclose an area.
#[must_use]
pub fn contains(points: &[Point], p: Point) -> bool {
    if !is_closed_area(points) {
        return false;
    }

    let mut inside = false;
    let mut j = points.len() - 1;
    for (i, vi) in points.iter().enumerate() {
        let vj = points[j];
        if (vi.top > p.top) != (vj.top > p.top)
            && p.left < (vj.left - vi.left) * (p.top - vi.top) / (vj.top - vi.top) + vi.left
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Append a vertex to the end of the polygon.
#[must_use]
pub fn append(points: &[Point], point: Point) -> Vec<Point> {
    let mut next = Vec::with_capacity(points.len() + 1);
    next.extend_from_slice(points);
    next.push(point);
    next
}

/// Replace the vertex at `index`. `None` if the index does not exist.
#[must_use]
pub fn replace_vertex(points: &[Point], index: usize, point: Point) -> Option<Vec<Point>> {
    if index >= points.len() {
        return None;
    }
    let mut next = points.to_vec();
    next[index] = point;
    Some(next)
}

/// Remove the vertex at `index`; later vertices shift down by one.
/// `None` if the index does not exist.
#[must_use]
pub fn remove_vertex(points: &[Point], index: usize) -> Option<Vec<Point>> {
    if index >= points.len() {
        return None;
    }
    let mut next = points.to_vec();
    next.remove(index);
    Some(next)
}

/// Rotate the polygon so the vertex at `index` becomes the winding start.
///
/// Relative order is preserved, so the shape is unchanged. `None` if the
/// index does not exist.
#[must_use]
pub fn set_start(points: &[Point], index: usize) -> Option<Vec<Point>> {
    if index >= points.len() {
        return None;
    }
    let mut next = points.to_vec();
    next.rotate_left(index);
    Some(next)
}
