//! Axis helpers and input sanitising.
//!
//! The engine is written once in main/cross terms; these helpers project
//! sizes and edge sets onto the axes of a [`Direction`] and back. The
//! sanitisers implement the clamp policy: nothing a caller sets can make a
//! pass fail, it can only be clamped.

use taffy::geometry::{Point, Rect, Size};

use crate::types::Direction;

/// Clamp a length to a finite, non-negative value.
#[inline]
pub(crate) fn length(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}

/// Flex factors share the length clamp: negative or NaN counts as zero.
#[inline]
pub(crate) fn factor(value: f32) -> f32 {
    length(value)
}

/// An aspect ratio is only usable when finite and positive.
#[inline]
pub(crate) fn ratio(value: Option<f32>) -> Option<f32> {
    value.filter(|r| r.is_finite() && *r > 0.0)
}

/// An explicit dimension, clamped.
#[inline]
pub(crate) fn explicit(value: Option<f32>) -> Option<f32> {
    value.map(length)
}

/// Finite offset or zero. Offsets may be negative.
#[inline]
fn offset(value: f32) -> f32 {
    if value.is_finite() { value } else { 0.0 }
}

pub(crate) fn sanitize_edges(edges: Rect<f32>) -> Rect<f32> {
    Rect {
        left: length(edges.left),
        right: length(edges.right),
        top: length(edges.top),
        bottom: length(edges.bottom),
    }
}

/// Relative shift from `left/top`, falling back to `-right/-bottom`.
pub(crate) fn inset_offset(
    left: Option<f32>,
    top: Option<f32>,
    right: Option<f32>,
    bottom: Option<f32>,
) -> Point<f32> {
    let x = left.map(offset).or_else(|| right.map(|r| -offset(r)));
    let y = top.map(offset).or_else(|| bottom.map(|b| -offset(b)));
    Point {
        x: x.unwrap_or(0.0),
        y: y.unwrap_or(0.0),
    }
}

// =============================================================================
// Projection onto main / cross
// =============================================================================

#[inline]
pub(crate) fn main_of(size: Size<f32>, direction: Direction) -> f32 {
    if direction.is_row() { size.width } else { size.height }
}

#[inline]
pub(crate) fn cross_of(size: Size<f32>, direction: Direction) -> f32 {
    if direction.is_row() { size.height } else { size.width }
}

/// Build a size from main and cross extents.
#[inline]
pub(crate) fn size_from_axes(main: f32, cross: f32, direction: Direction) -> Size<f32> {
    if direction.is_row() {
        Size { width: main, height: cross }
    } else {
        Size { width: cross, height: main }
    }
}

/// Build a point from main and cross coordinates.
#[inline]
pub(crate) fn point_from_axes(main: f32, cross: f32, direction: Direction) -> Point<f32> {
    if direction.is_row() {
        Point { x: main, y: cross }
    } else {
        Point { x: cross, y: main }
    }
}

/// (start, end) edges along the main axis.
#[inline]
pub(crate) fn main_edges(edges: Rect<f32>, direction: Direction) -> (f32, f32) {
    if direction.is_row() {
        (edges.left, edges.right)
    } else {
        (edges.top, edges.bottom)
    }
}

/// (start, end) edges along the cross axis.
#[inline]
pub(crate) fn cross_edges(edges: Rect<f32>, direction: Direction) -> (f32, f32) {
    main_edges(edges, direction.cross())
}

/// Size minus edges, clamped at zero.
pub(crate) fn deflate(size: Size<f32>, edges: Rect<f32>) -> Size<f32> {
    Size {
        width: length(size.width - edges.left - edges.right),
        height: length(size.height - edges.top - edges.bottom),
    }
}

/// Size plus edges.
pub(crate) fn inflate(size: Size<f32>, edges: Rect<f32>) -> Size<f32> {
    Size {
        width: size.width + edges.left + edges.right,
        height: size.height + edges.top + edges.bottom,
    }
}
