//! Geometry Engine
//!
//! Pure functions over [`Point`], [`Rect`] and [`Margin`]. Nothing here
//! allocates or fails.

use crate::types::{EdgeContainment, Margin, Point, Rect};

/// Normalized rectangle spanned by two corner points, whichever direction the
/// drag went.
#[inline]
pub fn rectangle_from_points(a: Point, b: Point) -> Rect {
    Rect {
        left: a.x.min(b.x),
        top: a.y.min(b.y),
        width: (a.x - b.x).abs(),
        height: (a.y - b.y).abs(),
    }
}

/// Axis-aligned overlap test. Touching edges count as intersecting.
#[inline]
pub fn intersects(r1: &Rect, r2: &Rect) -> bool {
    r1.left <= r2.right() && r1.right() >= r2.left && r1.top <= r2.bottom() && r1.bottom() >= r2.top
}

/// Tests `p` against each margin edge independently (inclusive).
#[inline]
pub fn contains_point(p: Point, margin: &Margin) -> EdgeContainment {
    EdgeContainment {
        left: p.x >= margin.left(),
        top: p.y >= margin.top(),
        right: p.x <= margin.right(),
        bottom: p.y <= margin.bottom(),
    }
}
