//! Core value types shared by every component.
//!
//! All coordinates are document (page) coordinates in CSS pixels unless a
//! field says otherwise.

use crate::constants::PRIMARY_BUTTON;
use crate::error::{GeometryError, GeometryResult};
use serde::{Deserialize, Serialize};

/// A pointer coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle. Width and height are never negative when built
/// through [`crate::geometry::rectangle_from_points`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Same rectangle moved by `(dx, dy)`.
    #[inline]
    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.left + dx, self.top + dy, self.width, self.height)
    }
}

/// The target's allowed drag region.
///
/// Invariant: `left <= right` and `top <= bottom`, enforced by [`Margin::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    top: f32,
    left: f32,
    bottom: f32,
    right: f32,
}

impl Margin {
    pub fn new(top: f32, left: f32, bottom: f32, right: f32) -> GeometryResult<Self> {
        if ![top, left, bottom, right].iter().all(|v| v.is_finite()) {
            return Err(GeometryError::NonFinite);
        }
        if left > right {
            return Err(GeometryError::InvertedHorizontal { left, right });
        }
        if top > bottom {
            return Err(GeometryError::InvertedVertical { top, bottom });
        }
        Ok(Self {
            top,
            left,
            bottom,
            right,
        })
    }

    /// Margin covering `rect`.
    pub fn from_rect(rect: Rect) -> GeometryResult<Self> {
        Self::new(rect.top, rect.left, rect.bottom(), rect.right())
    }

    pub fn top(&self) -> f32 {
        self.top
    }

    pub fn left(&self) -> f32 {
        self.left
    }

    pub fn bottom(&self) -> f32 {
        self.bottom
    }

    pub fn right(&self) -> f32 {
        self.right
    }
}

/// Result of testing a point against each margin edge independently.
///
/// Each flag is true when the point lies on the inward side of that edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeContainment {
    pub left: bool,
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
}

impl EdgeContainment {
    /// The point is inside the margin on every edge.
    #[inline]
    pub fn is_inside(&self) -> bool {
        self.left && self.top && self.right && self.bottom
    }

    /// The x-coordinate lies between the left and right edges.
    #[inline]
    pub fn x_in_bounds(&self) -> bool {
        self.left && self.right
    }

    /// The y-coordinate lies between the top and bottom edges.
    #[inline]
    pub fn y_in_bounds(&self) -> bool {
        self.top && self.bottom
    }
}

/// A raw pointer event as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Absolute document coordinates (`pageX`/`pageY`).
    pub page: Point,
    /// Viewport coordinates (`clientX`/`clientY`).
    #[serde(default)]
    pub client: Point,
    /// Bitmask of currently pressed buttons; `0` means none.
    #[serde(default)]
    pub buttons: u16,
}

impl PointerEvent {
    /// Event with the primary button held and client coordinates equal to
    /// page coordinates (no scroll).
    pub fn primary(x: f32, y: f32) -> Self {
        Self {
            page: Point::new(x, y),
            client: Point::new(x, y),
            buttons: PRIMARY_BUTTON,
        }
    }

    /// Same position, no buttons pressed.
    pub fn released(mut self) -> Self {
        self.buttons = 0;
        self
    }

    #[inline]
    pub fn any_button_pressed(&self) -> bool {
        self.buttons != 0
    }
}
