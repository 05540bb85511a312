//! Drag state machine.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging    (pointer down inside the margin)
//! Dragging -> Idle    (pointer up, move with no buttons held, move while the
//!                      margin is unavailable)
//! ```
//!
//! Every transition is a plain method on [`DragState`]; nothing here touches
//! the selection or the registry.

use crate::geometry::{contains_point, rectangle_from_points};
use crate::types::{Margin, Point, PointerEvent, Rect};

/// Drag lifecycle for one target.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No pointer held down inside the target.
    #[default]
    Idle,

    /// A drag session is in progress.
    Dragging {
        /// Anchor recorded on pointer down; fixed for the session.
        start: Point,
        /// Latest clamped pointer position; absent until the first move.
        end: Option<Point>,
    },
}

/// What a pointer move did to the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    /// Not dragging; nothing changed.
    Ignored,
    /// `end` was replaced and the drag rectangle is now this.
    Updated(Rect),
    /// The session ended without an explicit pointer up.
    Interrupted(Interruption),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interruption {
    /// The event reported no pressed buttons; the release was missed.
    ButtonsReleased,
    /// The target could not be measured.
    TargetUnavailable,
}

/// Next `end` for a move: starts from `previous` and takes each raw axis
/// only while that axis lies within the margin. Leaving one edge freezes
/// that axis while the other keeps tracking.
pub fn clamp_axes(previous: Point, raw: Point, margin: &Margin) -> Point {
    let inside = contains_point(raw, margin);
    Point {
        x: if inside.x_in_bounds() { raw.x } else { previous.x },
        y: if inside.y_in_bounds() { raw.y } else { previous.y },
    }
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn start(&self) -> Option<Point> {
        match self {
            Self::Dragging { start, .. } => Some(*start),
            Self::Idle => None,
        }
    }

    pub fn end(&self) -> Option<Point> {
        match self {
            Self::Dragging { end, .. } => *end,
            Self::Idle => None,
        }
    }

    /// Drag rectangle, present once both corners are known.
    pub fn rect(&self) -> Option<Rect> {
        match self {
            Self::Dragging { start, end: Some(end) } => Some(rectangle_from_points(*start, *end)),
            _ => None,
        }
    }

    /// Start a session at `p` if it lies fully inside `margin`. Returns
    /// whether a session started. A press while already dragging restarts
    /// the session at the new anchor.
    pub fn pointer_down(&mut self, p: Point, margin: Option<&Margin>) -> bool {
        let Some(margin) = margin else {
            return false;
        };
        if !contains_point(p, margin).is_inside() {
            return false;
        }
        *self = Self::Dragging { start: p, end: None };
        true
    }

    /// Apply a pointer move.
    pub fn pointer_move(&mut self, event: &PointerEvent, margin: Option<&Margin>) -> MoveOutcome {
        let Self::Dragging { start, end } = self else {
            return MoveOutcome::Ignored;
        };

        if !event.any_button_pressed() {
            self.reset();
            return MoveOutcome::Interrupted(Interruption::ButtonsReleased);
        }
        let Some(margin) = margin else {
            self.reset();
            return MoveOutcome::Interrupted(Interruption::TargetUnavailable);
        };

        let previous = end.unwrap_or(*start);
        let next = clamp_axes(previous, event.page, margin);
        *end = Some(next);
        MoveOutcome::Updated(rectangle_from_points(*start, next))
    }

    /// End the session. Returns whether a session was active.
    pub fn pointer_up(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.reset();
        was_dragging
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
