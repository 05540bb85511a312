//! Pointer input handling for the selection target.
//!
//! ## Architecture
//!
//! The drag lifecycle is an explicit state machine (`DragState`) with pure
//! transitions. The handlers here feed it the current margin, then run the
//! side effects each transition implies on the owning `RubberBand`
//! (selection reset, reconcile pass, callback, overlay visibility).
//!
//! ## Modules
//!
//! - `state` - Drag state machine and axis clamping
//! - `pointer_down` - Session start (anchor validation, selection reset)
//! - `pointer_move` - Clamped updates, reconcile, implicit release
//! - `pointer_up` - Session end and full reset

mod pointer_down;
mod pointer_move;
mod pointer_up;
mod state;

pub use state::{DragState, Interruption, MoveOutcome, clamp_axes};
