//! Pointer move - clamp, reconcile, notify.
//!
//! ## Performance Notes
//!
//! Moves arrive at hardware polling rate. Idle moves return before the
//! margin is read, and each accepted move costs one pass over the registry.
//! Large registries should debounce moves before they get here.

use super::state::MoveOutcome;
use crate::registry::Trackable;
use crate::rubber_band::{ChangeReason, RubberBand};
use crate::selection::reconcile;
use crate::types::PointerEvent;
use tracing::debug;

impl<I: Trackable> RubberBand<I> {
    pub fn handle_pointer_move(&mut self, event: &PointerEvent) {
        if self.drag.is_idle() {
            return;
        }

        let margin = self.margin();
        match self.drag.pointer_move(event, margin.as_ref()) {
            MoveOutcome::Ignored => {}
            MoveOutcome::Updated(rect) => {
                let diff = reconcile(&mut self.selected, &rect, &self.registry);
                if self.settings.emit_unchanged || !diff.is_empty() {
                    self.notify(&diff, ChangeReason::DragUpdate);
                }
            }
            MoveOutcome::Interrupted(cause) => {
                debug!(?cause, "Drag interrupted");
                self.finish_session();
            }
        }
    }
}
