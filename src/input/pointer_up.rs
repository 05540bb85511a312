//! Pointer up - end the session.

use crate::registry::Trackable;
use crate::rubber_band::RubberBand;
use crate::types::PointerEvent;
use tracing::debug;

impl<I: Trackable> RubberBand<I> {
    /// End the active session and reset all drag state, including the
    /// selection. Ignored while idle.
    pub fn handle_pointer_up(&mut self, _event: &PointerEvent) {
        if !self.drag.pointer_up() {
            return;
        }
        debug!(selected = self.selected.len(), "Drag ended");
        self.finish_session();
    }
}
