//! Pointer down - start a drag session.

use crate::registry::Trackable;
use crate::rubber_band::RubberBand;
use crate::types::PointerEvent;
use tracing::debug;

impl<I: Trackable> RubberBand<I> {
    /// Start a session if the press lands inside the target. Presses outside
    /// it, or before the target is measurable, are dropped. Returns whether a
    /// session started.
    ///
    /// A valid press during a session restarts it; the old selection is
    /// cleared the same way a release clears it.
    pub fn handle_pointer_down(&mut self, event: &PointerEvent) -> bool {
        let margin = self.margin();
        if !self.drag.pointer_down(event.page, margin.as_ref()) {
            debug!(
                pos = ?event.page,
                has_margin = margin.is_some(),
                "Pointer down outside target ignored"
            );
            return false;
        }

        self.clear_selection();
        self.box_visible = true;
        debug!(start = ?event.page, "Drag started");
        true
    }
}
