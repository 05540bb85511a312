//! The owning selection object.
//!
//! `RubberBand` holds every piece of mutable state (drag session, selected
//! set, margin cache, registry, overlay cache) and is driven by the pointer
//! handlers in [`crate::input`]. Handlers take the current event by
//! parameter; there is no shared or interior-mutable state.

use crate::boundary::{BoundaryResolver, LayoutSource};
use crate::input::DragState;
use crate::registry::{ItemRegistry, ObserverFactory, Trackable};
use crate::render::overlay::{OverlayStyle, OverlayStyleCache};
use crate::selection::{SelectedSet, SelectionDiff};
use crate::settings::SelectorSettings;
use crate::types::{Margin, Rect};
use tracing::debug;

/// Why the callback fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeReason {
    /// A pointer move produced a new drag rectangle.
    DragUpdate,
    /// The selection was cleared by a reset (only with `notify_on_reset`).
    Reset,
}

/// Payload handed to the selection callback.
#[derive(Debug)]
pub struct SelectionChange<'a> {
    pub selected: &'a SelectedSet,
    pub diff: &'a SelectionDiff,
    pub reason: ChangeReason,
}

pub type SelectionCallback = Box<dyn FnMut(&SelectionChange<'_>)>;

pub struct RubberBand<I: Trackable> {
    pub(crate) settings: SelectorSettings,
    pub(crate) boundary: BoundaryResolver,
    pub(crate) registry: ItemRegistry<I>,
    pub(crate) drag: DragState,
    pub(crate) selected: SelectedSet,
    pub(crate) box_visible: bool,
    overlay: OverlayStyleCache,
    on_change: Option<SelectionCallback>,
}

impl<I: Trackable> RubberBand<I> {
    pub fn new(settings: SelectorSettings) -> Self {
        Self::with_registry(settings, ItemRegistry::new())
    }

    /// Selector whose registry builds a visibility observer once the target
    /// becomes measurable.
    pub fn with_observer_factory(
        settings: SelectorSettings,
        factory: ObserverFactory<I::Key>,
    ) -> Self {
        Self::with_registry(settings, ItemRegistry::with_observer_factory(factory))
    }

    fn with_registry(settings: SelectorSettings, registry: ItemRegistry<I>) -> Self {
        Self {
            settings,
            boundary: BoundaryResolver::new(),
            registry,
            drag: DragState::default(),
            selected: SelectedSet::new(),
            box_visible: false,
            overlay: OverlayStyleCache::new(),
            on_change: None,
        }
    }

    /// Install the selection callback, replacing any previous one.
    pub fn on_selection_change(&mut self, callback: impl FnMut(&SelectionChange<'_>) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    /// Set or replace the target container. Ends any drag in progress
    /// against the previous target.
    pub fn attach_target(&mut self, source: impl LayoutSource + 'static) {
        if self.drag.is_dragging() {
            debug!("Target replaced mid-drag");
            self.finish_session();
        }
        self.boundary.attach(Box::new(source));
        let _ = self.margin();
    }

    pub fn detach_target(&mut self) {
        if self.drag.is_dragging() {
            self.finish_session();
        }
        self.boundary.detach();
    }

    /// Force the margin to be recomputed on next use (resize, scroll).
    pub fn invalidate_layout(&mut self) {
        self.boundary.invalidate();
    }

    /// Register an item. Repeated calls with the same key are no-ops.
    pub fn add_item(&mut self, item: I) -> Option<usize> {
        self.registry.register(item)
    }

    /// Clear the selection outside a drag. Ignored while dragging; the
    /// reconciler owns the selection until the session ends.
    pub fn reset_selection(&mut self) {
        if self.drag.is_dragging() {
            debug!("Selection reset ignored mid-drag");
            return;
        }
        self.clear_selection();
    }

    /// Current target margin, recomputing if stale.
    pub fn margin(&mut self) -> Option<Margin> {
        let margin = self.boundary.margin();
        if let Some(root) = &margin {
            self.registry.attach_root(root);
        }
        margin
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// Current drag rectangle, present once the session has seen a move.
    pub fn drag_rect(&self) -> Option<Rect> {
        self.drag.rect()
    }

    pub fn selected(&self) -> &SelectedSet {
        &self.selected
    }

    /// Selected items in index order.
    pub fn selected_items(&self) -> impl Iterator<Item = &I> + '_ {
        self.selected.iter().filter_map(move |index| self.registry.get(index))
    }

    pub fn registry(&self) -> &ItemRegistry<I> {
        &self.registry
    }

    pub fn settings(&self) -> &SelectorSettings {
        &self.settings
    }

    /// Overlay descriptor for the drag box.
    pub fn overlay_style(&mut self) -> &OverlayStyle {
        let rect = self.drag.rect();
        self.overlay.get(self.box_visible, rect, self.settings.overlay_z_index)
    }

    /// Number of times the overlay descriptor has been rebuilt.
    pub fn overlay_rebuilds(&self) -> u64 {
        self.overlay.rebuilds()
    }

    pub(crate) fn notify(&mut self, diff: &SelectionDiff, reason: ChangeReason) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(&SelectionChange {
                selected: &self.selected,
                diff,
                reason,
            });
        }
    }

    /// Tear down the session: hide the box, drop both corners, clear the
    /// selection.
    pub(crate) fn finish_session(&mut self) {
        self.drag.reset();
        self.box_visible = false;
        self.clear_selection();
    }

    /// Empty the selection, notifying if configured and anything was selected.
    pub(crate) fn clear_selection(&mut self) {
        if self.selected.is_empty() {
            return;
        }
        let diff = SelectionDiff {
            added: Vec::new(),
            removed: self.selected.to_vec(),
        };
        self.selected.apply(&diff);
        if self.settings.notify_on_reset {
            self.notify(&diff, ChangeReason::Reset);
        }
    }
}
