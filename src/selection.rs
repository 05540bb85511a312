//! Selected Set and the Selection Reconciler.
//!
//! The set is only ever changed by applying a [`SelectionDiff`]; a reconcile
//! pass computes the indices to add and remove and leaves every other entry
//! in place.

use crate::geometry::intersects;
use crate::profile_scope;
use crate::registry::{ItemRegistry, Trackable};
use crate::types::Rect;
use std::collections::BTreeSet;
use tracing::trace;

/// Indices (registration order) of the currently selected items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedSet {
    indices: BTreeSet<usize>,
}

impl SelectedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Selected indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }

    /// Apply `diff` in place.
    pub fn apply(&mut self, diff: &SelectionDiff) {
        for index in &diff.removed {
            self.indices.remove(index);
        }
        self.indices.extend(diff.added.iter().copied());
    }

    /// Empty the set. Only used at session boundaries.
    pub fn clear(&mut self) {
        self.indices.clear();
    }
}

impl<'a> IntoIterator for &'a SelectedSet {
    type Item = usize;
    type IntoIter = std::iter::Copied<std::collections::btree_set::Iter<'a, usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.indices.iter().copied()
    }
}

/// Indices entering and leaving the selection in one pass, ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionDiff {
    pub added: Vec<usize>,
    pub removed: Vec<usize>,
}

impl SelectionDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Walk the registry and mark every index whose intersection with
/// `drag_rect` disagrees with its membership in `selected`. Items without a
/// bounding box are skipped for this pass.
pub fn diff_selection<I: Trackable>(
    selected: &SelectedSet,
    drag_rect: &Rect,
    registry: &ItemRegistry<I>,
) -> SelectionDiff {
    let mut diff = SelectionDiff::default();
    for (index, item) in registry.all().iter().enumerate() {
        let Some(bounds) = item.bounding_box() else {
            continue;
        };
        let hit = intersects(drag_rect, &bounds);
        match (hit, selected.contains(index)) {
            (true, false) => diff.added.push(index),
            (false, true) => diff.removed.push(index),
            _ => {}
        }
    }
    diff
}

/// One reconcile pass: diff, then apply. Returns the applied diff.
pub fn reconcile<I: Trackable>(
    selected: &mut SelectedSet,
    drag_rect: &Rect,
    registry: &ItemRegistry<I>,
) -> SelectionDiff {
    profile_scope!("reconcile");

    let diff = diff_selection(selected, drag_rect, registry);
    selected.apply(&diff);
    trace!(
        added = ?diff.added,
        removed = ?diff.removed,
        selected = selected.len(),
        items = registry.len(),
        "Reconciled selection"
    );
    diff
}
