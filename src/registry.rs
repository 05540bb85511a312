//! Item Registry
//!
//! Ordered collection of trackable items. An item's index in the Selected
//! Set is its position in registration order, so items are only ever
//! appended.
//!
//! ## Visibility observer
//!
//! Visibility tracking is a two-phase capability: a factory is installed up
//! front and invoked once a measurable root container exists. Items
//! registered before that point are handed to the observer when it is built.
//! Selection never depends on what the observer reports.

use crate::types::{Margin, Rect};
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;
use tracing::debug;

/// An item the registry can track.
pub trait Trackable {
    /// Stable identity used for idempotent registration.
    type Key: Eq + Hash + Clone + Debug;

    fn key(&self) -> Self::Key;

    /// Current bounding box in document coordinates, read fresh on every
    /// call. `None` while the item is detached or not laid out.
    fn bounding_box(&self) -> Option<Rect>;
}

/// Receives items to watch for viewport visibility.
pub trait VisibilityObserver<K> {
    fn observe(&mut self, index: usize, key: &K);
}

/// Builds a [`VisibilityObserver`] once the root container is measurable.
pub type ObserverFactory<K> = Box<dyn FnOnce(&Margin) -> Box<dyn VisibilityObserver<K>>>;

/// Observer that only logs what it is asked to track.
pub struct LoggingObserver<K> {
    root: Margin,
    _key: PhantomData<K>,
}

impl<K> LoggingObserver<K> {
    pub fn new(root: Margin) -> Self {
        Self {
            root,
            _key: PhantomData,
        }
    }

    /// Factory producing a [`LoggingObserver`].
    pub fn factory() -> ObserverFactory<K>
    where
        K: Debug + 'static,
    {
        Box::new(|root: &Margin| {
            Box::new(LoggingObserver::new(*root)) as Box<dyn VisibilityObserver<K>>
        })
    }
}

impl<K: Debug> VisibilityObserver<K> for LoggingObserver<K> {
    fn observe(&mut self, index: usize, key: &K) {
        debug!(index, ?key, root = ?self.root, "Observing item visibility");
    }
}

enum ObserverSlot<K> {
    /// No observer wanted.
    Disabled,
    /// Waiting for a root container.
    Pending(ObserverFactory<K>),
    Ready(Box<dyn VisibilityObserver<K>>),
}

pub struct ItemRegistry<I: Trackable> {
    items: Vec<I>,
    keys: HashSet<I::Key>,
    observer: ObserverSlot<I::Key>,
}

impl<I: Trackable> Default for ItemRegistry<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Trackable> ItemRegistry<I> {
    /// Registry without visibility tracking.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            keys: HashSet::new(),
            observer: ObserverSlot::Disabled,
        }
    }

    /// Registry that builds an observer from `factory` on the first
    /// [`ItemRegistry::attach_root`].
    pub fn with_observer_factory(factory: ObserverFactory<I::Key>) -> Self {
        Self {
            observer: ObserverSlot::Pending(factory),
            ..Self::new()
        }
    }

    /// Add `item` unless an item with the same key is already tracked.
    /// Returns the item's index when it was newly added.
    pub fn register(&mut self, item: I) -> Option<usize> {
        let key = item.key();
        if !self.keys.insert(key.clone()) {
            return None;
        }

        let index = self.items.len();
        self.items.push(item);
        if let ObserverSlot::Ready(observer) = &mut self.observer {
            observer.observe(index, &key);
        }
        Some(index)
    }

    /// Root container became measurable. Builds the observer on the first
    /// call and hands it every item registered so far; later calls are
    /// no-ops.
    pub fn attach_root(&mut self, root: &Margin) {
        let slot = std::mem::replace(&mut self.observer, ObserverSlot::Disabled);
        self.observer = match slot {
            ObserverSlot::Pending(factory) => {
                let mut observer = factory(root);
                for (index, item) in self.items.iter().enumerate() {
                    observer.observe(index, &item.key());
                }
                ObserverSlot::Ready(observer)
            }
            other => other,
        };
    }

    pub fn has_observer(&self) -> bool {
        matches!(self.observer, ObserverSlot::Ready(_))
    }

    pub fn contains(&self, key: &I::Key) -> bool {
        self.keys.contains(key)
    }

    /// All items in registration order.
    pub fn all(&self) -> &[I] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&I> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
