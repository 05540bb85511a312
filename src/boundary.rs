//! Boundary Resolver
//!
//! Turns the target's viewport-relative layout rectangle plus the page scroll
//! offset into a document-space [`Margin`], and caches it until the caller
//! invalidates it. The resolver never subscribes to resize or scroll itself.

use crate::types::{Margin, Point, Rect};
use tracing::{debug, warn};

/// Host-side view of the target container's layout.
pub trait LayoutSource {
    /// The target's current layout rectangle in viewport coordinates, or
    /// `None` while the target is not mounted or measurable.
    fn target_rect(&self) -> Option<Rect>;

    /// Current page scroll offset.
    fn scroll_offset(&self) -> Point;
}

/// Computes the margin from a single layout read. Returns `None` when the
/// target cannot be measured or reports an inverted rectangle.
pub fn compute_margin(source: &dyn LayoutSource) -> Option<Margin> {
    let rect = source.target_rect()?;
    let scroll = source.scroll_offset();
    match Margin::from_rect(rect.translate(scroll.x, scroll.y)) {
        Ok(margin) => Some(margin),
        Err(e) => {
            warn!(?rect, "Target reported an unusable layout: {}", e);
            None
        }
    }
}

/// Caches the target margin between invalidations.
#[derive(Default)]
pub struct BoundaryResolver {
    source: Option<Box<dyn LayoutSource>>,
    cached: Option<Margin>,
    stale: bool,
}

impl BoundaryResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the target. A new identity always invalidates the cache.
    pub fn attach(&mut self, source: Box<dyn LayoutSource>) {
        self.source = Some(source);
        self.invalidate();
    }

    /// Drop the target; drags are rejected until another is attached.
    pub fn detach(&mut self) {
        self.source = None;
        self.cached = None;
        self.stale = false;
    }

    pub fn has_target(&self) -> bool {
        self.source.is_some()
    }

    /// Mark the cached margin stale (layout changed, page scrolled).
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Current margin, recomputed first if stale. An unmeasurable target
    /// stays stale so the next call retries.
    pub fn margin(&mut self) -> Option<Margin> {
        if self.stale {
            self.cached = self.source.as_deref().and_then(|s| compute_margin(s));
            self.stale = self.cached.is_none();
            debug!(margin = ?self.cached, "Recomputed target margin");
        }
        self.cached
    }

    /// Last computed margin without touching the source.
    pub fn cached(&self) -> Option<Margin> {
        self.cached
    }
}
