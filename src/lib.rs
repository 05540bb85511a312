//! Rubber-band (drag) multi-selection.
//!
//! A pointer pressed inside a bounded target starts a drag; the drag
//! rectangle is clamped to the target one axis at a time, and every tracked
//! item whose box touches it is selected. The selection is maintained
//! incrementally and reported to a callback on every accepted move.
//!
//! ## Modules
//!
//! - `geometry` - Rectangle construction, intersection, margin containment
//! - `boundary` - Target margin computation and caching
//! - `registry` - Tracked items and the visibility-observer hook
//! - `input` - Drag state machine and pointer handlers
//! - `selection` - Selected set and the reconciler
//! - `render` - Overlay style descriptor
//! - `rubber_band` - The owning state object

pub mod boundary;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod input;
pub mod perf;
pub mod registry;
pub mod render;
pub mod rubber_band;
pub mod selection;
pub mod settings;
pub mod types;

pub use boundary::{BoundaryResolver, LayoutSource};
pub use error::{GeometryError, SettingsError};
pub use input::DragState;
pub use registry::{ItemRegistry, LoggingObserver, ObserverFactory, Trackable, VisibilityObserver};
pub use render::OverlayStyle;
pub use rubber_band::{ChangeReason, RubberBand, SelectionCallback, SelectionChange};
pub use selection::{SelectedSet, SelectionDiff};
pub use settings::SelectorSettings;
pub use types::{EdgeContainment, Margin, Point, PointerEvent, Rect};
