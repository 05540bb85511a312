//! Rendering descriptors handed to the host.

pub mod overlay;

pub use overlay::{OverlayStyle, OverlayStyleCache, Position, Visibility};
