//! Drag-box overlay style descriptor.
//!
//! The host draws the box; this module only describes it. The descriptor
//! depends on two inputs (visibility and the drag rectangle) and is rebuilt
//! only when one of them changes.

use crate::constants::DEFAULT_OVERLAY_Z_INDEX;
use crate::types::Rect;
use serde::Serialize;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Absolute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Visible,
    Hidden,
}

/// Style of the drag-box overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayStyle {
    pub position: Position,
    pub z_index: i32,
    pub visibility: Visibility,
    /// Box geometry in document coordinates; absent before the first move.
    #[serde(flatten)]
    pub rect: Option<Rect>,
}

impl OverlayStyle {
    pub fn new(visible: bool, rect: Option<Rect>, z_index: i32) -> Self {
        Self {
            position: Position::Absolute,
            z_index,
            visibility: if visible {
                Visibility::Visible
            } else {
                Visibility::Hidden
            },
            rect,
        }
    }

    /// Inline CSS declaration list.
    pub fn to_css(&self) -> String {
        let mut css = String::with_capacity(96);
        css.push_str("position: absolute; ");
        let _ = write!(css, "z-index: {}; ", self.z_index);
        css.push_str(match self.visibility {
            Visibility::Visible => "visibility: visible;",
            Visibility::Hidden => "visibility: hidden;",
        });
        if let Some(rect) = self.rect {
            let _ = write!(
                css,
                " left: {}px; top: {}px; width: {}px; height: {}px;",
                rect.left, rect.top, rect.width, rect.height
            );
        }
        css
    }
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self::new(false, None, DEFAULT_OVERLAY_Z_INDEX)
    }
}

/// Caches the last descriptor keyed on `(visible, rect)`.
#[derive(Debug, Default)]
pub struct OverlayStyleCache {
    key: Option<(bool, Option<Rect>)>,
    style: OverlayStyle,
    rebuilds: u64,
}

impl OverlayStyleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Descriptor for the given inputs, rebuilt only when they changed since
    /// the previous call.
    pub fn get(&mut self, visible: bool, rect: Option<Rect>, z_index: i32) -> &OverlayStyle {
        let key = (visible, rect);
        if self.key != Some(key) || self.style.z_index != z_index {
            self.style = OverlayStyle::new(visible, rect, z_index);
            self.key = Some(key);
            self.rebuilds += 1;
        }
        &self.style
    }

    /// How many times the descriptor has been rebuilt.
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }
}
