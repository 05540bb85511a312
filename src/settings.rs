//! Selector settings.
//!
//! Loaded from JSON; every field is optional and falls back to its default.
//!
//! ```json
//! {
//!   "overlay_z_index": 99,
//!   "notify_on_reset": false,
//!   "emit_unchanged": true
//! }
//! ```

use crate::constants::DEFAULT_OVERLAY_Z_INDEX;
use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorSettings {
    /// Stacking order written into the overlay descriptor.
    pub overlay_z_index: i32,
    /// Send an empty selection to the callback when a reset clears a
    /// non-empty selection.
    pub notify_on_reset: bool,
    /// Notify on every reconcile pass, including passes whose diff is empty.
    pub emit_unchanged: bool,
}

impl Default for SelectorSettings {
    fn default() -> Self {
        Self {
            overlay_z_index: DEFAULT_OVERLAY_Z_INDEX,
            notify_on_reset: false,
            emit_unchanged: true,
        }
    }
}

impl SelectorSettings {
    pub fn from_json_str(json: &str) -> SettingsResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> SettingsResult<()> {
        if self.overlay_z_index < 0 {
            return Err(SettingsError::Invalid {
                field: "overlay_z_index",
                reason: format!("must be non-negative, got {}", self.overlay_z_index),
            });
        }
        Ok(())
    }
}
