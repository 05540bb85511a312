//! Crate-wide defaults.

// ============================================================================
// Overlay
// ============================================================================

/// Stacking order of the drag-box overlay
pub const DEFAULT_OVERLAY_Z_INDEX: i32 = 99;

// ============================================================================
// Input
// ============================================================================

/// `buttons` bitmask bit for the primary (usually left) button
pub const PRIMARY_BUTTON: u16 = 1;

// ============================================================================
// Settings
// ============================================================================

/// File name looked up by the replay tool when no settings path is given
pub const SETTINGS_FILE_NAME: &str = "rubberband.json";
