//! Error types
//!
//! The event-handling core never fails; these cover construction of
//! validated values and loading settings.

use thiserror::Error;

/// Errors raised when building geometry from untrusted measurements.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("margin left edge {left} is right of right edge {right}")]
    InvertedHorizontal { left: f32, right: f32 },

    #[error("margin top edge {top} is below bottom edge {bottom}")]
    InvertedVertical { top: f32, bottom: f32 },

    #[error("non-finite coordinate")]
    NonFinite,
}

/// Errors that can occur while loading selector settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A field parsed but holds an unusable value
    #[error("Invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

pub type GeometryResult<T> = Result<T, GeometryError>;

pub type SettingsResult<T> = Result<T, SettingsError>;
