//! Error types for tabletop-rs.

use thiserror::Error;

/// The main error type for tabletop-rs operations.
#[derive(Error, Debug)]
pub enum TabletopError {
    /// The eye sits exactly in the mirror plane, so no mirror view exists.
    #[error("degenerate mirror view: eye height {eye_height} equals mirror height {mirror_height}")]
    DegenerateMirrorView { eye_height: f32, mirror_height: f32 },

    /// A texture asset does not decode to 3-channel RGB.
    #[error("texture '{name}' is not in RGB format ({channels} channels)")]
    TextureNotRgb { name: String, channels: u8 },

    /// Rendering error.
    #[error("render error: {0}")]
    Render(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for tabletop-rs operations.
pub type Result<T> = std::result::Result<T, TabletopError>;
