//! Rendering error types.

use thiserror::Error;

/// Errors that can occur at the renderer boundary.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The eye sits exactly in the mirror plane, so no mirror view exists.
    #[error("degenerate mirror view: eye height {eye_height} equals mirror height {mirror_height}")]
    DegenerateMirrorView { eye_height: f32, mirror_height: f32 },

    /// The far extent handed to the mirror camera solver is not positive.
    #[error("invalid scene far extent: {0} (must be positive)")]
    InvalidFarExtent(f32),

    /// A texture asset does not decode to 3-channel RGB.
    #[error("texture '{name}' is not in RGB format ({channels} channels)")]
    NotRgb { name: String, channels: u8 },

    /// A raw pixel buffer does not match its stated dimensions.
    #[error("pixel buffer for '{name}' has {actual} bytes, expected {expected}")]
    PixelSizeMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// A texture name was registered twice.
    #[error("texture '{0}' already registered")]
    TextureExists(String),

    /// Unsupported image file extension for a snapshot.
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// Backend-specific failure reported by a renderer implementation.
    #[error("backend error: {0}")]
    Backend(String),

    /// Image decoding/encoding error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for rendering operations.
pub type RenderResult<T> = std::result::Result<T, RenderError>;

impl From<RenderError> for tabletop_core::TabletopError {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::DegenerateMirrorView {
                eye_height,
                mirror_height,
            } => Self::DegenerateMirrorView {
                eye_height,
                mirror_height,
            },
            RenderError::NotRgb { name, channels } => Self::TextureNotRgb { name, channels },
            RenderError::Io(io) => Self::Io(io),
            other => Self::Render(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabletop_core::TabletopError;

    #[test]
    fn test_conversion_preserves_mirror_and_texture_variants() {
        let err: TabletopError = RenderError::DegenerateMirrorView {
            eye_height: 1.2,
            mirror_height: 1.2,
        }
        .into();
        assert!(matches!(err, TabletopError::DegenerateMirrorView { .. }));

        let err: TabletopError = RenderError::NotRgb {
            name: "ceiling".to_string(),
            channels: 4,
        }
        .into();
        assert!(matches!(err, TabletopError::TextureNotRgb { channels: 4, .. }));

        let err: TabletopError = RenderError::Backend("lost device".to_string()).into();
        assert!(matches!(err, TabletopError::Render(_)));
    }
}
