//! Texture assets and the per-frame reflection capture image.
//!
//! The core requires only that each named texture resolve to an RGB pixel
//! buffer; anything else is a fatal load error, not recovered.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{RenderError, RenderResult};

/// Handle to a registered texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// A decoded RGB texture (3 bytes per pixel).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl TextureImage {
    /// Decodes an image file, requiring 3-channel RGB.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::NotRgb`] for any other channel layout and
    /// [`RenderError::Image`] for decode failures.
    pub fn from_file(name: &str, path: impl AsRef<Path>) -> RenderResult<Self> {
        let decoded = image::open(path)?;
        match decoded {
            image::DynamicImage::ImageRgb8(rgb) => Ok(Self {
                width: rgb.width(),
                height: rgb.height(),
                pixels: rgb.into_raw(),
            }),
            other => Err(RenderError::NotRgb {
                name: name.to_string(),
                channels: other.color().channel_count(),
            }),
        }
    }

    /// Wraps a raw RGB buffer, checking its length.
    pub fn from_raw(name: &str, width: u32, height: u32, pixels: Vec<u8>) -> RenderResult<Self> {
        let expected = width as usize * height as usize * 3;
        if pixels.len() != expected {
            return Err(RenderError::PixelSizeMismatch {
                name: name.to_string(),
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A single-color texture, handy for tests and placeholder assets.
    #[must_use]
    pub fn solid(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize * 3);
        for _ in 0..width * height {
            pixels.extend_from_slice(&rgb);
        }
        Self {
            width,
            height,
            pixels,
        }
    }
}

/// Registry mapping texture names to handles and pixel data.
#[derive(Debug, Default)]
pub struct TextureRegistry {
    images: Vec<TextureImage>,
    by_name: HashMap<String, TextureId>,
}

impl TextureRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a decoded texture under a name.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::TextureExists`] if the name is taken.
    pub fn register(&mut self, name: &str, image: TextureImage) -> RenderResult<TextureId> {
        if self.by_name.contains_key(name) {
            return Err(RenderError::TextureExists(name.to_string()));
        }
        #[allow(clippy::cast_possible_truncation)]
        let id = TextureId(self.images.len() as u32);
        self.images.push(image);
        self.by_name.insert(name.to_string(), id);
        log::debug!("registered texture '{name}' as {id:?}");
        Ok(id)
    }

    /// Loads and registers an RGB image file.
    pub fn load_file(&mut self, name: &str, path: impl AsRef<Path>) -> RenderResult<TextureId> {
        let image = TextureImage::from_file(name, path)?;
        self.register(name, image)
    }

    /// Looks up a handle by name.
    #[must_use]
    pub fn id(&self, name: &str) -> Option<TextureId> {
        self.by_name.get(name).copied()
    }

    /// Returns the pixel data for a handle.
    #[must_use]
    pub fn get(&self, id: TextureId) -> Option<&TextureImage> {
        self.images.get(id.0 as usize)
    }

    /// Replaces the pixel data for a registered texture.
    ///
    /// Used for the reflection texture, which is overwritten every frame.
    pub fn update(&mut self, id: TextureId, image: TextureImage) {
        if let Some(slot) = self.images.get_mut(id.0 as usize) {
            *slot = image;
        }
    }

    /// Number of registered textures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether no textures are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// The offscreen color capture from the mirror pass.
///
/// A single shared buffer, fully regenerated and consumed within each frame;
/// read-only to the renderer while texturing the mirror surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflectionImage {
    pub width: u32,
    pub height: u32,
    /// RGB, 3 bytes per pixel.
    pub pixels: Vec<u8>,
}

impl ReflectionImage {
    /// An all-black capture target.
    #[must_use]
    pub fn black(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 3],
        }
    }

    /// Overwrites the whole buffer with a fresh capture.
    pub fn overwrite(&mut self, width: u32, height: u32, pixels: Vec<u8>) -> RenderResult<()> {
        let expected = width as usize * height as usize * 3;
        if pixels.len() != expected {
            return Err(RenderError::PixelSizeMismatch {
                name: "reflection".to_string(),
                expected,
                actual: pixels.len(),
            });
        }
        self.width = width;
        self.height = height;
        self.pixels = pixels;
        Ok(())
    }

    /// Converts the capture into a texture image for the tabletop.
    #[must_use]
    pub fn to_texture(&self) -> TextureImage {
        TextureImage {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}
