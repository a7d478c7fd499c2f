//! Saving captured frames to image files.

use std::path::Path;

use image::{ImageBuffer, Rgb};

use crate::error::{RenderError, RenderResult};
use crate::texture::ReflectionImage;

/// Saves raw RGB pixel data to an image file.
///
/// The format is chosen from the file extension; `.png`, `.jpg` and `.jpeg`
/// are supported.
///
/// # Errors
///
/// Returns an error if the buffer length does not match the dimensions, the
/// extension is unsupported, or the file cannot be written.
pub fn save_image(path: impl AsRef<Path>, data: &[u8], width: u32, height: u32) -> RenderResult<()> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let expected = width as usize * height as usize * 3;
    if data.len() != expected {
        return Err(RenderError::PixelSizeMismatch {
            name: path.display().to_string(),
            expected,
            actual: data.len(),
        });
    }

    let img: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_raw(width, height, data.to_vec()).ok_or_else(|| {
            RenderError::PixelSizeMismatch {
                name: path.display().to_string(),
                expected,
                actual: data.len(),
            }
        })?;

    match extension.as_str() {
        "png" => img.save_with_format(path, image::ImageFormat::Png)?,
        "jpg" | "jpeg" => img.save_with_format(path, image::ImageFormat::Jpeg)?,
        _ => return Err(RenderError::UnsupportedFormat(extension)),
    }

    log::info!("saved {width}x{height} snapshot to {}", path.display());
    Ok(())
}

impl ReflectionImage {
    /// Saves the capture to an image file, mainly for debugging the mirror
    /// pass.
    ///
    /// # Errors
    ///
    /// See [`save_image`].
    pub fn save(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        save_image(path, &self.pixels, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_extension() {
        let err = save_image("frame.bmp", &[0; 3], 1, 1).unwrap_err();
        assert!(matches!(err, RenderError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_length_mismatch() {
        let err = save_image("frame.png", &[0; 4], 1, 1).unwrap_err();
        assert!(matches!(err, RenderError::PixelSizeMismatch { .. }));
    }

    #[test]
    fn test_save_and_reload_png() {
        let dir = std::env::temp_dir().join("tabletop-snapshot-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("capture.png");

        let capture = ReflectionImage {
            width: 2,
            height: 2,
            pixels: vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255],
        };
        capture.save(&path).unwrap();

        let reloaded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(reloaded.width(), 2);
        assert_eq!(reloaded.into_raw(), capture.pixels);

        std::fs::remove_file(&path).ok();
    }
}
