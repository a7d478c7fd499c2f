//! Display options for the viewer.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Per-session display toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Whether to draw the world coordinate frame axes.
    pub draw_axes: bool,

    /// Whether polygons are drawn as wireframe outlines instead of filled.
    pub wireframe: bool,

    /// Whether texture mapping is applied.
    pub texturing: bool,

    /// Background clear color.
    pub background_color: Vec3,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            draw_axes: true,
            wireframe: false,
            texturing: true,
            background_color: Vec3::ZERO,
        }
    }
}

impl DisplayOptions {
    /// Toggles wireframe rendering.
    pub fn toggle_wireframe(&mut self) {
        self.wireframe = !self.wireframe;
    }

    /// Toggles texture mapping.
    pub fn toggle_texturing(&mut self) {
        self.texturing = !self.texturing;
    }

    /// Toggles the axes overlay.
    pub fn toggle_axes(&mut self) {
        self.draw_axes = !self.draw_axes;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_options_default() {
        let options = DisplayOptions::default();
        assert!(options.draw_axes);
        assert!(!options.wireframe);
        assert!(options.texturing);
        assert_eq!(options.background_color, Vec3::ZERO);
    }

    #[test]
    fn test_toggles() {
        let mut options = DisplayOptions::default();
        options.toggle_wireframe();
        options.toggle_texturing();
        options.toggle_axes();
        assert!(options.wireframe);
        assert!(!options.texturing);
        assert!(!options.draw_axes);
    }

    #[test]
    fn test_options_json_round_trip() {
        let options = DisplayOptions {
            draw_axes: false,
            wireframe: true,
            texturing: false,
            background_color: Vec3::new(0.1, 0.2, 0.3),
        };
        let json = serde_json::to_string(&options).unwrap();
        let back: DisplayOptions = serde_json::from_str(&json).unwrap();
        assert!(back.wireframe);
        assert_eq!(back.background_color, options.background_color);
    }
}
