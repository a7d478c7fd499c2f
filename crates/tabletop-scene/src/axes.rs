//! World axes overlay.

use glam::Vec3;
use tabletop_render::OverlayLine;

/// The world axes as colored overlay lines from the origin: x red, y green,
/// z blue.
#[must_use]
pub fn axes_overlay(length: f32) -> [OverlayLine; 3] {
    [
        OverlayLine {
            start: Vec3::ZERO,
            end: Vec3::new(length, 0.0, 0.0),
            color: Vec3::new(1.0, 0.0, 0.0),
        },
        OverlayLine {
            start: Vec3::ZERO,
            end: Vec3::new(0.0, length, 0.0),
            color: Vec3::new(0.0, 1.0, 0.0),
        },
        OverlayLine {
            start: Vec3::ZERO,
            end: Vec3::new(0.0, 0.0, length),
            color: Vec3::new(0.0, 0.0, 1.0),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axes_colors_and_directions() {
        let axes = axes_overlay(3.5);
        for line in &axes {
            assert_eq!(line.start, Vec3::ZERO);
        }
        assert_eq!(axes[0].end, Vec3::new(3.5, 0.0, 0.0));
        assert_eq!(axes[0].color, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(axes[2].end, Vec3::new(0.0, 0.0, 3.5));
        assert_eq!(axes[2].color, Vec3::new(0.0, 0.0, 1.0));
    }
}
