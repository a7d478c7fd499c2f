//! Fixed dimensions of the room and table.

use serde::{Deserialize, Serialize};
use tabletop_render::MirrorPlane;

/// The static layout of the scene: a square room with a rectangular table
/// whose top face is the mirror.
///
/// All dimensions are in world units, z-up, with the room centered on the
/// world origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneLayout {
    /// Side length of the square room footprint.
    pub room_width: f32,
    /// Room height from floor (z = 0) to ceiling.
    pub room_height: f32,
    /// Far-extent bound used for clipping planes.
    pub scene_radius: f32,
    /// Table rectangle extents.
    pub tabletop_x1: f32,
    pub tabletop_x2: f32,
    pub tabletop_y1: f32,
    pub tabletop_y2: f32,
    /// Height of the table's top face: the mirror plane.
    pub tabletop_z: f32,
    /// Thickness of the tabletop slab and cross-section of the legs.
    pub table_thickness: f32,
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self {
            room_width: 6.0,
            room_height: 4.0,
            scene_radius: 6.0,
            tabletop_x1: -1.0,
            tabletop_x2: 1.0,
            tabletop_y1: -1.5,
            tabletop_y2: 1.5,
            tabletop_z: 1.2,
            table_thickness: 0.1,
        }
    }
}

impl SceneLayout {
    /// Half the room footprint side, the wall offset from the origin.
    #[must_use]
    pub fn room_half_width(&self) -> f32 {
        self.room_width / 2.0
    }

    /// The mirror rectangle: the top face of the table.
    #[must_use]
    pub fn mirror_plane(&self) -> MirrorPlane {
        MirrorPlane {
            x1: self.tabletop_x1,
            y1: self.tabletop_y1,
            x2: self.tabletop_x2,
            y2: self.tabletop_y2,
            z: self.tabletop_z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let layout = SceneLayout::default();
        assert_eq!(layout.room_half_width(), 3.0);
        let plane = layout.mirror_plane();
        assert_eq!(plane.z, 1.2);
        assert_eq!(plane.x1, -1.0);
        assert_eq!(plane.y2, 1.5);
    }

    #[test]
    fn test_layout_serde_defaults() {
        let layout: SceneLayout = serde_json::from_str("{}").unwrap();
        assert_eq!(layout, SceneLayout::default());

        let layout: SceneLayout = serde_json::from_str(r#"{"tabletop_z": 0.9}"#).unwrap();
        assert_eq!(layout.tabletop_z, 0.9);
        assert_eq!(layout.room_width, 6.0);
    }
}
