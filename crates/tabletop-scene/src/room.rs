//! The room: ceiling, four walls and floor.

use glam::{Vec2, Vec3};
use tabletop_render::{DrawBatch, Material, TextureId};

use crate::layout::SceneLayout;
use crate::patch::{PatchVertex, SurfacePatch};
use crate::tessellate::tessellate_into;

/// Texture bindings for the room surfaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoomTextures {
    pub ceiling: Option<TextureId>,
    pub wall: Option<TextureId>,
    pub floor: Option<TextureId>,
}

fn patch(
    coords: [(f32, f32, Vec3); 4],
    normal: Vec3,
) -> SurfacePatch {
    let corners = coords.map(|(s, t, p)| PatchVertex::new(p, Vec2::new(s, t)));
    SurfacePatch::new(corners, normal)
}

/// Builds the draw batches for the room interior.
///
/// All surfaces face inward. Texture coordinates repeat across the larger
/// surfaces so the images tile rather than stretch.
#[must_use]
pub fn build_room(layout: &SceneLayout, textures: &RoomTextures) -> Vec<DrawBatch> {
    let hw = layout.room_half_width();
    let w = layout.room_width;
    let h = layout.room_height;

    let mut ceiling = DrawBatch::new(
        "ceiling",
        textures.ceiling,
        Material::matte(0.6, 0.2, 8.0),
    );
    tessellate_into(
        &mut ceiling,
        &patch(
            [
                (0.0, 0.0, Vec3::new(hw, hw, h)),
                (w, 0.0, Vec3::new(hw, -hw, h)),
                (w, w, Vec3::new(-hw, -hw, h)),
                (0.0, w, Vec3::new(-hw, hw, h)),
            ],
            Vec3::NEG_Z,
        ),
        24,
        24,
    );

    // The walls share the ceiling's material.
    let mut walls = DrawBatch::new("walls", textures.wall, Material::matte(0.6, 0.2, 8.0));
    let (sw, sh) = (w / 2.0, h / 2.0);
    let wall_patches = [
        // +y wall, facing -y.
        patch(
            [
                (0.0, 0.0, Vec3::new(-hw, hw, 0.0)),
                (sw, 0.0, Vec3::new(hw, hw, 0.0)),
                (sw, sh, Vec3::new(hw, hw, h)),
                (0.0, sh, Vec3::new(-hw, hw, h)),
            ],
            Vec3::NEG_Y,
        ),
        // -y wall, facing +y.
        patch(
            [
                (0.0, 0.0, Vec3::new(hw, -hw, 0.0)),
                (sw, 0.0, Vec3::new(-hw, -hw, 0.0)),
                (sw, sh, Vec3::new(-hw, -hw, h)),
                (0.0, sh, Vec3::new(hw, -hw, h)),
            ],
            Vec3::Y,
        ),
        // +x wall, facing -x.
        patch(
            [
                (0.0, 0.0, Vec3::new(hw, hw, 0.0)),
                (sw, 0.0, Vec3::new(hw, -hw, 0.0)),
                (sw, sh, Vec3::new(hw, -hw, h)),
                (0.0, sh, Vec3::new(hw, hw, h)),
            ],
            Vec3::NEG_X,
        ),
        // -x wall, facing +x.
        patch(
            [
                (0.0, 0.0, Vec3::new(-hw, -hw, 0.0)),
                (sw, 0.0, Vec3::new(-hw, hw, 0.0)),
                (sw, sh, Vec3::new(-hw, hw, h)),
                (0.0, sh, Vec3::new(-hw, -hw, h)),
            ],
            Vec3::X,
        ),
    ];
    for wall in &wall_patches {
        tessellate_into(&mut walls, wall, 24, 16);
    }

    let mut floor = DrawBatch::new("floor", textures.floor, Material::matte(0.5, 0.8, 128.0));
    tessellate_into(
        &mut floor,
        &patch(
            [
                (0.0, 0.0, Vec3::new(hw, -hw, 0.0)),
                (w, 0.0, Vec3::new(hw, hw, 0.0)),
                (w, w, Vec3::new(-hw, hw, 0.0)),
                (0.0, w, Vec3::new(-hw, -hw, 0.0)),
            ],
            Vec3::Z,
        ),
        24,
        24,
    );

    let batches = vec![ceiling, walls, floor];
    log::debug!(
        "built room: {} quads across {} batches",
        batches.iter().map(DrawBatch::quad_count).sum::<usize>(),
        batches.len()
    );
    batches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_batch_counts() {
        let batches = build_room(&SceneLayout::default(), &RoomTextures::default());
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0].label, "ceiling");
        assert_eq!(batches[0].quad_count(), 24 * 24);
        assert_eq!(batches[1].quad_count(), 4 * 24 * 16);
        assert_eq!(batches[2].quad_count(), 24 * 24);
    }

    #[test]
    fn test_room_surfaces_face_inward() {
        let batches = build_room(&SceneLayout::default(), &RoomTextures::default());
        // Ceiling normals point down, floor normals up.
        assert_eq!(batches[0].quads[0][0].normal, [0.0, 0.0, -1.0]);
        assert_eq!(batches[2].quads[0][0].normal, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_floor_spans_the_room() {
        let batches = build_room(&SceneLayout::default(), &RoomTextures::default());
        let floor = &batches[2];
        let mut min = [f32::MAX; 2];
        let mut max = [f32::MIN; 2];
        for quad in &floor.quads {
            for vertex in quad {
                for axis in 0..2 {
                    min[axis] = min[axis].min(vertex.position[axis]);
                    max[axis] = max[axis].max(vertex.position[axis]);
                }
                assert_eq!(vertex.position[2], 0.0);
            }
        }
        assert_eq!(min, [-3.0, -3.0]);
        assert_eq!(max, [3.0, 3.0]);
    }
}
