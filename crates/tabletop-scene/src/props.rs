//! Props standing on the tabletop, and the primitive solids they are
//! assembled from.

use std::f32::consts::PI;

use glam::{Mat4, Vec2, Vec3};
use tabletop_render::{DrawBatch, Material, TextureId, Vertex};

use crate::layout::SceneLayout;
use crate::patch::{PatchVertex, SurfacePatch};
use crate::tessellate::tessellate_into;

/// Texture bindings for the figure prop.
#[derive(Debug, Clone, Copy, Default)]
pub struct FigureTextures {
    pub torso: Option<TextureId>,
    pub face: Option<TextureId>,
}

/// The quads of an axis-aligned cuboid spanning `[-1, 1]` on each axis,
/// transformed by `transform`.
///
/// Each face carries unit texture coordinates and its transformed face
/// normal, renormalized so non-uniform scaling keeps lighting correct.
#[must_use]
pub fn cuboid_quads(transform: &Mat4) -> Vec<[Vertex; 4]> {
    let faces: [([Vec3; 4], Vec3); 6] = [
        (
            [
                Vec3::new(-1.0, -1.0, 1.0),
                Vec3::new(1.0, -1.0, 1.0),
                Vec3::new(1.0, 1.0, 1.0),
                Vec3::new(-1.0, 1.0, 1.0),
            ],
            Vec3::Z,
        ),
        (
            [
                Vec3::new(-1.0, -1.0, -1.0),
                Vec3::new(-1.0, 1.0, -1.0),
                Vec3::new(1.0, 1.0, -1.0),
                Vec3::new(1.0, -1.0, -1.0),
            ],
            Vec3::NEG_Z,
        ),
        (
            [
                Vec3::new(-1.0, -1.0, 1.0),
                Vec3::new(-1.0, 1.0, 1.0),
                Vec3::new(-1.0, 1.0, -1.0),
                Vec3::new(-1.0, -1.0, -1.0),
            ],
            Vec3::NEG_X,
        ),
        (
            [
                Vec3::new(1.0, -1.0, 1.0),
                Vec3::new(1.0, -1.0, -1.0),
                Vec3::new(1.0, 1.0, -1.0),
                Vec3::new(1.0, 1.0, 1.0),
            ],
            Vec3::X,
        ),
        (
            [
                Vec3::new(-1.0, 1.0, 1.0),
                Vec3::new(1.0, 1.0, 1.0),
                Vec3::new(1.0, 1.0, -1.0),
                Vec3::new(-1.0, 1.0, -1.0),
            ],
            Vec3::Y,
        ),
        (
            [
                Vec3::new(-1.0, -1.0, 1.0),
                Vec3::new(-1.0, -1.0, -1.0),
                Vec3::new(1.0, -1.0, -1.0),
                Vec3::new(1.0, -1.0, 1.0),
            ],
            Vec3::NEG_Y,
        ),
    ];
    let uvs = [
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.0, 1.0),
    ];
    let normal_matrix = transform.inverse().transpose();

    faces
        .iter()
        .map(|(positions, normal)| {
            let n = normal_matrix.transform_vector3(*normal).normalize();
            let mut quad = [Vertex {
                position: [0.0; 3],
                normal: n.to_array(),
                uv: [0.0; 2],
            }; 4];
            for (slot, (position, uv)) in quad.iter_mut().zip(positions.iter().zip(uvs.iter())) {
                slot.position = transform.transform_point3(*position).to_array();
                slot.uv = uv.to_array();
            }
            quad
        })
        .collect()
}

/// Appends a UV-sphere to a batch as `longitude_steps x latitude_steps`
/// quads with per-vertex normals.
pub fn sphere_into(
    batch: &mut DrawBatch,
    center: Vec3,
    radius: f32,
    longitude_steps: u32,
    latitude_steps: u32,
) {
    let vertex_at = |i: u32, j: u32| {
        let lat = PI * (j as f32 / latitude_steps as f32 - 0.5);
        let lng = 2.0 * PI * i as f32 / longitude_steps as f32;
        let normal = Vec3::new(
            lng.cos() * lat.cos(),
            lng.sin() * lat.cos(),
            lat.sin(),
        );
        Vertex {
            position: (center + normal * radius).to_array(),
            normal: normal.to_array(),
            uv: [
                i as f32 / longitude_steps as f32,
                j as f32 / latitude_steps as f32,
            ],
        }
    };
    for i in 0..longitude_steps {
        for j in 0..latitude_steps {
            batch.push_quad([
                vertex_at(i, j),
                vertex_at(i + 1, j),
                vertex_at(i + 1, j + 1),
                vertex_at(i, j + 1),
            ]);
        }
    }
}

/// The untextured sphere sitting on the tabletop.
#[must_use]
pub fn build_sphere(layout: &SceneLayout) -> DrawBatch {
    let radius = 0.35;
    let mut batch = DrawBatch::new(
        "sphere",
        None,
        Material::colored(Vec3::new(0.7, 0.5, 0.2), Vec3::ONE, 128.0),
    );
    sphere_into(
        &mut batch,
        Vec3::new(0.3, 0.5, layout.tabletop_z + radius),
        radius,
        64,
        32,
    );
    batch
}

/// The blocky robot figure standing on the table.
///
/// Assembled from tessellated body panels, cuboid limbs and a spherical
/// head. All proportions derive from the table dimensions so the figure
/// scales with the layout.
#[must_use]
pub fn build_figure(layout: &SceneLayout, textures: &FigureTextures) -> Vec<DrawBatch> {
    let x1 = layout.tabletop_x1;
    let y1 = layout.tabletop_y1;
    let y2 = layout.tabletop_y2;
    let z = layout.tabletop_z;

    let body_material = Material::matte(0.9, 0.5, 128.0);
    let torso_top = z + z / 3.0 + z / 6.0;
    let torso_bottom = z + z / 6.0;
    let front_y = y2 / 2.0;
    let back_y = y2 / 2.0 + y1 / 8.0;
    let (left_x, right_x) = (x1 / 3.0, 2.0 * x1 / 3.0);

    let corner = |s: f32, t: f32, p: Vec3| PatchVertex::new(p, Vec2::new(s, t));

    // Torso front, facing the -y side of the room.
    let mut torso = DrawBatch::new("figure-torso", textures.torso, body_material);
    tessellate_into(
        &mut torso,
        &SurfacePatch::new(
            [
                corner(1.0, 1.0, Vec3::new(right_x, front_y, torso_top)),
                corner(0.0, 1.0, Vec3::new(left_x, front_y, torso_top)),
                corner(0.0, 0.0, Vec3::new(left_x, front_y, torso_bottom)),
                corner(1.0, 0.0, Vec3::new(right_x, front_y, torso_bottom)),
            ],
            Vec3::NEG_Y,
        ),
        24,
        24,
    );

    let mut panels = DrawBatch::new("figure-panels", textures.face, body_material);
    // Back panel.
    tessellate_into(
        &mut panels,
        &SurfacePatch::new(
            [
                corner(1.0, 0.0, Vec3::new(right_x, back_y, torso_top)),
                corner(1.0, 1.0, Vec3::new(right_x, back_y, torso_bottom)),
                corner(0.0, 1.0, Vec3::new(left_x, back_y, torso_bottom)),
                corner(0.0, 0.0, Vec3::new(left_x, back_y, torso_top)),
            ],
            Vec3::NEG_Y,
        ),
        24,
        24,
    );
    // Side, bottom and top panels.
    let thin_panels = [
        (
            [
                corner(1.0, 0.0, Vec3::new(left_x, back_y, torso_bottom)),
                corner(1.0, 1.0, Vec3::new(left_x, front_y, torso_bottom)),
                corner(0.0, 1.0, Vec3::new(left_x, front_y, torso_top)),
                corner(0.0, 0.0, Vec3::new(left_x, back_y, torso_top)),
            ],
            Vec3::X,
        ),
        (
            [
                corner(1.0, 0.0, Vec3::new(right_x, back_y, torso_bottom)),
                corner(0.0, 0.0, Vec3::new(right_x, back_y, torso_top)),
                corner(0.0, 1.0, Vec3::new(right_x, front_y, torso_top)),
                corner(1.0, 1.0, Vec3::new(right_x, front_y, torso_bottom)),
            ],
            Vec3::X,
        ),
        (
            [
                corner(1.0, 0.0, Vec3::new(left_x, back_y, torso_top)),
                corner(1.0, 1.0, Vec3::new(left_x, front_y, torso_top)),
                corner(0.0, 1.0, Vec3::new(right_x, front_y, torso_top)),
                corner(0.0, 0.0, Vec3::new(right_x, back_y, torso_top)),
            ],
            Vec3::Z,
        ),
    ];
    for (corners, normal) in thin_panels {
        tessellate_into(&mut panels, &SurfacePatch::new(corners, normal), 24, 2);
    }
    // Shoulder plate, slightly above the torso top.
    tessellate_into(
        &mut panels,
        &SurfacePatch::new(
            [
                corner(1.0, 0.0, Vec3::new(left_x, back_y, torso_top + 0.01)),
                corner(0.0, 0.0, Vec3::new(right_x, back_y, torso_top + 0.01)),
                corner(0.0, 1.0, Vec3::new(right_x, front_y, torso_top + 0.01)),
                corner(1.0, 1.0, Vec3::new(left_x, front_y, torso_top + 0.01)),
            ],
            Vec3::NEG_Z,
        ),
        24,
        24,
    );

    // Arms and legs.
    let limb_y = y2 / 2.0 - y2 / 16.0;
    let mut limbs = DrawBatch::new("figure-limbs", None, body_material);
    let limb_transforms = [
        // Arms hang beside the torso.
        Mat4::from_translation(Vec3::new(left_x, limb_y, z + z / 3.0 + z / 30.0))
            * Mat4::from_scale(Vec3::new(z / 20.0, z / 20.0, z / 9.0)),
        Mat4::from_translation(Vec3::new(right_x, limb_y, z + z / 3.0 + z / 30.0))
            * Mat4::from_scale(Vec3::new(z / 20.0, z / 20.0, z / 9.0)),
        // Legs reach toward the tabletop.
        Mat4::from_translation(Vec3::new(right_x - x1 / 16.0, limb_y, z + z / 8.0))
            * Mat4::from_scale(Vec3::new(z / 25.0, z / 20.0, z / 15.0)),
        Mat4::from_translation(Vec3::new(left_x + x1 / 16.0, limb_y, z + z / 8.0))
            * Mat4::from_scale(Vec3::new(z / 25.0, z / 20.0, z / 15.0)),
    ];
    for transform in &limb_transforms {
        for quad in cuboid_quads(transform) {
            limbs.push_quad(quad);
        }
    }

    // Eyes: two small bright cubes on the head.
    let mut eyes = DrawBatch::new(
        "figure-eyes",
        None,
        Material::colored(Vec3::new(0.0, 0.7, 1.0), Vec3::splat(0.8), 128.0),
    );
    let eye_z = z + z / 3.0 + z / 4.0;
    let eye_y = limb_y + y2 / 20.0;
    for eye_x in [right_x - x1 / 16.0 - x1 / 20.0, left_x + x1 / 16.0 + x1 / 20.0] {
        let transform = Mat4::from_translation(Vec3::new(eye_x, eye_y, eye_z))
            * Mat4::from_scale(Vec3::splat(z / 100.0));
        for quad in cuboid_quads(&transform) {
            eyes.push_quad(quad);
        }
    }

    // Head.
    let head_radius = y2 / 16.0;
    let mut head = DrawBatch::new("figure-head", textures.face, Material::matte(0.8, 1.0, 128.0));
    sphere_into(
        &mut head,
        Vec3::new(x1 / 2.0, y2 / 2.0 + y1 / 16.0, torso_top + head_radius),
        head_radius,
        24,
        24,
    );

    vec![torso, panels, limbs, eyes, head]
}
