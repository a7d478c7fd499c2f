//! The table: the mirror-textured top, the slab sides and bottom, and four
//! legs.

use glam::{Mat4, Vec2, Vec3};
use tabletop_render::{DrawBatch, Material, TextureId};

use crate::layout::SceneLayout;
use crate::patch::{PatchVertex, SurfacePatch};
use crate::props::cuboid_quads;
use crate::tessellate::tessellate_into;

/// Builds the reflective top face of the table.
///
/// The texture coordinates place `(0,0)` at the `(x1,y1)` corner with `s`
/// running along `+y` and `t` along `+x`. Combined with the mirror camera's
/// sideways up vector this samples the capture as a mirror image, not an
/// upside-down copy.
#[must_use]
pub fn build_tabletop(layout: &SceneLayout, reflection: TextureId) -> DrawBatch {
    let (x1, x2) = (layout.tabletop_x1, layout.tabletop_x2);
    let (y1, y2) = (layout.tabletop_y1, layout.tabletop_y2);
    let z = layout.tabletop_z;

    let mut top = DrawBatch::new(
        "tabletop",
        Some(reflection),
        Material::colored(Vec3::new(0.5, 0.7, 1.0), Vec3::splat(0.8), 128.0),
    );
    tessellate_into(
        &mut top,
        &SurfacePatch::new(
            [
                PatchVertex::new(Vec3::new(x1, y1, z), Vec2::new(0.0, 0.0)),
                PatchVertex::new(Vec3::new(x2, y1, z), Vec2::new(0.0, 1.0)),
                PatchVertex::new(Vec3::new(x2, y2, z), Vec2::new(1.0, 1.0)),
                PatchVertex::new(Vec3::new(x1, y2, z), Vec2::new(1.0, 0.0)),
            ],
            Vec3::Z,
        ),
        24,
        24,
    );
    top
}

/// Builds the non-reflective parts of the table: slab sides, slab bottom and
/// the four legs.
#[must_use]
pub fn build_table_body(layout: &SceneLayout) -> Vec<DrawBatch> {
    let (x1, x2) = (layout.tabletop_x1, layout.tabletop_x2);
    let (y1, y2) = (layout.tabletop_y1, layout.tabletop_y2);
    let top_z = layout.tabletop_z;
    let under_z = top_z - layout.table_thickness;

    let corner = |s: f32, t: f32, p: Vec3| PatchVertex::new(p, Vec2::new(s, t));

    let mut slab = DrawBatch::new(
        "table-slab",
        None,
        Material::colored(
            Vec3::new(0.2, 0.3, 0.4),
            Vec3::new(0.6, 0.8, 1.0),
            128.0,
        ),
    );
    let sides = [
        // +y side.
        (
            [
                corner(0.0, 0.0, Vec3::new(x2, y2, under_z)),
                corner(1.0, 0.0, Vec3::new(x1, y2, under_z)),
                corner(1.0, 1.0, Vec3::new(x1, y2, top_z)),
                corner(0.0, 1.0, Vec3::new(x2, y2, top_z)),
            ],
            Vec3::Y,
        ),
        // -y side.
        (
            [
                corner(0.0, 0.0, Vec3::new(x1, y1, under_z)),
                corner(1.0, 0.0, Vec3::new(x2, y1, under_z)),
                corner(1.0, 1.0, Vec3::new(x2, y1, top_z)),
                corner(0.0, 1.0, Vec3::new(x1, y1, top_z)),
            ],
            Vec3::NEG_Y,
        ),
        // +x side.
        (
            [
                corner(0.0, 0.0, Vec3::new(x2, y1, under_z)),
                corner(1.0, 0.0, Vec3::new(x2, y2, under_z)),
                corner(1.0, 1.0, Vec3::new(x2, y2, top_z)),
                corner(0.0, 1.0, Vec3::new(x2, y1, top_z)),
            ],
            Vec3::X,
        ),
        // -x side.
        (
            [
                corner(0.0, 0.0, Vec3::new(x1, y2, under_z)),
                corner(1.0, 0.0, Vec3::new(x1, y1, under_z)),
                corner(1.0, 1.0, Vec3::new(x1, y1, top_z)),
                corner(0.0, 1.0, Vec3::new(x1, y2, top_z)),
            ],
            Vec3::NEG_X,
        ),
    ];
    for (corners, normal) in sides {
        tessellate_into(&mut slab, &SurfacePatch::new(corners, normal), 24, 2);
    }
    // Bottom, facing the floor.
    tessellate_into(
        &mut slab,
        &SurfacePatch::new(
            [
                corner(0.0, 0.0, Vec3::new(x1, y1, under_z)),
                corner(1.0, 0.0, Vec3::new(x1, y2, under_z)),
                corner(1.0, 1.0, Vec3::new(x2, y2, under_z)),
                corner(0.0, 1.0, Vec3::new(x2, y1, under_z)),
            ],
            Vec3::NEG_Z,
        ),
        24,
        24,
    );

    // Legs: square cross-section, inset one thickness from the corners,
    // floor to the slab underside.
    let t = layout.table_thickness;
    let half = t / 2.0;
    let mut legs = DrawBatch::new("table-legs", None, Material::matte(0.4, 0.8, 64.0));
    for (cx, cy) in [
        (x1 + t, y1 + t),
        (x2 - t, y1 + t),
        (x2 - t, y2 - t),
        (x1 + t, y2 - t),
    ] {
        let transform = Mat4::from_translation(Vec3::new(cx, cy, under_z / 2.0))
            * Mat4::from_scale(Vec3::new(half, half, under_z / 2.0));
        for quad in cuboid_quads(&transform) {
            legs.push_quad(quad);
        }
    }

    vec![slab, legs]
}
