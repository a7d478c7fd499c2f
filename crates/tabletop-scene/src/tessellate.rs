//! Quad tessellation of bilinear patches.
//!
//! A [`SurfacePatch`] is split into a `u_steps x v_steps` grid of quads,
//! produced lazily in row-major order. Each emitted quad keeps the patch's
//! winding, so lighting and culling behave the same for every cell as for
//! the whole patch.

use glam::{Vec2, Vec3};
use tabletop_render::Vertex;

use crate::patch::SurfacePatch;

/// One tessellated vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TessVertex {
    pub position: Vec3,
    pub uv: Vec2,
    pub normal: Vec3,
}

/// One cell of the tessellation grid.
///
/// Vertices are ordered `(u, v)`, `(u+, v)`, `(u+, v+)`, `(u, v+)`, which
/// preserves the winding of the source patch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub vertices: [TessVertex; 4],
}

impl Quad {
    /// The quad as GPU-ready vertices.
    #[must_use]
    pub fn to_render_vertices(&self) -> [Vertex; 4] {
        self.vertices.map(|v| Vertex {
            position: v.position.to_array(),
            normal: v.normal.to_array(),
            uv: v.uv.to_array(),
        })
    }
}

/// Lazy iterator over the quads of a tessellated patch.
///
/// Created by [`tessellate`]. The grid is walked row-major: the outer index
/// advances along `u`, the inner along `v`.
#[derive(Debug, Clone)]
pub struct Tessellation {
    patch: SurfacePatch,
    u_steps: u32,
    v_steps: u32,
    next: u32,
}

/// Tessellates a patch into `u_steps * v_steps` quads.
///
/// Corner parameters are computed as `i / steps`, so the grid's outer border
/// reproduces the patch corners exactly; with `u_steps == v_steps == 1` the
/// single emitted quad is the patch itself, bit-for-bit.
///
/// # Panics
///
/// Panics if either step count is zero.
#[must_use]
pub fn tessellate(patch: &SurfacePatch, u_steps: u32, v_steps: u32) -> Tessellation {
    assert!(
        u_steps > 0 && v_steps > 0,
        "tessellation requires at least one step along each axis, got {u_steps}x{v_steps}"
    );
    Tessellation {
        patch: *patch,
        u_steps,
        v_steps,
        next: 0,
    }
}

impl SurfacePatch {
    /// Tessellates this patch into `u_steps * v_steps` quads.
    ///
    /// # Panics
    ///
    /// Panics if either step count is zero.
    #[must_use]
    pub fn tessellate(&self, u_steps: u32, v_steps: u32) -> Tessellation {
        tessellate(self, u_steps, v_steps)
    }
}

impl Tessellation {
    fn vertex_at(&self, u: f32, v: f32) -> TessVertex {
        TessVertex {
            position: self.patch.position_at(u, v),
            uv: self.patch.uv_at(u, v),
            normal: self.patch.normal,
        }
    }
}

impl Iterator for Tessellation {
    type Item = Quad;

    fn next(&mut self) -> Option<Quad> {
        if self.next >= self.u_steps * self.v_steps {
            return None;
        }
        let i = self.next / self.v_steps;
        let j = self.next % self.v_steps;
        self.next += 1;

        let u0 = i as f32 / self.u_steps as f32;
        let u1 = (i + 1) as f32 / self.u_steps as f32;
        let v0 = j as f32 / self.v_steps as f32;
        let v1 = (j + 1) as f32 / self.v_steps as f32;

        Some(Quad {
            vertices: [
                self.vertex_at(u0, v0),
                self.vertex_at(u1, v0),
                self.vertex_at(u1, v1),
                self.vertex_at(u0, v1),
            ],
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.u_steps * self.v_steps - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Tessellation {}

/// Tessellates a patch and appends the resulting quads to a draw batch.
///
/// # Panics
///
/// Panics if either step count is zero, as [`tessellate`] does.
pub fn tessellate_into(
    batch: &mut tabletop_render::DrawBatch,
    patch: &SurfacePatch,
    u_steps: u32,
    v_steps: u32,
) {
    for quad in tessellate(patch, u_steps, v_steps) {
        batch.push_quad(quad.to_render_vertices());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::{PatchVertex, SurfacePatch};
    use proptest::prelude::*;

    fn unit_patch() -> SurfacePatch {
        SurfacePatch::with_unit_uvs(
            [
                Vec3::new(-1.0, -1.5, 1.2),
                Vec3::new(1.0, -1.5, 1.2),
                Vec3::new(1.0, 1.5, 1.2),
                Vec3::new(-1.0, 1.5, 1.2),
            ],
            Vec3::Z,
        )
    }

    #[test]
    fn test_single_step_reproduces_patch() {
        let patch = unit_patch();
        let quads: Vec<Quad> = tessellate(&patch, 1, 1).collect();
        assert_eq!(quads.len(), 1);
        for (vertex, corner) in quads[0].vertices.iter().zip(patch.corners.iter()) {
            assert_eq!(vertex.position, corner.position);
            assert_eq!(vertex.uv, corner.uv);
            assert_eq!(vertex.normal, Vec3::Z);
        }
    }

    #[test]
    fn test_quad_count_and_exact_size() {
        let patch = unit_patch();
        let tess = patch.tessellate(24, 16);
        assert_eq!(tess.len(), 24 * 16);
        assert_eq!(tess.count(), 24 * 16);
    }

    #[test]
    fn test_row_major_order() {
        let patch = unit_patch();
        let quads: Vec<Quad> = tessellate(&patch, 2, 3).collect();
        // The inner index walks v; the second quad shares its first edge's v1
        // with the first quad's v-extent.
        assert_eq!(quads[0].vertices[0].uv, Vec2::new(0.0, 0.0));
        assert_eq!(quads[1].vertices[0].uv.y, quads[0].vertices[3].uv.y);
        // After v_steps quads, u advances.
        assert!(quads[3].vertices[0].uv.x > quads[2].vertices[0].uv.x);
    }

    #[test]
    fn test_grid_border_matches_patch_corners() {
        let patch = unit_patch();
        let quads: Vec<Quad> = tessellate(&patch, 24, 24).collect();
        assert_eq!(quads[0].vertices[0].position, patch.corners[0].position);
        let last = quads.last().unwrap();
        assert_eq!(last.vertices[2].position, patch.corners[2].position);
    }

    #[test]
    fn test_winding_preserved() {
        // For a z-facing patch wound counter-clockwise, every cell's signed
        // area in the xy plane stays positive.
        let patch = unit_patch();
        for quad in tessellate(&patch, 4, 4) {
            let [a, b, c, _] = quad.vertices;
            let e1 = b.position - a.position;
            let e2 = c.position - a.position;
            assert!(e1.cross(e2).z > 0.0);
        }
    }

    #[test]
    #[should_panic(expected = "at least one step")]
    fn test_zero_steps_panics() {
        let patch = unit_patch();
        let _ = tessellate(&patch, 0, 24);
    }

    #[test]
    fn test_render_vertex_conversion() {
        let patch = unit_patch();
        let quad = tessellate(&patch, 1, 1).next().unwrap();
        let verts = quad.to_render_vertices();
        assert_eq!(verts[0].position, [-1.0, -1.5, 1.2]);
        assert_eq!(verts[0].normal, [0.0, 0.0, 1.0]);
        assert_eq!(verts[2].uv, [1.0, 1.0]);
    }

    proptest! {
        #[test]
        fn prop_cells_cover_patch(u_steps in 1u32..8, v_steps in 1u32..8) {
            // Corner cells of the grid carry the patch corners exactly.
            let patch = unit_patch();
            let quads: Vec<Quad> = tessellate(&patch, u_steps, v_steps).collect();
            prop_assert_eq!(quads.len(), (u_steps * v_steps) as usize);
            prop_assert_eq!(quads[0].vertices[0].position, patch.corners[0].position);
            let last = quads.last().unwrap();
            prop_assert_eq!(last.vertices[2].position, patch.corners[2].position);
        }

        #[test]
        fn prop_vertices_match_patch_evaluation(
            u_steps in 1u32..6,
            v_steps in 1u32..6,
        ) {
            let patch = unit_patch();
            for (index, quad) in tessellate(&patch, u_steps, v_steps).enumerate() {
                let i = index as u32 / v_steps;
                let j = index as u32 % v_steps;
                let u = i as f32 / u_steps as f32;
                let v = j as f32 / v_steps as f32;
                let expected = patch.position_at(u, v);
                prop_assert!((quad.vertices[0].position - expected).length() < 1e-5);
            }
        }
    }
}
