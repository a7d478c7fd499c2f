//! Bilinear surface patches.
//!
//! Every surface in the scene is built from four-corner patches that are
//! interpolated bilinearly: positions, texture coordinates, or any other
//! attribute that supports scaling and addition.

use std::ops::{Add, Mul};

use glam::{Vec2, Vec3};

/// Linear interpolation in the `a*(1-t) + b*t` form.
///
/// This form is exact at the endpoints: `lerp(a, b, 0.0) == a` and
/// `lerp(a, b, 1.0) == b` for any finite inputs, which keeps patch borders
/// watertight between adjacent surfaces.
pub fn lerp<T>(a: T, b: T, t: f32) -> T
where
    T: Copy + Add<Output = T> + Mul<f32, Output = T>,
{
    a * (1.0 - t) + b * t
}

/// Bilinear interpolation over four corner values.
///
/// `u` interpolates along the `v0 -> v1` and `v3 -> v2` edges, then `v`
/// interpolates between the two edge points. At the corners the result is
/// exactly the corner value.
pub fn bilerp<T>(corners: [T; 4], u: f32, v: f32) -> T
where
    T: Copy + Add<Output = T> + Mul<f32, Output = T>,
{
    let [v0, v1, v2, v3] = corners;
    let along_first = lerp(v0, v1, u);
    let along_second = lerp(v3, v2, u);
    lerp(along_first, along_second, v)
}

/// One corner of a surface patch: a world position and its texture
/// coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatchVertex {
    pub position: Vec3,
    pub uv: Vec2,
}

impl PatchVertex {
    #[must_use]
    pub fn new(position: Vec3, uv: Vec2) -> Self {
        Self { position, uv }
    }
}

/// A four-corner surface patch with a shared normal.
///
/// Corners are listed in winding order; tessellation preserves it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePatch {
    pub corners: [PatchVertex; 4],
    pub normal: Vec3,
}

impl SurfacePatch {
    #[must_use]
    pub fn new(corners: [PatchVertex; 4], normal: Vec3) -> Self {
        Self { corners, normal }
    }

    /// A flat patch covering `uv` space `[0,1]x[0,1]` over four positions.
    #[must_use]
    pub fn with_unit_uvs(positions: [Vec3; 4], normal: Vec3) -> Self {
        let uvs = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ];
        let corners = [
            PatchVertex::new(positions[0], uvs[0]),
            PatchVertex::new(positions[1], uvs[1]),
            PatchVertex::new(positions[2], uvs[2]),
            PatchVertex::new(positions[3], uvs[3]),
        ];
        Self { corners, normal }
    }

    /// The interpolated position at parameters `(u, v)`.
    #[must_use]
    pub fn position_at(&self, u: f32, v: f32) -> Vec3 {
        bilerp(self.corners.map(|c| c.position), u, v)
    }

    /// The interpolated texture coordinate at parameters `(u, v)`.
    #[must_use]
    pub fn uv_at(&self, u: f32, v: f32) -> Vec2 {
        bilerp(self.corners.map(|c| c.uv), u, v)
    }
}
