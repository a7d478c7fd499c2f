//! Planar reflection: the mirror camera solver.
//!
//! The reflective tabletop is rendered by re-drawing the scene from a
//! virtual eye mirrored across the table plane, through an asymmetric
//! frustum that exactly bounds the table rectangle. The captured image then
//! maps 1:1 onto the rectangle when sampled with the rectangle's own texture
//! coordinates.

use glam::{Mat4, Vec3, Vec4};

use crate::camera::{Camera, Projection};
use crate::error::{RenderError, RenderResult};

/// The finite mirror rectangle: an axis-aligned rectangle lying in the
/// horizontal plane `z = height`. Immutable for a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MirrorPlane {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    /// World z of the reflective surface.
    pub z: f32,
}

impl MirrorPlane {
    /// The four rectangle corners, counter-clockwise seen from above.
    #[must_use]
    pub fn corners(&self) -> [Vec3; 4] {
        [
            Vec3::new(self.x1, self.y1, self.z),
            Vec3::new(self.x2, self.y1, self.z),
            Vec3::new(self.x2, self.y2, self.z),
            Vec3::new(self.x1, self.y2, self.z),
        ]
    }
}

/// Asymmetric frustum bounds, measured on the near plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

/// The per-frame virtual camera for the reflection capture pass.
///
/// Computed fresh each frame from the real eye and the mirror plane; never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MirrorCamera {
    /// The eye reflected across the mirror plane.
    pub eye: Vec3,
    /// The look target: the real eye position, so the view axis passes
    /// straight through the mirror rectangle.
    pub target: Vec3,
    /// Up vector for the mirrored view.
    pub up: Vec3,
    /// The off-axis frustum bounding the mirror rectangle.
    pub frustum: Frustum,
}

impl MirrorCamera {
    /// Returns the equivalent [`Camera`] for the capture pass.
    #[must_use]
    pub fn camera(&self) -> Camera {
        Camera {
            eye: self.eye,
            target: self.target,
            up: self.up,
            projection: Projection::OffAxis {
                left: self.frustum.left,
                right: self.frustum.right,
                bottom: self.frustum.bottom,
                top: self.frustum.top,
            },
            near: self.frustum.near,
            far: self.frustum.far,
        }
    }
}

/// Computes the virtual camera for the reflection capture pass.
///
/// The mirrored eye keeps the real eye's x,y and reflects its height:
/// `z' = 2 * plane.z - z`. The near-plane bounds are taken directly from the
/// mirror rectangle offset by the real eye's x,y, not derived from a field of
/// view, so the rendered image bounds the rectangle exactly. With the view
/// axis vertical, the up vector is the world x-axis: the left/right frustum
/// axis then runs along world y and the bottom/top axis along world x, which
/// yields a horizontal mirroring (not a vertical flip) once the capture is
/// sampled by the tabletop's own texture coordinates.
///
/// # Errors
///
/// Returns [`RenderError::DegenerateMirrorView`] when the eye lies exactly in
/// the mirror plane, and [`RenderError::InvalidFarExtent`] when
/// `scene_far_extent` is not positive.
pub fn compute_mirror_camera(
    real_eye: Vec3,
    plane: &MirrorPlane,
    scene_far_extent: f32,
) -> RenderResult<MirrorCamera> {
    if real_eye.z == plane.z {
        return Err(RenderError::DegenerateMirrorView {
            eye_height: real_eye.z,
            mirror_height: plane.z,
        });
    }
    if scene_far_extent <= 0.0 {
        return Err(RenderError::InvalidFarExtent(scene_far_extent));
    }

    let near = (plane.z - real_eye.z).abs();
    Ok(MirrorCamera {
        eye: Vec3::new(real_eye.x, real_eye.y, 2.0 * plane.z - real_eye.z),
        target: real_eye,
        up: Vec3::X,
        frustum: Frustum {
            left: plane.y1 - real_eye.y,
            right: plane.y2 - real_eye.y,
            bottom: plane.x1 - real_eye.x,
            top: plane.x2 - real_eye.x,
            near,
            far: near + scene_far_extent,
        },
    })
}

/// Computes a reflection matrix for an arbitrary plane given by a point on
/// the plane and its normal.
///
/// The mirror camera solver only needs the horizontal special case, but the
/// general matrix is the extension point for arbitrarily oriented mirrors.
#[must_use]
pub fn reflection_matrix(plane_point: Vec3, plane_normal: Vec3) -> Mat4 {
    let n = plane_normal.normalize();
    let d = -plane_point.dot(n);

    // Reflection matrix formula:
    // | 1-2nx²   -2nxny   -2nxnz   -2nxd |
    // | -2nxny   1-2ny²   -2nynz   -2nyd |
    // | -2nxnz   -2nynz   1-2nz²   -2nzd |
    // |    0        0        0       1   |

    Mat4::from_cols(
        Vec4::new(1.0 - 2.0 * n.x * n.x, -2.0 * n.x * n.y, -2.0 * n.x * n.z, 0.0),
        Vec4::new(-2.0 * n.x * n.y, 1.0 - 2.0 * n.y * n.y, -2.0 * n.y * n.z, 0.0),
        Vec4::new(-2.0 * n.x * n.z, -2.0 * n.y * n.z, 1.0 - 2.0 * n.z * n.z, 0.0),
        Vec4::new(-2.0 * n.x * d, -2.0 * n.y * d, -2.0 * n.z * d, 1.0),
    )
}

/// Reflection matrix for a horizontal tabletop plane at the given height.
///
/// Assumes a z-up coordinate system.
#[must_use]
pub fn tabletop_reflection_matrix(height: f32) -> Mat4 {
    reflection_matrix(Vec3::new(0.0, 0.0, height), Vec3::Z)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_plane() -> MirrorPlane {
        MirrorPlane {
            x1: -1.0,
            y1: -1.5,
            x2: 1.0,
            y2: 1.5,
            z: 1.2,
        }
    }

    #[test]
    fn test_mirrored_eye_height() {
        let eye = Vec3::new(5.0, 0.0, 3.0);
        let cam = compute_mirror_camera(eye, &test_plane(), 6.0).unwrap();
        assert_eq!(cam.eye.x, eye.x);
        assert_eq!(cam.eye.y, eye.y);
        assert_eq!(cam.eye.z, 2.0 * 1.2 - 3.0); // -0.6
        assert_eq!(cam.eye.z, -0.6);
    }

    #[test]
    fn test_target_is_real_eye() {
        let eye = Vec3::new(2.0, -1.0, 4.0);
        let cam = compute_mirror_camera(eye, &test_plane(), 6.0).unwrap();
        assert_eq!(cam.target, eye);
        assert_eq!(cam.up, Vec3::X);
    }

    #[test]
    fn test_frustum_bounds_the_mirror_rectangle() {
        let plane = test_plane();
        let eye = Vec3::new(0.7, -0.4, 3.5);
        let cam = compute_mirror_camera(eye, &plane, 6.0).unwrap();

        // Near-plane bounds are the rectangle corners offset by the eye's x,y.
        assert_eq!(cam.frustum.left, plane.y1 - eye.y);
        assert_eq!(cam.frustum.right, plane.y2 - eye.y);
        assert_eq!(cam.frustum.bottom, plane.x1 - eye.x);
        assert_eq!(cam.frustum.top, plane.x2 - eye.x);
        assert_eq!(cam.frustum.near, eye.z - plane.z);
        assert_eq!(cam.frustum.far, cam.frustum.near + 6.0);
    }

    #[test]
    fn test_near_plane_corners_lie_on_mirror_rectangle() {
        // Walking from the mirrored eye along the camera basis by the frustum
        // bounds at the near distance must land on the rectangle corners.
        let plane = test_plane();
        let eye = Vec3::new(0.3, 0.9, 2.8);
        let cam = compute_mirror_camera(eye, &plane, 6.0).unwrap();

        let forward = (cam.target - cam.eye).normalize();
        let right = forward.cross(cam.up).normalize();
        let up = right.cross(forward);

        let near_center = cam.eye + forward * cam.frustum.near;
        for (h, v, expected_x, expected_y) in [
            (cam.frustum.left, cam.frustum.bottom, plane.x1, plane.y1),
            (cam.frustum.right, cam.frustum.bottom, plane.x1, plane.y2),
            (cam.frustum.right, cam.frustum.top, plane.x2, plane.y2),
            (cam.frustum.left, cam.frustum.top, plane.x2, plane.y1),
        ] {
            let corner = near_center + right * h + up * v;
            assert!((corner.x - expected_x).abs() < 1e-5);
            assert!((corner.y - expected_y).abs() < 1e-5);
            assert!((corner.z - plane.z).abs() < 1e-5);
        }
    }

    #[test]
    fn test_degenerate_eye_in_plane() {
        let eye = Vec3::new(0.0, 0.0, 1.2);
        let err = compute_mirror_camera(eye, &test_plane(), 6.0).unwrap_err();
        assert!(matches!(err, RenderError::DegenerateMirrorView { .. }));
    }

    #[test]
    fn test_invalid_far_extent() {
        let eye = Vec3::new(0.0, 0.0, 3.0);
        let err = compute_mirror_camera(eye, &test_plane(), 0.0).unwrap_err();
        assert!(matches!(err, RenderError::InvalidFarExtent(_)));
    }

    #[test]
    fn test_eye_below_the_mirror() {
        let eye = Vec3::new(0.0, 0.0, 0.2);
        let cam = compute_mirror_camera(eye, &test_plane(), 6.0).unwrap();
        assert_eq!(cam.eye.z, 2.0 * 1.2 - 0.2);
        assert!(cam.frustum.near > 0.0);
    }

    #[test]
    fn test_solver_agrees_with_general_reflection() {
        let plane = test_plane();
        let eye = Vec3::new(1.3, -2.1, 4.4);
        let cam = compute_mirror_camera(eye, &plane, 6.0).unwrap();
        let reflected = tabletop_reflection_matrix(plane.z).transform_point3(eye);
        assert!((cam.eye - reflected).length() < 1e-5);
    }

    #[test]
    fn test_reflection_is_involution() {
        let mat = reflection_matrix(Vec3::new(0.2, -0.4, 1.2), Vec3::Z);
        let double = mat * mat;
        for i in 0..4 {
            for j in 0..4 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((double.col(j)[i] - expected).abs() < 0.001);
            }
        }
    }

    #[test]
    fn test_reflection_matrix_tilted_plane() {
        // The general matrix handles non-horizontal mirrors too.
        let normal = Vec3::new(1.0, 0.0, 1.0).normalize();
        let point = Vec3::new(1.0, 0.0, 0.0);
        let mat = reflection_matrix(point, normal);

        // A point on the plane reflects to itself.
        let on_plane = point + Vec3::new(-1.0, 2.0, 1.0);
        let reflected = mat.transform_point3(on_plane);
        assert!((reflected - on_plane).length() < 1e-5);

        // A point off the plane lands mirrored across it.
        let off_plane = point + normal * 0.5;
        let reflected = mat.transform_point3(off_plane);
        assert!((reflected - (point - normal * 0.5)).length() < 1e-5);
    }

    #[test]
    fn test_mirror_plane_corners() {
        let plane = test_plane();
        let corners = plane.corners();
        assert_eq!(corners[0], Vec3::new(-1.0, -1.5, 1.2));
        assert_eq!(corners[2], Vec3::new(1.0, 1.5, 1.2));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_solver_agrees_with_reflection_matrix(
                ex in -5.0_f32..5.0,
                ey in -5.0_f32..5.0,
                ez in -4.0_f32..4.0,
            ) {
                let plane = test_plane();
                prop_assume!((ez - plane.z).abs() > 1e-3);
                let eye = Vec3::new(ex, ey, ez);
                let cam = compute_mirror_camera(eye, &plane, 6.0).unwrap();

                // The mirrored eye is what the general plane reflection gives.
                let reflected = tabletop_reflection_matrix(plane.z).transform_point3(eye);
                prop_assert!((cam.eye - reflected).length() < 1e-4);
                // Reflecting again returns the real eye.
                let back = tabletop_reflection_matrix(plane.z).transform_point3(cam.eye);
                prop_assert!((back - eye).length() < 1e-4);
                prop_assert!((cam.frustum.near - (plane.z - ez).abs()).abs() < 1e-4);
            }

            #[test]
            fn prop_frustum_centers_on_eye_offset(
                ex in -5.0_f32..5.0,
                ey in -5.0_f32..5.0,
                ez in 1.5_f32..8.0,
            ) {
                // The frustum bounds follow the eye's x,y so the rectangle
                // stays exactly covered whatever the eye offset.
                let plane = test_plane();
                let eye = Vec3::new(ex, ey, ez);
                let cam = compute_mirror_camera(eye, &plane, 6.0).unwrap();
                prop_assert!((cam.frustum.right - cam.frustum.left - (plane.y2 - plane.y1)).abs() < 1e-4);
                prop_assert!((cam.frustum.top - cam.frustum.bottom - (plane.x2 - plane.x1)).abs() < 1e-4);
            }
        }
    }
}
