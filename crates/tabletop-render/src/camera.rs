//! Camera and view management.

use glam::{Mat4, Vec3, Vec4};

/// Projection shape for a [`Camera`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Symmetric perspective projection.
    Perspective {
        /// Vertical field of view in radians.
        fov_y: f32,
        /// Aspect ratio (width / height).
        aspect: f32,
    },
    /// Asymmetric (off-axis) perspective frustum. The four bounds are
    /// measured on the near plane and need not be centered on the view axis.
    OffAxis {
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
    },
}

/// A 3D camera for viewing the scene.
///
/// Matrices follow OpenGL clip conventions (right-handed view space,
/// depth in [-1, 1]).
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Up vector.
    pub up: Vec3,
    /// Projection shape.
    pub projection: Projection,
    /// Near clipping plane distance.
    pub near: f32,
    /// Far clipping plane distance.
    pub far: f32,
}

impl Camera {
    /// Creates a symmetric perspective camera.
    #[must_use]
    pub fn perspective(
        eye: Vec3,
        target: Vec3,
        up: Vec3,
        fov_y: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> Self {
        Self {
            eye,
            target,
            up,
            projection: Projection::Perspective { fov_y, aspect },
            near,
            far,
        }
    }

    /// Returns the view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Returns the projection matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        match self.projection {
            Projection::Perspective { fov_y, aspect } => {
                Mat4::perspective_rh_gl(fov_y, aspect, self.near, self.far)
            }
            Projection::OffAxis {
                left,
                right,
                bottom,
                top,
            } => off_axis_matrix(left, right, bottom, top, self.near, self.far),
        }
    }

    /// Returns the combined view-projection matrix.
    #[must_use]
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Returns the camera's forward direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize()
    }
}

/// Builds an off-axis perspective matrix from near-plane bounds.
///
/// Column-major, matching the classic frustum matrix:
///
/// ```text
/// | 2n/(r-l)    0      (r+l)/(r-l)     0      |
/// |    0     2n/(t-b)  (t+b)/(t-b)     0      |
/// |    0        0     -(f+n)/(f-n) -2fn/(f-n) |
/// |    0        0         -1           0      |
/// ```
#[must_use]
pub fn off_axis_matrix(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let rl = right - left;
    let tb = top - bottom;
    let fin = far - near;

    Mat4::from_cols(
        Vec4::new(2.0 * near / rl, 0.0, 0.0, 0.0),
        Vec4::new(0.0, 2.0 * near / tb, 0.0, 0.0),
        Vec4::new(
            (right + left) / rl,
            (top + bottom) / tb,
            -(far + near) / fin,
            -1.0,
        ),
        Vec4::new(0.0, 0.0, -2.0 * far * near / fin, 0.0),
    )
}
