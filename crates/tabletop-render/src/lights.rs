//! Scene lighting.

use glam::Vec3;

/// A positional light source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

impl Light {
    /// A white light at a world position.
    #[must_use]
    pub fn white(position: Vec3) -> Self {
        Self {
            position,
            ambient: Vec3::splat(0.1),
            diffuse: Vec3::ONE,
            specular: Vec3::ONE,
        }
    }
}

/// The two fixed lights of the room scene.
#[must_use]
pub fn default_lights() -> [Light; 2] {
    [
        Light::white(Vec3::new(10.0, -5.0, 8.0)),
        Light::white(Vec3::new(-2.0, 10.0, -2.0)),
    ]
}
