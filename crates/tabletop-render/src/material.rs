//! Surface materials.

use glam::Vec3;

/// Phong-style material constants for one surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Vec3::ONE,
            diffuse: Vec3::ONE,
            specular: Vec3::splat(0.5),
            shininess: 16.0,
        }
    }
}

impl Material {
    /// A gray material with equal ambient/diffuse components.
    #[must_use]
    pub fn matte(gray: f32, specular: f32, shininess: f32) -> Self {
        Self {
            ambient: Vec3::splat(gray),
            diffuse: Vec3::splat(gray),
            specular: Vec3::splat(specular),
            shininess,
        }
    }

    /// A colored material with equal ambient/diffuse components.
    #[must_use]
    pub fn colored(color: Vec3, specular: Vec3, shininess: f32) -> Self {
        Self {
            ambient: color,
            diffuse: color,
            specular,
            shininess,
        }
    }
}

/// GPU representation of a material.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[allow(clippy::pub_underscore_fields)]
pub struct MaterialUniforms {
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
    pub shininess: f32,
    pub _padding: [f32; 3],
}

impl From<&Material> for MaterialUniforms {
    fn from(material: &Material) -> Self {
        Self {
            ambient: material.ambient.extend(1.0).to_array(),
            diffuse: material.diffuse.extend(1.0).to_array(),
            specular: material.specular.extend(1.0).to_array(),
            shininess: material.shininess,
            _padding: [0.0; 3],
        }
    }
}
