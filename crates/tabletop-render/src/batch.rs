//! Draw batches: the vertex data handed to a [`crate::SceneRenderer`].

use glam::Vec3;

use crate::material::Material;
use crate::texture::TextureId;

/// One tessellated vertex, laid out for direct GPU upload.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// A batch of textured, lit quads sharing one material and texture binding.
#[derive(Debug, Clone)]
pub struct DrawBatch {
    /// Diagnostic label, shown in logs.
    pub label: &'static str,
    /// Bound texture, or `None` for untextured surfaces.
    pub texture: Option<TextureId>,
    /// Surface material.
    pub material: Material,
    /// Quads in a consistent winding order.
    pub quads: Vec<[Vertex; 4]>,
}

impl DrawBatch {
    /// Creates an empty batch.
    #[must_use]
    pub fn new(label: &'static str, texture: Option<TextureId>, material: Material) -> Self {
        Self {
            label,
            texture,
            material,
            quads: Vec::new(),
        }
    }

    /// Appends one quad.
    pub fn push_quad(&mut self, quad: [Vertex; 4]) {
        self.quads.push(quad);
    }

    /// Number of quads in the batch.
    #[must_use]
    pub fn quad_count(&self) -> usize {
        self.quads.len()
    }

    /// Number of vertices in the batch.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.quads.len() * 4
    }

    /// Whether the batch holds no geometry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }
}

/// A colored overlay line segment (used for the world axes).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayLine {
    pub start: Vec3,
    pub end: Vec3,
    pub color: Vec3,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        // 3 + 3 + 2 floats, tightly packed for upload.
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
    }

    #[test]
    fn test_batch_counts() {
        let mut batch = DrawBatch::new("test", None, Material::default());
        assert!(batch.is_empty());
        let v = Vertex {
            position: [0.0; 3],
            normal: [0.0, 0.0, 1.0],
            uv: [0.0; 2],
        };
        batch.push_quad([v; 4]);
        batch.push_quad([v; 4]);
        assert_eq!(batch.quad_count(), 2);
        assert_eq!(batch.vertex_count(), 8);
    }
}
