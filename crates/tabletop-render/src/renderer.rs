//! The renderer boundary.
//!
//! Frame orchestration assembles a [`FramePass`] (camera, lights, flags and
//! draw batches) and hands it to a [`SceneRenderer`]. The offscreen variant
//! returns the captured color buffer for the reflection texture; the main
//! variant draws to the presented surface.

use glam::Vec3;

use crate::batch::{DrawBatch, OverlayLine};
use crate::camera::Camera;
use crate::error::RenderResult;
use crate::lights::Light;
use crate::texture::{ReflectionImage, TextureRegistry};

/// Everything a backend needs to draw one pass.
#[derive(Debug, Clone)]
pub struct FramePass {
    /// Diagnostic label for logs ("reflection", "main").
    pub label: &'static str,
    pub camera: Camera,
    pub lights: Vec<Light>,
    pub clear_color: Vec3,
    /// Draw edges instead of filled faces.
    pub wireframe: bool,
    /// Sample bound textures; when off, surfaces use material color only.
    pub texturing: bool,
    pub batches: Vec<DrawBatch>,
    /// Colored line segments drawn on top of the scene.
    pub overlays: Vec<OverlayLine>,
}

impl FramePass {
    /// Total quad count across all batches.
    #[must_use]
    pub fn quad_count(&self) -> usize {
        self.batches.iter().map(DrawBatch::quad_count).sum()
    }
}

/// Backend abstraction for drawing passes.
///
/// Implementations own whatever GPU or software rasterization state they
/// need; the scene side only speaks in batches and cameras.
pub trait SceneRenderer {
    /// Renders a pass into an offscreen RGB buffer.
    ///
    /// # Errors
    ///
    /// Returns a backend error if the pass cannot be drawn.
    fn render_offscreen(
        &mut self,
        pass: &FramePass,
        textures: &TextureRegistry,
        width: u32,
        height: u32,
    ) -> RenderResult<ReflectionImage>;

    /// Renders a pass to the presented surface.
    ///
    /// # Errors
    ///
    /// Returns a backend error if the pass cannot be drawn.
    fn render_main(&mut self, pass: &FramePass, textures: &TextureRegistry) -> RenderResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::Vertex;
    use crate::material::Material;

    #[test]
    fn test_frame_pass_quad_count() {
        let v = Vertex {
            position: [0.0; 3],
            normal: [0.0, 0.0, 1.0],
            uv: [0.0; 2],
        };
        let mut a = DrawBatch::new("a", None, Material::default());
        a.push_quad([v; 4]);
        let mut b = DrawBatch::new("b", None, Material::default());
        b.push_quad([v; 4]);
        b.push_quad([v; 4]);

        let pass = FramePass {
            label: "main",
            camera: Camera::perspective(
                Vec3::new(5.0, 0.0, 1.0),
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::Z,
                45.0_f32.to_radians(),
                1.0,
                0.1,
                10.0,
            ),
            lights: Vec::new(),
            clear_color: Vec3::ZERO,
            wireframe: false,
            texturing: true,
            batches: vec![a, b],
            overlays: Vec::new(),
        };
        assert_eq!(pass.quad_count(), 3);
    }
}
