//! A headless backend that records the passes it is asked to draw.
//!
//! Used by the integration tests and as a template for real backends: it
//! exercises the full frame flow without any GPU or window.

use glam::Vec3;
use tabletop_render::{
    FramePass, Projection, ReflectionImage, RenderResult, SceneRenderer, TextureRegistry,
};

/// A record of one rendered pass.
#[derive(Debug, Clone)]
pub struct PassRecord {
    pub label: &'static str,
    /// True for the offscreen reflection capture.
    pub offscreen: bool,
    pub eye: Vec3,
    /// True when the pass used an off-axis projection.
    pub off_axis: bool,
    pub quad_count: usize,
    pub overlay_count: usize,
    pub batch_labels: Vec<&'static str>,
}

/// Records every pass and synthesizes solid-color captures.
#[derive(Debug, Default)]
pub struct TraceRenderer {
    pub passes: Vec<PassRecord>,
    /// Color of the synthesized capture.
    pub capture_color: [u8; 3],
}

impl TraceRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            passes: Vec::new(),
            capture_color: [0; 3],
        }
    }

    fn record(&mut self, pass: &FramePass, offscreen: bool) {
        self.passes.push(PassRecord {
            label: pass.label,
            offscreen,
            eye: pass.camera.eye,
            off_axis: matches!(pass.camera.projection, Projection::OffAxis { .. }),
            quad_count: pass.quad_count(),
            overlay_count: pass.overlays.len(),
            batch_labels: pass.batches.iter().map(|b| b.label).collect(),
        });
    }
}

impl SceneRenderer for TraceRenderer {
    fn render_offscreen(
        &mut self,
        pass: &FramePass,
        _textures: &TextureRegistry,
        width: u32,
        height: u32,
    ) -> RenderResult<ReflectionImage> {
        self.record(pass, true);
        let mut pixels = Vec::with_capacity(width as usize * height as usize * 3);
        for _ in 0..width * height {
            pixels.extend_from_slice(&self.capture_color);
        }
        Ok(ReflectionImage {
            width,
            height,
            pixels,
        })
    }

    fn render_main(&mut self, pass: &FramePass, _textures: &TextureRegistry) -> RenderResult<()> {
        self.record(pass, false);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use tabletop_render::{Camera, DrawBatch, Material};

    fn empty_pass(label: &'static str) -> FramePass {
        FramePass {
            label,
            camera: Camera::perspective(
                Vec3::new(5.0, 0.0, 1.0),
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::Z,
                45.0_f32.to_radians(),
                1.0,
                0.1,
                11.0,
            ),
            lights: Vec::new(),
            clear_color: Vec3::ZERO,
            wireframe: false,
            texturing: true,
            batches: vec![DrawBatch::new("room", None, Material::default())],
            overlays: Vec::new(),
        }
    }

    #[test]
    fn test_offscreen_returns_requested_size() {
        let mut renderer = TraceRenderer::new();
        renderer.capture_color = [1, 2, 3];
        let capture = renderer
            .render_offscreen(&empty_pass("reflection"), &TextureRegistry::new(), 4, 2)
            .unwrap();
        assert_eq!(capture.width, 4);
        assert_eq!(capture.pixels.len(), 4 * 2 * 3);
        assert_eq!(&capture.pixels[..3], &[1, 2, 3]);
    }

    #[test]
    fn test_passes_recorded_in_order() {
        let mut renderer = TraceRenderer::new();
        renderer
            .render_offscreen(&empty_pass("reflection"), &TextureRegistry::new(), 2, 2)
            .unwrap();
        renderer
            .render_main(&empty_pass("main"), &TextureRegistry::new())
            .unwrap();
        assert_eq!(renderer.passes.len(), 2);
        assert!(renderer.passes[0].offscreen);
        assert!(!renderer.passes[1].offscreen);
        assert_eq!(renderer.passes[1].batch_labels, vec!["room"]);
    }
}
