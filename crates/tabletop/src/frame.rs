//! Per-frame orchestration: input, the reflection capture pass, then the
//! main pass.

use glam::Vec3;
use tabletop_core::{Result, SceneState};
use tabletop_render::{
    compute_mirror_camera, default_lights, Camera, FramePass, SceneRenderer,
};
use tabletop_scene::axes_overlay;

use crate::scene::{Scene, REFLECTION_SIZE};

/// Diagnostics for one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSummary {
    /// Whether queued input changed the view this frame.
    pub input_applied: bool,
    /// World-space eye position used for both passes.
    pub eye: Vec3,
    /// Quads drawn in the reflection capture pass.
    pub capture_quads: usize,
    /// Quads drawn in the main pass.
    pub main_quads: usize,
}

/// Renders one frame.
///
/// Queued input is applied first, at the frame boundary. The scene is then
/// drawn twice: once from the mirrored eye into the reflection capture,
/// which is republished as the tabletop texture, and once from the real eye
/// to the presented surface. The capture pass always runs before the main
/// pass so the mirror never shows a stale frame.
///
/// # Errors
///
/// Fails if the eye degenerates into the mirror plane or the backend
/// rejects a pass.
///
/// # Panics
///
/// Panics if either viewport dimension is zero; the aspect ratio would be
/// degenerate, so this is a contract violation like zero tessellation steps.
pub fn render_frame(
    state: &mut SceneState,
    scene: &mut Scene,
    renderer: &mut dyn SceneRenderer,
    viewport: (u32, u32),
) -> Result<FrameSummary> {
    let (width, height) = viewport;
    assert!(
        width > 0 && height > 0,
        "viewport must be nonzero, got {width}x{height}"
    );

    let input_applied = state.apply_pending();
    let eye = state.eye.position(&state.eye_config);
    let lights = default_lights().to_vec();

    let mirror_camera =
        compute_mirror_camera(eye, &scene.layout.mirror_plane(), scene.layout.scene_radius)?;
    let capture_pass = FramePass {
        label: "reflection",
        camera: mirror_camera.camera(),
        lights: lights.clone(),
        clear_color: state.options.background_color,
        wireframe: state.options.wireframe,
        texturing: state.options.texturing,
        batches: scene.capture_batches().to_vec(),
        overlays: Vec::new(),
    };
    let capture_quads = capture_pass.quad_count();
    let capture = renderer.render_offscreen(
        &capture_pass,
        scene.textures(),
        REFLECTION_SIZE,
        REFLECTION_SIZE,
    )?;
    scene.set_reflection(capture);

    let main_pass = FramePass {
        label: "main",
        camera: Camera::perspective(
            eye,
            state.eye_config.look_at,
            Vec3::Z,
            45.0_f32.to_radians(),
            width as f32 / height as f32,
            state.eye_config.min_distance,
            state.eye.distance + scene.layout.scene_radius,
        ),
        lights,
        clear_color: state.options.background_color,
        wireframe: state.options.wireframe,
        texturing: state.options.texturing,
        batches: scene.main_batches(),
        overlays: if state.options.draw_axes {
            axes_overlay(scene.layout.scene_radius).to_vec()
        } else {
            Vec::new()
        },
    };
    let main_quads = main_pass.quad_count();
    renderer.render_main(&main_pass, scene.textures())?;

    log::debug!(
        "frame: eye {eye}, {capture_quads} capture quads, {main_quads} main quads"
    );
    Ok(FrameSummary {
        input_applied,
        eye,
        capture_quads,
        main_quads,
    })
}
