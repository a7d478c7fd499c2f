//! An interactive room scene with a planar-reflective tabletop.
//!
//! The scene is a closed room containing a table whose top face acts as a
//! mirror. Each frame the scene is rendered twice: first from a virtual eye
//! mirrored across the table plane into an offscreen capture, then from the
//! real eye, with the capture mapped onto the tabletop.
//!
//! # Quick start
//!
//! ```no_run
//! use tabletop::{render_frame, Scene, SceneLayout, SceneState, TraceRenderer};
//!
//! # fn main() -> tabletop::Result<()> {
//! tabletop::init_logging();
//!
//! let mut state = SceneState::default();
//! let mut scene = Scene::with_solid_textures(SceneLayout::default())?;
//! let mut renderer = TraceRenderer::new();
//!
//! state.queue(tabletop::NavEvent::RotateLeft);
//! let summary = render_frame(&mut state, &mut scene, &mut renderer, (1280, 720))?;
//! println!("drew {} quads", summary.main_quads);
//! # Ok(())
//! # }
//! ```

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]

pub mod config;
pub mod frame;
pub mod scene;
pub mod trace;

pub use config::AppConfig;
pub use frame::{render_frame, FrameSummary};
pub use scene::{Scene, REFLECTION_SIZE};
pub use trace::{PassRecord, TraceRenderer};

pub use tabletop_core::{
    DisplayOptions, EyeConfig, EyeState, NavEvent, Result, SceneState, TabletopError,
};
pub use tabletop_render::{
    compute_mirror_camera, Camera, MirrorCamera, MirrorPlane, ReflectionImage, SceneRenderer,
};
pub use tabletop_scene::SceneLayout;

/// Re-exported math types.
pub use glam;

/// Initializes env_logger, ignoring repeat calls.
///
/// Set `RUST_LOG=debug` for per-frame diagnostics.
pub fn init_logging() {
    let _ = env_logger::try_init();
}
