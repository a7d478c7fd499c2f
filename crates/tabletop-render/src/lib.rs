//! Rendering layer for the tabletop scene: cameras, the mirror camera
//! solver, draw batches, textures and the renderer boundary.
//!
//! The centerpiece is [`mirror::compute_mirror_camera`], which builds the
//! virtual camera used to capture the planar reflection shown on the
//! tabletop. Everything else supports feeding that pass and the main pass to
//! a [`SceneRenderer`] backend.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

pub mod batch;
pub mod camera;
pub mod error;
pub mod lights;
pub mod material;
pub mod mirror;
pub mod renderer;
pub mod snapshot;
pub mod texture;

pub use batch::{DrawBatch, OverlayLine, Vertex};
pub use camera::{Camera, Projection};
pub use error::{RenderError, RenderResult};
pub use lights::{default_lights, Light};
pub use material::{Material, MaterialUniforms};
pub use mirror::{compute_mirror_camera, MirrorCamera, MirrorPlane};
pub use renderer::{FramePass, SceneRenderer};
pub use snapshot::save_image;
pub use texture::{ReflectionImage, TextureId, TextureImage, TextureRegistry};
