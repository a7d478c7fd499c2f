//! Geometry for the tabletop scene: bilinear patches, quad tessellation,
//! and the builders for the room, the table and the props standing on it.
//!
//! Everything is emitted as [`tabletop_render::DrawBatch`]es, so the scene
//! layer stays independent of any particular rendering backend.

#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]

pub mod axes;
pub mod layout;
pub mod patch;
pub mod props;
pub mod room;
pub mod table;
pub mod tessellate;

pub use axes::axes_overlay;
pub use layout::SceneLayout;
pub use patch::{bilerp, lerp, PatchVertex, SurfacePatch};
pub use props::{build_figure, build_sphere, FigureTextures};
pub use room::{build_room, RoomTextures};
pub use table::{build_table_body, build_tabletop};
pub use tessellate::{tessellate, tessellate_into, Quad, TessVertex, Tessellation};
