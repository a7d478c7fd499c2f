//! Scene assembly: textures plus the static draw batches.

use std::path::Path;

use tabletop_core::Result;
use tabletop_render::{
    DrawBatch, ReflectionImage, TextureId, TextureImage, TextureRegistry,
};
use tabletop_scene::{
    build_figure, build_room, build_sphere, build_table_body, build_tabletop, FigureTextures,
    RoomTextures, SceneLayout,
};

/// Default resolution of the reflection capture.
pub const REFLECTION_SIZE: u32 = 1024;

/// The assembled scene: texture registry, static geometry and the
/// per-frame reflection capture buffer.
///
/// Geometry is built once; only the reflection texture changes per frame.
#[derive(Debug)]
pub struct Scene {
    pub layout: SceneLayout,
    textures: TextureRegistry,
    reflection_id: TextureId,
    reflection: ReflectionImage,
    capture_batches: Vec<DrawBatch>,
    table_body: Vec<DrawBatch>,
    tabletop: DrawBatch,
}

impl Scene {
    /// Loads texture assets from a directory and builds the scene.
    ///
    /// Expects `ceiling.jpg`, `brick.jpg`, `checker.png`, `autobot.jpg` and
    /// `eyes.jpg` under `asset_dir`. Any missing or non-RGB texture is a
    /// fatal error.
    ///
    /// # Errors
    ///
    /// Returns an error if an asset cannot be read or is not 3-channel RGB.
    pub fn load(layout: SceneLayout, asset_dir: impl AsRef<Path>) -> Result<Self> {
        let dir = asset_dir.as_ref();
        let mut textures = TextureRegistry::new();
        let room = RoomTextures {
            ceiling: Some(textures.load_file("ceiling", dir.join("ceiling.jpg"))?),
            wall: Some(textures.load_file("brick", dir.join("brick.jpg"))?),
            floor: Some(textures.load_file("checker", dir.join("checker.png"))?),
        };
        let figure = FigureTextures {
            torso: Some(textures.load_file("autobot", dir.join("autobot.jpg"))?),
            face: Some(textures.load_file("eyes", dir.join("eyes.jpg"))?),
        };
        Ok(Self::assemble(layout, textures, room, figure)?)
    }

    /// Builds the scene with flat single-color textures instead of file
    /// assets. Used by headless tests and as a fallback when no asset
    /// directory is available.
    ///
    /// # Errors
    ///
    /// Returns an error only if texture registration fails.
    pub fn with_solid_textures(layout: SceneLayout) -> Result<Self> {
        let mut textures = TextureRegistry::new();
        let room = RoomTextures {
            ceiling: Some(textures.register("ceiling", TextureImage::solid(4, 4, [220, 220, 210]))?),
            wall: Some(textures.register("brick", TextureImage::solid(4, 4, [150, 70, 60]))?),
            floor: Some(textures.register("checker", TextureImage::solid(4, 4, [40, 40, 40]))?),
        };
        let figure = FigureTextures {
            torso: Some(textures.register("autobot", TextureImage::solid(4, 4, [90, 90, 120]))?),
            face: Some(textures.register("eyes", TextureImage::solid(4, 4, [200, 40, 40]))?),
        };
        Ok(Self::assemble(layout, textures, room, figure)?)
    }

    fn assemble(
        layout: SceneLayout,
        mut textures: TextureRegistry,
        room: RoomTextures,
        figure: FigureTextures,
    ) -> tabletop_render::RenderResult<Self> {
        let reflection = ReflectionImage::black(REFLECTION_SIZE, REFLECTION_SIZE);
        let reflection_id = textures.register("reflection", reflection.to_texture())?;

        let mut capture_batches = build_room(&layout, &room);
        capture_batches.push(build_sphere(&layout));
        capture_batches.extend(build_figure(&layout, &figure));
        let table_body = build_table_body(&layout);
        let tabletop = build_tabletop(&layout, reflection_id);

        log::info!(
            "assembled scene: {} capture batches, {} textures",
            capture_batches.len(),
            textures.len()
        );
        Ok(Self {
            layout,
            textures,
            reflection_id,
            reflection,
            capture_batches,
            table_body,
            tabletop,
        })
    }

    /// The texture registry, including the reflection slot.
    #[must_use]
    pub fn textures(&self) -> &TextureRegistry {
        &self.textures
    }

    /// Handle of the per-frame reflection texture.
    #[must_use]
    pub fn reflection_texture(&self) -> TextureId {
        self.reflection_id
    }

    /// The current reflection capture.
    #[must_use]
    pub fn reflection(&self) -> &ReflectionImage {
        &self.reflection
    }

    /// Batches drawn in the reflection capture pass: room and props only.
    ///
    /// The whole table is omitted, not just the mirror surface: everything
    /// below the mirror plane would be clipped by the capture frustum's near
    /// plane anyway, so the slab and legs are skipped rather than drawn as
    /// dead work.
    #[must_use]
    pub fn capture_batches(&self) -> &[DrawBatch] {
        &self.capture_batches
    }

    /// Batches drawn in the main pass: the capture set plus the table body
    /// and the reflection-textured tabletop.
    #[must_use]
    pub fn main_batches(&self) -> Vec<DrawBatch> {
        let mut batches = self.capture_batches.clone();
        batches.extend(self.table_body.iter().cloned());
        batches.push(self.tabletop.clone());
        batches
    }

    /// Stores a fresh reflection capture and republishes it as the mirror
    /// texture.
    pub fn set_reflection(&mut self, capture: ReflectionImage) {
        self.textures.update(self.reflection_id, capture.to_texture());
        self.reflection = capture;
    }
}
