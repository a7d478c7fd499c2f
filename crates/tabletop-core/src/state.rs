//! Per-session scene state.
//!
//! All mutable viewer state lives in an explicit [`SceneState`] passed by
//! reference into the per-frame update and render calls; there are no
//! process-wide singletons.

use crate::eye::{EyeConfig, EyeState};
use crate::navigation::NavEvent;
use crate::options::DisplayOptions;

/// Mutable state for one viewing session.
#[derive(Debug, Clone)]
pub struct SceneState {
    /// Current eye coordinates.
    pub eye: EyeState,
    /// Navigation limits and step sizes.
    pub eye_config: EyeConfig,
    /// Display-mode toggles.
    pub options: DisplayOptions,
    /// Whether the user requested exit.
    pub quit_requested: bool,
    /// Input queued since the last frame boundary.
    pending: Vec<NavEvent>,
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new(EyeConfig::default())
    }
}

impl SceneState {
    /// Creates a fresh session state for a navigation config.
    #[must_use]
    pub fn new(eye_config: EyeConfig) -> Self {
        Self {
            eye: EyeState::new(&eye_config),
            eye_config,
            options: DisplayOptions::default(),
            quit_requested: false,
            pending: Vec::new(),
        }
    }

    /// Queues an input event for the next frame boundary.
    pub fn queue(&mut self, event: NavEvent) {
        self.pending.push(event);
    }

    /// Number of events waiting to be applied.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Applies all queued events in arrival order.
    ///
    /// Call this exactly once per frame, before any rendering. Returns `true`
    /// if any event was applied and a redraw is needed.
    pub fn apply_pending(&mut self) -> bool {
        let events = std::mem::take(&mut self.pending);
        let any = !events.is_empty();
        if any {
            log::trace!("applying {} queued navigation events", events.len());
        }
        for event in events {
            self.apply(event);
        }
        any
    }

    fn apply(&mut self, event: NavEvent) {
        match event {
            NavEvent::RotateLeft => self.eye.rotate_left(&self.eye_config),
            NavEvent::RotateRight => self.eye.rotate_right(&self.eye_config),
            NavEvent::RotateUp => self.eye.rotate_up(&self.eye_config),
            NavEvent::RotateDown => self.eye.rotate_down(&self.eye_config),
            NavEvent::ZoomIn => self.eye.zoom_in(&self.eye_config),
            NavEvent::ZoomOut => self.eye.zoom_out(&self.eye_config),
            NavEvent::Reset => self.eye.reset(&self.eye_config),
            NavEvent::ToggleWireframe => self.options.toggle_wireframe(),
            NavEvent::ToggleTexturing => self.options.toggle_texturing(),
            NavEvent::ToggleAxes => self.options.toggle_axes(),
            NavEvent::Quit => self.quit_requested = true,
        }
    }
}
