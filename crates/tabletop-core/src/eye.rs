//! Eye position in spherical coordinates around a fixed look-at point.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Navigation limits and step sizes for the eye.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EyeConfig {
    /// The fixed look-at point.
    pub look_at: Vec3,
    /// Initial distance of the eye from the look-at point.
    pub initial_distance: f32,
    /// Distance increment when zooming.
    pub distance_step: f32,
    /// Minimum distance from the look-at point.
    pub min_distance: f32,
    /// Minimum latitude in degrees.
    pub min_latitude_deg: f32,
    /// Maximum latitude in degrees.
    pub max_latitude_deg: f32,
    /// Degree increment when changing latitude.
    pub latitude_step_deg: f32,
    /// Degree increment when changing longitude.
    pub longitude_step_deg: f32,
}

impl Default for EyeConfig {
    fn default() -> Self {
        Self {
            look_at: Vec3::new(0.0, 0.0, 1.0),
            initial_distance: 5.0,
            distance_step: 0.2,
            min_distance: 0.1,
            min_latitude_deg: -88.0,
            max_latitude_deg: 88.0,
            latitude_step_deg: 2.0,
            longitude_step_deg: 2.0,
        }
    }
}

/// Spherical eye coordinates relative to the look-at point.
///
/// The world is z-up: latitude measures elevation above the look-at point's
/// horizontal plane, longitude rotates around the world z-axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EyeState {
    /// Latitude in degrees, clamped to the configured range.
    pub latitude_deg: f32,
    /// Longitude in degrees, wrapping modulo 360.
    pub longitude_deg: f32,
    /// Distance from the look-at point, clamped to the configured minimum.
    pub distance: f32,
}

impl EyeState {
    /// Creates the initial eye state for a config.
    #[must_use]
    pub fn new(config: &EyeConfig) -> Self {
        Self {
            latitude_deg: 0.0,
            longitude_deg: 0.0,
            distance: config.initial_distance,
        }
    }

    /// Computes the world-space eye position.
    #[must_use]
    pub fn position(&self, config: &EyeConfig) -> Vec3 {
        let lat = self.latitude_deg.to_radians();
        let lon = self.longitude_deg.to_radians();
        let horizontal = self.distance * lat.cos();
        Vec3::new(
            horizontal * lon.cos() + config.look_at.x,
            horizontal * lon.sin() + config.look_at.y,
            self.distance * lat.sin() + config.look_at.z,
        )
    }

    /// Raises the eye by one latitude step.
    pub fn rotate_up(&mut self, config: &EyeConfig) {
        self.latitude_deg =
            (self.latitude_deg + config.latitude_step_deg).min(config.max_latitude_deg);
    }

    /// Lowers the eye by one latitude step.
    pub fn rotate_down(&mut self, config: &EyeConfig) {
        self.latitude_deg =
            (self.latitude_deg - config.latitude_step_deg).max(config.min_latitude_deg);
    }

    /// Rotates the eye one longitude step counter-clockwise (seen from above).
    pub fn rotate_left(&mut self, config: &EyeConfig) {
        self.longitude_deg -= config.longitude_step_deg;
        if self.longitude_deg < -360.0 {
            self.longitude_deg += 360.0;
        }
    }

    /// Rotates the eye one longitude step clockwise (seen from above).
    pub fn rotate_right(&mut self, config: &EyeConfig) {
        self.longitude_deg += config.longitude_step_deg;
        if self.longitude_deg > 360.0 {
            self.longitude_deg -= 360.0;
        }
    }

    /// Moves the eye closer to the look-at point.
    pub fn zoom_in(&mut self, config: &EyeConfig) {
        self.distance = (self.distance - config.distance_step).max(config.min_distance);
    }

    /// Moves the eye further from the look-at point.
    pub fn zoom_out(&mut self, config: &EyeConfig) {
        self.distance += config.distance_step;
    }

    /// Resets to the initial view.
    pub fn reset(&mut self, config: &EyeConfig) {
        *self = Self::new(config);
    }
}
