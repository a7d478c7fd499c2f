//! Application configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tabletop_core::{DisplayOptions, EyeConfig, Result};
use tabletop_scene::SceneLayout;

/// Top-level configuration: scene layout, navigation limits and display
/// defaults.
///
/// Every field has a default, so a partial (or empty) JSON file is enough to
/// override just the values of interest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub layout: SceneLayout,
    pub eye: EyeConfig,
    pub options: DisplayOptions,
}

impl AppConfig {
    /// Loads configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a JSON error if
    /// it does not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = serde_json::from_str(&text)?;
        log::info!("loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }
}
