//! Centralized viewer options with TOML support.
//!
//! Window, camera, scene and logging settings are consolidated here.
//! Options serialize to/from TOML; every section is `#[serde(default)]` so a
//! file overriding a single value is enough.

mod camera;
mod logging;
mod scene;
mod window;

use std::path::Path;

pub use camera::CameraOptions;
pub use logging::{LoggingOptions, SYSTEM_TARGETS};
pub use scene::SceneOptions;
use serde::{Deserialize, Serialize};
pub use window::WindowOptions;

use crate::error::GengarError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Window creation settings.
    pub window: WindowOptions,
    /// Camera projection parameters.
    pub camera: CameraOptions,
    /// Panel ring layout and texture.
    pub scene: SceneOptions,
    /// Logging thresholds.
    pub logging: LoggingOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GengarError::Io`] if the file cannot be read and
    /// [`GengarError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, GengarError> {
        let content = std::fs::read_to_string(path).map_err(GengarError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`GengarError::OptionsParse`] if the text is not valid
    /// options TOML.
    pub fn from_toml(content: &str) -> Result<Self, GengarError> {
        toml::from_str(content)
            .map_err(|e| GengarError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`GengarError`] if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), GengarError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GengarError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GengarError::Io)?;
        }
        std::fs::write(path, content).map_err(GengarError::Io)
    }
}
