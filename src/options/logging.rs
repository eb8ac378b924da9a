use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::GengarError;

/// Crates whose records count as system-level messages.
pub const SYSTEM_TARGETS: &[&str] =
    &["wgpu_core", "wgpu_hal", "wgpu", "naga", "winit"];

/// Logging thresholds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingOptions {
    /// Console threshold (`off`, `error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    /// Threshold for system-level messages from the GPU and windowing
    /// crates. Never more verbose than `level`.
    pub system_level: String,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            level: "info".into(),
            system_level: "warn".into(),
        }
    }
}

impl LoggingOptions {
    /// Parsed console threshold.
    ///
    /// # Errors
    ///
    /// Returns [`GengarError::OptionsParse`] for an unknown level name.
    pub fn console_filter(&self) -> Result<LevelFilter, GengarError> {
        parse_level(&self.level)
    }

    /// Parsed system threshold, clamped to the console threshold.
    ///
    /// # Errors
    ///
    /// Returns [`GengarError::OptionsParse`] for an unknown level name.
    pub fn system_filter(&self) -> Result<LevelFilter, GengarError> {
        let console = self.console_filter()?;
        Ok(parse_level(&self.system_level)?.min(console))
    }
}

fn parse_level(name: &str) -> Result<LevelFilter, GengarError> {
    name.trim().parse().map_err(|_| {
        GengarError::OptionsParse(format!("unknown log level `{name}`"))
    })
}
