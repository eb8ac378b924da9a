use serde::{Deserialize, Serialize};

/// Window creation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowOptions {
    /// Window title.
    pub title: String,
    /// Initial inner width in logical pixels.
    pub width: u32,
    /// Initial inner height in logical pixels.
    pub height: u32,
    /// Route touch input to the pointer. Off by default, so only the mouse
    /// orbits the camera.
    pub multi_touch: bool,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            title: "Gengar".into(),
            width: 640,
            height: 480,
            multi_touch: false,
        }
    }
}
