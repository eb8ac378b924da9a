use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Panel ring layout and the image drawn on it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneOptions {
    /// Number of panels arranged around the vertical axis.
    pub panel_count: u32,
    /// Distance from the origin to each panel's centre.
    pub panel_distance: f32,
    /// Grid cells along the panel's width and height.
    pub subdivisions: [u32; 2],
    /// Background colour (linear RGB).
    pub clear_color: [f32; 3],
    /// Image to load instead of the bundled texture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texture: Option<PathBuf>,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            panel_count: 8,
            panel_distance: 1.0,
            subdivisions: [10, 10],
            clear_color: [0.0, 0.0, 0.0],
            texture: None,
        }
    }
}
