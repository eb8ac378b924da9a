//! Render passes.

/// Textured panel ring: one mesh, one texture, one draw per instance.
pub mod panel;

pub use panel::{PanelInstance, PanelRenderer};
