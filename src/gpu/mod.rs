//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization, image and depth textures,
//! and the small layout helpers shared by the pipelines.

/// Shared wgpu boilerplate helpers for layouts, samplers and depth state.
pub mod pipeline_helpers;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// Image textures and the depth target.
pub mod texture;
