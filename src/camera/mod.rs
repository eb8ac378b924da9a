//! Camera system for 3D scene viewing.
//!
//! Provides a perspective camera, the horizontal orbit controller that turns
//! pointer drags into yaw, and the GPU uniform binding for the camera
//! matrices.

/// Core camera struct and GPU uniform types.
pub mod core;
/// Camera uniform buffer and bind group.
pub mod gpu;
/// Drag-driven orbit controller and the angle ↔ look-at mapping.
pub mod orbit;
