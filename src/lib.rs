// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::str_to_string)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests may unwrap
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::wildcard_imports))]

//! Orbit-camera panorama viewer built on wgpu and winit.
//!
//! A ring of identical textured panels surrounds a camera at the origin.
//! Dragging the pointer horizontally turns the camera about the vertical
//! axis; the drag converts pixels to degrees through the camera's horizontal
//! field of view, so sensitivity follows the window size.
//!
//! # Key entry points
//!
//! - [`camera::orbit::OrbitController`] - drag phase and committed angle
//! - [`app::Sketch`] - lifecycle callbacks a host drives
//! - [`panorama::PanoramaSketch`] - the panel-ring application
//! - [`Viewer`] - winit window host (feature `viewer`)
//! - [`options::Options`] - TOML configuration

pub mod app;
pub mod camera;
pub mod error;
pub mod gpu;
pub mod input;
#[cfg(feature = "logging")]
pub mod logging;
pub mod options;
pub mod panorama;
pub mod renderer;
pub mod scene;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use app::{Frame, Sketch};
pub use error::GengarError;
pub use panorama::PanoramaSketch;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
