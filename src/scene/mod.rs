//! Static scene geometry: one plane mesh repeated around the viewer.

/// Subdivided plane generation and the panel vertex format.
pub mod plane;
/// Even angular spacing of mesh instances about +Y.
pub mod radial;

pub use plane::{generate_plane, panel_side, PanelVertex, PlaneMesh};
pub use radial::RadialLayout;
