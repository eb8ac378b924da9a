//! Subdivided, textured plane facing +Z.

use std::f32::consts::PI;

use glam::{Vec2, Vec3};

/// Vertex of the panel mesh: position and texture coordinate.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PanelVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Texture coordinate, v = 0 on the top edge.
    pub uv: [f32; 2],
}

impl PanelVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2];

    /// Vertex buffer layout (slot 0, per-vertex).
    #[must_use]
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// CPU-side indexed triangle mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneMesh {
    /// Vertices in row-major order, top row first.
    pub vertices: Vec<PanelVertex>,
    /// Triangle list indices, counter-clockwise seen from +Z.
    pub indices: Vec<u32>,
}

/// Side length of each panel so `count` panels at `distance` from the
/// origin close into a regular polygon around it.
///
/// Eight panels at unit distance give `2(√2 − 1)`. Counts below three
/// cannot enclose the origin and are sized as a triangle.
#[must_use]
pub fn panel_side(count: u32, distance: f32) -> f32 {
    let n = count.max(3) as f32;
    2.0 * distance * (PI / n).tan()
}

/// Generate a plane of `size` centred at `center`, with normal +Z and
/// `subdivisions` cells along X and Y (each at least one).
#[must_use]
pub fn generate_plane(
    subdivisions: (u32, u32),
    size: Vec2,
    center: Vec3,
) -> PlaneMesh {
    let sx = subdivisions.0.max(1);
    let sy = subdivisions.1.max(1);
    let row = sx + 1;

    let mut vertices = Vec::with_capacity((row * (sy + 1)) as usize);
    for j in 0..=sy {
        let t = j as f32 / sy as f32;
        for i in 0..=sx {
            let s = i as f32 / sx as f32;
            let position = center
                + Vec3::X * ((s - 0.5) * size.x)
                + Vec3::Y * ((0.5 - t) * size.y);
            vertices.push(PanelVertex {
                position: position.to_array(),
                uv: [s, t],
            });
        }
    }

    let mut indices = Vec::with_capacity((sx * sy * 6) as usize);
    for j in 0..sy {
        for i in 0..sx {
            let top_left = j * row + i;
            let top_right = top_left + 1;
            let bottom_left = top_left + row;
            let bottom_right = bottom_left + 1;
            indices.extend_from_slice(&[
                top_left,
                bottom_left,
                bottom_right,
                top_left,
                bottom_right,
                top_right,
            ]);
        }
    }

    PlaneMesh { vertices, indices }
}
