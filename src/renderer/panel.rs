//! Textured panel pass.
//!
//! One plane mesh and one texture are uploaded once. Each frame the texture
//! is bound a single time and the mesh is drawn once per radial instance,
//! the instance's rotation coming from a per-instance vertex buffer.

use std::ops::Range;

use wgpu::util::DeviceExt;

use crate::{
    app::Frame,
    camera::{core::Camera, gpu::CameraBinding},
    gpu::{pipeline_helpers, texture::ImageTexture},
    scene::{PanelVertex, PlaneMesh, RadialLayout},
};

/// Per-instance model matrix, uploaded as four `vec4` columns.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PanelInstance {
    /// Column-major model matrix.
    pub model: [[f32; 4]; 4],
}

impl PanelInstance {
    const ATTRIBUTES: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        2 => Float32x4,
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4
    ];

    /// Vertex buffer layout (slot 1, per-instance).
    #[must_use]
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }

    /// Instance data for every entry of `layout`.
    #[must_use]
    pub fn from_layout(layout: &RadialLayout) -> Vec<Self> {
        layout
            .transforms()
            .map(|m| Self {
                model: m.to_cols_array_2d(),
            })
            .collect()
    }
}

/// Instance range of each draw call: one call per instance.
#[must_use]
pub fn draw_ranges(count: u32) -> impl Iterator<Item = Range<u32>> {
    (0..count).map(|i| i..i + 1)
}

/// Pipeline and buffers for the panel ring.
pub struct PanelRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    instance_buffer: wgpu::Buffer,
    instance_count: u32,
    camera: CameraBinding,
    texture: ImageTexture,
}

impl PanelRenderer {
    /// Upload `mesh`, the instances of `layout`, and build the pipeline for
    /// `format` targets.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        mesh: &PlaneMesh,
        layout: &RadialLayout,
        texture: ImageTexture,
        camera: &Camera,
    ) -> Self {
        let camera = CameraBinding::new(device, camera);
        let pipeline =
            create_pipeline(device, format, &camera.layout, &texture.layout);

        let vertex_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Panel Vertices"),
                contents: bytemuck::cast_slice(&mesh.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let index_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Panel Indices"),
                contents: bytemuck::cast_slice(&mesh.indices),
                usage: wgpu::BufferUsages::INDEX,
            });
        let instances = PanelInstance::from_layout(layout);
        let instance_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Panel Instances"),
                contents: bytemuck::cast_slice(&instances),
                usage: wgpu::BufferUsages::VERTEX,
            });

        Self {
            pipeline,
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
            instance_buffer,
            instance_count: instances.len() as u32,
            camera,
            texture,
        }
    }

    /// Upload the camera matrices for this frame.
    pub fn update_camera(&mut self, queue: &wgpu::Queue, camera: &Camera) {
        self.camera.update(queue, camera);
    }

    /// Clear the frame to `clear` and draw every panel.
    pub fn render(&self, frame: &mut Frame<'_>, clear: wgpu::Color) {
        let mut rp =
            frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("panel render pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: frame.color_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(
                    wgpu::RenderPassDepthStencilAttachment {
                        view: frame.depth_view,
                        depth_ops: Some(wgpu::Operations {
                            load: wgpu::LoadOp::Clear(1.0),
                            store: wgpu::StoreOp::Store,
                        }),
                        stencil_ops: None,
                    },
                ),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
        self.draw(&mut rp);
    }

    /// Record the panel draws into an open pass.
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        if self.index_count == 0 {
            return;
        }
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.camera.bind_group, &[]);
        render_pass.set_bind_group(1, &self.texture.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
        render_pass.set_index_buffer(
            self.index_buffer.slice(..),
            wgpu::IndexFormat::Uint32,
        );
        for instances in draw_ranges(self.instance_count) {
            render_pass.draw_indexed(0..self.index_count, 0, instances);
        }
    }
}

fn create_pipeline(
    device: &wgpu::Device,
    format: wgpu::TextureFormat,
    camera_layout: &wgpu::BindGroupLayout,
    texture_layout: &wgpu::BindGroupLayout,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::include_wgsl!(
        "../../assets/shaders/panel.wgsl"
    ));

    let pipeline_layout =
        device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Panel Pipeline Layout"),
            bind_group_layouts: &[camera_layout, texture_layout],
            push_constant_ranges: &[],
        });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Panel Pipeline"),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[PanelVertex::layout(), PanelInstance::layout()],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: Some(pipeline_helpers::depth_stencil_state()),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}
