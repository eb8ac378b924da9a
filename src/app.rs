//! Lifecycle interface between a sketch and the window host.
//!
//! A [`Sketch`] receives setup, pointer, resize, update and draw callbacks
//! from [`Viewer::run`](crate::viewer::Viewer::run), strictly serialized on
//! the event-loop thread. Only `setup` and `draw` are required.

use crate::{
    error::GengarError, gpu::render_context::RenderContext,
    input::PointerEvent,
};

/// Per-frame drawing context handed to [`Sketch::draw`].
pub struct Frame<'a> {
    /// GPU device, queue and surface configuration.
    pub context: &'a RenderContext,
    /// Encoder the sketch records its passes into.
    pub encoder: &'a mut wgpu::CommandEncoder,
    /// Swapchain view for this frame.
    pub color_view: &'a wgpu::TextureView,
    /// Depth attachment matching the surface size.
    pub depth_view: &'a wgpu::TextureView,
}

/// Application callbacks driven by the host run loop.
pub trait Sketch {
    /// Create GPU resources once the window and device exist.
    ///
    /// # Errors
    ///
    /// A failure aborts startup; the host logs it and exits.
    fn setup(&mut self, context: &RenderContext) -> Result<(), GengarError>;

    /// Primary pointer pressed.
    fn pointer_down(&mut self, _event: PointerEvent) {}

    /// Pointer moved while pressed.
    fn pointer_drag(&mut self, _event: PointerEvent) {}

    /// Primary pointer released.
    fn pointer_up(&mut self, _event: PointerEvent) {}

    /// Surface resized to `width` x `height` physical pixels.
    fn resize(&mut self, _width: u32, _height: u32) {}

    /// Advance by `dt` seconds before drawing.
    fn update(&mut self, _dt: f32) {}

    /// Record this frame's rendering.
    fn draw(&mut self, frame: &mut Frame<'_>);
}
