//! Standalone window backed by winit that hosts a [`Sketch`].
//!
//! ```no_run
//! # use gengar::{options::Options, panorama::PanoramaSketch, Viewer};
//! let options = Options::default();
//! Viewer::builder()
//!     .with_options(options.clone())
//!     .build()
//!     .run(PanoramaSketch::new(&options))
//!     .unwrap();
//! ```

use std::{sync::Arc, time::Instant};

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    app::{Frame, Sketch},
    error::GengarError,
    gpu::{render_context::RenderContext, texture::DepthTarget},
    input::{InputEvent, MouseButton, PointerGesture, PointerTracker},
    options::{Options, WindowOptions},
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
}

impl ViewerBuilder {
    /// Create a builder with default options.
    fn new() -> Self {
        Self { options: None }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            window: self.options.unwrap_or_default().window,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that runs a sketch.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    window: WindowOptions,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop, driving `sketch`. Blocks
    /// until the window is closed.
    ///
    /// # Errors
    ///
    /// Returns [`GengarError::Viewer`] if the event loop cannot be created
    /// or fails while running.
    pub fn run<S: Sketch>(self, sketch: S) -> Result<(), GengarError> {
        let event_loop =
            EventLoop::new().map_err(|e| GengarError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            pointer: PointerTracker::new(self.window.multi_touch),
            options: self.window,
            window: None,
            context: None,
            depth: None,
            sketch,
            last_frame_time: Instant::now(),
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| GengarError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp<S> {
    options: WindowOptions,
    window: Option<Arc<Window>>,
    context: Option<RenderContext>,
    depth: Option<DepthTarget>,
    sketch: S,
    pointer: PointerTracker,
    last_frame_time: Instant,
}

/// Surface size for a window, never zero.
fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

impl<S: Sketch> ViewerApp<S> {
    fn resize(&mut self, width: u32, height: u32) {
        if let Some(context) = &mut self.context {
            context.resize(width, height);
            self.depth = Some(DepthTarget::new(&context.device, width, height));
        }
        self.sketch.resize(width, height);
    }

    fn dispatch(&mut self, event: InputEvent) {
        match self.pointer.handle(event) {
            Some(PointerGesture::Down(p)) => self.sketch.pointer_down(p),
            Some(PointerGesture::Drag(p)) => self.sketch.pointer_drag(p),
            Some(PointerGesture::Up(p)) => self.sketch.pointer_up(p),
            None => return,
        }
        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }

    fn redraw(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;
        self.sketch.update(dt);

        let next = match &self.context {
            Some(context) => context.get_next_frame(),
            None => return,
        };
        let surface_texture = match next {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                if let Some(inner) = self.window.as_ref().map(|w| w.inner_size())
                {
                    let (vp_w, vp_h) = viewport_size(inner);
                    self.resize(vp_w, vp_h);
                }
                return;
            }
            Err(e) => {
                log::error!("render error: {e:?}");
                return;
            }
        };

        let (Some(context), Some(depth)) = (&self.context, &self.depth) else {
            return;
        };
        let color_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = context.create_encoder();
        {
            let mut frame = Frame {
                context,
                encoder: &mut encoder,
                color_view: &color_view,
                depth_view: &depth.view,
            };
            self.sketch.draw(&mut frame);
        }
        context.submit(encoder);
        surface_texture.present();
    }
}

impl<S: Sketch> ApplicationHandler for ViewerApp<S> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.options.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.options.width,
                self.options.height,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let (vp_w, vp_h) = viewport_size(window.inner_size());
        let context = match pollster::block_on(RenderContext::new(
            window.clone(),
            (vp_w, vp_h),
        )) {
            Ok(c) => c,
            Err(e) => {
                log::error!("Failed to initialize GPU: {e}");
                event_loop.exit();
                return;
            }
        };

        if let Err(e) = self.sketch.setup(&context) {
            log::error!("Sketch setup failed: {e}");
            event_loop.exit();
            return;
        }

        self.depth = Some(DepthTarget::new(
            &context.device,
            context.width(),
            context.height(),
        ));
        self.context = Some(context);
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        // Guard: window and GPU context must be initialised.
        if self.window.is_none() || self.context.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(size) => {
                let (vp_w, vp_h) = viewport_size(size);
                self.resize(vp_w, vp_h);
            }

            WindowEvent::RedrawRequested => {
                self.redraw();
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::MouseInput { button, state, .. } => {
                self.dispatch(InputEvent::MouseButton {
                    button: MouseButton::from(button),
                    pressed: state == ElementState::Pressed,
                });
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.dispatch(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }

            WindowEvent::Touch(touch) => {
                self.dispatch(InputEvent::Touch {
                    id: touch.id,
                    phase: touch.phase.into(),
                    x: touch.location.x as f32,
                    y: touch.location.y as f32,
                });
            }

            _ => (),
        }
    }
}
