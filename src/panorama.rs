//! The panorama sketch: a ring of textured panels around a camera that
//! turns left and right as the pointer is dragged.

use std::borrow::Cow;

use glam::{Vec2, Vec3};

use crate::{
    app::{Frame, Sketch},
    camera::{
        core::Camera,
        orbit::{DragScale, OrbitController},
    },
    error::GengarError,
    gpu::{render_context::RenderContext, texture::ImageTexture},
    input::PointerEvent,
    options::{CameraOptions, Options, SceneOptions},
    renderer::PanelRenderer,
    scene::{generate_plane, panel_side, RadialLayout},
};

/// Image drawn on every panel unless the options name another file.
pub const BUNDLED_TEXTURE: &[u8] =
    include_bytes!("../assets/textures/earth.png");

/// Orbit-camera viewer of the panel ring.
pub struct PanoramaSketch {
    scene: SceneOptions,
    camera: Camera,
    orbit: OrbitController,
    layout: RadialLayout,
    viewport: (u32, u32),
    renderer: Option<PanelRenderer>,
}

impl PanoramaSketch {
    /// Build the sketch from options. GPU resources are created in
    /// [`Sketch::setup`].
    #[must_use]
    pub fn new(options: &Options) -> Self {
        let viewport = (options.window.width, options.window.height);
        let camera = initial_camera(&options.camera, viewport);
        Self {
            scene: options.scene.clone(),
            orbit: OrbitController::new(camera.target),
            camera,
            layout: RadialLayout::new(options.scene.panel_count),
            viewport,
            renderer: None,
        }
    }

    /// The orbit controller.
    #[must_use]
    pub fn orbit(&self) -> &OrbitController {
        &self.orbit
    }

    /// The camera as it will be drawn next frame.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Instance layout of the panel ring.
    #[must_use]
    pub fn layout(&self) -> &RadialLayout {
        &self.layout
    }

    fn drag_scale(&self) -> DragScale {
        self.camera.drag_scale(self.viewport.0)
    }

    fn texture_bytes(&self) -> Result<Cow<'static, [u8]>, GengarError> {
        match &self.scene.texture {
            Some(path) => {
                log::info!("loading panel texture from {}", path.display());
                Ok(Cow::Owned(std::fs::read(path)?))
            }
            None => Ok(Cow::Borrowed(BUNDLED_TEXTURE)),
        }
    }

    fn clear_color(&self) -> wgpu::Color {
        let [r, g, b] = self.scene.clear_color;
        wgpu::Color {
            r: f64::from(r),
            g: f64::from(g),
            b: f64::from(b),
            a: 1.0,
        }
    }
}

fn initial_camera(options: &CameraOptions, viewport: (u32, u32)) -> Camera {
    let mut camera = Camera::looking_at(
        Vec3::from(options.look_at),
        1.0,
        options.fovy,
        options.znear,
        options.zfar,
    );
    camera.resize(viewport.0, viewport.1);
    camera
}

impl Sketch for PanoramaSketch {
    fn setup(&mut self, context: &RenderContext) -> Result<(), GengarError> {
        self.resize(context.width(), context.height());

        let bytes = self.texture_bytes()?;
        let texture = ImageTexture::from_bytes(
            &context.device,
            &context.queue,
            &bytes,
            "Panel Texture",
        )?;

        let distance = self.scene.panel_distance;
        let side = panel_side(self.layout.count(), distance);
        let [sx, sy] = self.scene.subdivisions;
        let mesh = generate_plane(
            (sx, sy),
            Vec2::splat(side),
            Vec3::new(0.0, 0.0, -distance),
        );

        log::info!(
            "panorama ready: {} panels, {}x{} texture, {} triangles each",
            self.layout.count(),
            texture.dimensions.0,
            texture.dimensions.1,
            mesh.indices.len() / 3,
        );

        self.renderer = Some(PanelRenderer::new(
            &context.device,
            context.format(),
            &mesh,
            &self.layout,
            texture,
            &self.camera,
        ));
        Ok(())
    }

    fn pointer_down(&mut self, event: PointerEvent) {
        self.orbit.pointer_down(event.x);
    }

    fn pointer_drag(&mut self, event: PointerEvent) {
        let scale = self.drag_scale();
        if let Some(angle) = self.orbit.pointer_drag(event.x, scale) {
            log::trace!("orbit preview {angle:.2}°");
            self.camera.set_view(self.orbit.view());
        }
    }

    fn pointer_up(&mut self, event: PointerEvent) {
        let scale = self.drag_scale();
        if let Some(angle) = self.orbit.pointer_up(event.x, scale) {
            log::debug!("orbit angle committed at {angle:.2}°");
            self.camera.set_view(self.orbit.view());
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
        self.camera.resize(width, height);
    }

    fn draw(&mut self, frame: &mut Frame<'_>) {
        let clear = self.clear_color();
        if let Some(renderer) = &mut self.renderer {
            renderer.update_camera(&frame.context.queue, &self.camera);
            renderer.render(frame, clear);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::orbit::{compute_view, view_angle, LookAt};

    fn sketch(width: u32, height: u32) -> PanoramaSketch {
        let mut s = PanoramaSketch::new(&Options::default());
        s.resize(width, height);
        s
    }

    fn at(x: i32) -> PointerEvent {
        PointerEvent { x, y: 0 }
    }

    #[test]
    fn starts_looking_down_negative_z() {
        let s = sketch(640, 480);
        assert_eq!(s.camera().eye, Vec3::ZERO);
        assert_eq!(s.camera().target, Vec3::new(0.0, 0.0, -3.0));
        assert_eq!(s.orbit().committed_angle(), 0.0);
    }

    #[test]
    fn release_commits_fov_scaled_delta() {
        let mut s = sketch(800, 600);
        let fov_h = s.camera().fov_horizontal();
        s.pointer_down(at(100));
        s.pointer_drag(at(150));
        assert_eq!(s.orbit().committed_angle(), 0.0);
        s.pointer_up(at(180));

        let expected = 80.0 * fov_h / 800.0;
        assert!((s.orbit().committed_angle() - expected).abs() < 1e-4);
        let view = compute_view(expected, Vec3::new(0.0, 0.0, -3.0));
        assert!((s.camera().target - view.target).length() < 1e-5);
    }

    #[test]
    fn drag_moves_camera_before_release() {
        let mut s = sketch(800, 600);
        s.pointer_down(at(0));
        s.pointer_drag(at(200));
        let shown = LookAt {
            eye: s.camera().eye,
            target: s.camera().target,
        };
        let angle = view_angle(&shown, Vec3::new(0.0, 0.0, -3.0));
        let expected = 200.0 * s.camera().fov_horizontal() / 800.0;
        assert!((angle - expected).abs() < 1e-3);
    }

    #[test]
    fn drag_without_press_keeps_camera_still() {
        let mut s = sketch(800, 600);
        let before = *s.camera();
        s.pointer_drag(at(300));
        s.pointer_up(at(300));
        assert_eq!(*s.camera(), before);
    }

    #[test]
    fn panel_angles_ignore_camera_angle() {
        let mut s = sketch(800, 600);
        s.pointer_down(at(0));
        s.pointer_up(at(513));
        assert!(s.orbit().committed_angle() != 0.0);
        let angles: Vec<f32> = s.layout().angles().collect();
        assert_eq!(
            angles,
            vec![0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0]
        );
    }

    #[test]
    fn resize_changes_drag_sensitivity() {
        let mut narrow = sketch(400, 400);
        let mut wide = sketch(800, 400);
        for s in [&mut narrow, &mut wide] {
            s.pointer_down(at(0));
            s.pointer_up(at(100));
        }
        let narrow_rate = narrow.camera().fov_horizontal() / 400.0;
        let wide_rate = wide.camera().fov_horizontal() / 800.0;
        assert!(
            (narrow.orbit().committed_angle() - 100.0 * narrow_rate).abs()
                < 1e-4
        );
        assert!(
            (wide.orbit().committed_angle() - 100.0 * wide_rate).abs() < 1e-4
        );
        assert!(narrow_rate != wide_rate);
    }

    #[test]
    fn missing_override_texture_is_io_error() {
        let mut options = Options::default();
        options.scene.texture = Some("/nonexistent/gengar/texture.png".into());
        let s = PanoramaSketch::new(&options);
        assert!(matches!(s.texture_bytes(), Err(GengarError::Io(_))));
    }

    #[test]
    fn bundled_texture_used_by_default() {
        let s = sketch(640, 480);
        let bytes = s.texture_bytes().unwrap();
        assert_eq!(bytes.as_ref(), BUNDLED_TEXTURE);
    }
}
