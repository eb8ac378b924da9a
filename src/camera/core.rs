use glam::{Mat4, Vec3};

use crate::camera::orbit::{DragScale, LookAt};

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
}

impl Camera {
    /// Camera at the origin looking at `target`, with +Y up.
    #[must_use]
    pub fn looking_at(
        target: Vec3,
        aspect: f32,
        fovy: f32,
        znear: f32,
        zfar: f32,
    ) -> Self {
        Self {
            eye: Vec3::ZERO,
            target,
            up: Vec3::Y,
            aspect,
            fovy,
            znear,
            zfar,
        }
    }

    /// Move the eye and target to the given look-at pair.
    pub fn set_view(&mut self, view: LookAt) {
        self.eye = view.eye;
        self.target = view.target;
    }

    /// Horizontal field of view in degrees, derived from `fovy` and the
    /// aspect ratio.
    #[must_use]
    pub fn fov_horizontal(&self) -> f32 {
        let half_v = self.fovy.to_radians() * 0.5;
        (2.0 * (half_v.tan() * self.aspect).atan()).to_degrees()
    }

    /// Pointer-drag sensitivity for a viewport `viewport_width` pixels wide.
    #[must_use]
    pub fn drag_scale(&self, viewport_width: u32) -> DragScale {
        DragScale::new(self.fov_horizontal(), viewport_width)
    }

    /// Update the aspect ratio for a new viewport size. Zero heights are
    /// ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Right-handed view matrix.
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Perspective projection matrix.
    pub fn build_projection(&self) -> Mat4 {
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.build_matrix().to_cols_array_2d();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera(aspect: f32) -> Camera {
        Camera::looking_at(Vec3::new(0.0, 0.0, -3.0), aspect, 45.0, 0.1, 1000.0)
    }

    #[test]
    fn square_viewport_has_equal_fovs() {
        let cam = camera(1.0);
        assert!((cam.fov_horizontal() - 45.0).abs() < 1e-4);
    }

    #[test]
    fn wide_viewport_widens_horizontal_fov() {
        let cam = camera(640.0 / 480.0);
        // 2 * atan(tan(22.5°) * 4/3)
        let expected = (2.0 * ((22.5f32).to_radians().tan() * (4.0 / 3.0)).atan())
            .to_degrees();
        assert!((cam.fov_horizontal() - expected).abs() < 1e-4);
        assert!(cam.fov_horizontal() > cam.fovy);
    }

    #[test]
    fn resize_updates_aspect_and_ignores_zero_height() {
        let mut cam = camera(1.0);
        cam.resize(800, 400);
        assert_eq!(cam.aspect, 2.0);
        cam.resize(800, 0);
        assert_eq!(cam.aspect, 2.0);
    }

    #[test]
    fn target_projects_to_screen_center() {
        let cam = camera(1.5);
        let clip = cam.build_matrix() * cam.target.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
        assert!((0.0..=1.0).contains(&ndc.z));
    }
}
