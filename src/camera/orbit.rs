//! Horizontal orbit controller driven by pointer drags.
//!
//! The controller keeps a committed yaw angle (degrees, never normalised)
//! and a drag phase. While a drag is in progress the camera shows a preview
//! of `committed + delta`; releasing the pointer folds the delta into the
//! committed angle. Pixel motion converts to degrees through the camera's
//! horizontal field of view spread over the viewport width, so a drag
//! across the whole window turns the view by exactly one horizontal FOV.

use glam::{Quat, Vec3};

/// Eye/target pair describing where the camera looks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookAt {
    /// Eye position in world space.
    pub eye: Vec3,
    /// Look-at target in world space.
    pub target: Vec3,
}

/// Drag phase of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrbitPhase {
    /// No pointer is held; drag and release events are ignored.
    #[default]
    Idle,
    /// A drag started at `anchor_x`.
    Dragging {
        /// Pointer X (physical pixels) recorded at pointer-down.
        anchor_x: i32,
    },
}

/// Conversion factor from horizontal pixel motion to degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragScale {
    /// Horizontal field of view in degrees.
    pub fov_horizontal: f32,
    /// Viewport width in pixels.
    pub viewport_width: u32,
}

impl DragScale {
    /// Scale for a viewport `viewport_width` pixels wide showing
    /// `fov_horizontal` degrees.
    #[must_use]
    pub fn new(fov_horizontal: f32, viewport_width: u32) -> Self {
        Self {
            fov_horizontal,
            viewport_width,
        }
    }

    /// Degrees of rotation per pixel of horizontal motion. Zero for an
    /// empty viewport.
    #[must_use]
    pub fn degrees_per_pixel(&self) -> f32 {
        if self.viewport_width == 0 {
            return 0.0;
        }
        self.fov_horizontal / self.viewport_width as f32
    }

    /// Angular delta in degrees for a pixel delta.
    #[must_use]
    pub fn angular_delta(&self, pixel_delta: i32) -> f32 {
        pixel_delta as f32 * self.degrees_per_pixel()
    }
}

/// Look-at for a yaw of `angle` degrees: the eye stays at the origin and
/// `base_target` is rotated about +Y.
#[must_use]
pub fn compute_view(angle: f32, base_target: Vec3) -> LookAt {
    let q = Quat::from_axis_angle(Vec3::Y, angle.to_radians());
    LookAt {
        eye: Vec3::ZERO,
        target: q * base_target,
    }
}

/// Recover the yaw (degrees, in `[0, 360)`) that maps `base_target` onto
/// the view direction of `view`.
#[must_use]
pub fn view_angle(view: &LookAt, base_target: Vec3) -> f32 {
    let dir = view.target - view.eye;
    let sin = base_target.z * dir.x - base_target.x * dir.z;
    let cos = base_target.x * dir.x + base_target.z * dir.z;
    let deg = sin.atan2(cos).to_degrees().rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negatives
    if deg >= 360.0 {
        0.0
    } else {
        deg
    }
}

/// Orbit camera controller.
#[derive(Debug, Clone)]
pub struct OrbitController {
    committed_angle: f32,
    phase: OrbitPhase,
    base_target: Vec3,
    view: LookAt,
}

impl OrbitController {
    /// Controller at angle zero looking at `base_target` from the origin.
    #[must_use]
    pub fn new(base_target: Vec3) -> Self {
        Self {
            committed_angle: 0.0,
            phase: OrbitPhase::Idle,
            base_target,
            view: compute_view(0.0, base_target),
        }
    }

    /// Angle committed by the last completed drag, in degrees.
    #[must_use]
    pub fn committed_angle(&self) -> f32 {
        self.committed_angle
    }

    /// Current drag phase.
    #[must_use]
    pub fn phase(&self) -> OrbitPhase {
        self.phase
    }

    /// Look-at currently shown (a preview while dragging).
    #[must_use]
    pub fn view(&self) -> LookAt {
        self.view
    }

    /// Start a drag at `x`. Replaces any anchor already recorded.
    pub fn pointer_down(&mut self, x: i32) {
        self.phase = OrbitPhase::Dragging { anchor_x: x };
    }

    /// Preview the rotation for the pointer at `x` without committing it.
    ///
    /// Returns the preview angle, or `None` when no drag is in progress.
    pub fn pointer_drag(&mut self, x: i32, scale: DragScale) -> Option<f32> {
        let delta = self.angular_delta(x, scale)?;
        let preview = self.committed_angle + delta;
        self.view = compute_view(preview, self.base_target);
        Some(preview)
    }

    /// Finish the drag at `x`, committing the rotation.
    ///
    /// Returns the new committed angle, or `None` when no drag is in
    /// progress.
    pub fn pointer_up(&mut self, x: i32, scale: DragScale) -> Option<f32> {
        let delta = self.angular_delta(x, scale)?;
        self.committed_angle += delta;
        self.view = compute_view(self.committed_angle, self.base_target);
        self.phase = OrbitPhase::Idle;
        Some(self.committed_angle)
    }

    fn angular_delta(&self, x: i32, scale: DragScale) -> Option<f32> {
        match self.phase {
            OrbitPhase::Idle => None,
            OrbitPhase::Dragging { anchor_x } => {
                Some(scale.angular_delta(x - anchor_x))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: Vec3 = Vec3::new(0.0, 0.0, -3.0);

    fn scale() -> DragScale {
        DragScale::new(60.0, 800)
    }

    fn approx(value: Option<f32>, expected: f32) -> bool {
        value.is_some_and(|v| (v - expected).abs() < 1e-4)
    }

    /// Shortest angular distance between two angles in degrees.
    fn angle_diff(a: f32, b: f32) -> f32 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    #[test]
    fn drag_100_to_180_commits_six_degrees() {
        let mut orbit = OrbitController::new(BASE);
        orbit.pointer_down(100);
        let committed = orbit.pointer_up(180, scale());
        assert!(approx(committed, 6.0));
        assert!((orbit.committed_angle() - 6.0).abs() < 1e-4);
        assert_eq!(orbit.phase(), OrbitPhase::Idle);
    }

    #[test]
    fn release_adds_delta_to_previous_angle() {
        let mut orbit = OrbitController::new(BASE);
        orbit.pointer_down(0);
        assert!(approx(orbit.pointer_up(400, scale()), 30.0));

        orbit.pointer_down(500);
        let committed = orbit.pointer_up(340, scale());
        // 30 + (340 - 500) * 60/800 = 30 - 12
        assert!(approx(committed, 18.0));
    }

    #[test]
    fn drag_previews_without_committing() {
        let mut orbit = OrbitController::new(BASE);
        orbit.pointer_down(100);
        assert!(approx(orbit.pointer_drag(180, scale()), 6.0));
        assert_eq!(orbit.committed_angle(), 0.0);
        assert!(angle_diff(view_angle(&orbit.view(), BASE), 6.0) < 1e-3);
        assert_eq!(orbit.phase(), OrbitPhase::Dragging { anchor_x: 100 });
    }

    #[test]
    fn repeated_drag_at_same_x_is_idempotent() {
        let mut orbit = OrbitController::new(BASE);
        orbit.pointer_down(10);
        let first = orbit.pointer_drag(90, scale());
        let first_view = orbit.view();
        for _ in 0..5 {
            assert_eq!(orbit.pointer_drag(90, scale()), first);
            assert_eq!(orbit.view(), first_view);
        }
    }

    #[test]
    fn later_drag_supersedes_earlier_preview() {
        let mut orbit = OrbitController::new(BASE);
        orbit.pointer_down(0);
        assert!(approx(orbit.pointer_drag(800, scale()), 60.0));
        assert!(approx(orbit.pointer_drag(-400, scale()), -30.0));
        assert!(approx(orbit.pointer_up(-400, scale()), -30.0));
    }

    #[test]
    fn no_horizontal_motion_leaves_view_unchanged() {
        let mut orbit = OrbitController::new(BASE);
        let before = orbit.view();
        orbit.pointer_down(250);
        assert_eq!(orbit.pointer_drag(250, scale()), Some(0.0));
        assert_eq!(orbit.view(), before);
        assert_eq!(orbit.pointer_up(250, scale()), Some(0.0));
        assert_eq!(orbit.view(), before);
    }

    #[test]
    fn drag_and_release_while_idle_are_ignored() {
        let mut orbit = OrbitController::new(BASE);
        let before = orbit.view();
        assert_eq!(orbit.pointer_drag(300, scale()), None);
        assert_eq!(orbit.pointer_up(300, scale()), None);
        assert_eq!(orbit.committed_angle(), 0.0);
        assert_eq!(orbit.view(), before);

        // a completed drag returns the controller to idle
        orbit.pointer_down(0);
        let _ = orbit.pointer_up(80, scale());
        assert_eq!(orbit.pointer_up(800, scale()), None);
        assert!((orbit.committed_angle() - 6.0).abs() < 1e-4);
    }

    #[test]
    fn pointer_down_overwrites_anchor() {
        let mut orbit = OrbitController::new(BASE);
        orbit.pointer_down(100);
        orbit.pointer_down(400);
        assert_eq!(orbit.phase(), OrbitPhase::Dragging { anchor_x: 400 });
        assert!(approx(orbit.pointer_up(480, scale()), 6.0));
    }

    #[test]
    fn committed_angle_is_not_normalised() {
        let mut orbit = OrbitController::new(BASE);
        for _ in 0..8 {
            orbit.pointer_down(0);
            let _ = orbit.pointer_up(800, scale());
        }
        assert!((orbit.committed_angle() - 480.0).abs() < 1e-3);
        assert!(angle_diff(view_angle(&orbit.view(), BASE), 120.0) < 1e-3);
    }

    #[test]
    fn zero_width_viewport_does_not_rotate() {
        let mut orbit = OrbitController::new(BASE);
        orbit.pointer_down(0);
        assert_eq!(orbit.pointer_up(500, DragScale::new(60.0, 0)), Some(0.0));
    }

    #[test]
    fn compute_view_keeps_eye_at_origin_and_distance() {
        for angle in [0.0, 45.0, 90.0, 200.0, -75.0] {
            let view = compute_view(angle, BASE);
            assert_eq!(view.eye, Vec3::ZERO);
            assert!((view.target.length() - 3.0).abs() < 1e-5);
            assert!(view.target.y.abs() < 1e-6);
        }
    }

    #[test]
    fn quarter_turn_looks_down_negative_x() {
        let view = compute_view(90.0, BASE);
        assert!((view.target - Vec3::new(-3.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn view_angle_round_trips_modulo_360() {
        for angle in [0.0, 6.0, 45.0, 135.0, 180.0, 270.0, 359.5, -30.0, 725.0]
        {
            let recovered = view_angle(&compute_view(angle, BASE), BASE);
            assert!((0.0..360.0).contains(&recovered));
            assert!(
                angle_diff(recovered, angle.rem_euclid(360.0)) < 1e-3,
                "angle {angle} recovered as {recovered}"
            );
        }
    }

    #[test]
    fn degrees_per_pixel_matches_fov_over_width() {
        assert!((scale().degrees_per_pixel() - 0.075).abs() < 1e-7);
        assert!(approx(Some(scale().angular_delta(80)), 6.0));
        assert!(approx(Some(scale().angular_delta(-80)), -6.0));
    }
}
