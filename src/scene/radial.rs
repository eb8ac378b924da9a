//! Radial instance layout: copies of one mesh rotated evenly about +Y.

use glam::Mat4;

/// `count` instances spaced `360 / count` degrees apart about the vertical
/// axis. The layout is fixed; it does not follow the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadialLayout {
    count: u32,
}

impl RadialLayout {
    /// Layout with `count` instances (at least one).
    #[must_use]
    pub fn new(count: u32) -> Self {
        Self {
            count: count.max(1),
        }
    }

    /// Number of instances.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Angle between neighbouring instances, in degrees.
    #[must_use]
    pub fn step_degrees(&self) -> f32 {
        360.0 / self.count as f32
    }

    /// Rotation of each instance in degrees: `i * step` for `i in 0..count`.
    pub fn angles(&self) -> impl Iterator<Item = f32> + '_ {
        let step = self.step_degrees();
        (0..self.count).map(move |i| i as f32 * step)
    }

    /// Model matrix of each instance.
    pub fn transforms(&self) -> impl Iterator<Item = Mat4> + '_ {
        self.angles()
            .map(|deg| Mat4::from_rotation_y(deg.to_radians()))
    }
}

impl Default for RadialLayout {
    fn default() -> Self {
        Self::new(8)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn eight_instances_step_by_45_degrees() {
        let angles: Vec<f32> = RadialLayout::default().angles().collect();
        assert_eq!(
            angles,
            vec![0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0]
        );
    }

    #[test]
    fn transforms_rotate_about_vertical_axis() {
        let layout = RadialLayout::default();
        let forward = Vec3::NEG_Z;
        for (deg, model) in layout.angles().zip(layout.transforms()) {
            let rotated = model.transform_vector3(forward);
            assert!(rotated.y.abs() < 1e-6);
            let back = (-rotated.x).atan2(-rotated.z).to_degrees();
            let diff = (back - deg).rem_euclid(360.0);
            assert!(diff.min(360.0 - diff) < 1e-3);
        }
    }

    #[test]
    fn zero_count_clamps_to_one() {
        let layout = RadialLayout::new(0);
        assert_eq!(layout.count(), 1);
        assert_eq!(layout.angles().collect::<Vec<_>>(), vec![0.0]);
    }
}
