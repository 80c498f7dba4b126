//! Vector and orientation primitives
//!
//! Thin helpers over `nalgebra` shared by every controller. All of these are
//! pure; degenerate inputs (near-zero vectors) are guarded with a floor
//! instead of dividing through.

use nalgebra::Vector3;

pub type Vec3 = Vector3<f32>;

/// Floor under vector lengths before normalization
pub const LENGTH_EPSILON: f32 = 1e-4;

/// Normalize, returning the zero vector for degenerate input
#[inline]
pub fn normalize_or_zero(v: Vec3) -> Vec3 {
    let len = v.norm();
    if len < LENGTH_EPSILON {
        Vec3::zeros()
    } else {
        v / len
    }
}

/// Project onto the ground plane (z = 0)
#[inline]
pub fn flat(v: Vec3) -> Vec3 {
    Vec3::new(v.x, v.y, 0.0)
}

#[inline]
pub fn distance(a: Vec3, b: Vec3) -> f32 {
    (b - a).norm()
}

/// Distance ignoring height
#[inline]
pub fn flat_distance(a: Vec3, b: Vec3) -> f32 {
    (flat(b) - flat(a)).norm()
}

/// Clamp a control axis to its legal range
#[inline]
pub fn clamp_unit(value: f32) -> f32 {
    value.clamp(-1.0, 1.0)
}

/// Car body axes derived from the telemetry Euler angles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl Orientation {
    /// Build the body axes from pitch/yaw/roll as the simulator reports them
    pub fn from_euler(pitch: f32, yaw: f32, roll: f32) -> Self {
        let (sp, cp) = pitch.sin_cos();
        let (sy, cy) = yaw.sin_cos();
        let (sr, cr) = roll.sin_cos();
        Self {
            forward: Vec3::new(cp * cy, cp * sy, sp),
            right: Vec3::new(cy * sp * sr - cr * sy, sy * sp * sr + cr * cy, -cp * sr),
            up: Vec3::new(-cr * cy * sp - sr * sy, -cr * sy * sp + sr * cy, cp * cr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_guards_zero_length() {
        assert_eq!(normalize_or_zero(Vec3::zeros()), Vec3::zeros());
        let v = normalize_or_zero(Vec3::new(3.0, 4.0, 0.0));
        assert!((v.x - 0.6).abs() < 1e-5);
        assert!((v.y - 0.8).abs() < 1e-5);
    }

    #[test]
    fn identity_orientation_axes() {
        let o = Orientation::from_euler(0.0, 0.0, 0.0);
        assert!((o.forward - Vec3::new(1.0, 0.0, 0.0)).norm() < 1e-5);
        assert!((o.right - Vec3::new(0.0, 1.0, 0.0)).norm() < 1e-5);
        assert!((o.up - Vec3::new(0.0, 0.0, 1.0)).norm() < 1e-5);
    }

    #[test]
    fn rolled_car_is_inverted() {
        let o = Orientation::from_euler(0.0, 0.0, std::f32::consts::PI);
        assert!(o.up.z < -0.99);
    }

    #[test]
    fn flat_drops_height_only() {
        let v = flat(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(v, Vec3::new(1.0, 2.0, 0.0));
        assert!((flat_distance(Vec3::new(0.0, 0.0, 100.0), Vec3::new(3.0, 4.0, -50.0)) - 5.0).abs() < 1e-5);
    }
}
