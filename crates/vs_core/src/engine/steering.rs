//! Ground steering primitive
//!
//! Pure pose-to-steer mapping used by every driving branch of the executor.

use super::math::{clamp_unit, Vec3};
use super::physics_constants::steering::STEER_GAIN;
use super::snapshot::VehicleState;

/// Normalized steer toward a world-space point.
///
/// The target offset is projected into the car's body frame; the local yaw
/// angle times a proportional gain gives the steer, clamped to [-1, 1].
/// Positive output steers right.
pub fn steer_toward_target(car: &VehicleState, target: Vec3) -> f32 {
    let axes = car.orientation();
    let offset = target - car.position;
    let local_forward = offset.dot(&axes.forward);
    let local_right = offset.dot(&axes.right);
    clamp_unit(local_right.atan2(local_forward) * STEER_GAIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn target_dead_ahead_steers_straight() {
        let car = VehicleState::default(); // facing +x
        let steer = steer_toward_target(&car, Vec3::new(1000.0, 0.0, 0.0));
        assert!(steer.abs() < 1e-5);
    }

    #[test]
    fn target_to_the_right_steers_right() {
        let car = VehicleState::default();
        assert!(steer_toward_target(&car, Vec3::new(1000.0, 500.0, 0.0)) > 0.0);
        assert!(steer_toward_target(&car, Vec3::new(1000.0, -500.0, 0.0)) < 0.0);
    }

    #[test]
    fn hard_angles_saturate() {
        let car = VehicleState::default();
        // directly behind: half-turn angle, saturated steer
        let steer = steer_toward_target(&car, Vec3::new(-1000.0, 1.0, 0.0));
        assert_eq!(steer, 1.0);
    }

    #[test]
    fn steer_follows_car_yaw() {
        let mut car = VehicleState::default();
        car.yaw = FRAC_PI_2; // facing +y
        let steer = steer_toward_target(&car, Vec3::new(0.0, 1000.0, 0.0));
        assert!(steer.abs() < 1e-4);
    }
}
