//! Airborne recovery and leveling
//!
//! Continuous feedback, not a state machine: recomputed every tick from the
//! current orientation, with no memory. Runs whenever the car is airborne
//! and nothing else (sequence, aerial controller) owns the tick.

use super::control::Controls;
use super::math::{clamp_unit, flat, normalize_or_zero};
use super::physics_constants::recovery;
use super::snapshot::WorldSnapshot;

/// Level the car for landing, or flip it off its roof.
///
/// Turtled (up vector pointing down): jump plus full roll toward the nearest
/// upright direction; the roll sign depends only on which way the right axis
/// points. Otherwise proportional roll toward level and proportional pitch
/// toward the flattened velocity's climb angle, level when nearly stopped.
/// Throttle and boost stay off throughout.
pub fn level_out(snap: &WorldSnapshot) -> Controls {
    let axes = snap.car.orientation();
    let mut controls = Controls::neutral();

    if axes.up.z < recovery::TURTLE_UP_Z {
        controls.jump = true;
        controls.roll = if axes.right.z < 0.0 { 1.0 } else { -1.0 };
        return controls;
    }

    controls.roll = clamp_unit(-axes.right.z * recovery::ROLL_GAIN);

    let flat_velocity = flat(snap.car.velocity);
    let target_climb = if snap.car.speed() > recovery::MIN_ALIGN_SPEED
        && flat_velocity.norm() > super::math::LENGTH_EPSILON
    {
        normalize_or_zero(flat_velocity).z
    } else {
        0.0
    };
    controls.pitch = clamp_unit((axes.forward.z - target_climb) * recovery::PITCH_GAIN);
    controls
}
