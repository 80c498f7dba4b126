//! Ball-carry sensing
//!
//! Measures the ball's state relative to the car roof and derives the
//! corrections a stable carry needs. Pure per-tick readings; the dribble
//! controller owns the cooldowns and decisions built on top of them.

use super::math::Vec3;
use super::physics_constants::dribble;
use super::snapshot::WorldSnapshot;

/// Relative ball reading for one tick
#[derive(Debug, Clone, Copy)]
pub struct CarrySense {
    pub distance: f32,
    /// Ball center height above the car center (uu)
    pub height_above: f32,
    /// Ball resting in the carry band above the roof
    pub on_roof: bool,
    pub relative_velocity: Vec3,
    /// Relative velocity projected on the car's right axis (uu/s);
    /// positive means the ball slides to the right
    pub lateral_slide: f32,
}

pub fn sense_carry(snap: &WorldSnapshot) -> CarrySense {
    let relative_velocity = snap.ball.velocity - snap.car.velocity;
    let height_above = snap.ball.position.z - snap.car.position.z;
    CarrySense {
        distance: snap.car_to_ball(),
        height_above,
        on_roof: height_above > dribble::CARRY_HEIGHT_MIN
            && height_above < dribble::CARRY_HEIGHT_MAX,
        relative_velocity,
        lateral_slide: relative_velocity.dot(&snap.car.orientation().right),
    }
}

/// Throttle/steer adjustments that keep a carry stable
#[derive(Debug, Clone, Copy, Default)]
pub struct CarryCorrections {
    /// Relative speed too high; ease off
    pub needs_slow: bool,
    /// Ball drifting off the roof; push under it
    pub needs_boost: bool,
    /// Counter-steer against lateral slide
    pub steer_correction: Option<f32>,
}

pub fn carry_corrections(sense: &CarrySense) -> CarryCorrections {
    let mut out = CarryCorrections::default();
    if sense.relative_velocity.norm() > dribble::MAX_RELATIVE_SPEED {
        out.needs_slow = true;
    }
    if sense.on_roof && sense.distance > dribble::DRIFT_DISTANCE {
        out.needs_boost = true;
    }
    if sense.on_roof && sense.lateral_slide.abs() > dribble::LATERAL_SLIDE_SPEED {
        out.steer_correction = Some(-sense.lateral_slide / dribble::STEER_CORRECTION_SCALE);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::snapshot::{BallState, Team, VehicleState};

    fn carrying_snapshot() -> WorldSnapshot {
        let mut snap = WorldSnapshot::new(
            Team::Blue,
            5.0,
            VehicleState::default(),
            BallState::default(),
            vec![],
            false,
        );
        snap.ball.position = Vec3::new(0.0, 30.0, 140.0); // resting over the roof
        snap
    }

    #[test]
    fn ball_in_band_reads_on_roof() {
        let sense = sense_carry(&carrying_snapshot());
        assert!(sense.on_roof);
        let mut low = carrying_snapshot();
        low.ball.position.z = 40.0;
        assert!(!sense_carry(&low).on_roof);
        let mut high = carrying_snapshot();
        high.ball.position.z = 250.0;
        assert!(!sense_carry(&high).on_roof);
    }

    #[test]
    fn fast_relative_ball_needs_slowing() {
        let mut snap = carrying_snapshot();
        snap.ball.velocity = Vec3::new(0.0, 900.0, 0.0);
        let c = carry_corrections(&sense_carry(&snap));
        assert!(c.needs_slow);
    }

    #[test]
    fn drifting_carry_needs_boost() {
        let mut snap = carrying_snapshot();
        snap.ball.position = Vec3::new(0.0, 180.0, 140.0); // distance ~228
        let c = carry_corrections(&sense_carry(&snap));
        assert!(c.needs_boost);
    }

    #[test]
    fn lateral_slide_counter_steers() {
        let mut snap = carrying_snapshot();
        // car faces +x; its right axis is +y, ball sliding right at 200
        snap.ball.velocity = Vec3::new(0.0, 200.0, 0.0);
        let c = carry_corrections(&sense_carry(&snap));
        let steer = c.steer_correction.expect("slide above threshold");
        assert!((steer + 0.2).abs() < 1e-5);
    }

    #[test]
    fn stable_carry_needs_nothing() {
        let c = carry_corrections(&sense_carry(&carrying_snapshot()));
        assert!(!c.needs_slow && !c.needs_boost && c.steer_correction.is_none());
    }
}
