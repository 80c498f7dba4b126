//! Aerial maneuver state machine
//!
//! Strict linear phase progression Idle → Preparing → TakingOff → Flight →
//! Recovery → Idle, with one external interrupt: wheel contact in any
//! non-idle phase resets the attempt and clears both one-shot jump flags.
//! Driven once per tick while the executor is committed to an aerial.

use super::control::Controls;
use super::math::{clamp_unit, flat, flat_distance, normalize_or_zero, Vec3};
use super::physics_constants::aerial;
use super::snapshot::WorldSnapshot;
use super::steering::steer_toward_target;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AerialPhase {
    #[default]
    Idle,
    Preparing,
    TakingOff,
    Flight,
    Recovery,
}

/// Per-agent aerial attempt state; persists across ticks
#[derive(Debug, Clone, Default)]
pub struct AerialController {
    phase: AerialPhase,
    /// Match time the first jump was issued
    jump_started_at: f32,
    takeoff_spot: Option<Vec3>,
    /// One extra jump for initial lift, at most once per attempt
    second_jump_used: bool,
    /// One dodge into the ball at contact, at most once per attempt
    contact_jump_used: bool,
}

impl AerialController {
    pub fn phase(&self) -> AerialPhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == AerialPhase::Idle
    }

    /// Back to Idle with both one-shot flags cleared
    pub fn reset(&mut self) {
        self.phase = AerialPhase::Idle;
        self.takeoff_spot = None;
        self.second_jump_used = false;
        self.contact_jump_used = false;
    }

    /// Advance the attempt one tick toward `target`.
    ///
    /// Phases fall through within a single tick where the jump timing
    /// demands it: arriving at the takeoff spot jumps on the same tick.
    pub fn step(&mut self, snap: &WorldSnapshot, target: Vec3) -> Controls {
        // unexpected landing or aborted attempt: start over
        if snap.car.wheel_contact && self.phase != AerialPhase::Idle {
            log::debug!("aerial attempt reset on wheel contact");
            self.reset();
        }

        let mut controls = Controls::neutral();

        if self.phase == AerialPhase::Idle {
            let spot = flat(target);
            self.takeoff_spot = Some(spot);
            if flat_distance(snap.car.position, spot) > aerial::TAKEOFF_RADIUS {
                controls.throttle = 1.0;
                controls.steer = steer_toward_target(&snap.car, spot);
                return controls;
            }
            self.phase = AerialPhase::Preparing;
        }

        if self.phase == AerialPhase::Preparing {
            controls.jump = true;
            self.jump_started_at = snap.time;
            self.phase = AerialPhase::TakingOff;
            return controls;
        }

        if self.phase == AerialPhase::TakingOff {
            let jump_age = snap.time - self.jump_started_at;
            if jump_age < aerial::JUMP_HOLD {
                controls.jump = true;
                controls.pitch = -1.0;
                return controls;
            }
            controls.pitch = -1.0;
            controls.boost = true;
            if !self.second_jump_used
                && jump_age > aerial::SECOND_JUMP_OPEN
                && jump_age < aerial::SECOND_JUMP_CLOSE
            {
                controls.jump = true;
                self.second_jump_used = true;
            }
            if jump_age > aerial::SECOND_JUMP_CLOSE {
                self.phase = AerialPhase::Flight;
            }
            return controls;
        }

        if self.phase == AerialPhase::Flight {
            let to_target = normalize_or_zero(target - snap.car.position);
            let axes = snap.car.orientation();
            let error = to_target - axes.forward;
            controls.pitch = clamp_unit(error.z * aerial::FLIGHT_GAIN);
            controls.yaw = clamp_unit(error.y * aerial::FLIGHT_GAIN);
            controls.boost = true;
            let range = (target - snap.car.position).norm();
            if range < aerial::BOOST_CUT_RANGE {
                controls.boost = false;
            }
            if range < aerial::CONTACT_RANGE {
                if !self.contact_jump_used {
                    controls.jump = true;
                    self.contact_jump_used = true;
                }
                self.phase = AerialPhase::Recovery;
            }
            return controls;
        }

        // Recovery: let the car fall and settle
        if snap.car.position.z < aerial::LANDED_HEIGHT {
            self.reset();
        }
        controls
    }
}
