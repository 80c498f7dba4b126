//! Ball-carrying sub-controller
//!
//! Owns the flick and catch cooldowns and the carrying flag. Hands results
//! back to the executor as a closed tagged outcome instead of controls-only:
//! either a direct maintenance command, a maneuver to install, or a deferral
//! back to the caller's default behavior.

use super::carry::{carry_corrections, sense_carry, CarrySense};
use super::control::Controls;
use super::maneuvers::{self, FlickKind};
use super::math::{flat, normalize_or_zero};
use super::physics_constants::dribble;
use super::sequence::Sequence;
use super::snapshot::WorldSnapshot;

/// What a delegated sub-controller asks the executor to do
#[derive(Debug)]
pub enum DribbleOutcome {
    /// Hold this command for the tick
    Controls(Controls),
    /// Install and start this maneuver
    Maneuver(Sequence),
    /// Nothing to do; caller falls back to its default behavior
    Defer,
}

/// Per-agent dribble state; cooldowns run on the match clock
#[derive(Debug, Clone)]
pub struct DribbleController {
    last_flick_time: f32,
    last_catch_attempt: f32,
    carrying: bool,
}

impl Default for DribbleController {
    fn default() -> Self {
        Self {
            // far in the past so the first opportunity is not gated
            last_flick_time: f32::MIN,
            last_catch_attempt: f32::MIN,
            carrying: false,
        }
    }
}

impl DribbleController {
    pub fn is_carrying(&self) -> bool {
        self.carrying
    }

    pub fn last_flick_time(&self) -> f32 {
        self.last_flick_time
    }

    /// One dribble tick: flick, maintain, catch, or defer.
    pub fn execute(&mut self, snap: &WorldSnapshot) -> DribbleOutcome {
        let sense = sense_carry(snap);

        if !sense.on_roof {
            self.carrying = false;
            // the attempt timestamp advances whenever the cooldown gate
            // opens, even if the geometry then says no
            if snap.time - self.last_catch_attempt > dribble::CATCH_COOLDOWN {
                self.last_catch_attempt = snap.time;
                if sense.distance < dribble::CATCH_RANGE && sense.relative_velocity.z < 0.0 {
                    log::debug!("catch attempt at t={:.2}", snap.time);
                    return DribbleOutcome::Maneuver(maneuvers::catch_ball(
                        sense.relative_velocity.z,
                        sense.distance,
                    ));
                }
            }
            return DribbleOutcome::Defer;
        }

        self.carrying = true;

        if self.should_flick(snap) {
            self.last_flick_time = snap.time;
            let kind = self.choose_flick(snap);
            log::debug!("flick {:?} at t={:.2}", kind, snap.time);
            return DribbleOutcome::Maneuver(maneuvers::flick(kind));
        }

        DribbleOutcome::Controls(self.maintain(&sense))
    }

    /// Flick once the cooldown has passed and an opponent pressures the ball
    fn should_flick(&self, snap: &WorldSnapshot) -> bool {
        if snap.time - self.last_flick_time < dribble::FLICK_COOLDOWN {
            return false;
        }
        snap.opponents.iter().any(|opponent| {
            (opponent.position - snap.ball.position).norm() < dribble::PRESSURE_RADIUS
        })
    }

    /// Straight flick when lined up with the opponent goal, otherwise a 45°
    /// flick toward whichever side the goal sits on
    fn choose_flick(&self, snap: &WorldSnapshot) -> FlickKind {
        let axes = snap.car.orientation();
        let to_goal = normalize_or_zero(flat(snap.opponent_goal - snap.car.position));
        let forward = normalize_or_zero(flat(axes.forward));
        let angle = forward.dot(&to_goal).clamp(-1.0, 1.0).acos();
        if angle < dribble::FLICK_ALIGN_ANGLE {
            FlickKind::Straight
        } else if to_goal.dot(&axes.right) > 0.0 {
            FlickKind::FortyFiveRight
        } else {
            FlickKind::FortyFiveLeft
        }
    }

    /// Keep the carry stable: ease off when the ball runs hot, push under a
    /// drifting ball, counter-steer lateral slide
    fn maintain(&self, sense: &CarrySense) -> Controls {
        let corrections = carry_corrections(sense);
        let mut controls = Controls::neutral();
        if corrections.needs_slow {
            controls.throttle = dribble::SLOW_THROTTLE;
        } else if corrections.needs_boost {
            controls.throttle = 1.0;
            controls.boost = true;
        } else {
            controls.throttle = dribble::CRUISE_THROTTLE;
        }
        if let Some(correction) = corrections.steer_correction {
            controls.steer = correction;
        }
        controls
    }
}
