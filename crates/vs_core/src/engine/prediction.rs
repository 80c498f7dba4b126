//! Ball-trajectory queries and reach estimates
//!
//! The host's predictor hands the core a fresh track every tick; the core
//! only scans it. Every query here is a first-match scan in time order, a
//! deliberate simplicity/stability trade-off over a globally optimal search:
//! the earliest qualifying sample wins, which keeps the chosen target stable
//! frame to frame. Changing that policy changes observable target selection.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

use super::math::{distance, flat, Vec3};
use super::physics_constants::{aerial, ball, intercept};
use super::snapshot::{BallState, WorldSnapshot};

/// One predicted future ball state ("slice")
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrajectorySample {
    /// Absolute match time of the sample (s)
    pub time: f32,
    pub position: Vec3,
    pub velocity: Vec3,
}

/// An ordered, bounded-horizon ball prediction. Sample times strictly
/// increase; the track may be shorter than any requested horizon.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Trajectory {
    samples: Vec<TrajectorySample>,
}

impl Trajectory {
    pub fn new(samples: Vec<TrajectorySample>) -> Result<Self, CoreError> {
        for (index, pair) in samples.windows(2).enumerate() {
            if pair[1].time <= pair[0].time {
                return Err(CoreError::NonMonotonicTrajectory { index: index + 1 });
            }
        }
        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Match time of the first sample
    pub fn start_time(&self) -> Option<f32> {
        self.samples.first().map(|s| s.time)
    }
}

/// Height window a ground intercept must fall inside
#[derive(Debug, Clone, Copy)]
pub struct HeightBand {
    pub min: f32,
    pub max: f32,
}

impl HeightBand {
    pub const GROUND: HeightBand = HeightBand {
        min: intercept::GROUND_BAND_MIN,
        max: intercept::GROUND_BAND_MAX,
    };

    fn contains(&self, z: f32) -> bool {
        self.min <= z && z <= self.max
    }
}

/// First sample in the band and horizon the car can plausibly reach.
///
/// Travel time is straight-line distance over `max(car_speed, floor)`; a
/// sample qualifies when that estimate beats its timeline offset plus a
/// fixed slack. Returns `None` when nothing on the track qualifies.
pub fn find_intercept<'t>(
    car_position: Vec3,
    car_speed: f32,
    track: &'t Trajectory,
    band: HeightBand,
    horizon: f32,
) -> Option<&'t TrajectorySample> {
    let start = track.start_time()?;
    for sample in track.samples() {
        let offset = sample.time - start;
        if offset > horizon {
            break;
        }
        if !band.contains(sample.position.z) {
            continue;
        }
        let travel = distance(car_position, sample.position)
            / car_speed.max(intercept::MIN_SPEED_FLOOR);
        if travel <= offset + intercept::ARRIVAL_SLACK {
            return Some(sample);
        }
    }
    None
}

/// A reachable aerial target
#[derive(Debug, Clone, Copy)]
pub struct AerialIntercept {
    pub target: Vec3,
    /// Seconds until the ball is there
    pub lead_time: f32,
}

/// Aerial variant of the intercept scan.
///
/// On top of the reach estimate it requires the aerial height window, a
/// bounded lateral ball speed, boost for the climb, and that the point is
/// worth contesting: offensively (closer to their goal than ours) or
/// defensively (inside the defensive radius of our goal). First qualifying
/// sample wins, not the best.
pub fn find_aerial_intercept(snap: &WorldSnapshot, track: &Trajectory) -> Option<AerialIntercept> {
    for sample in track.samples() {
        let lead = sample.time - snap.time;
        if lead < aerial::MIN_LEAD || lead > aerial::MAX_LEAD {
            continue;
        }
        let pos = sample.position;
        if pos.z <= aerial::MIN_BALL_HEIGHT || pos.z >= aerial::MAX_BALL_HEIGHT {
            continue;
        }
        if flat(sample.velocity).norm() >= aerial::MAX_LATERAL_BALL_SPEED {
            continue;
        }
        let reach = distance(snap.car.position, pos) / aerial::AVERAGE_FLIGHT_SPEED;
        if (reach - lead).abs() >= aerial::ARRIVAL_TOLERANCE {
            continue;
        }
        let climb = (pos.z - snap.car.position.z).max(0.0);
        if snap.car.boost <= climb / aerial::CLIMB_PER_BOOST + aerial::BOOST_MARGIN {
            continue;
        }
        let offense = distance(pos, snap.opponent_goal) < distance(pos, snap.own_goal);
        let defense = distance(pos, snap.own_goal) < aerial::DEFENSIVE_RADIUS;
        if offense || defense {
            return Some(AerialIntercept {
                target: pos,
                lead_time: lead,
            });
        }
    }
    None
}

/// First sample where the ball has effectively settled onto the floor.
pub fn find_next_ground_touch(track: &Trajectory) -> Option<&TrajectorySample> {
    track.samples().iter().find(|s| {
        s.position.z < intercept::GROUND_TOUCH_HEIGHT
            && s.velocity.z.abs() < intercept::GROUND_TOUCH_VZ
    })
}

/// First low sample already driving toward the opponent back wall
/// (`goalward_y` is the sign of the opponent goal's y).
pub fn find_shot_opportunity(track: &Trajectory, goalward_y: f32) -> Option<&TrajectorySample> {
    track.samples().iter().find(|s| {
        s.position.z < intercept::SHOT_MAX_HEIGHT
            && s.velocity.y * goalward_y.signum() > intercept::SHOT_MIN_SPEED
    })
}

/// Dead-reckon the car `dt` seconds ahead. With `forward_only` the sideways
/// drift component is ignored.
pub fn predict_car_position(
    position: Vec3,
    velocity: Vec3,
    forward: Vec3,
    dt: f32,
    forward_only: bool,
) -> Vec3 {
    if forward_only {
        position + forward * (velocity.dot(&forward) * dt)
    } else {
        position + velocity * dt
    }
}

/// Straight-line time to a target at current speed, capped at the car's top
/// speed; a near-stopped car is assumed to accelerate to the floor speed.
pub fn time_to_reach(position: Vec3, velocity: Vec3, target: Vec3) -> f32 {
    let mut speed = velocity.norm().min(intercept::MAX_CAR_SPEED);
    if speed < intercept::STALL_SPEED {
        speed = intercept::MIN_SPEED_FLOOR;
    }
    distance(position, target) / speed
}

pub fn will_arrive_before(position: Vec3, velocity: Vec3, target: Vec3, deadline: f32) -> bool {
    time_to_reach(position, velocity, target) < deadline
}

/// Manufacture a track by propagating the ball ballistically with floor
/// bounces. Test and scenario tooling only; live play always consumes the
/// host predictor's track.
pub fn ballistic_track(ball_state: &BallState, start_time: f32, horizon: f32, step: f32) -> Trajectory {
    let mut samples = Vec::with_capacity((horizon / step) as usize + 1);
    let mut pos = ball_state.position;
    let mut vel = ball_state.velocity;
    let mut t = 0.0;
    while t <= horizon {
        samples.push(TrajectorySample {
            time: start_time + t,
            position: pos,
            velocity: vel,
        });
        t += step;
        vel.z -= ball::GRAVITY * step;
        pos += vel * step;
        if pos.z < ball::RADIUS && vel.z < 0.0 {
            pos.z = ball::RADIUS;
            vel.z = -vel.z * ball::RESTITUTION;
            vel.x *= ball::BOUNCE_FRICTION;
            vel.y *= ball::BOUNCE_FRICTION;
        }
    }
    Trajectory { samples }
}
