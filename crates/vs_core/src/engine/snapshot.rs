//! World snapshot: the read-only physics bundle for a single tick
//!
//! Rebuilt by the host adapter every tick and owned by that tick invocation;
//! nothing in here is persisted or mutated by the core.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

use super::math::{distance, Orientation, Vec3};
use super::physics_constants::field;

/// Which net we defend. Blue defends the negative-y back wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Team {
    Blue,
    Orange,
}

impl Team {
    pub fn own_goal(self) -> Vec3 {
        match self {
            Team::Blue => Vec3::new(0.0, -field::BACK_WALL_Y, 0.0),
            Team::Orange => Vec3::new(0.0, field::BACK_WALL_Y, 0.0),
        }
    }

    pub fn opponent_goal(self) -> Vec3 {
        match self {
            Team::Blue => Vec3::new(0.0, field::BACK_WALL_Y, 0.0),
            Team::Orange => Vec3::new(0.0, -field::BACK_WALL_Y, 0.0),
        }
    }
}

/// Own-vehicle telemetry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleState {
    pub position: Vec3,
    pub velocity: Vec3,
    pub angular_velocity: Vec3,
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
    pub wheel_contact: bool,
    /// Boost reserve, 0-100
    pub boost: f32,
}

impl VehicleState {
    pub fn orientation(&self) -> Orientation {
        Orientation::from_euler(self.pitch, self.yaw, self.roll)
    }

    pub fn speed(&self) -> f32 {
        self.velocity.norm()
    }
}

impl Default for VehicleState {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            velocity: Vec3::zeros(),
            angular_velocity: Vec3::zeros(),
            pitch: 0.0,
            yaw: 0.0,
            roll: 0.0,
            wheel_contact: true,
            boost: 33.0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BallState {
    pub position: Vec3,
    pub velocity: Vec3,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpponentState {
    pub position: Vec3,
    pub velocity: Vec3,
}

/// Everything the decision core may read during one tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldSnapshot {
    /// Monotonic match clock (s); every cooldown measures against this
    pub time: f32,
    pub car: VehicleState,
    pub ball: BallState,
    pub opponents: Vec<OpponentState>,
    pub own_goal: Vec3,
    pub opponent_goal: Vec3,
    /// Host kickoff-pause flag
    pub kickoff: bool,
}

impl WorldSnapshot {
    pub fn new(
        team: Team,
        time: f32,
        car: VehicleState,
        ball: BallState,
        opponents: Vec<OpponentState>,
        kickoff: bool,
    ) -> Self {
        Self {
            time,
            car,
            ball,
            opponents,
            own_goal: team.own_goal(),
            opponent_goal: team.opponent_goal(),
            kickoff,
        }
    }

    pub fn car_to_ball(&self) -> f32 {
        distance(self.car.position, self.ball.position)
    }

    pub fn ball_to_own_goal(&self) -> f32 {
        distance(self.ball.position, self.own_goal)
    }

    pub fn ball_to_opponent_goal(&self) -> f32 {
        distance(self.ball.position, self.opponent_goal)
    }

    /// Telemetry sanity check; a failed field downgrades the whole tick to
    /// the neutral command at the agent boundary.
    pub fn validate(&self) -> Result<(), CoreError> {
        let finite = |v: &Vec3| v.x.is_finite() && v.y.is_finite() && v.z.is_finite();
        if !self.time.is_finite() {
            return Err(CoreError::BadTelemetry { field: "time" });
        }
        if !finite(&self.car.position) || !finite(&self.car.velocity) {
            return Err(CoreError::BadTelemetry { field: "car physics" });
        }
        if ![self.car.pitch, self.car.yaw, self.car.roll, self.car.boost]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(CoreError::BadTelemetry { field: "car rotation" });
        }
        if !finite(&self.ball.position) || !finite(&self.ball.velocity) {
            return Err(CoreError::BadTelemetry { field: "ball physics" });
        }
        Ok(())
    }
}
