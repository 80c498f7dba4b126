//! Tactical executor
//!
//! Turns the classified intent into a concrete command: either a direct
//! control vector, a freshly installed maneuver sequence, or a delegation to
//! the aerial or dribble controller. Only runs when no sequence is active;
//! an in-flight maneuver always preempts reclassification at the agent
//! boundary.

use super::agent::AgentState;
use super::boost_pads::BoostPadRegistry;
use super::classifier::TacticalState;
use super::control::Controls;
use super::dribble::DribbleOutcome;
use super::maneuvers;
use super::math::{clamp_unit, normalize_or_zero, Vec3};
use super::physics_constants::{field, tactics};
use super::prediction::{find_aerial_intercept, Trajectory};
use super::snapshot::WorldSnapshot;
use super::steering::steer_toward_target;

pub fn execute(
    state: TacticalState,
    snap: &WorldSnapshot,
    track: &Trajectory,
    pads: &BoostPadRegistry,
    agent: &mut AgentState,
) -> Controls {
    match state {
        TacticalState::AttackGround => attack_ground(snap, agent),
        TacticalState::AttackAerial => attack_aerial(snap, track, agent),
        TacticalState::Dribble => dribble(snap, agent),
        TacticalState::WallPlay => wall_play(snap),
        TacticalState::Rebound => drive_toward(snap, snap.opponent_goal),
        TacticalState::DefendGoal => defend_goal(snap, agent),
        TacticalState::DefendClear => defend_clear(snap, agent),
        TacticalState::Shadow => shadow(snap),
        TacticalState::Challenge => challenge(snap, agent),
        TacticalState::GetBoost => get_boost(snap, pads),
        TacticalState::Rotate => drive_toward(snap, rotation_post(snap)),
    }
}

/// Default chase / travel command
fn drive_toward(snap: &WorldSnapshot, target: Vec3) -> Controls {
    Controls {
        throttle: 1.0,
        steer: steer_toward_target(&snap.car, target),
        ..Default::default()
    }
}

/// Line up and flip through the ball when the shot lane is open
fn attack_ground(snap: &WorldSnapshot, agent: &mut AgentState) -> Controls {
    let to_ball = normalize_or_zero(snap.ball.position - snap.car.position);
    let to_goal = normalize_or_zero(snap.opponent_goal - snap.ball.position);
    let alignment = to_ball.dot(&to_goal);
    if alignment > tactics::SHOT_ALIGNMENT
        && snap.car_to_ball() < tactics::FLIP_RANGE
        && agent.active_sequence.is_none()
    {
        return agent.start_flip(snap.time);
    }
    drive_toward(snap, snap.ball.position)
}

/// Commit to the aerial state machine when a target qualifies, else keep
/// chasing on the ground
fn attack_aerial(snap: &WorldSnapshot, track: &Trajectory, agent: &mut AgentState) -> Controls {
    match find_aerial_intercept(snap, track) {
        Some(intercept) => agent.aerial.step(snap, intercept.target),
        None => drive_toward(snap, snap.ball.position),
    }
}

fn dribble(snap: &WorldSnapshot, agent: &mut AgentState) -> Controls {
    match agent.dribble.execute(snap) {
        DribbleOutcome::Controls(controls) => controls,
        DribbleOutcome::Maneuver(sequence) => agent.start_sequence(sequence),
        DribbleOutcome::Defer => drive_toward(snap, snap.ball.position),
    }
}

/// Off the wall: jump-boost with the nose pulled onto the ball. On it:
/// drive the wall line toward the ball.
fn wall_play(snap: &WorldSnapshot) -> Controls {
    if !snap.car.wheel_contact && snap.car.position.z.abs() > tactics::WALL_JUMP_MIN_HEIGHT {
        let to_ball = normalize_or_zero(snap.ball.position - snap.car.position);
        let error = to_ball - snap.car.orientation().forward;
        return Controls {
            jump: true,
            boost: true,
            pitch: clamp_unit(error.z * tactics::WALL_AIM_GAIN),
            yaw: clamp_unit(error.y * tactics::WALL_AIM_GAIN),
            ..Default::default()
        };
    }
    drive_toward(snap, snap.ball.position)
}

/// Hold the net: sit on the goal-to-ball line, flip into anything that
/// comes into range
fn defend_goal(snap: &WorldSnapshot, agent: &mut AgentState) -> Controls {
    let guard_line = snap.own_goal
        + normalize_or_zero(snap.ball.position - snap.own_goal) * tactics::GOAL_GUARD_OFFSET;
    if snap.car_to_ball() < tactics::DEFENSIVE_FLIP_RANGE && agent.active_sequence.is_none() {
        return agent.start_flip(snap.time);
    }
    drive_toward(snap, guard_line)
}

/// Put the ball upfield, biased away from the car's side of the net
fn defend_clear(snap: &WorldSnapshot, agent: &mut AgentState) -> Controls {
    let lateral = if snap.car.position.x < 0.0 {
        tactics::CLEAR_LATERAL_OFFSET
    } else {
        -tactics::CLEAR_LATERAL_OFFSET
    };
    let clear_target = snap.opponent_goal + Vec3::new(lateral, 0.0, 0.0);
    if snap.car_to_ball() < tactics::DEFENSIVE_FLIP_RANGE && agent.active_sequence.is_none() {
        return agent.start_flip(snap.time);
    }
    drive_toward(snap, clear_target)
}

/// Stay between ball and net at partial throttle; delay, don't commit
fn shadow(snap: &WorldSnapshot) -> Controls {
    let shadow_point = snap.own_goal
        + normalize_or_zero(snap.ball.position - snap.own_goal) * tactics::SHADOW_OFFSET;
    Controls {
        throttle: tactics::SHADOW_THROTTLE,
        steer: steer_toward_target(&snap.car, shadow_point),
        ..Default::default()
    }
}

/// 50/50: flip into the ball
fn challenge(snap: &WorldSnapshot, agent: &mut AgentState) -> Controls {
    if agent.active_sequence.is_none() {
        return agent.start_flip(snap.time);
    }
    Controls::neutral()
}

fn get_boost(snap: &WorldSnapshot, pads: &BoostPadRegistry) -> Controls {
    match pads.best_pad(snap.car.position) {
        Some(pad) => drive_toward(snap, pad.location),
        None => Controls::neutral(),
    }
}

/// Default rotation: back post on our side, mirrored to the car's half
fn rotation_post(snap: &WorldSnapshot) -> Vec3 {
    let x = if snap.car.position.x < 0.0 {
        -field::BACK_POST_X
    } else {
        field::BACK_POST_X
    };
    Vec3::new(x, snap.own_goal.y, 0.0)
}

impl AgentState {
    /// Flip through the ball, stamping the flip clock
    fn start_flip(&mut self, now: f32) -> Controls {
        self.last_flip_time = now;
        self.start_sequence(maneuvers::front_flip())
    }
}
