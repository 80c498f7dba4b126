//! Strategic state classifier
//!
//! An ordered first-match cascade over the world snapshot: defense before
//! offense before the default rotation. The rule order IS the tactical
//! priority; later rules only apply when every earlier one failed, and some
//! geometries (a close grounded ball, say) are claimed by whichever rule
//! comes first. Keep the order intact.

use serde::{Deserialize, Serialize};

use super::physics_constants::tactics;
use super::prediction::TrajectorySample;
use super::snapshot::WorldSnapshot;

/// Tactical intent for one tick. Pure classification output, no payload,
/// recomputed from scratch whenever no maneuver is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TacticalState {
    AttackGround,
    AttackAerial,
    Dribble,
    WallPlay,
    Rebound,
    DefendGoal,
    DefendClear,
    Shadow,
    Challenge,
    GetBoost,
    Rotate,
}

/// Classify one snapshot. `intercept` is the tick's ground-intercept query;
/// it is part of the classification inputs so the result stays a pure
/// function of what the tick gathered.
pub fn classify(snap: &WorldSnapshot, intercept: Option<&TrajectorySample>) -> TacticalState {
    let car_to_ball = snap.car_to_ball();
    let ball_to_own_goal = snap.ball_to_own_goal();
    let ball_to_opponent_goal = snap.ball_to_opponent_goal();
    let ball_speed = snap.ball.velocity.norm();
    let ball_z = snap.ball.position.z;
    let boost = snap.car.boost;
    log::trace!(
        "classify: ball@{:.0}uu own-goal@{:.0}uu intercept={:?}",
        car_to_ball,
        ball_to_own_goal,
        intercept.map(|s| s.time),
    );

    // defense first
    if ball_to_own_goal < tactics::DEFEND_GOAL_BALL_RANGE
        && car_to_ball > tactics::DEFEND_GOAL_STANDOFF
    {
        return TacticalState::DefendGoal;
    }
    if ball_to_own_goal < tactics::DEFEND_CLEAR_BALL_RANGE
        && car_to_ball < tactics::DEFEND_CLEAR_CAR_RANGE
    {
        return TacticalState::DefendClear;
    }
    if ball_to_own_goal < tactics::SHADOW_BALL_RANGE
        && car_to_ball < tactics::SHADOW_CAR_RANGE
        && ball_speed < tactics::SHADOW_BALL_SPEED
    {
        return TacticalState::Shadow;
    }
    if car_to_ball < tactics::CHALLENGE_RANGE && ball_z.abs() < tactics::GROUNDED_BALL_HEIGHT {
        return TacticalState::Challenge;
    }
    // offense
    if ball_z > tactics::AERIAL_MIN_HEIGHT
        && boost > tactics::AERIAL_MIN_BOOST
        && car_to_ball < tactics::AERIAL_CHASE_RANGE
    {
        return TacticalState::AttackAerial;
    }
    if ball_to_opponent_goal < tactics::ATTACK_GOAL_RANGE
        && car_to_ball < tactics::ATTACK_CAR_RANGE
    {
        return TacticalState::AttackGround;
    }
    if (ball_z - snap.car.position.z).abs() < tactics::DRIBBLE_HEIGHT_DELTA
        && car_to_ball < tactics::DRIBBLE_RANGE
        && ball_speed < tactics::DRIBBLE_BALL_SPEED
    {
        return TacticalState::Dribble;
    }
    if snap.ball.position.y.abs() > tactics::WALL_BALL_LINE && ball_z > tactics::WALL_MIN_HEIGHT {
        return TacticalState::WallPlay;
    }
    if ball_z > tactics::REBOUND_MIN_HEIGHT && snap.ball.position.y.abs() > tactics::REBOUND_LINE {
        return TacticalState::Rebound;
    }
    if boost < tactics::LOW_BOOST && car_to_ball > tactics::BOOST_HUNT_RANGE {
        return TacticalState::GetBoost;
    }
    TacticalState::Rotate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::math::Vec3;
    use crate::engine::snapshot::{BallState, Team, VehicleState};

    fn midfield_snapshot() -> WorldSnapshot {
        // car at midfield, ball far enough that no rule engages by default
        let car = VehicleState {
            position: Vec3::new(0.0, -2000.0, 17.0),
            boost: 50.0,
            ..Default::default()
        };
        let ball = BallState {
            position: Vec3::new(0.0, 1500.0, 93.0),
            velocity: Vec3::zeros(),
        };
        WorldSnapshot::new(Team::Blue, 30.0, car, ball, vec![], false)
    }

    #[test]
    fn far_receding_ball_rotates() {
        // ball 2000uu away at ground height, rolling away
        let car = VehicleState {
            position: Vec3::zeros(),
            boost: 50.0,
            ..Default::default()
        };
        let ball = BallState {
            position: Vec3::new(0.0, 2000.0, 0.0),
            velocity: Vec3::new(0.0, 800.0, 0.0),
        };
        let snap = WorldSnapshot::new(Team::Blue, 30.0, car, ball, vec![], false);
        assert_eq!(classify(&snap, None), TacticalState::Rotate);
    }

    #[test]
    fn elevated_reachable_ball_with_boost_attacks_aerially() {
        let mut snap = midfield_snapshot();
        snap.car.boost = 40.0;
        snap.ball.position = snap.car.position + Vec3::new(0.0, 916.5, 400.0);
        // distance 1000, height 400, boost 40
        assert!((snap.car_to_ball() - 1000.0).abs() < 1.0);
        assert_eq!(classify(&snap, None), TacticalState::AttackAerial);
    }

    #[test]
    fn ball_parked_in_our_net_defends() {
        let mut snap = midfield_snapshot();
        snap.ball.position = Vec3::new(0.0, -4500.0, 93.0);
        // car far away: guard the net
        snap.car.position = Vec3::new(0.0, 0.0, 17.0);
        assert_eq!(classify(&snap, None), TacticalState::DefendGoal);
        // car on top of it: clear it instead
        snap.car.position = Vec3::new(0.0, -4200.0, 17.0);
        assert_eq!(classify(&snap, None), TacticalState::DefendClear);
    }

    #[test]
    fn slow_ball_in_our_third_shadows() {
        let mut snap = midfield_snapshot();
        snap.ball.position = Vec3::new(0.0, -2500.0, 93.0);
        snap.ball.velocity = Vec3::new(0.0, 300.0, 0.0);
        snap.car.position = Vec3::new(0.0, -1200.0, 17.0);
        assert_eq!(classify(&snap, None), TacticalState::Shadow);
    }

    #[test]
    fn close_grounded_ball_is_challenged() {
        let mut snap = midfield_snapshot();
        snap.ball.position = snap.car.position + Vec3::new(0.0, 600.0, 76.0);
        snap.ball.velocity = Vec3::new(0.0, 900.0, 0.0); // too fast to shadow
        assert_eq!(classify(&snap, None), TacticalState::Challenge);
    }

    #[test]
    fn challenge_outranks_dribble_on_shared_geometry() {
        // close, slow, grounded: both rule 4 and rule 7 match; order wins
        let mut snap = midfield_snapshot();
        snap.ball.position = snap.car.position + Vec3::new(0.0, 300.0, 80.0);
        snap.ball.velocity = Vec3::zeros();
        assert_eq!(classify(&snap, None), TacticalState::Challenge);
    }

    #[test]
    fn ball_at_their_net_attacks_on_the_ground() {
        // bouncing above challenge height but below the aerial band
        let mut snap = midfield_snapshot();
        snap.ball.position = Vec3::new(0.0, 4200.0, 250.0);
        snap.car.position = Vec3::new(0.0, 3500.0, 17.0);
        assert_eq!(classify(&snap, None), TacticalState::AttackGround);
    }

    #[test]
    fn high_side_wall_ball_plays_the_wall() {
        let mut snap = midfield_snapshot();
        snap.ball.position = Vec3::new(3000.0, 4300.0, 600.0);
        snap.car.position = Vec3::new(0.0, 2000.0, 17.0);
        snap.car.boost = 10.0;
        assert_eq!(classify(&snap, None), TacticalState::WallPlay);
    }

    #[test]
    fn elevated_far_side_ball_rebounds() {
        let mut snap = midfield_snapshot();
        snap.ball.position = Vec3::new(0.0, 3500.0, 500.0);
        snap.car.position = Vec3::new(0.0, 1000.0, 17.0);
        snap.car.boost = 25.0;
        // aerial range is 1800; at 2543 away only the rebound rule fires
        assert_eq!(classify(&snap, None), TacticalState::Rebound);
    }

    #[test]
    fn low_boost_far_ball_hunts_pads() {
        let mut snap = midfield_snapshot();
        snap.car.boost = 10.0;
        assert_eq!(classify(&snap, None), TacticalState::GetBoost);
    }

    #[test]
    fn classification_is_pure() {
        let snap = midfield_snapshot();
        let a = classify(&snap, None);
        for _ in 0..10 {
            assert_eq!(classify(&snap, None), a);
        }
    }
}
