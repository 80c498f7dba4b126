//! Authored maneuver library
//!
//! Pre-scripted control sequences played back by the sequencer: flips,
//! kickoff, flicks, catches and canned recoveries. Durations are tuned for
//! the 120 Hz cadence; each function returns a fresh `Sequence` because a
//! finished sequence is never restarted in place.

use serde::{Deserialize, Serialize};

use super::control::Controls;
use super::physics_constants::dribble;
use super::sequence::{ControlStep, Sequence};

/// Front flip through the ball: jump, release, second jump with nose down,
/// then settle.
pub fn front_flip() -> Sequence {
    Sequence::new(vec![
        ControlStep::new(
            0.05,
            Controls {
                jump: true,
                ..Default::default()
            },
        ),
        ControlStep::new(0.05, Controls::neutral()),
        ControlStep::new(
            0.2,
            Controls {
                jump: true,
                pitch: -1.0,
                ..Default::default()
            },
        ),
        ControlStep::new(0.8, Controls::neutral()),
    ])
}

/// Half flip: backflip, cancel the rotation, air-roll upright.
pub fn half_flip() -> Sequence {
    Sequence::new(vec![
        ControlStep::new(
            0.08,
            Controls {
                jump: true,
                pitch: 1.0,
                throttle: -1.0,
                ..Default::default()
            },
        ),
        ControlStep::new(
            0.10,
            Controls {
                pitch: 1.0,
                throttle: -1.0,
                ..Default::default()
            },
        ),
        ControlStep::new(
            0.18,
            Controls {
                pitch: -1.0,
                throttle: 1.0,
                roll: 1.0,
                ..Default::default()
            },
        ),
        ControlStep::new(0.5, Controls::neutral()),
    ])
}

/// Kickoff: boost straight, flip into the ball at speed, keep boosting.
pub fn kickoff_flip() -> Sequence {
    let charge = Controls {
        throttle: 1.0,
        boost: true,
        ..Default::default()
    };
    Sequence::new(vec![
        ControlStep::new(0.32, charge),
        ControlStep::new(
            0.04,
            Controls {
                jump: true,
                ..charge
            },
        ),
        ControlStep::new(0.04, charge),
        ControlStep::new(
            0.16,
            Controls {
                jump: true,
                pitch: -1.0,
                ..charge
            },
        ),
        ControlStep::new(0.4, charge),
    ])
}

/// Direction a carried ball is released toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlickKind {
    Straight,
    DiagonalLeft,
    DiagonalRight,
    FortyFiveLeft,
    FortyFiveRight,
}

/// Flick a carried ball: pop, release, dodge into it along the chosen line.
pub fn flick(kind: FlickKind) -> Sequence {
    let pop = ControlStep::new(
        0.05,
        Controls {
            jump: true,
            ..Default::default()
        },
    );
    let release = ControlStep::new(0.05, Controls::neutral());
    let dodge = match kind {
        FlickKind::Straight => Controls {
            jump: true,
            pitch: -1.0,
            ..Default::default()
        },
        FlickKind::DiagonalLeft | FlickKind::DiagonalRight => Controls {
            jump: true,
            pitch: -1.0,
            roll: if kind == FlickKind::DiagonalRight {
                1.0
            } else {
                -1.0
            },
            ..Default::default()
        },
        FlickKind::FortyFiveLeft | FlickKind::FortyFiveRight => Controls {
            jump: true,
            pitch: -0.7,
            yaw: if kind == FlickKind::FortyFiveRight {
                1.0
            } else {
                -1.0
            },
            ..Default::default()
        },
    };
    Sequence::new(vec![
        pop,
        release,
        ControlStep::new(0.1, dodge),
        ControlStep::new(0.7, Controls::neutral()),
    ])
}

/// Catch a falling ball on the roof. A ball dropping in close gets the
/// gentle two-stage ease; anything else keeps momentum under it.
pub fn catch_ball(relative_vz: f32, ball_distance: f32) -> Sequence {
    if relative_vz < -dribble::CATCH_GENTLE_DESCENT && ball_distance < dribble::CATCH_GENTLE_RANGE {
        return Sequence::new(vec![
            ControlStep::new(
                0.1,
                Controls {
                    throttle: 0.3,
                    ..Default::default()
                },
            ),
            ControlStep::new(
                0.1,
                Controls {
                    throttle: 0.5,
                    ..Default::default()
                },
            ),
        ]);
    }
    Sequence::new(vec![ControlStep::new(
        0.2,
        Controls {
            throttle: 1.0,
            ..Default::default()
        },
    )])
}

/// Sharp turn that keeps momentum; the handbrake comes in past half lock.
pub fn momentum_turn(steer: f32, keep_speed: bool) -> Sequence {
    Sequence::new(vec![
        ControlStep::new(
            0.2,
            Controls {
                throttle: if keep_speed { 1.0 } else { 0.5 },
                steer,
                handbrake: steer.abs() > 0.5,
                ..Default::default()
            },
        ),
        ControlStep::new(
            0.1,
            Controls {
                throttle: 1.0,
                steer: steer * 0.5,
                ..Default::default()
            },
        ),
    ])
}

/// Scripted flip off the roof: quick jump-roll, sustained roll, settle.
pub fn turtle_flip() -> Sequence {
    Sequence::new(vec![
        ControlStep::new(
            0.1,
            Controls {
                jump: true,
                roll: 1.0,
                ..Default::default()
            },
        ),
        ControlStep::new(
            0.5,
            Controls {
                roll: 1.0,
                ..Default::default()
            },
        ),
        ControlStep::new(0.5, Controls::neutral()),
    ])
}

/// Canned air-roll recovery, wheels down.
pub fn air_roll_recovery() -> Sequence {
    Sequence::new(vec![
        ControlStep::new(
            0.5,
            Controls {
                roll: 1.0,
                ..Default::default()
            },
        ),
        ControlStep::new(
            0.5,
            Controls {
                roll: -1.0,
                ..Default::default()
            },
        ),
    ])
}

/// Hold neutral controls for a beat.
pub fn no_op(duration: f32) -> Sequence {
    Sequence::new(vec![ControlStep::new(duration, Controls::neutral())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::sequence::SequenceTick;

    fn first_step(mut seq: Sequence) -> Controls {
        match seq.tick(0.0) {
            SequenceTick::Step(c) => c,
            SequenceTick::Done => panic!("sequence was empty"),
        }
    }

    #[test]
    fn front_flip_spans_the_dodge_window() {
        let seq = front_flip();
        assert!((seq.total_duration() - 1.1).abs() < 1e-6);
        assert!(first_step(seq).jump);
    }

    #[test]
    fn flick_variants_differ_in_dodge_axes() {
        let straight = flick(FlickKind::Straight);
        let right = flick(FlickKind::FortyFiveRight);
        let left = flick(FlickKind::FortyFiveLeft);
        // advance each past pop+release into the dodge step
        let dodge = |mut s: Sequence| match s.tick(0.11) {
            SequenceTick::Step(c) => c,
            SequenceTick::Done => panic!("flick too short"),
        };
        let s = dodge(straight);
        assert_eq!(s.pitch, -1.0);
        assert_eq!(s.yaw, 0.0);
        let r = dodge(right);
        assert_eq!(r.yaw, 1.0);
        let l = dodge(left);
        assert_eq!(l.yaw, -1.0);
        assert_eq!(l.pitch, -0.7);
    }

    #[test]
    fn diagonal_flicks_roll_instead_of_yaw() {
        let mut seq = flick(FlickKind::DiagonalLeft);
        match seq.tick(0.11) {
            SequenceTick::Step(c) => {
                assert_eq!(c.roll, -1.0);
                assert_eq!(c.yaw, 0.0);
            }
            SequenceTick::Done => panic!("flick too short"),
        }
    }

    #[test]
    fn gentle_catch_only_for_descending_close_ball() {
        let gentle = catch_ball(-150.0, 150.0);
        assert_eq!(first_step(gentle).throttle, 0.3);
        // rising or distant ball: keep momentum under it instead
        assert_eq!(first_step(catch_ball(50.0, 100.0)).throttle, 1.0);
        assert_eq!(first_step(catch_ball(-150.0, 250.0)).throttle, 1.0);
    }

    #[test]
    fn momentum_turn_handbrakes_past_half_lock() {
        assert!(first_step(momentum_turn(0.8, true)).handbrake);
        assert!(!first_step(momentum_turn(0.4, true)).handbrake);
    }

    #[test]
    fn kickoff_charges_before_the_flip() {
        let c = first_step(kickoff_flip());
        assert!(c.boost);
        assert_eq!(c.throttle, 1.0);
        assert!(!c.jump);
    }

    #[test]
    fn half_flip_reverses_then_cancels() {
        let mut seq = half_flip();
        match seq.tick(0.0) {
            SequenceTick::Step(c) => {
                assert!(c.jump);
                assert_eq!(c.pitch, 1.0);
                assert_eq!(c.throttle, -1.0);
            }
            SequenceTick::Done => panic!("half flip was empty"),
        }
        // past the backflip: cancel pitch, roll upright, drive out
        match seq.tick(0.2) {
            SequenceTick::Step(c) => {
                assert_eq!(c.pitch, -1.0);
                assert_eq!(c.roll, 1.0);
                assert_eq!(c.throttle, 1.0);
            }
            SequenceTick::Done => panic!("half flip too short"),
        }
    }

    #[test]
    fn canned_recoveries_roll_without_throttle() {
        let turtle = first_step(turtle_flip());
        assert!(turtle.jump);
        assert_eq!(turtle.roll, 1.0);
        assert_eq!(turtle.throttle, 0.0);

        let air_roll = first_step(air_roll_recovery());
        assert!(!air_roll.jump);
        assert_eq!(air_roll.roll, 1.0);
    }

    #[test]
    fn no_op_holds_neutral_for_its_duration() {
        let mut seq = no_op(0.25);
        assert_eq!(seq.tick(0.1), SequenceTick::Step(Controls::neutral()));
        assert_eq!(seq.tick(0.2), SequenceTick::Done);
    }
}
