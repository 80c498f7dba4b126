//! Timed maneuver playback
//!
//! A `Sequence` is an immutable list of authored control steps plus a
//! playback cursor. Surplus tick time carries over between steps so total
//! playback time stays exact under variable tick length. A finished
//! sequence reports `Done` and is discarded by the caller; it never rewinds.

use super::control::Controls;

/// One authored step: hold `controls` for `duration` seconds
#[derive(Debug, Clone, Copy)]
pub struct ControlStep {
    pub duration: f32,
    pub controls: Controls,
}

impl ControlStep {
    pub fn new(duration: f32, controls: Controls) -> Self {
        Self { duration, controls }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SequenceTick {
    /// Keep holding this command
    Step(Controls),
    /// Playback exhausted; the caller must drop the sequence
    Done,
}

#[derive(Debug, Clone)]
pub struct Sequence {
    steps: Vec<ControlStep>,
    current: usize,
    elapsed_in_step: f32,
}

impl Sequence {
    pub fn new(steps: Vec<ControlStep>) -> Self {
        Self {
            steps,
            current: 0,
            elapsed_in_step: 0.0,
        }
    }

    /// Advance playback by `dt` seconds and return the command to hold.
    ///
    /// Overshoot past a step boundary is subtracted, not dropped, so the sum
    /// of step durations equals the total elapsed time fed in.
    pub fn tick(&mut self, dt: f32) -> SequenceTick {
        self.elapsed_in_step += dt;
        while let Some(step) = self.steps.get(self.current) {
            if self.elapsed_in_step < step.duration {
                return SequenceTick::Step(step.controls);
            }
            self.elapsed_in_step -= step.duration;
            self.current += 1;
        }
        SequenceTick::Done
    }

    pub fn is_done(&self) -> bool {
        self.current >= self.steps.len()
    }

    /// Total authored playback time
    pub fn total_duration(&self) -> f32 {
        self.steps.iter().map(|s| s.duration).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn throttle_step(duration: f32, throttle: f32) -> ControlStep {
        ControlStep::new(
            duration,
            Controls {
                throttle,
                ..Default::default()
            },
        )
    }

    #[test]
    fn plays_steps_in_order() {
        let mut seq = Sequence::new(vec![throttle_step(0.1, 1.0), throttle_step(0.1, -1.0)]);
        match seq.tick(0.05) {
            SequenceTick::Step(c) => assert_eq!(c.throttle, 1.0),
            SequenceTick::Done => panic!("finished early"),
        }
        match seq.tick(0.1) {
            SequenceTick::Step(c) => assert_eq!(c.throttle, -1.0),
            SequenceTick::Done => panic!("finished early"),
        }
        assert_eq!(seq.tick(0.1), SequenceTick::Done);
        assert!(seq.is_done());
    }

    #[test]
    fn surplus_time_carries_into_next_step() {
        // 0.09 elapsed lands 0.04 into the second 0.05s step
        let mut seq = Sequence::new(vec![throttle_step(0.05, 1.0), throttle_step(0.05, -1.0)]);
        match seq.tick(0.09) {
            SequenceTick::Step(c) => assert_eq!(c.throttle, -1.0),
            SequenceTick::Done => panic!("finished early"),
        }
        // 0.01 remains in the second step; 0.02 more finishes it
        assert_eq!(seq.tick(0.02), SequenceTick::Done);
    }

    #[test]
    fn completes_at_total_duration_under_fixed_tick() {
        // 4 steps totalling 1.1s fed 1/120s ticks: Done is reported exactly
        // once, on the first tick at or past 1.1s
        let mut seq = Sequence::new(vec![
            throttle_step(0.05, 1.0),
            throttle_step(0.05, 0.5),
            throttle_step(0.2, -1.0),
            throttle_step(0.8, 0.0),
        ]);
        let dt = 1.0 / 120.0;
        let mut elapsed = 0.0;
        loop {
            elapsed += dt;
            match seq.tick(dt) {
                SequenceTick::Step(_) => assert!(elapsed < 1.1 + dt),
                SequenceTick::Done => break,
            }
        }
        assert!((elapsed - 1.1).abs() <= dt);
    }

    #[test]
    fn empty_sequence_is_immediately_done() {
        let mut seq = Sequence::new(vec![]);
        assert_eq!(seq.tick(0.0), SequenceTick::Done);
    }

    proptest! {
        /// Playback neither loses nor duplicates time: across arbitrary tick
        /// lengths, Done lands on the first tick whose cumulative time
        /// reaches the authored total.
        #[test]
        fn time_is_conserved(
            durations in proptest::collection::vec(0.01f32..0.5, 1..6),
            dts in proptest::collection::vec(0.001f32..0.05, 1..400),
        ) {
            let steps: Vec<ControlStep> =
                durations.iter().map(|&d| throttle_step(d, 1.0)).collect();
            let total: f32 = durations.iter().sum();
            let mut seq = Sequence::new(steps);
            let mut elapsed = 0.0f32;
            let mut done_at = None;
            for &dt in dts.iter().cycle().take(4000) {
                elapsed += dt;
                if let SequenceTick::Done = seq.tick(dt) {
                    done_at = Some(elapsed);
                    break;
                }
                prop_assert!(elapsed < total + 1e-3);
            }
            let done_at = done_at.expect("sequence never finished");
            prop_assert!(done_at >= total - 1e-3);
        }

        /// Identical time deltas replay to the identical output sequence
        #[test]
        fn replay_is_deterministic(
            dts in proptest::collection::vec(0.001f32..0.05, 1..200),
        ) {
            let author = || Sequence::new(vec![
                throttle_step(0.08, 1.0),
                throttle_step(0.12, -0.5),
                throttle_step(0.3, 0.25),
            ]);
            let mut a = author();
            let mut b = author();
            for &dt in &dts {
                prop_assert_eq!(a.tick(dt), b.tick(dt));
            }
        }
    }
}
