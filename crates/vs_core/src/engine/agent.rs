//! Agent tick loop
//!
//! The host calls `on_tick` once per simulation step and blocks on the
//! returned command. All mutable state lives in one owned `AgentState`
//! threaded through the call, so a tick is a pure function of (state,
//! snapshot, track, pads). Nothing here blocks, sleeps, or panics; a bad
//! tick degrades to the neutral command.

use super::classifier::{classify, TacticalState};
use super::aerial::AerialController;
use super::boost_pads::BoostPadRegistry;
use super::control::Controls;
use super::dribble::DribbleController;
use super::executor;
use super::maneuvers;
use super::physics_constants::{intercept, tick};
use super::prediction::{find_intercept, HeightBand, Trajectory};
use super::recovery;
use super::sequence::{Sequence, SequenceTick};
use super::snapshot::{Team, WorldSnapshot};

/// Everything the agent carries between ticks
#[derive(Debug, Default)]
pub struct AgentState {
    /// At most one maneuver is in flight at any time; callers must check
    /// before installing another
    pub active_sequence: Option<Sequence>,
    pub aerial: AerialController,
    pub dribble: DribbleController,
    /// Match time the last flip maneuver started
    pub last_flip_time: f32,
    last_tick_time: Option<f32>,
}

impl AgentState {
    /// Install a maneuver and play its first tick. The one-active-sequence
    /// invariant is enforced by construction: every call site checks
    /// `active_sequence` first.
    pub fn start_sequence(&mut self, mut sequence: Sequence) -> Controls {
        debug_assert!(
            self.active_sequence.is_none(),
            "a maneuver sequence is already active"
        );
        let controls = match sequence.tick(0.0) {
            SequenceTick::Step(controls) => controls,
            SequenceTick::Done => Controls::neutral(),
        };
        if !sequence.is_done() {
            self.active_sequence = Some(sequence);
        }
        controls
    }

    /// Elapsed time since the previous tick, from the match clock
    fn advance_clock(&mut self, now: f32) -> f32 {
        let dt = match self.last_tick_time {
            Some(last) => (now - last).clamp(0.0, tick::MAX_DT),
            None => tick::DEFAULT_DT,
        };
        self.last_tick_time = Some(now);
        dt
    }
}

pub struct Agent {
    pub team: Team,
    pub state: AgentState,
}

impl Agent {
    pub fn new(team: Team) -> Self {
        log::info!("agent initialized for team {:?}", team);
        Self {
            team,
            state: AgentState::default(),
        }
    }

    /// One control computation. Called at the host cadence; must return
    /// within the tick budget and always yields a valid command.
    pub fn on_tick(
        &mut self,
        snap: &WorldSnapshot,
        track: &Trajectory,
        pads: &BoostPadRegistry,
    ) -> Controls {
        if let Err(err) = snap.validate() {
            log::warn!("degrading to neutral controls: {err}");
            return Controls::neutral();
        }
        let dt = self.state.advance_clock(snap.time);

        // an in-flight maneuver owns the tick; classification is skipped
        if let Some(sequence) = self.state.active_sequence.as_mut() {
            match sequence.tick(dt) {
                SequenceTick::Step(controls) => return controls.clamped(),
                // exhausted sequences are discarded, never reused
                SequenceTick::Done => self.state.active_sequence = None,
            }
        }

        if snap.kickoff {
            log::debug!("kickoff flip at t={:.2}", snap.time);
            return self.state.start_sequence(maneuvers::kickoff_flip()).clamped();
        }

        let intercept_sample = find_intercept(
            snap.car.position,
            snap.car.speed(),
            track,
            HeightBand::GROUND,
            intercept::DEFAULT_HORIZON,
        );
        let state = classify(snap, intercept_sample);
        log::trace!("tactical state {:?} at t={:.2}", state, snap.time);

        // airborne with nothing driving the air: level out for the landing.
        // AttackAerial and WallPlay own their airborne behavior.
        if !snap.car.wheel_contact
            && self.state.aerial.is_idle()
            && !matches!(state, TacticalState::AttackAerial | TacticalState::WallPlay)
        {
            return recovery::level_out(snap).clamped();
        }

        executor::execute(state, snap, track, pads, &mut self.state).clamped()
    }
}
