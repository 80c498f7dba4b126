//! The per-tick decision engine
//!
//! Data flow for one tick: telemetry → `WorldSnapshot` → (active maneuver
//! resumes and returns) → `classify` picks a `TacticalState` → the executor
//! dispatches to state logic, which may consult the intercept solver, hand
//! the tick to the aerial or dribble controller, or synthesize a command
//! directly → `Controls` out.

pub mod aerial;
pub mod agent;
pub mod boost_pads;
pub mod carry;
pub mod classifier;
pub mod control;
pub mod dribble;
pub mod executor;
pub mod maneuvers;
pub mod math;
pub mod physics_constants;
pub mod prediction;
pub mod recovery;
pub mod sequence;
pub mod snapshot;
pub mod steering;

pub use aerial::{AerialController, AerialPhase};
pub use agent::{Agent, AgentState};
pub use boost_pads::{BoostPad, BoostPadRegistry};
pub use classifier::{classify, TacticalState};
pub use control::Controls;
pub use dribble::{DribbleController, DribbleOutcome};
pub use math::Vec3;
pub use prediction::{Trajectory, TrajectorySample};
pub use sequence::{ControlStep, Sequence, SequenceTick};
pub use snapshot::{BallState, OpponentState, Team, VehicleState, WorldSnapshot};
