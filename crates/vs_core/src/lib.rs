//! # vs_core - Deterministic Vehicle-Soccer Bot Decision Core
//!
//! Hierarchical behavior engine for an autonomous vehicle-soccer agent.
//! Each simulation tick the host hands over a physics snapshot and a
//! predicted ball trajectory; the core classifies the situation, dispatches
//! the matching tactical logic and returns a single control command, all
//! synchronously inside the call.
//!
//! ## Guarantees
//! - Deterministic: identical input streams replay to identical commands
//! - Single-threaded and non-blocking; one command per tick, always
//! - No hidden clocks: every cooldown runs on the host's match clock

pub mod engine;
pub mod error;

pub use engine::{
    Agent, AgentState, BoostPadRegistry, Controls, TacticalState, Team, Trajectory,
    TrajectorySample, WorldSnapshot,
};
pub use error::{CoreError, Result};
