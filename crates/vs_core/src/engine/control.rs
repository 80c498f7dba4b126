//! Per-tick control command

use serde::{Deserialize, Serialize};

use super::math::clamp_unit;

/// The single output of one tick. Analog axes are [-1, 1]; the neutral
/// command (all zeros, no buttons) is the fault fallback everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Controls {
    pub throttle: f32,
    pub steer: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
    pub jump: bool,
    pub boost: bool,
    pub handbrake: bool,
}

impl Controls {
    pub fn neutral() -> Self {
        Self::default()
    }

    /// Clamp every analog axis to its legal range. Steer in particular is
    /// hard-clamped again at the agent boundary before the command leaves.
    pub fn clamped(mut self) -> Self {
        self.throttle = clamp_unit(self.throttle);
        self.steer = clamp_unit(self.steer);
        self.pitch = clamp_unit(self.pitch);
        self.yaw = clamp_unit(self.yaw);
        self.roll = clamp_unit(self.roll);
        self
    }
}
