//! Boost-pad registry
//!
//! Pad positions are fixed field furniture; only the active flags change,
//! refreshed from telemetry by the host each tick. The core treats the
//! registry as read-only and tolerates every pad being taken.

use serde::{Deserialize, Serialize};

use super::math::{distance, Vec3};

/// The six full-boost pad locations
const FULL_PADS: [(f32, f32); 6] = [
    (-3584.0, 0.0),
    (3584.0, 0.0),
    (-3072.0, -4096.0),
    (3072.0, -4096.0),
    (-3072.0, 4096.0),
    (3072.0, 4096.0),
];

/// Height of pad pickup centers (uu)
const PAD_HEIGHT: f32 = 73.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoostPad {
    pub location: Vec3,
    pub is_full_boost: bool,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoostPadRegistry {
    pads: Vec<BoostPad>,
}

impl BoostPadRegistry {
    /// Registry seeded with the standard full-boost pads, all active
    pub fn standard_field() -> Self {
        let pads = FULL_PADS
            .iter()
            .map(|&(x, y)| BoostPad {
                location: Vec3::new(x, y, PAD_HEIGHT),
                is_full_boost: true,
                is_active: true,
            })
            .collect();
        Self { pads }
    }

    pub fn from_pads(pads: Vec<BoostPad>) -> Self {
        Self { pads }
    }

    pub fn pads(&self) -> &[BoostPad] {
        &self.pads
    }

    /// Host-side refresh of one pad's availability
    pub fn set_active(&mut self, index: usize, active: bool) {
        if let Some(pad) = self.pads.get_mut(index) {
            pad.is_active = active;
        }
    }

    /// Nearest active pad, full-boost pads first. `None` when everything is
    /// on cooldown; the caller falls back to neutral controls.
    pub fn best_pad(&self, from: Vec3) -> Option<&BoostPad> {
        let nearest = |full: bool| {
            self.pads
                .iter()
                .filter(|p| p.is_active && p.is_full_boost == full)
                .min_by(|a, b| {
                    distance(from, a.location)
                        .partial_cmp(&distance(from, b.location))
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
        };
        nearest(true).or_else(|| nearest(false))
    }
}
