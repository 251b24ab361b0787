//! Spin timing profiles

use serde::{Deserialize, Serialize};

/// Timing profile for a spin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpinProfile {
    /// Normal gameplay timing
    Normal,
    /// Fast mode
    Turbo,
    /// Near-instant, for tests and automation
    Studio,
    /// Custom timing
    Custom,
}

impl Default for SpinProfile {
    fn default() -> Self {
        Self::Normal
    }
}

/// Timing configuration for one spin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinTimingConfig {
    /// Profile type
    pub profile: SpinProfile,

    /// Animation duration (ms)
    pub spin_duration_ms: f64,

    /// Full pre-spin revolutions before settling
    pub base_rotations: u32,

    /// Cooperative tick interval (ms)
    pub tick_interval_ms: f64,

    /// How many recent winners the selector avoids
    pub avoid_repeat_count: usize,
}

impl SpinTimingConfig {
    /// Normal gameplay timing
    pub fn normal() -> Self {
        Self {
            profile: SpinProfile::Normal,
            spin_duration_ms: 4000.0,
            base_rotations: 5,
            tick_interval_ms: 16.0,
            avoid_repeat_count: 2,
        }
    }

    /// Fast mode
    pub fn turbo() -> Self {
        Self {
            profile: SpinProfile::Turbo,
            spin_duration_ms: 1500.0,
            base_rotations: 3,
            tick_interval_ms: 16.0,
            avoid_repeat_count: 2,
        }
    }

    /// Near-instant mode for tests
    pub fn studio() -> Self {
        Self {
            profile: SpinProfile::Studio,
            spin_duration_ms: 40.0,
            base_rotations: 1,
            tick_interval_ms: 4.0,
            avoid_repeat_count: 2,
        }
    }

    /// Get config for profile
    pub fn from_profile(profile: SpinProfile) -> Self {
        match profile {
            SpinProfile::Normal => Self::normal(),
            SpinProfile::Turbo => Self::turbo(),
            SpinProfile::Studio => Self::studio(),
            SpinProfile::Custom => Self::normal(),
        }
    }

    /// Scale durations by factor (< 1.0 = faster); rotations and avoid
    /// count are left alone.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            profile: SpinProfile::Custom,
            spin_duration_ms: self.spin_duration_ms * factor,
            base_rotations: self.base_rotations,
            tick_interval_ms: (self.tick_interval_ms * factor).max(1.0),
            avoid_repeat_count: self.avoid_repeat_count,
        }
    }
}

impl Default for SpinTimingConfig {
    fn default() -> Self {
        Self::normal()
    }
}
