//! Locomotion blend values derived from the character's speed tier.

use serde::{Deserialize, Serialize};

/// Values for the `IdleWalkBlend` and `JumpBlend` graph floats.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LocomotionBlend {
    /// 0 = idle, 1 = walking, 2 = jogging.
    pub idle_walk: f32,
    /// 0 = standing jump, 1 = running jump.
    pub jump: f32,
}

impl LocomotionBlend {
    pub const IDLE: Self = Self {
        idle_walk: 0.0,
        jump: 0.0,
    };
    pub const WALK: Self = Self {
        idle_walk: 1.0,
        jump: 0.0,
    };
    pub const JOG: Self = Self {
        idle_walk: 2.0,
        jump: 1.0,
    };

    /// Classify `speed` against the walk and jog thresholds.
    ///
    /// The jog threshold is tested first, so with misordered thresholds
    /// (`jog_speed < walk_speed`) anything at or above jog speed still jogs.
    pub fn from_speed(speed: f32, walk_speed: f32, jog_speed: f32) -> Self {
        if speed >= jog_speed {
            Self::JOG
        } else if speed >= walk_speed {
            Self::WALK
        } else {
            Self::IDLE
        }
    }
}
