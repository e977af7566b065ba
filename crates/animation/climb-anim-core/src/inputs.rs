//! Per-frame gameplay observations fed into the driver.
//!
//! Gameplay code (physics, ledge detection, input) produces these once per
//! frame. [`CharacterAnimDriver::apply_inputs`](crate::driver::CharacterAnimDriver::apply_inputs)
//! pushes them through the driver's setters before [`update`](crate::driver::CharacterAnimDriver::update).

use serde::{Deserialize, Serialize};

use crate::hang::HangType;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameInputs {
    pub is_grounded: bool,
    pub is_crouching: bool,
    pub is_jumping: bool,
    pub is_climbing: bool,
    pub is_strafing_right: bool,
    pub is_strafing_left: bool,
    pub is_falling: bool,
    pub is_hanging: bool,
    pub hang_type: HangType,
    pub is_shimmy_right: bool,
    pub is_shimmy_left: bool,
    /// Current movement speed, compared against the walk/jog thresholds.
    pub current_speed: f32,
    /// Speed along the XZ world plane.
    pub forward_speed: f32,
    /// Velocity along the world Y axis.
    pub y_velocity: f32,
    /// Distance from the feet to the ground.
    pub distance_to_ground: f32,
}

impl FrameInputs {
    /// Grounded and standing still.
    pub fn grounded() -> Self {
        Self {
            is_grounded: true,
            ..Self::default()
        }
    }

    /// Hanging from a ledge with the given grip.
    pub fn hanging(hang_type: HangType) -> Self {
        Self {
            is_hanging: true,
            hang_type,
            ..Self::default()
        }
    }
}
