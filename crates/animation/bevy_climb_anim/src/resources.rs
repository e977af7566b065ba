use bevy::prelude::*;
use climb_anim_core::DriverConfig;

/// Driver configuration shared by every character.
/// Changing it at runtime is pushed into each driver on the next frame.
#[derive(Resource, Debug, Clone, Default)]
pub struct ClimbAnimSettings(pub DriverConfig);
