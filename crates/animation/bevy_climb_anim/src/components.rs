use bevy::prelude::*;
use climb_anim_core::{CharacterAnimDriver, DriverConfig, FrameInputs, FrameReport, ParameterStore};

/// Animation driver for one character, over an in-memory parameter store
/// the render side reads blend values and triggers from.
#[derive(Component, Debug)]
pub struct CharacterAnimator(pub CharacterAnimDriver<ParameterStore>);

impl CharacterAnimator {
    pub fn new(cfg: DriverConfig) -> Self {
        Self(CharacterAnimDriver::new(
            ParameterStore::with_character_params(),
            cfg,
        ))
    }
}

impl Default for CharacterAnimator {
    fn default() -> Self {
        Self::new(DriverConfig::default())
    }
}

/// Gameplay flags for the current frame, written by movement / ledge systems.
#[derive(Component, Debug, Clone, Default)]
pub struct CharacterFlags(pub FrameInputs);

/// What the driver did on the last frame.
#[derive(Component, Debug, Clone, Default)]
pub struct LastFrameReport(pub FrameReport);
