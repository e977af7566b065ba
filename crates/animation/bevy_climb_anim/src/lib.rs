//! Bevy plugin wrapping the climb-anim core.
//!
//! Spawn a character with [`CharacterAnimator`] and [`CharacterFlags`];
//! gameplay systems write the flags, and [`ClimbAnimPlugin`] runs the driver
//! once per frame in `Update`, storing the result in [`LastFrameReport`].

pub mod components;
pub mod resources;
pub mod systems;

use bevy::prelude::*;

pub use components::{CharacterAnimator, CharacterFlags, LastFrameReport};
pub use resources::ClimbAnimSettings;

/// System set containing the per-frame driver update. Order gameplay systems
/// that write [`CharacterFlags`] before it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClimbAnimSet;

#[derive(Default)]
pub struct ClimbAnimPlugin {
    pub settings: ClimbAnimSettings,
}

impl Plugin for ClimbAnimPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.settings.clone()).add_systems(
            Update,
            (
                systems::sync_driver_settings_system,
                systems::drive_character_animation_system,
            )
                .chain()
                .in_set(ClimbAnimSet),
        );
    }
}
