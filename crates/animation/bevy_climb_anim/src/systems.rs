use bevy::prelude::*;

use crate::components::{CharacterAnimator, CharacterFlags, LastFrameReport};
use crate::resources::ClimbAnimSettings;

/// Keep every driver on the shared settings, including characters spawned
/// after the settings last changed.
pub fn sync_driver_settings_system(
    settings: Res<ClimbAnimSettings>,
    mut q: Query<&mut CharacterAnimator>,
) {
    for mut anim in q.iter_mut() {
        if anim.0.config() != &settings.0 {
            anim.0.set_config(settings.0.clone());
        }
    }
}

/// Per-frame driver update: apply flags, run the driver, record the report.
/// Animator errors are logged and the character is skipped for this frame.
pub fn drive_character_animation_system(
    mut commands: Commands,
    mut q: Query<(
        Entity,
        &mut CharacterAnimator,
        &CharacterFlags,
        Option<&mut LastFrameReport>,
    )>,
) {
    for (entity, mut anim, flags, report_slot) in q.iter_mut() {
        if let Err(err) = anim.0.apply_inputs(&flags.0) {
            warn!("climb-anim: {entity:?} rejected flags: {err}");
            continue;
        }
        let report = match anim.0.update() {
            Ok(report) => report,
            Err(err) => {
                warn!("climb-anim: {entity:?} update failed: {err}");
                continue;
            }
        };
        if report.fired_any() {
            debug!("climb-anim: {entity:?} fired {:?}", report.fired_names());
        }
        match report_slot {
            Some(mut slot) => slot.0 = report,
            None => {
                commands.entity(entity).insert(LastFrameReport(report));
            }
        }
    }
}
