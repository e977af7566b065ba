use bevy::prelude::*;
use bevy_climb_anim::{
    CharacterAnimator, CharacterFlags, ClimbAnimPlugin, ClimbAnimSettings, LastFrameReport,
};
use climb_anim_core::{
    CharacterAnimDriver, DriverConfig, FrameInputs, GraphState, HangType, ParameterStore,
    TriggerParam,
};

fn app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(ClimbAnimPlugin::default());
    app
}

fn spawn_character(app: &mut App, state: GraphState, flags: FrameInputs) -> Entity {
    let mut anim = CharacterAnimator::default();
    anim.0.animator_mut().set_state(0, state.name());
    app.world_mut().spawn((anim, CharacterFlags(flags))).id()
}

#[test]
fn plugin_inserts_settings_resource() {
    let app = app();
    // it should insert ClimbAnimSettings when the plugin is added
    let settings = app.world().get_resource::<ClimbAnimSettings>();
    assert!(settings.is_some());
    assert_eq!(settings.unwrap().0, DriverConfig::default());
}

#[test]
fn hang_grab_fires_trigger_and_records_report() {
    let mut app = app();
    let e = spawn_character(
        &mut app,
        GraphState::Standing,
        FrameInputs::hanging(HangType::Free),
    );

    app.update();

    let report = app.world().get::<LastFrameReport>(e).expect("report inserted");
    assert_eq!(report.0.state, Some(GraphState::Standing));
    assert_eq!(report.0.fired, vec![TriggerParam::FreeHang]);
    let anim = app.world().get::<CharacterAnimator>(e).unwrap();
    assert!(anim.0.animator().is_trigger_set("FreeHangTrigger"));

    // still hanging: report is updated in place and nothing new fires
    app.update();
    let report = app.world().get::<LastFrameReport>(e).unwrap();
    assert!(report.0.fired.is_empty());
}

#[test]
fn flags_drive_blends_and_params() {
    let mut app = app();
    let e = spawn_character(
        &mut app,
        GraphState::Standing,
        FrameInputs {
            is_grounded: true,
            current_speed: 5.0,
            forward_speed: 5.0,
            ..FrameInputs::default()
        },
    );
    app.update();

    let anim = app.world().get::<CharacterAnimator>(e).unwrap();
    assert!(anim.0.is_grounded().unwrap());
    assert_eq!(anim.0.forward_speed().unwrap(), 5.0);
    assert_eq!(anim.0.idle_walk_blend().unwrap(), 2.0);
    assert_eq!(anim.0.jump_blend().unwrap(), 1.0);

    app.world_mut()
        .get_mut::<CharacterFlags>(e)
        .unwrap()
        .0
        .current_speed = 2.0;
    app.update();
    let anim = app.world().get::<CharacterAnimator>(e).unwrap();
    assert_eq!(anim.0.idle_walk_blend().unwrap(), 1.0);
    assert_eq!(anim.0.jump_blend().unwrap(), 0.0);
}

#[test]
fn settings_changes_reach_drivers() {
    let mut app = app();
    let e = spawn_character(&mut app, GraphState::Standing, FrameInputs::grounded());
    app.update();

    app.world_mut().resource_mut::<ClimbAnimSettings>().0.jog_speed = 9.0;
    app.update();

    let anim = app.world().get::<CharacterAnimator>(e).unwrap();
    assert_eq!(anim.0.config().jog_speed, 9.0);
}

#[test]
fn late_spawned_character_uses_plugin_settings() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(ClimbAnimPlugin {
        settings: ClimbAnimSettings(DriverConfig {
            walk_speed: 3.0,
            ..DriverConfig::default()
        }),
    });
    app.update();
    app.update();

    let e = spawn_character(
        &mut app,
        GraphState::Standing,
        FrameInputs {
            is_grounded: true,
            current_speed: 2.0,
            ..FrameInputs::default()
        },
    );
    app.update();

    let anim = app.world().get::<CharacterAnimator>(e).unwrap();
    assert_eq!(anim.0.config().walk_speed, 3.0);
    // 2.0 is below the configured walk speed
    assert_eq!(anim.0.idle_walk_blend().unwrap(), 0.0);
}

#[test]
fn animator_errors_skip_the_character() {
    let mut app = app();
    // no declared parameters: every write is rejected
    let e = app
        .world_mut()
        .spawn((
            CharacterAnimator(CharacterAnimDriver::new(
                ParameterStore::new(),
                DriverConfig::default(),
            )),
            CharacterFlags::default(),
        ))
        .id();

    app.update();

    assert!(app.world().get::<LastFrameReport>(e).is_none());
}

#[test]
fn scenario_fixture_plays_through_the_plugin() {
    #[derive(serde::Deserialize)]
    struct Frame {
        state: Option<String>,
        #[serde(default)]
        inputs: FrameInputs,
        fired: Vec<String>,
    }
    #[derive(serde::Deserialize)]
    struct Scenario {
        frames: Vec<Frame>,
    }

    let text = climb_anim_fixtures::scenarios::json("free-shimmy-and-drop").unwrap();
    let scenario: Scenario = serde_json::from_str(&text).unwrap();

    let mut app = app();
    let e = app
        .world_mut()
        .spawn((CharacterAnimator::default(), CharacterFlags::default()))
        .id();

    for (i, frame) in scenario.frames.iter().enumerate() {
        {
            let mut anim = app.world_mut().get_mut::<CharacterAnimator>(e).unwrap();
            match &frame.state {
                Some(s) => anim.0.animator_mut().set_state(0, s.clone()),
                None => anim.0.animator_mut().clear_state(0),
            }
            anim.0.animator_mut().take_triggers();
        }
        app.world_mut().get_mut::<CharacterFlags>(e).unwrap().0 = frame.inputs.clone();
        app.update();

        let report = app.world().get::<LastFrameReport>(e).unwrap();
        assert_eq!(report.0.fired_names(), frame.fired, "frame {i}");
    }
}
