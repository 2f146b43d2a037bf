#![cfg(feature = "debug")]
use bevy::prelude::*;
use space_navigator::debug::keys::{debug_key_input_system, TOGGLE_LOGGING_KEY};
use space_navigator::debug::DebugState;

#[test]
fn f1_toggles_stats_logging() {
    let mut app = App::new();
    // Insert only the resources we need.
    app.insert_resource(ButtonInput::<KeyCode>::default());
    app.init_resource::<DebugState>();
    app.add_systems(Update, debug_key_input_system);

    assert!(app.world().resource::<DebugState>().logging_enabled);
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(TOGGLE_LOGGING_KEY);
    app.update();
    assert!(!app.world().resource::<DebugState>().logging_enabled);

    {
        let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        input.release(TOGGLE_LOGGING_KEY);
        input.clear();
        input.press(TOGGLE_LOGGING_KEY);
    }
    app.update();
    assert!(app.world().resource::<DebugState>().logging_enabled);
}
