#[cfg(feature = "debug")]
use super::modes::DebugState;
#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
pub const TOGGLE_LOGGING_KEY: KeyCode = KeyCode::F1;

#[cfg(feature = "debug")]
pub fn debug_key_input_system(keys: Res<ButtonInput<KeyCode>>, mut state: ResMut<DebugState>) {
    if keys.just_pressed(TOGGLE_LOGGING_KEY) {
        state.logging_enabled = !state.logging_enabled;
        info!(enabled = state.logging_enabled, "debug stats logging toggled");
    }
}
