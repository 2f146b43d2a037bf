use bevy::prelude::*;

use super::actions::{apply_action, ActionOutcome};
use crate::core::system::system_order::ShipInputSet;
use crate::gameplay::world::SpaceWorld;
use crate::interaction::inputmap::types::InputBindings;

pub struct ShipInputPlugin;

impl Plugin for ShipInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, ship_input_system.in_set(ShipInputSet));
    }
}

/// Applies every action whose key went down this frame. Key repeat is not
/// modelled; holding a key moves the ship once.
pub fn ship_input_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<InputBindings>,
    world: Option<ResMut<SpaceWorld>>,
    mut exit: EventWriter<AppExit>,
) {
    let Some(mut world) = world else {
        return;
    };
    for action in bindings.just_pressed(&keyboard) {
        match apply_action(&mut world, action) {
            ActionOutcome::ExitRequested => {
                info!("exit requested from keyboard");
                exit.write(AppExit::Success);
                return;
            }
            ActionOutcome::Applied | ActionOutcome::Ignored => {}
        }
    }
}
