use bevy::prelude::*;
use smallvec::{smallvec, SmallVec};
use std::collections::HashMap;

use crate::interaction::input::actions::ShipAction;

pub type KeyList = SmallVec<[KeyCode; 2]>;

/// Key bindings per action. Defaults match the classic layout
/// (WASD/QE move, arrows rotate, space fires, P projection, Esc exits).
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct InputBindings {
    pub by_action: HashMap<ShipAction, KeyList>,
}

impl Default for InputBindings {
    fn default() -> Self {
        let by_action = ShipAction::ALL
            .into_iter()
            .map(|a| (a, default_keys(a)))
            .collect();
        Self { by_action }
    }
}

pub fn default_keys(action: ShipAction) -> KeyList {
    use ShipAction::*;
    match action {
        MoveUp => smallvec![KeyCode::KeyW],
        MoveDown => smallvec![KeyCode::KeyS],
        MoveLeft => smallvec![KeyCode::KeyA],
        MoveRight => smallvec![KeyCode::KeyD],
        MoveBack => smallvec![KeyCode::KeyQ],
        MoveForward => smallvec![KeyCode::KeyE],
        PitchUp => smallvec![KeyCode::ArrowUp],
        PitchDown => smallvec![KeyCode::ArrowDown],
        YawLeft => smallvec![KeyCode::ArrowLeft],
        YawRight => smallvec![KeyCode::ArrowRight],
        Fire => smallvec![KeyCode::Space],
        ToggleProjection => smallvec![KeyCode::KeyP],
        Exit => smallvec![KeyCode::Escape],
    }
}

impl InputBindings {
    pub fn keys(&self, action: ShipAction) -> &[KeyCode] {
        self.by_action
            .get(&action)
            .map(|k| k.as_slice())
            .unwrap_or(&[])
    }

    /// Actions whose key went down this frame, in `ShipAction::ALL` order.
    pub fn just_pressed(&self, keyboard: &ButtonInput<KeyCode>) -> Vec<ShipAction> {
        ShipAction::ALL
            .into_iter()
            .filter(|a| keyboard.any_just_pressed(self.keys(*a).iter().copied()))
            .collect()
    }
}
