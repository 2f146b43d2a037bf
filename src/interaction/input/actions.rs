use crate::gameplay::world::SpaceWorld;

/// Discrete player commands; one key press applies one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// +Z, toward the camera.
    MoveBack,
    /// -Z, into the field.
    MoveForward,
    PitchUp,
    PitchDown,
    YawLeft,
    YawRight,
    Fire,
    ToggleProjection,
    Exit,
}

impl ShipAction {
    pub const ALL: [ShipAction; 13] = [
        ShipAction::MoveUp,
        ShipAction::MoveDown,
        ShipAction::MoveLeft,
        ShipAction::MoveRight,
        ShipAction::MoveBack,
        ShipAction::MoveForward,
        ShipAction::PitchUp,
        ShipAction::PitchDown,
        ShipAction::YawLeft,
        ShipAction::YawRight,
        ShipAction::Fire,
        ShipAction::ToggleProjection,
        ShipAction::Exit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::MoveUp => "MoveUp",
            Self::MoveDown => "MoveDown",
            Self::MoveLeft => "MoveLeft",
            Self::MoveRight => "MoveRight",
            Self::MoveBack => "MoveBack",
            Self::MoveForward => "MoveForward",
            Self::PitchUp => "PitchUp",
            Self::PitchDown => "PitchDown",
            Self::YawLeft => "YawLeft",
            Self::YawRight => "YawRight",
            Self::Fire => "Fire",
            Self::ToggleProjection => "ToggleProjection",
            Self::Exit => "Exit",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Game over: every key is ignored.
    Ignored,
    Applied,
    ExitRequested,
}

/// Apply one action to the world. Movement is a direct position edit, there
/// is no velocity model.
pub fn apply_action(world: &mut SpaceWorld, action: ShipAction) -> ActionOutcome {
    if world.is_game_over() {
        return ActionOutcome::Ignored;
    }
    let step = world.tunables.ship.move_step;
    let turn = world.tunables.ship.rotate_step_deg;
    let ship = &mut world.ship;
    match action {
        ShipAction::MoveUp => ship.position.y += step,
        ShipAction::MoveDown => ship.position.y -= step,
        ShipAction::MoveLeft => ship.position.x -= step,
        ShipAction::MoveRight => ship.position.x += step,
        ShipAction::MoveBack => ship.position.z += step,
        ShipAction::MoveForward => ship.position.z -= step,
        ShipAction::PitchUp => ship.rotate_x -= turn,
        ShipAction::PitchDown => ship.rotate_x += turn,
        ShipAction::YawLeft => ship.rotate_y -= turn,
        ShipAction::YawRight => ship.rotate_y += turn,
        ShipAction::Fire => world.fire_bullet(),
        ShipAction::ToggleProjection => world.projection = world.projection.toggled(),
        ShipAction::Exit => return ActionOutcome::ExitRequested,
    }
    ActionOutcome::Applied
}
