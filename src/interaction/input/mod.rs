pub mod actions;
pub mod systems;

pub use actions::{apply_action, ActionOutcome, ShipAction};
pub use systems::{ship_input_system, ShipInputPlugin};
