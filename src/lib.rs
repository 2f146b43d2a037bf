pub mod app;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod interaction;
pub mod rendering;

// Curated re-exports
pub use app::game::GamePlugin;
pub use app::headless::{run_headless, HeadlessSummary};
pub use crate::core::config::{GameConfig, WindowConfig};
pub use gameplay::{tick, SpaceWorld};
pub use interaction::input::{apply_action, ActionOutcome, ShipAction};
