pub mod hud;

pub use hud::{hud_text, GameOverBanner, HudField, HudPlugin};
