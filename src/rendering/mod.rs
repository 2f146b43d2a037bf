//! Bevy glue that draws `SpaceWorld`; reads the simulation, never mutates it.
pub mod camera;
pub mod hud;
pub mod scene;

pub use camera::CameraPlugin;
pub use hud::HudPlugin;
pub use scene::ScenePlugin;
