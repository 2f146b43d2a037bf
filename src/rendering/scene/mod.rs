pub mod scene;
pub mod ship;

pub use scene::{SceneAssets, ScenePlugin};
pub use ship::build_ship_mesh;
