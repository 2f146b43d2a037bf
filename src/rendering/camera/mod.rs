pub mod camera;

pub use camera::{camera_eye, projection_for, shake_offset, CameraPlugin, ShakeRng};
