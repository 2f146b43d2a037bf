#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
#[derive(Resource)]
pub struct DebugState {
    /// Periodic `SIM` log lines; F1 toggles.
    pub logging_enabled: bool,
    pub log_interval: f32,
    pub time_accum: f32,
    pub frame_counter: u64,
}

#[cfg(feature = "debug")]
impl Default for DebugState {
    fn default() -> Self {
        Self {
            logging_enabled: true,
            log_interval: 1.0,
            time_accum: 0.0,
            frame_counter: 0,
        }
    }
}

#[cfg(feature = "debug")]
#[derive(Resource, Default, Debug, Clone)]
pub struct DebugStats {
    pub fps: f32,
    pub frame_time_ms: f32,
    pub sim_ticks: u64,
    pub stars: usize,
    pub asteroids: usize,
    pub bullets: usize,
    pub explosions: usize,
}
