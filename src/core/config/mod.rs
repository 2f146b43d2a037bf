pub mod config;

pub use config::{
    report_config_diagnostics, ConfigDiagnostics, GameConfig, MotionTunables, ScoringTunables,
    ShipTunables, SpawnConfig, TickConfig, Tunables, WindowConfig,
};
