use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 600.0,
            title: "Retro Space Navigator FINAL".into(),
            auto_close: 0.0,
        }
    }
}

/// Store sizes used when the world is first populated.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpawnConfig {
    pub stars: usize,
    pub asteroids: usize,
}
impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            stars: 200,
            asteroids: 60,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TickConfig {
    /// Fixed simulation cadence in seconds.
    pub seconds: f64,
}
impl Default for TickConfig {
    fn default() -> Self {
        Self { seconds: 0.016 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ShipTunables {
    pub start: [f32; 3],
    pub move_step: f32,
    pub rotate_step_deg: f32,
    pub hit_radius: f32,
    pub health: i32,
}
impl Default for ShipTunables {
    fn default() -> Self {
        Self {
            start: [0.0, 0.0, -5.0],
            move_step: 0.8,
            rotate_step_deg: 5.0,
            hit_radius: 0.3,
            health: 3,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MotionTunables {
    pub star_speed: f32,
    pub bullet_speed: f32,
    pub explosion_life: f32,
    pub explosion_start_size: f32,
    pub explosion_growth: f32,
}
impl Default for MotionTunables {
    fn default() -> Self {
        Self {
            star_speed: 0.1,
            bullet_speed: 0.5,
            explosion_life: 30.0,
            explosion_start_size: 0.1,
            explosion_growth: 0.005,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ScoringTunables {
    pub points_per_asteroid: u32,
    pub level_threshold: u32,
    pub level_speed_multiplier: f32,
    pub flash_ticks: u32,
    pub hit_shake: f32,
    pub shake_decay: f32,
}
impl Default for ScoringTunables {
    fn default() -> Self {
        Self {
            points_per_asteroid: 10,
            level_threshold: 100,
            level_speed_multiplier: 1.1,
            flash_ticks: 30,
            hit_shake: 0.5,
            shake_decay: 0.95,
        }
    }
}

/// Gameplay constants copied into the simulation world at startup.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Tunables {
    pub ship: ShipTunables,
    pub motion: MotionTunables,
    pub scoring: ScoringTunables,
}

#[derive(Debug, Deserialize, Resource, Clone, Default, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub spawn: SpawnConfig,
    pub tick: TickConfig,
    pub tunables: Tunables,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    /// Merge RON layers in order (later keys win) and deserialize the result.
    /// Returns the config, the paths that were applied and any per-layer errors.
    /// Every error message starts with the path of the layer that caused it.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        if let Some((_, ev)) = bm.iter_mut().find(|(ek, _)| **ek == k) {
                            merge_value(ev, v);
                            continue;
                        }
                        bm.insert(k, v);
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        let candidate = match merged.clone() {
                            Some(mut cur) => {
                                merge_value(&mut cur, val);
                                cur
                            }
                            None => val,
                        };
                        // A layer that parses but has the wrong shape is rejected on its own.
                        if let Err(e) = candidate.clone().into_rust::<GameConfig>() {
                            errors.push(format!("{}: invalid config: {e}", path_ref.display()));
                            continue;
                        }
                        merged = Some(candidate);
                        used.push(path_ref.display().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        let Some(val) = merged else {
            return (GameConfig::default(), used, errors);
        };
        match val.into_rust::<GameConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!(
                    "failed to deserialize merged config; using defaults: {e}"
                ));
                (GameConfig::default(), used, errors)
            }
        }
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        if self.spawn.stars == 0 {
            w.push("spawn.stars is 0; the starfield will be empty".into());
        }
        if self.spawn.asteroids == 0 {
            w.push("spawn.asteroids is 0; nothing to shoot".into());
        }
        if self.spawn.stars + self.spawn.asteroids > 20_000 {
            w.push(format!(
                "spawn counts very high (stars={} asteroids={}); collision checks are O(n*m)",
                self.spawn.stars, self.spawn.asteroids
            ));
        }
        if self.tick.seconds <= 0.0 {
            w.push(format!("tick.seconds {} must be > 0", self.tick.seconds));
        } else if self.tick.seconds > 0.25 {
            w.push(format!(
                "tick.seconds {} very slow; gameplay will stutter",
                self.tick.seconds
            ));
        }
        let ship = &self.tunables.ship;
        if ship.health <= 0 {
            w.push(format!(
                "ship.health {} <= 0 -> game starts already over",
                ship.health
            ));
        }
        if ship.hit_radius < 0.0 {
            w.push("ship.hit_radius negative".into());
        }
        if ship.move_step <= 0.0 {
            w.push("ship.move_step must be > 0".into());
        }
        let motion = &self.tunables.motion;
        if motion.star_speed <= 0.0 {
            w.push("motion.star_speed must be > 0 (stars would never recycle)".into());
        }
        if motion.bullet_speed <= 0.0 {
            w.push("motion.bullet_speed must be > 0".into());
        }
        if motion.explosion_life < 1.0 {
            w.push(format!(
                "motion.explosion_life {} < 1 -> explosions vanish on the next tick",
                motion.explosion_life
            ));
        }
        let scoring = &self.tunables.scoring;
        if scoring.level_threshold == 0 {
            w.push("scoring.level_threshold is 0; level would advance every tick".into());
        }
        if scoring.level_speed_multiplier < 1.0 {
            w.push(format!(
                "scoring.level_speed_multiplier {} < 1 slows asteroids on level-up",
                scoring.level_speed_multiplier
            ));
        }
        if !(0.0..1.0).contains(&scoring.shake_decay) {
            w.push(format!(
                "scoring.shake_decay {} outside 0..1; camera shake will not settle",
                scoring.shake_decay
            ));
        }
        w
    }
}

/// Outcome of config loading, logged once the log plugin is up.
#[derive(Resource, Debug, Default, Clone)]
pub struct ConfigDiagnostics {
    pub used: Vec<String>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

pub fn report_config_diagnostics(diag: Option<Res<ConfigDiagnostics>>) {
    let Some(diag) = diag else {
        return;
    };
    if diag.used.is_empty() {
        info!("config: no files applied, using built-in defaults");
    } else {
        info!(layers = ?diag.used, "config: loaded");
    }
    for e in &diag.errors {
        error!("config: {e}");
    }
    for w in &diag.warnings {
        warn!("config: {w}");
    }
}
