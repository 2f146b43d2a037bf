use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use bevy::prelude::*;
use clap::Parser;

use space_navigator::core::config::ConfigDiagnostics;
use space_navigator::{run_headless, GameConfig, GamePlugin};

const BASE_CONFIG: &str = "assets/config/game.ron";

#[derive(Parser, Debug)]
#[command(about = "Retro 3D space navigator: dodge and shoot drifting asteroids", version)]
struct Args {
    /// Extra RON layers applied over assets/config/game.ron, in order.
    #[arg(long = "config")]
    configs: Vec<PathBuf>,
    /// Fixed RNG seed for a reproducible field.
    #[arg(long)]
    seed: Option<u64>,
    /// Simulation tick in milliseconds.
    #[arg(long)]
    tick_ms: Option<f64>,
    /// Exit after this many seconds.
    #[arg(long)]
    auto_close: Option<f32>,
    /// Run this many ticks without a window, print a summary and exit.
    #[arg(long)]
    headless: Option<u64>,
}

fn load_config(args: &Args) -> Result<(GameConfig, ConfigDiagnostics)> {
    let mut layers: Vec<PathBuf> = Vec::new();
    if Path::new(BASE_CONFIG).exists() {
        layers.push(BASE_CONFIG.into());
    }
    layers.extend(args.configs.iter().cloned());
    let (mut cfg, used, errors) = GameConfig::load_layered(&layers);
    let explicit: Vec<&String> = errors
        .iter()
        .filter(|e| {
            args.configs
                .iter()
                .any(|p| e.starts_with(&p.display().to_string()))
        })
        .collect();
    if !explicit.is_empty() {
        bail!(
            "failed to load requested config: {}",
            explicit
                .iter()
                .map(|e| e.as_str())
                .collect::<Vec<_>>()
                .join("; ")
        );
    }
    if let Some(seed) = args.seed {
        cfg.seed = Some(seed);
    }
    if let Some(ms) = args.tick_ms {
        cfg.tick.seconds = ms / 1000.0;
    }
    if let Some(secs) = args.auto_close {
        cfg.window.auto_close = secs;
    }
    if !(cfg.tick.seconds.is_finite() && cfg.tick.seconds > 0.0) {
        bail!(
            "simulation tick must be a positive number of seconds, got {}",
            cfg.tick.seconds
        );
    }
    let warnings = cfg.validate();
    Ok((
        cfg,
        ConfigDiagnostics {
            used,
            errors,
            warnings,
        },
    ))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let (cfg, diag) = load_config(&args)?;

    if let Some(ticks) = args.headless {
        for e in &diag.errors {
            eprintln!("config error: {e}");
        }
        for w in &diag.warnings {
            eprintln!("config warning: {w}");
        }
        let s = run_headless(&cfg, ticks);
        println!(
            "headless: ticks={} score={} level={} health={} asteroids_left={} explosions={} game_over_at={:?}",
            s.ticks, s.score, s.level, s.health, s.asteroids_left, s.explosions, s.game_over_at
        );
        return Ok(());
    }

    App::new()
        .insert_resource(diag)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(cfg)
        .add_plugins(GamePlugin)
        .run();
    Ok(())
}
