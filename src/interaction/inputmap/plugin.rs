use bevy::prelude::*;
use std::path::Path;

use super::parse::parse_bindings_toml;
use super::types::InputBindings;

pub const DEFAULT_INPUT_CONFIG: &str = "assets/config/input.toml";

pub struct InputBindingsPlugin;
impl Plugin for InputBindingsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputBindings>()
            .add_systems(PreStartup, load_input_bindings);
    }
}

fn load_input_bindings(mut commands: Commands) {
    let path = std::env::var("INPUT_CONFIG_PATH").unwrap_or_else(|_| DEFAULT_INPUT_CONFIG.into());
    if !Path::new(&path).exists() {
        info!("Input bindings: {path} not found, using defaults");
        return;
    }
    let raw = match std::fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) => {
            error!("INPUT BINDINGS ERROR: read {path}: {e}");
            return;
        }
    };
    let parsed = parse_bindings_toml(&raw);
    for e in &parsed.errors {
        error!("INPUT BINDINGS ERROR: {e}");
    }
    info!(
        "Input bindings loaded from {path}: {} actions",
        parsed.bindings.by_action.len()
    );
    commands.insert_resource(parsed.bindings);
}
