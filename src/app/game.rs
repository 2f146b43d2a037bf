// This file is part of Space Navigator.
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::core::config::report_config_diagnostics;
use crate::core::system::system_order::{RenderSyncSet, ShipInputSet};
use crate::debug::DebugPlugin;
use crate::gameplay::tick::SimulationPlugin;
use crate::interaction::input::systems::ShipInputPlugin;
use crate::interaction::inputmap::plugin::InputBindingsPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::rendering::camera::camera::CameraPlugin;
use crate::rendering::hud::hud::HudPlugin;
use crate::rendering::scene::scene::ScenePlugin;

/// Everything the windowed game needs on top of `DefaultPlugins`.
/// Expects `GameConfig` to be inserted before this plugin is added.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(Update, (ShipInputSet, RenderSyncSet.after(ShipInputSet)))
            .add_systems(Startup, report_config_diagnostics)
            .add_plugins((
                SimulationPlugin,
                InputBindingsPlugin,
                ShipInputPlugin,
                CameraPlugin,
                ScenePlugin,
                HudPlugin,
                DebugPlugin,
                AutoClosePlugin,
            ));
    }
}
