//! Central system ordering labels to make the frame sequence explicit.
//! Stages (high-level):
//! 1. ShipInput (Update): key presses edit the ship / spawn bullets
//! 2. SimulationTick (FixedUpdate): integrate, collide, decay timers
//! 3. RenderSync (Update, after input): mirror the world into visuals
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct ShipInputSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct SimulationTickSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct RenderSyncSet; // read-only view of SpaceWorld
