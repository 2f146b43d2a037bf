use bevy::prelude::*;

/// Render-side mirror of `SpaceWorld::stars[i]`.
#[derive(Component, Debug, Deref, Copy, Clone)]
pub struct StarSlot(pub usize);

/// Render-side mirror of `SpaceWorld::asteroids[i]`.
#[derive(Component, Debug, Deref, Copy, Clone)]
pub struct AsteroidSlot(pub usize);

/// Render-side mirror of `SpaceWorld::bullets[i]`.
#[derive(Component, Debug, Deref, Copy, Clone)]
pub struct BulletSlot(pub usize);

/// Render-side mirror of `SpaceWorld::explosions[i]`.
#[derive(Component, Debug, Deref, Copy, Clone)]
pub struct ExplosionSlot(pub usize);

/// Marker for the ship mesh entity.
#[derive(Component)]
pub struct ShipVisual;

/// Marker for the chase camera that follows the ship.
#[derive(Component)]
pub struct ShipCamera;
