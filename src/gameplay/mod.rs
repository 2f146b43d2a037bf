//! Windowless simulation: entity stores, generators, integrator, collisions.
pub mod collision;
pub mod entities;
pub mod generate;
pub mod integrate;
pub mod tick;
pub mod world;

pub use collision::{detect_collisions, CollisionReport};
pub use entities::{Asteroid, Bullet, Explosion, ProjectionMode, Ship, Star};
pub use tick::{tick, SimRng, SimulationPlugin};
pub use world::SpaceWorld;
