use bevy::prelude::*;
use rand::Rng;

use super::entities::{Asteroid, Bullet, Explosion, ProjectionMode, Ship, Star};
use super::generate::{generate_asteroids, generate_stars};
use crate::core::config::Tunables;

/// The whole simulation: four ordered stores plus the ship and counters.
/// Mutated only by the input handler and the fixed tick.
#[derive(Resource, Debug, Clone)]
pub struct SpaceWorld {
    pub ship: Ship,
    pub stars: Vec<Star>,
    pub asteroids: Vec<Asteroid>,
    pub bullets: Vec<Bullet>,
    pub explosions: Vec<Explosion>,
    pub score: u32,
    pub health: i32,
    pub level: u32,
    /// Ticks left of the red hit flash.
    pub flash_timer: u32,
    pub camera_shake: f32,
    pub projection: ProjectionMode,
    /// Ticks run since startup, including frozen ones after game over.
    pub ticks: u64,
    pub tunables: Tunables,
}

impl SpaceWorld {
    /// Empty stores; the ship at its start position with full health.
    pub fn new(tunables: Tunables) -> Self {
        Self {
            ship: Ship::at(Vec3::from_array(tunables.ship.start)),
            stars: Vec::new(),
            asteroids: Vec::new(),
            bullets: Vec::new(),
            explosions: Vec::new(),
            score: 0,
            health: tunables.ship.health,
            level: 1,
            flash_timer: 0,
            camera_shake: 0.0,
            projection: ProjectionMode::default(),
            ticks: 0,
            tunables,
        }
    }

    pub fn populate<R: Rng + ?Sized>(&mut self, stars: usize, asteroids: usize, rng: &mut R) {
        generate_stars(&mut self.stars, stars, rng);
        generate_asteroids(&mut self.asteroids, asteroids, rng);
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.health <= 0
    }

    #[inline]
    pub fn is_flashing(&self) -> bool {
        self.flash_timer > 0
    }

    pub fn spawn_explosion(&mut self, position: Vec3) {
        let motion = &self.tunables.motion;
        self.explosions.push(Explosion::new(
            position,
            motion.explosion_life,
            motion.explosion_start_size,
        ));
    }

    pub fn fire_bullet(&mut self) {
        let bullet = Bullet::fired_from(self.ship.position, self.tunables.motion.bullet_speed);
        self.bullets.push(bullet);
    }
}

impl Default for SpaceWorld {
    fn default() -> Self {
        Self::new(Tunables::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn starts_with_documented_counters() {
        let world = SpaceWorld::default();
        assert_eq!(world.ship.position, Vec3::new(0.0, 0.0, -5.0));
        assert_eq!(world.health, 3);
        assert_eq!(world.level, 1);
        assert_eq!(world.score, 0);
        assert!(!world.is_game_over());
        assert!(!world.is_flashing());
    }

    #[test]
    fn populate_fills_fixed_counts() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut world = SpaceWorld::default();
        world.populate(200, 60, &mut rng);
        assert_eq!(world.stars.len(), 200);
        assert_eq!(world.asteroids.len(), 60);
        assert!(world.bullets.is_empty());
        assert!(world.explosions.is_empty());
    }

    #[test]
    fn fired_bullet_ignores_ship_rotation() {
        let mut world = SpaceWorld::default();
        world.ship.rotate_x = 45.0;
        world.ship.rotate_y = -30.0;
        world.fire_bullet();
        assert_eq!(world.bullets[0].position, world.ship.position);
        assert_eq!(world.bullets[0].velocity, Vec3::new(0.0, 0.0, -0.5));
    }
}
