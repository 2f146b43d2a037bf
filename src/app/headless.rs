//! Windowless runner: drives the pure simulation for a fixed number of ticks.
use rand::{rngs::StdRng, SeedableRng};

use crate::core::config::GameConfig;
use crate::gameplay::tick::tick;
use crate::gameplay::world::SpaceWorld;

#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessSummary {
    pub ticks: u64,
    pub score: u32,
    pub level: u32,
    pub health: i32,
    pub asteroids_left: usize,
    pub explosions: usize,
    /// Tick on which health reached zero, if it did.
    pub game_over_at: Option<u64>,
}

impl HeadlessSummary {
    fn of(world: &SpaceWorld, game_over_at: Option<u64>) -> Self {
        Self {
            ticks: world.ticks,
            score: world.score,
            level: world.level,
            health: world.health,
            asteroids_left: world.asteroids.len(),
            explosions: world.explosions.len(),
            game_over_at,
        }
    }
}

/// Populate a world from `cfg` and tick it `ticks` times. No input is
/// applied, so the ship sits at its start position.
pub fn run_headless(cfg: &GameConfig, ticks: u64) -> HeadlessSummary {
    let mut rng = match cfg.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let mut world = SpaceWorld::new(cfg.tunables.clone());
    world.populate(cfg.spawn.stars, cfg.spawn.asteroids, &mut rng);
    let mut game_over_at = None;
    for _ in 0..ticks {
        tick(&mut world, &mut rng);
        if game_over_at.is_none() && world.is_game_over() {
            game_over_at = Some(world.ticks);
        }
    }
    HeadlessSummary::of(&world, game_over_at)
}
