use bevy::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::collision::{detect_collisions, CollisionReport};
use super::integrate::integrate;
use super::world::SpaceWorld;
use crate::core::config::GameConfig;
use crate::core::system::system_order::SimulationTickSet;

/// RNG that drives generation and recycling; seeded from config when set.
#[derive(Resource, Deref, DerefMut)]
pub struct SimRng(pub StdRng);

impl SimRng {
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self(StdRng::seed_from_u64(s)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

/// One scheduler tick. Gameplay only advances while the ship is alive;
/// the hit flash and camera shake keep decaying either way.
pub fn tick<R: Rng + ?Sized>(world: &mut SpaceWorld, rng: &mut R) -> Option<CollisionReport> {
    world.ticks += 1;
    let report = if world.is_game_over() {
        None
    } else {
        integrate(world, rng);
        Some(detect_collisions(world))
    };
    if world.flash_timer > 0 {
        world.flash_timer -= 1;
    }
    if world.camera_shake > 0.0 {
        world.camera_shake *= world.tunables.scoring.shake_decay;
    }
    report
}

/// `Time<Fixed>` panics on a zero, negative or non-finite step; fall back
/// to the default cadence instead.
pub fn usable_tick_seconds(secs: f64) -> f64 {
    if secs.is_finite() && secs > 0.0 {
        return secs;
    }
    let fallback = GameConfig::default().tick.seconds;
    warn!("tick.seconds {secs} unusable, falling back to {fallback}");
    fallback
}

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let (seed, tick_secs) = app
            .world()
            .get_resource::<GameConfig>()
            .map(|cfg| (cfg.seed, cfg.tick.seconds))
            .unwrap_or((None, GameConfig::default().tick.seconds));
        let tick_secs = usable_tick_seconds(tick_secs);
        app.insert_resource(SimRng::from_seed_option(seed))
            .insert_resource(Time::<Fixed>::from_seconds(tick_secs))
            .add_systems(PreStartup, setup_world)
            .add_systems(
                FixedUpdate,
                run_simulation_tick.in_set(SimulationTickSet),
            );
    }
}

fn setup_world(mut commands: Commands, cfg: Option<Res<GameConfig>>, mut rng: ResMut<SimRng>) {
    let cfg = cfg.as_deref().cloned().unwrap_or_default();
    let mut world = SpaceWorld::new(cfg.tunables.clone());
    world.populate(cfg.spawn.stars, cfg.spawn.asteroids, &mut rng.0);
    info!(
        stars = world.stars.len(),
        asteroids = world.asteroids.len(),
        seed = ?cfg.seed,
        "world populated"
    );
    commands.insert_resource(world);
}

fn run_simulation_tick(world: Option<ResMut<SpaceWorld>>, mut rng: ResMut<SimRng>) {
    let Some(mut world) = world else {
        return;
    };
    let was_over = world.is_game_over();
    let Some(report) = tick(&mut world, &mut rng.0) else {
        return;
    };
    if report.ship_hit {
        info!(health = world.health, tick = world.ticks, "ship hit");
    }
    if report.leveled_up {
        info!(level = world.level, score = world.score, "level up");
    }
    if !was_over && world.is_game_over() {
        info!(score = world.score, level = world.level, tick = world.ticks, "GAME OVER");
    }
}
