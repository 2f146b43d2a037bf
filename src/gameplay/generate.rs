//! Randomized construction of stars and asteroids.
use bevy::prelude::*;
use rand::Rng;

use super::entities::{Asteroid, Star, STAR_RESPAWN_Z};
use crate::core::palette::RETRO_PALETTE;

/// Half extent of the x/y spawn square.
pub const FIELD_HALF_EXTENT: f32 = 10.0;
/// Star depth at startup, integer units.
pub const STAR_DEPTH: (i32, i32) = (5, 50);
/// Asteroid depth at startup and on recycle, integer units.
pub const ASTEROID_DEPTH: (i32, i32) = (5, 54);
pub const ASTEROID_BASE_SIZE: (f32, f32) = (0.0, 0.3);
pub const ASTEROID_SIZE_OFFSET: f32 = 0.2;
pub const ASTEROID_SIZE_SCALE: f32 = 1.5;
pub const ASTEROID_SPEED: (f32, f32) = (0.005, 0.055);
pub const ASTEROID_MAX_SPIN: f32 = 1.0;
pub const ASTEROID_MAX_DRIFT: f32 = 0.01;

/// Smallest and (exclusive) largest radius an asteroid can spawn with.
pub fn asteroid_size_range() -> (f32, f32) {
    (
        (ASTEROID_BASE_SIZE.0 + ASTEROID_SIZE_OFFSET) * ASTEROID_SIZE_SCALE,
        (ASTEROID_BASE_SIZE.1 + ASTEROID_SIZE_OFFSET) * ASTEROID_SIZE_SCALE,
    )
}

fn random_xy<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    Vec2::new(
        rng.gen_range(-FIELD_HALF_EXTENT..FIELD_HALF_EXTENT),
        rng.gen_range(-FIELD_HALF_EXTENT..FIELD_HALF_EXTENT),
    )
}

fn random_depth<R: Rng + ?Sized>(rng: &mut R, (near, far): (i32, i32)) -> f32 {
    -(rng.gen_range(near..=far) as f32)
}

fn random_star_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    RETRO_PALETTE[rng.gen_range(0..RETRO_PALETTE.len())]
}

pub fn random_star<R: Rng + ?Sized>(rng: &mut R) -> Star {
    let xy = random_xy(rng);
    let z = random_depth(rng, STAR_DEPTH);
    Star {
        position: xy.extend(z),
        color: random_star_color(rng),
    }
}

pub fn random_asteroid<R: Rng + ?Sized>(rng: &mut R) -> Asteroid {
    let xy = random_xy(rng);
    let z = random_depth(rng, ASTEROID_DEPTH);
    let base: f32 = rng.gen_range(ASTEROID_BASE_SIZE.0..ASTEROID_BASE_SIZE.1);
    Asteroid {
        position: xy.extend(z),
        size: (base + ASTEROID_SIZE_OFFSET) * ASTEROID_SIZE_SCALE,
        speed: rng.gen_range(ASTEROID_SPEED.0..ASTEROID_SPEED.1),
        angle: rng.gen_range(0.0..360.0),
        rotation_speed: rng.gen_range(-ASTEROID_MAX_SPIN..=ASTEROID_MAX_SPIN),
        drift: Vec2::new(
            rng.gen_range(-ASTEROID_MAX_DRIFT..=ASTEROID_MAX_DRIFT),
            rng.gen_range(-ASTEROID_MAX_DRIFT..=ASTEROID_MAX_DRIFT),
        ),
    }
}

/// Replace the store with `n` fresh stars.
pub fn generate_stars<R: Rng + ?Sized>(stars: &mut Vec<Star>, n: usize, rng: &mut R) {
    stars.clear();
    stars.extend((0..n).map(|_| random_star(rng)));
}

/// Replace the store with `n` fresh asteroids.
pub fn generate_asteroids<R: Rng + ?Sized>(asteroids: &mut Vec<Asteroid>, n: usize, rng: &mut R) {
    asteroids.clear();
    asteroids.extend((0..n).map(|_| random_asteroid(rng)));
}

/// Send a star back to the far plane with a new position and color.
pub fn recycle_star<R: Rng + ?Sized>(star: &mut Star, rng: &mut R) {
    star.position = random_xy(rng).extend(STAR_RESPAWN_Z);
    star.color = random_star_color(rng);
}

/// New position only; size, speed, spin and drift carry over.
pub fn recycle_asteroid<R: Rng + ?Sized>(asteroid: &mut Asteroid, rng: &mut R) {
    let z = random_depth(rng, ASTEROID_DEPTH);
    asteroid.position = random_xy(rng).extend(z);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn stars_respect_ranges() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut stars = vec![random_star(&mut rng)];
        generate_stars(&mut stars, 500, &mut rng);
        assert_eq!(stars.len(), 500);
        for s in &stars {
            assert!((-10.0..10.0).contains(&s.position.x));
            assert!((-10.0..10.0).contains(&s.position.y));
            assert!((-50.0..=-5.0).contains(&s.position.z));
            assert_eq!(s.position.z.fract(), 0.0, "star depth is integral");
            assert!(RETRO_PALETTE.contains(&s.color));
        }
    }

    #[test]
    fn asteroids_respect_ranges() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut asteroids = Vec::new();
        generate_asteroids(&mut asteroids, 500, &mut rng);
        let (min_size, max_size) = asteroid_size_range();
        for a in &asteroids {
            assert!((-54.0..=-5.0).contains(&a.position.z));
            assert!(a.size >= min_size && a.size < max_size + 1e-6);
            assert!(a.speed > 0.0 && a.speed < 0.055);
            assert!((0.0..360.0).contains(&a.angle));
            assert!((-1.0..=1.0).contains(&a.rotation_speed));
            assert!(a.drift.abs().max_element() <= 0.01);
        }
    }

    #[test]
    fn recycle_asteroid_keeps_physical_traits() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut a = random_asteroid(&mut rng);
        a.position.z = 0.5;
        let before = a;
        recycle_asteroid(&mut a, &mut rng);
        assert!(a.position.z <= -5.0);
        assert_eq!(a.size, before.size);
        assert_eq!(a.speed, before.speed);
        assert_eq!(a.drift, before.drift);
        assert_eq!(a.rotation_speed, before.rotation_speed);
        assert_eq!(a.angle, before.angle);
    }

    #[test]
    fn recycle_star_moves_to_far_plane() {
        let mut rng = StdRng::seed_from_u64(14);
        let mut s = random_star(&mut rng);
        s.position.z = -0.5;
        recycle_star(&mut s, &mut rng);
        assert_eq!(s.position.z, STAR_RESPAWN_Z);
        assert!(RETRO_PALETTE.contains(&s.color));
    }
}
