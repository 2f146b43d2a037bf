//! One-tick advance of every store.
use rand::Rng;

use super::entities::{
    Asteroid, Bullet, Explosion, Star, ASTEROID_RECYCLE_Z, STAR_RECYCLE_Z,
};
use super::generate::{recycle_asteroid, recycle_star};
use super::world::SpaceWorld;

pub fn update_stars<R: Rng + ?Sized>(stars: &mut [Star], star_speed: f32, rng: &mut R) {
    for star in stars.iter_mut() {
        star.position.z += star_speed;
        if star.position.z > STAR_RECYCLE_Z {
            recycle_star(star, rng);
        }
    }
}

/// Move bullets and drop those that left the play box this tick.
pub fn update_bullets(bullets: &mut Vec<Bullet>) {
    bullets.retain_mut(|b| {
        b.position += b.velocity;
        b.in_bounds()
    });
}

pub fn update_asteroids<R: Rng + ?Sized>(asteroids: &mut [Asteroid], rng: &mut R) {
    for a in asteroids.iter_mut() {
        a.position.z += a.speed;
        a.position.x += a.drift.x;
        a.position.y += a.drift.y;
        a.angle += a.rotation_speed;
        if a.position.z > ASTEROID_RECYCLE_Z {
            recycle_asteroid(a, rng);
        }
    }
}

/// Age explosions by one tick; expired ones are removed.
pub fn update_explosions(explosions: &mut Vec<Explosion>, growth: f32) {
    explosions.retain_mut(|ex| {
        ex.life -= 1.0;
        ex.size += growth;
        ex.life > 0.0
    });
}

/// Stars, bullets, asteroids, explosions, in that order.
pub fn integrate<R: Rng + ?Sized>(world: &mut SpaceWorld, rng: &mut R) {
    let motion = world.tunables.motion.clone();
    update_stars(&mut world.stars, motion.star_speed, rng);
    update_bullets(&mut world.bullets);
    update_asteroids(&mut world.asteroids, rng);
    update_explosions(&mut world.explosions, motion.explosion_growth);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::palette::RETRO_PALETTE;
    use bevy::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn star_advances_then_recycles_past_minus_one() {
        let mut stars = vec![Star {
            position: Vec3::new(1.0, 2.0, -1.15),
            color: RETRO_PALETTE[0],
        }];
        let mut r = rng();
        update_stars(&mut stars, 0.1, &mut r);
        assert!((stars[0].position.z - -1.05).abs() < 1e-5);
        update_stars(&mut stars, 0.1, &mut r);
        assert_eq!(stars[0].position.z, -50.0);
    }

    #[test]
    fn bullet_removed_on_the_tick_it_leaves() {
        let mut bullets = vec![
            Bullet::fired_from(Vec3::new(0.0, 0.0, -99.8), 0.5),
            Bullet::fired_from(Vec3::new(0.0, 0.0, -5.0), 0.5),
        ];
        update_bullets(&mut bullets);
        assert_eq!(bullets.len(), 1);
        assert!((bullets[0].position.z - -5.5).abs() < 1e-6);
    }

    #[test]
    fn sideways_bullet_removed_at_x_bound() {
        let mut bullets = vec![Bullet {
            position: Vec3::new(9.8, 0.0, -5.0),
            velocity: Vec3::new(0.3, 0.0, 0.0),
        }];
        update_bullets(&mut bullets);
        assert!(bullets.is_empty());
    }

    #[test]
    fn bullet_removed_at_y_bound() {
        let mut bullets = vec![
            Bullet {
                position: Vec3::new(0.0, 9.9, -5.0),
                velocity: Vec3::new(0.0, 0.2, 0.0),
            },
            Bullet {
                position: Vec3::new(0.0, -9.9, -5.0),
                velocity: Vec3::new(0.0, -0.2, 0.0),
            },
        ];
        update_bullets(&mut bullets);
        assert!(bullets.is_empty());
    }

    #[test]
    fn bullet_behind_the_near_bound_dropped() {
        // ship flown past z=10 with Q fires from out of bounds
        let mut bullets = vec![
            Bullet::fired_from(Vec3::new(0.0, 0.0, 11.0), 0.5),
            Bullet::fired_from(Vec3::new(0.0, 0.0, 10.4), 0.5),
        ];
        update_bullets(&mut bullets);
        assert_eq!(bullets.len(), 1);
        assert!((bullets[0].position.z - 9.9).abs() < 1e-5);
    }

    #[test]
    fn asteroid_drifts_spins_and_recycles() {
        let mut asteroids = vec![Asteroid {
            position: Vec3::new(0.0, 0.0, -0.01),
            size: 0.5,
            speed: 0.02,
            angle: 10.0,
            rotation_speed: 0.5,
            drift: Vec2::new(0.01, -0.01),
        }];
        let mut r = rng();
        update_asteroids(&mut asteroids, &mut r);
        let a = asteroids[0];
        assert!(a.position.z <= -5.0, "recycled behind the field");
        assert_eq!(a.angle, 10.5);
        assert_eq!(a.speed, 0.02);
        assert_eq!(a.size, 0.5);
    }

    #[test]
    fn explosion_lives_exactly_its_life_in_ticks() {
        let mut explosions = vec![Explosion::new(Vec3::ZERO, 30.0, 0.1)];
        for tick in 1..30 {
            update_explosions(&mut explosions, 0.005);
            assert_eq!(explosions.len(), 1, "still alive after tick {tick}");
        }
        assert!((explosions[0].size - (0.1 + 29.0 * 0.005)).abs() < 1e-5);
        update_explosions(&mut explosions, 0.005);
        assert!(explosions.is_empty());
    }
}
