//! Brute-force sphere-distance collisions, resolved in store order.
//!
//! Pairs are removed as soon as they match, so earlier asteroids win ties and
//! a bullet or the ship can never claim more than one asteroid per tick.
use super::world::SpaceWorld;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub bullet_hits: u32,
    pub ship_hit: bool,
    pub leveled_up: bool,
}

/// Each bullet takes the first asteroid (in store order) whose radius it is inside.
pub fn resolve_bullet_hits(world: &mut SpaceWorld) -> u32 {
    let mut hits = 0;
    let mut i = 0;
    while i < world.bullets.len() {
        let bullet = world.bullets[i].position;
        let target = world
            .asteroids
            .iter()
            .position(|a| bullet.distance(a.position) < a.size);
        let Some(j) = target else {
            i += 1;
            continue;
        };
        let asteroid = world.asteroids.remove(j);
        world.bullets.remove(i);
        world.spawn_explosion(asteroid.position);
        world.score += world.tunables.scoring.points_per_asteroid;
        hits += 1;
    }
    hits
}

/// At most one asteroid can hit the ship per tick.
pub fn resolve_ship_hit(world: &mut SpaceWorld) -> bool {
    let ship = world.ship.position;
    let reach = world.tunables.ship.hit_radius;
    let Some(j) = world
        .asteroids
        .iter()
        .position(|a| ship.distance(a.position) < a.size + reach)
    else {
        return false;
    };
    world.asteroids.remove(j);
    world.health -= 1;
    world.flash_timer = world.tunables.scoring.flash_ticks;
    world.camera_shake = world.tunables.scoring.hit_shake;
    world.spawn_explosion(ship);
    true
}

/// Advances at most one level per call, even if the score jumped past several thresholds.
pub fn apply_level_up(world: &mut SpaceWorld) -> bool {
    let scoring = &world.tunables.scoring;
    if world.score < world.level * scoring.level_threshold {
        return false;
    }
    world.level += 1;
    let factor = scoring.level_speed_multiplier;
    for a in world.asteroids.iter_mut() {
        a.speed *= factor;
    }
    true
}

pub fn detect_collisions(world: &mut SpaceWorld) -> CollisionReport {
    let bullet_hits = resolve_bullet_hits(world);
    let ship_hit = resolve_ship_hit(world);
    let leveled_up = apply_level_up(world);
    CollisionReport {
        bullet_hits,
        ship_hit,
        leveled_up,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::entities::{Asteroid, Bullet};
    use bevy::prelude::*;

    fn rock(position: Vec3, size: f32) -> Asteroid {
        Asteroid {
            position,
            size,
            speed: 0.01,
            angle: 0.0,
            rotation_speed: 0.0,
            drift: Vec2::ZERO,
        }
    }

    fn far_rock() -> Asteroid {
        rock(Vec3::new(8.0, 8.0, -40.0), 0.3)
    }

    #[test]
    fn bullet_hit_removes_pair_and_scores() {
        let mut world = SpaceWorld::default();
        world.bullets.push(Bullet::fired_from(Vec3::new(0.0, 0.0, -20.0), 0.5));
        world.asteroids.push(far_rock());
        world.asteroids.push(rock(Vec3::new(0.0, 0.1, -20.0), 0.3));
        let hits = resolve_bullet_hits(&mut world);
        assert_eq!(hits, 1);
        assert_eq!(world.score, 10);
        assert!(world.bullets.is_empty());
        assert_eq!(world.asteroids, vec![far_rock()]);
        assert_eq!(world.explosions.len(), 1);
        assert_eq!(world.explosions[0].position, Vec3::new(0.0, 0.1, -20.0));
        assert_eq!(world.explosions[0].life, 30.0);
        assert_eq!(world.explosions[0].size, 0.1);
    }

    #[test]
    fn overlapping_asteroids_first_in_order_wins() {
        let mut world = SpaceWorld::default();
        world.bullets.push(Bullet::fired_from(Vec3::new(0.0, 0.0, -20.0), 0.5));
        let first = rock(Vec3::new(0.05, 0.0, -20.0), 0.4);
        let second = rock(Vec3::new(0.0, 0.0, -20.0), 0.4);
        world.asteroids.extend([first, second]);
        assert_eq!(resolve_bullet_hits(&mut world), 1);
        assert_eq!(world.score, 10);
        assert_eq!(world.asteroids, vec![second]);
    }

    #[test]
    fn two_bullets_two_asteroids_both_hit() {
        let mut world = SpaceWorld::default();
        world.bullets.push(Bullet::fired_from(Vec3::new(0.0, 0.0, -20.0), 0.5));
        world.bullets.push(Bullet::fired_from(Vec3::new(3.0, 0.0, -20.0), 0.5));
        world.asteroids.push(rock(Vec3::new(3.0, 0.0, -20.0), 0.3));
        world.asteroids.push(rock(Vec3::new(0.0, 0.0, -20.0), 0.3));
        assert_eq!(resolve_bullet_hits(&mut world), 2);
        assert_eq!(world.score, 20);
        assert!(world.asteroids.is_empty());
        assert!(world.bullets.is_empty());
    }

    #[test]
    fn touching_radius_is_a_miss() {
        let mut world = SpaceWorld::default();
        world.bullets.push(Bullet::fired_from(Vec3::new(0.0, 0.0, -20.0), 0.5));
        world.asteroids.push(rock(Vec3::new(0.5, 0.0, -20.0), 0.5));
        assert_eq!(resolve_bullet_hits(&mut world), 0);
        assert_eq!(world.bullets.len(), 1);
    }

    #[test]
    fn ship_hit_once_per_tick() {
        let mut world = SpaceWorld::default();
        let ship = world.ship.position;
        world.asteroids.push(rock(ship, 0.3));
        world.asteroids.push(rock(ship + Vec3::X * 0.1, 0.3));
        assert!(resolve_ship_hit(&mut world));
        assert_eq!(world.health, 2);
        assert_eq!(world.asteroids.len(), 1);
        assert_eq!(world.flash_timer, 30);
        assert_eq!(world.camera_shake, 0.5);
        assert_eq!(world.explosions.len(), 1);
        assert_eq!(world.explosions[0].position, ship);
    }

    #[test]
    fn ship_reach_includes_hull_radius() {
        let mut world = SpaceWorld::default();
        let ship = world.ship.position;
        // 0.55 away: outside size 0.3 but inside 0.3 + 0.3
        world.asteroids.push(rock(ship + Vec3::Y * 0.55, 0.3));
        assert!(resolve_ship_hit(&mut world));
        world.asteroids.push(rock(ship + Vec3::Y * 0.65, 0.3));
        assert!(!resolve_ship_hit(&mut world));
    }

    #[test]
    fn level_up_scales_remaining_speeds_once() {
        let mut world = SpaceWorld::default();
        world.asteroids.push(rock(Vec3::new(5.0, 5.0, -30.0), 0.3));
        world.score = 250;
        assert!(apply_level_up(&mut world));
        assert_eq!(world.level, 2);
        assert!((world.asteroids[0].speed - 0.011).abs() < 1e-7);
        // 250 >= 200 still: the next call advances again, one step at a time
        assert!(apply_level_up(&mut world));
        assert_eq!(world.level, 3);
        assert!(!apply_level_up(&mut world));
        assert_eq!(world.level, 3);
    }

    #[test]
    fn report_combines_all_checks() {
        let mut world = SpaceWorld::default();
        world.score = 90;
        world.bullets.push(Bullet::fired_from(Vec3::new(0.0, 0.0, -20.0), 0.5));
        world.asteroids.push(rock(Vec3::new(0.0, 0.0, -20.0), 0.3));
        world.asteroids.push(rock(world.ship.position, 0.3));
        let report = detect_collisions(&mut world);
        assert_eq!(
            report,
            CollisionReport {
                bullet_hits: 1,
                ship_hit: true,
                leveled_up: true
            }
        );
        assert_eq!(world.score, 100);
        assert_eq!(world.level, 2);
        assert_eq!(world.explosions.len(), 2);
    }
}
