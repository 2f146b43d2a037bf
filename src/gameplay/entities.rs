//! Plain records held in the `SpaceWorld` stores.
use bevy::prelude::*;

/// Bullets outside this box are dropped on the tick they leave it.
pub const BULLET_BOUNDS_MIN: Vec3 = Vec3::new(-10.0, -10.0, -100.0);
pub const BULLET_BOUNDS_MAX: Vec3 = Vec3::new(10.0, 10.0, 10.0);

/// Stars recycle once they pass this depth.
pub const STAR_RECYCLE_Z: f32 = -1.0;
/// Recycled stars restart here.
pub const STAR_RESPAWN_Z: f32 = -50.0;
/// Asteroids recycle once they pass the camera plane.
pub const ASTEROID_RECYCLE_Z: f32 = 0.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub position: Vec3,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Asteroid {
    pub position: Vec3,
    /// Collision and render radius.
    pub size: f32,
    /// Z advance per tick.
    pub speed: f32,
    /// Degrees about the view axis.
    pub angle: f32,
    /// Degrees per tick.
    pub rotation_speed: f32,
    pub drift: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bullet {
    pub position: Vec3,
    pub velocity: Vec3,
}

impl Bullet {
    /// Bullets fly straight down -Z regardless of ship orientation.
    pub fn fired_from(position: Vec3, speed: f32) -> Self {
        Self {
            position,
            velocity: Vec3::new(0.0, 0.0, -speed),
        }
    }

    pub fn in_bounds(&self) -> bool {
        let p = self.position;
        p.cmpge(BULLET_BOUNDS_MIN).all() && p.cmple(BULLET_BOUNDS_MAX).all()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Explosion {
    pub position: Vec3,
    /// Remaining ticks.
    pub life: f32,
    pub size: f32,
}

impl Explosion {
    pub fn new(position: Vec3, life: f32, size: f32) -> Self {
        Self {
            position,
            life,
            size,
        }
    }

    /// Fade factor in 0..=1 relative to the starting life.
    pub fn alpha(&self, full_life: f32) -> f32 {
        if full_life <= 0.0 {
            return 0.0;
        }
        (self.life / full_life).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ship {
    pub position: Vec3,
    /// Pitch in degrees (arrow up/down).
    pub rotate_x: f32,
    /// Yaw in degrees (arrow left/right).
    pub rotate_y: f32,
}

impl Ship {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotate_x: 0.0,
            rotate_y: 0.0,
        }
    }

    /// Applied as rotate-x then rotate-y, matching the draw order of the model.
    pub fn orientation(&self) -> Quat {
        Quat::from_rotation_x(self.rotate_x.to_radians())
            * Quat::from_rotation_y(self.rotate_y.to_radians())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ProjectionMode {
    #[default]
    Perspective,
    Orthographic,
}

impl ProjectionMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Perspective => Self::Orthographic,
            Self::Orthographic => Self::Perspective,
        }
    }
}
