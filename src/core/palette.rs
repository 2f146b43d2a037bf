use bevy::prelude::*;

/// Retro star colors; stars pick one uniformly at spawn and on recycle.
pub const RETRO_PALETTE: [Color; 5] = [
    Color::srgb(0.0, 1.0, 0.0), // Green
    Color::srgb(0.5, 0.0, 0.5), // Purple
    Color::srgb(1.0, 0.0, 0.0), // Red
    Color::srgb(1.0, 1.0, 0.0), // Yellow
    Color::srgb(1.0, 1.0, 1.0), // White
];

pub const SHIP_COLOR: Color = Color::srgb(0.8, 0.7, 0.9);
pub const SHIP_FLASH_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
pub const ASTEROID_COLOR: Color = Color::srgb(0.6, 0.6, 0.6);
pub const BULLET_COLOR: Color = Color::WHITE;
pub const EXPLOSION_COLOR: Color = Color::srgb(1.0, 0.5, 0.0);
pub const HUD_COLOR: Color = Color::srgb(0.0, 1.0, 0.0);

/// Palette slot of a star color; unknown colors map to slot 0.
#[inline]
pub fn retro_index(color: Color) -> usize {
    RETRO_PALETTE
        .iter()
        .position(|c| *c == color)
        .unwrap_or(0)
}
