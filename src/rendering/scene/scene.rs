//! Pooled visuals mirroring the `SpaceWorld` stores.
//!
//! Each store slot `i` owns exactly one entity tagged with its slot index.
//! Stores shrink and grow between frames, so every sync pass despawns the
//! tail past the store length and spawns whatever is missing. Slots stay
//! contiguous from zero.
use bevy::prelude::*;

use super::ship::build_ship_mesh;
use crate::core::components::{AsteroidSlot, BulletSlot, ExplosionSlot, ShipVisual, StarSlot};
use crate::core::palette::{
    retro_index, ASTEROID_COLOR, BULLET_COLOR, EXPLOSION_COLOR, RETRO_PALETTE, SHIP_COLOR,
    SHIP_FLASH_COLOR,
};
use crate::core::system::system_order::RenderSyncSet;
use crate::gameplay::world::SpaceWorld;

const STAR_RADIUS: f32 = 0.06;
const BULLET_SIZE: Vec2 = Vec2::new(0.2, 0.1);

#[derive(Resource)]
pub struct SceneAssets {
    pub star_mesh: Handle<Mesh>,
    /// One unlit material per `RETRO_PALETTE` entry.
    pub star_materials: Vec<Handle<StandardMaterial>>,
    /// Unit sphere, scaled per asteroid.
    pub asteroid_mesh: Handle<Mesh>,
    pub asteroid_material: Handle<StandardMaterial>,
    pub bullet_mesh: Handle<Mesh>,
    pub bullet_material: Handle<StandardMaterial>,
    /// Unit disc, scaled per explosion. Materials are per entity since
    /// each explosion fades on its own clock.
    pub explosion_mesh: Handle<Mesh>,
    pub ship_material: Handle<StandardMaterial>,
    pub ship_flash_material: Handle<StandardMaterial>,
}

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_scene).add_systems(
            Update,
            (
                sync_stars,
                sync_asteroids,
                sync_bullets,
                sync_explosions,
                sync_ship,
            )
                .in_set(RenderSyncSet),
        );
    }
}

fn flat_material(color: Color) -> StandardMaterial {
    StandardMaterial {
        base_color: color,
        unlit: true,
        ..default()
    }
}

fn ship_material(color: Color) -> StandardMaterial {
    StandardMaterial {
        double_sided: true,
        cull_mode: None,
        ..flat_material(color)
    }
}

pub fn explosion_material(alpha: f32) -> StandardMaterial {
    StandardMaterial {
        base_color: EXPLOSION_COLOR.with_alpha(alpha),
        alpha_mode: AlphaMode::Blend,
        ..flat_material(EXPLOSION_COLOR)
    }
}

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let assets = SceneAssets {
        star_mesh: meshes.add(Sphere::new(STAR_RADIUS)),
        star_materials: RETRO_PALETTE
            .iter()
            .map(|c| materials.add(flat_material(*c)))
            .collect(),
        asteroid_mesh: meshes.add(Sphere::new(1.0).mesh().uv(10, 10)),
        asteroid_material: materials.add(StandardMaterial {
            base_color: ASTEROID_COLOR,
            perceptual_roughness: 0.9,
            ..default()
        }),
        bullet_mesh: meshes.add(Rectangle::from_size(BULLET_SIZE)),
        bullet_material: materials.add(ship_material(BULLET_COLOR)),
        explosion_mesh: meshes.add(Circle::new(1.0)),
        ship_material: materials.add(ship_material(SHIP_COLOR)),
        ship_flash_material: materials.add(ship_material(SHIP_FLASH_COLOR)),
    };
    commands.spawn((
        Mesh3d(meshes.add(build_ship_mesh())),
        MeshMaterial3d(assets.ship_material.clone()),
        Transform::default(),
        ShipVisual,
    ));
    commands.insert_resource(assets);
}

fn sync_stars(
    mut commands: Commands,
    world: Res<SpaceWorld>,
    assets: Res<SceneAssets>,
    mut q: Query<(
        Entity,
        &StarSlot,
        &mut Transform,
        &mut MeshMaterial3d<StandardMaterial>,
    )>,
) {
    let mut present = 0;
    for (e, slot, mut tf, mut mat) in &mut q {
        let Some(star) = world.stars.get(**slot) else {
            commands.entity(e).despawn();
            continue;
        };
        present += 1;
        tf.translation = star.position;
        let want = &assets.star_materials[retro_index(star.color)];
        if mat.0 != *want {
            mat.0 = want.clone();
        }
    }
    for (i, star) in world.stars.iter().enumerate().skip(present) {
        commands.spawn((
            Mesh3d(assets.star_mesh.clone()),
            MeshMaterial3d(assets.star_materials[retro_index(star.color)].clone()),
            Transform::from_translation(star.position),
            StarSlot(i),
        ));
    }
}

fn asteroid_transform(position: Vec3, angle: f32, size: f32) -> Transform {
    Transform::from_translation(position)
        .with_rotation(Quat::from_rotation_z(angle.to_radians()))
        .with_scale(Vec3::splat(size))
}

fn sync_asteroids(
    mut commands: Commands,
    world: Res<SpaceWorld>,
    assets: Res<SceneAssets>,
    mut q: Query<(Entity, &AsteroidSlot, &mut Transform)>,
) {
    let mut present = 0;
    for (e, slot, mut tf) in &mut q {
        match world.asteroids.get(**slot) {
            Some(a) => {
                present += 1;
                *tf = asteroid_transform(a.position, a.angle, a.size);
            }
            None => commands.entity(e).despawn(),
        }
    }
    for (i, a) in world.asteroids.iter().enumerate().skip(present) {
        commands.spawn((
            Mesh3d(assets.asteroid_mesh.clone()),
            MeshMaterial3d(assets.asteroid_material.clone()),
            asteroid_transform(a.position, a.angle, a.size),
            AsteroidSlot(i),
        ));
    }
}

fn sync_bullets(
    mut commands: Commands,
    world: Res<SpaceWorld>,
    assets: Res<SceneAssets>,
    mut q: Query<(Entity, &BulletSlot, &mut Transform)>,
) {
    let mut present = 0;
    for (e, slot, mut tf) in &mut q {
        match world.bullets.get(**slot) {
            Some(b) => {
                present += 1;
                tf.translation = b.position;
            }
            None => commands.entity(e).despawn(),
        }
    }
    for (i, b) in world.bullets.iter().enumerate().skip(present) {
        commands.spawn((
            Mesh3d(assets.bullet_mesh.clone()),
            MeshMaterial3d(assets.bullet_material.clone()),
            Transform::from_translation(b.position),
            BulletSlot(i),
        ));
    }
}

fn sync_explosions(
    mut commands: Commands,
    world: Res<SpaceWorld>,
    assets: Res<SceneAssets>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut q: Query<(
        Entity,
        &ExplosionSlot,
        &mut Transform,
        &MeshMaterial3d<StandardMaterial>,
    )>,
) {
    let full_life = world.tunables.motion.explosion_life;
    let mut present = 0;
    for (e, slot, mut tf, mat) in &mut q {
        let Some(ex) = world.explosions.get(**slot) else {
            commands.entity(e).despawn();
            continue;
        };
        present += 1;
        *tf = Transform::from_translation(ex.position).with_scale(Vec3::splat(ex.size));
        if let Some(m) = materials.get_mut(&mat.0) {
            m.base_color.set_alpha(ex.alpha(full_life));
        }
    }
    for (i, ex) in world.explosions.iter().enumerate().skip(present) {
        commands.spawn((
            Mesh3d(assets.explosion_mesh.clone()),
            MeshMaterial3d(materials.add(explosion_material(ex.alpha(full_life)))),
            Transform::from_translation(ex.position).with_scale(Vec3::splat(ex.size)),
            ExplosionSlot(i),
        ));
    }
}

fn sync_ship(
    world: Res<SpaceWorld>,
    assets: Res<SceneAssets>,
    mut q: Query<(&mut Transform, &mut MeshMaterial3d<StandardMaterial>), With<ShipVisual>>,
) {
    let Ok((mut tf, mut mat)) = q.single_mut() else {
        return;
    };
    tf.translation = world.ship.position;
    tf.rotation = world.ship.orientation();
    let want = if world.is_flashing() {
        &assets.ship_flash_material
    } else {
        &assets.ship_material
    };
    if mat.0 != *want {
        mat.0 = want.clone();
    }
}
