use bevy::prelude::*;
use bevy::render::camera::ScalingMode;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::core::components::ShipCamera;
use crate::core::system::system_order::RenderSyncSet;
use crate::gameplay::entities::ProjectionMode;
use crate::gameplay::world::SpaceWorld;

pub const FOV_DEGREES: f32 = 60.0;
pub const NEAR: f32 = 1.0;
pub const FAR: f32 = 150.0;
/// Half extent of the orthographic view box.
pub const ORTHO_HALF_EXTENT: f32 = 10.0;
/// Largest per-axis jitter at full shake intensity.
pub const SHAKE_JITTER: f32 = 0.05;

/// Render-side RNG for camera jitter; never touches the simulation RNG.
#[derive(Resource, Deref, DerefMut)]
pub struct ShakeRng(pub StdRng);

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK))
            .insert_resource(ShakeRng(StdRng::from_entropy()))
            .add_systems(Startup, setup_camera)
            .add_systems(Update, follow_ship_camera.in_set(RenderSyncSet));
    }
}

pub fn projection_for(mode: ProjectionMode) -> Projection {
    match mode {
        ProjectionMode::Perspective => Projection::Perspective(PerspectiveProjection {
            fov: FOV_DEGREES.to_radians(),
            near: NEAR,
            far: FAR,
            aspect_ratio: 1.0,
        }),
        ProjectionMode::Orthographic => Projection::Orthographic(OrthographicProjection {
            near: NEAR,
            far: FAR,
            scaling_mode: ScalingMode::Fixed {
                width: ORTHO_HALF_EXTENT * 2.0,
                height: ORTHO_HALF_EXTENT * 2.0,
            },
            ..OrthographicProjection::default_3d()
        }),
    }
}

/// Camera sits one unit above and five behind the ship, plus jitter.
#[inline]
pub fn camera_eye(ship: Vec3, shake: Vec2) -> Vec3 {
    ship + Vec3::new(shake.x, 1.0 + shake.y, 5.0)
}

/// Jitter for the current shake intensity. Scales down as the shake decays
/// so the camera settles instead of twitching forever.
pub fn shake_offset<R: Rng + ?Sized>(intensity: f32, full: f32, rng: &mut R) -> Vec2 {
    if intensity <= 0.0 || full <= 0.0 {
        return Vec2::ZERO;
    }
    let scale = (intensity / full).min(1.0) * SHAKE_JITTER;
    Vec2::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)) * scale
}

fn setup_camera(mut commands: Commands, world: Option<Res<SpaceWorld>>) {
    let (ship, mode) = world
        .map(|w| (w.ship.position, w.projection))
        .unwrap_or((Vec3::new(0.0, 0.0, -5.0), ProjectionMode::default()));
    commands.spawn((
        Camera3d::default(),
        projection_for(mode),
        Transform::from_translation(camera_eye(ship, Vec2::ZERO)).looking_at(ship, Vec3::Y),
        ShipCamera,
    ));
    commands.spawn((
        DirectionalLight {
            illuminance: 4_000.0,
            ..default()
        },
        Transform::from_xyz(1.0, 1.0, 1.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn follow_ship_camera(
    world: Res<SpaceWorld>,
    mut rng: ResMut<ShakeRng>,
    mut q: Query<(&mut Transform, &mut Projection), With<ShipCamera>>,
    mut shown: Local<Option<ProjectionMode>>,
) {
    let Ok((mut tf, mut projection)) = q.single_mut() else {
        return;
    };
    if *shown != Some(world.projection) {
        *projection = projection_for(world.projection);
        *shown = Some(world.projection);
    }
    let ship = world.ship.position;
    let jitter = shake_offset(
        world.camera_shake,
        world.tunables.scoring.hit_shake,
        &mut rng.0,
    );
    *tf = Transform::from_translation(camera_eye(ship, jitter)).looking_at(ship, Vec3::Y);
}
