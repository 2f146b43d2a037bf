use bevy::prelude::*;

use space_navigator::interaction::input::ShipInputPlugin;
use space_navigator::interaction::inputmap::types::InputBindings;
use space_navigator::{ShipAction, SpaceWorld};

fn input_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(ButtonInput::<KeyCode>::default())
        .init_resource::<InputBindings>()
        .insert_resource(SpaceWorld::default())
        .add_plugins(ShipInputPlugin);
    app
}

fn tap(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
    app.update();
    let mut kb = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    kb.release(key);
    kb.clear();
}

#[test]
fn key_presses_move_and_fire() {
    let mut app = input_app();
    tap(&mut app, KeyCode::KeyW);
    tap(&mut app, KeyCode::KeyA);
    tap(&mut app, KeyCode::Space);
    let world = app.world().resource::<SpaceWorld>();
    assert!((world.ship.position - Vec3::new(-0.8, 0.8, -5.0)).length() < 1e-5);
    assert_eq!(world.bullets.len(), 1);
    assert_eq!(world.bullets[0].position, world.ship.position);
    assert!(app.should_exit().is_none());
}

#[test]
fn escape_exits_while_alive_only() {
    let mut app = input_app();
    app.world_mut().resource_mut::<SpaceWorld>().health = 0;
    tap(&mut app, KeyCode::Escape);
    tap(&mut app, KeyCode::KeyD);
    assert!(app.should_exit().is_none());
    assert_eq!(
        app.world().resource::<SpaceWorld>().ship.position,
        Vec3::new(0.0, 0.0, -5.0)
    );

    let mut app = input_app();
    tap(&mut app, KeyCode::Escape);
    assert_eq!(app.should_exit(), Some(AppExit::Success));
}

#[test]
fn rebound_key_drives_action() {
    let mut app = input_app();
    app.world_mut()
        .resource_mut::<InputBindings>()
        .by_action
        .insert(ShipAction::MoveForward, smallvec::smallvec![KeyCode::KeyF]);
    tap(&mut app, KeyCode::KeyE);
    tap(&mut app, KeyCode::KeyF);
    let z = app.world().resource::<SpaceWorld>().ship.position.z;
    assert!((z - -5.8).abs() < 1e-5);
}
