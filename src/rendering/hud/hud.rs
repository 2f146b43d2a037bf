use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::core::palette::HUD_COLOR;
use crate::core::system::system_order::RenderSyncSet;
use crate::gameplay::world::SpaceWorld;

const FONT_SIZE: f32 = 18.0;
const BORDER_INSET: f32 = 5.0;

/// A live HUD readout line.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudField {
    Score,
    Level,
    Health,
}

#[derive(Component)]
pub struct GameOverBanner;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hud)
            .add_systems(Update, update_hud.in_set(RenderSyncSet));
    }
}

pub fn hud_text(field: HudField, world: &SpaceWorld) -> String {
    match field {
        HudField::Score => format!("Score: {}", world.score),
        HudField::Level => format!("Level: {}", world.level),
        HudField::Health => format!("Health: {}", world.health),
    }
}

fn text_line(text: impl Into<String>, top: f32) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size: FONT_SIZE,
            ..default()
        },
        TextColor(HUD_COLOR),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(top),
            ..default()
        },
    )
}

fn spawn_hud(mut commands: Commands, cfg: Option<Res<GameConfig>>) {
    let title = cfg
        .map(|c| c.window.title.clone())
        .unwrap_or_else(|| GameConfig::default().window.title);
    let world = SpaceWorld::default();
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(BORDER_INSET),
                top: Val::Px(BORDER_INSET),
                right: Val::Px(BORDER_INSET),
                bottom: Val::Px(BORDER_INSET),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BorderColor(HUD_COLOR),
        ))
        .with_children(|hud| {
            hud.spawn(text_line(title, 5.0));
            for (i, field) in [HudField::Score, HudField::Level, HudField::Health]
                .into_iter()
                .enumerate()
            {
                hud.spawn((text_line(hud_text(field, &world), 25.0 + 20.0 * i as f32), field));
            }
            hud.spawn((
                Node {
                    position_type: PositionType::Absolute,
                    width: Val::Percent(100.0),
                    top: Val::Percent(48.0),
                    justify_content: JustifyContent::Center,
                    ..default()
                },
                GameOverBanner,
                Visibility::Hidden,
            ))
            .with_child((
                Text::new("GAME OVER"),
                TextFont {
                    font_size: FONT_SIZE,
                    ..default()
                },
                TextColor(HUD_COLOR),
            ));
        });
}

fn update_hud(
    world: Res<SpaceWorld>,
    mut fields: Query<(&HudField, &mut Text)>,
    mut banner: Query<&mut Visibility, With<GameOverBanner>>,
) {
    if !world.is_changed() {
        return;
    }
    for (field, mut text) in &mut fields {
        let line = hud_text(*field, &world);
        if text.0 != line {
            text.0 = line;
        }
    }
    if let Ok(mut vis) = banner.single_mut() {
        vis.set_if_neq(if world.is_game_over() {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readouts_format_counters() {
        let mut world = SpaceWorld::default();
        world.score = 120;
        world.level = 2;
        world.health = 1;
        assert_eq!(hud_text(HudField::Score, &world), "Score: 120");
        assert_eq!(hud_text(HudField::Level, &world), "Level: 2");
        assert_eq!(hud_text(HudField::Health, &world), "Health: 1");
    }

    #[test]
    fn banner_shows_on_game_over() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(SpaceWorld::default())
            .add_plugins(HudPlugin);
        app.update();
        app.world_mut().resource_mut::<SpaceWorld>().health = 0;
        app.update();
        let vis = app
            .world_mut()
            .query_filtered::<&Visibility, With<GameOverBanner>>()
            .single(app.world())
            .copied();
        assert_eq!(vis.ok(), Some(Visibility::Inherited));
        let health = app
            .world_mut()
            .query::<(&HudField, &Text)>()
            .iter(app.world())
            .find(|(f, _)| **f == HudField::Health)
            .map(|(_, t)| t.0.clone());
        assert_eq!(health.as_deref(), Some("Health: 0"));
    }
}
