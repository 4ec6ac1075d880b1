use bevy::prelude::*;
use iyes_loopless::prelude::*;

use crate::common::constants::INITIAL_TARGET_LEN;
use crate::snake::components::SnakeHead;
use crate::state::GameState;
use crate::ui::components::*;

mod components;

pub struct UiPlugin;

const TEXT_COLOR: Color = Color::rgb(0.9, 0.9, 0.9);

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_loopless_state(GameState::Ready)
            .add_startup_system(scoreboard_setup)
            .add_startup_system(ready_screen_setup)
            .add_system(update_scoreboard)
            .add_exit_system(GameState::Ready, despawn_screen::<OnReadyScreen>);
    }
}

fn scoreboard_setup(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands
        .spawn_bundle(
            TextBundle::from_section(
                format!("Score: {}", INITIAL_TARGET_LEN),
                TextStyle {
                    font: asset_server.load("fonts/FiraSans-Bold.ttf"),
                    font_size: 20.0,
                    color: TEXT_COLOR,
                },
            )
            .with_style(Style {
                position_type: PositionType::Absolute,
                position: UiRect {
                    top: Val::Px(5.0),
                    left: Val::Px(5.0),
                    ..default()
                },
                ..default()
            }),
        )
        .insert(ScoreText);
}

fn ready_screen_setup(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands
        .spawn_bundle(
            TextBundle::from_section(
                "Press Space to start",
                TextStyle {
                    font: asset_server.load("fonts/FiraSans-Bold.ttf"),
                    font_size: 30.0,
                    color: TEXT_COLOR,
                },
            )
            .with_style(Style {
                position_type: PositionType::Absolute,
                position: UiRect {
                    bottom: Val::Px(40.0),
                    left: Val::Px(200.0),
                    ..default()
                },
                ..default()
            }),
        )
        .insert(OnReadyScreen);
}

fn update_scoreboard(heads: Query<&SnakeHead>, mut texts: Query<&mut Text, With<ScoreText>>) {
    if let (Ok(head), Ok(mut text)) = (heads.get_single(), texts.get_single_mut()) {
        text.sections[0].value = format!("Score: {}", head.target_len);
    }
}

// Generic system that takes a component as a parameter, and will despawn all entities with that component
pub fn despawn_screen<T: Component>(to_despawn: Query<Entity, With<T>>, mut commands: Commands) {
    for entity in &to_despawn {
        commands.entity(entity).despawn_recursive();
    }
}
