use bevy::prelude::*;

use crate::common::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};

mod common;
mod reward;
mod snake;
mod state;
mod ui;

fn main() {
    App::new()
        .insert_resource(WindowDescriptor {
            title: "Greedy Snake".to_string(),
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            resizable: false,
            position: WindowPosition::Centered(MonitorSelection::Primary),
            ..default()
        })
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(DefaultPlugins)
        .add_plugin(ui::UiPlugin)
        .add_plugin(common::CommonPlugin)
        .add_plugin(snake::SnakePlugin)
        .add_plugin(reward::RewardPlugin)
        .run();
}
