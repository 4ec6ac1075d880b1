use bevy::prelude::*;
use iyes_loopless::prelude::*;

use crate::common::components::{Direction, Position, Size};
use crate::common::constants::{
    INITIAL_TARGET_LEN, MOVE_TICK, SCREEN_HEIGHT, SCREEN_WIDTH, SQUARE_SIZE, STEP,
};
use crate::common::wrap_position;
use crate::snake::components::{turn, BodySegment, SnakeHead};
use crate::state::GameState;

pub mod components;

pub struct SnakePlugin;

impl Plugin for SnakePlugin {
    fn build(&self, app: &mut App) {
        app.add_startup_system(setup_snake)
            .add_system(direction_input.run_in_state(GameState::Running))
            .add_fixed_timestep(MOVE_TICK, "movement")
            .add_fixed_timestep_system(
                "movement",
                0,
                snake_movement.run_in_state(GameState::Running),
            );
    }
}

const SNAKE_HEAD_COLOR: Color = Color::rgb(0.1, 0.9, 0.1);
const SNAKE_SEGMENT_COLOR: Color = Color::rgb(0.1, 0.5, 0.1);

fn setup_snake(mut commands: Commands) {
    let position = Position {
        x: SCREEN_WIDTH / 2.0,
        y: SCREEN_HEIGHT / 2.0,
    };
    info!("spawning snake at {}, {}", position.x, position.y);
    spawn_head(&mut commands, position);
}

pub fn spawn_head(commands: &mut Commands, position: Position) {
    commands
        .spawn_bundle(SpriteBundle {
            sprite: Sprite {
                color: SNAKE_HEAD_COLOR,
                ..default()
            },
            ..default()
        })
        .insert(SnakeHead {
            input_direction: Direction::Right,
            direction: Direction::Right,
            step: STEP,
            tail: vec![],
            target_len: INITIAL_TARGET_LEN,
        })
        .insert(position)
        .insert(Size::square(SQUARE_SIZE));
}

pub fn spawn_segment(commands: &mut Commands, position: Position) -> Entity {
    commands
        .spawn_bundle(SpriteBundle {
            sprite: Sprite {
                color: SNAKE_SEGMENT_COLOR,
                ..default()
            },
            ..default()
        })
        .insert(BodySegment)
        .insert(position)
        .insert(Size::square(SQUARE_SIZE))
        .id()
}

fn direction_input(keys: Res<Input<KeyCode>>, mut heads: Query<&mut SnakeHead>) {
    for mut head in heads.iter_mut() {
        let requested: Direction = if keys.pressed(KeyCode::Left) {
            Direction::Left
        } else if keys.pressed(KeyCode::Right) {
            Direction::Right
        } else if keys.pressed(KeyCode::Up) {
            Direction::Up
        } else if keys.pressed(KeyCode::Down) {
            Direction::Down
        } else {
            head.input_direction
        };
        let next = turn(head.direction, requested);
        if next != head.input_direction {
            head.input_direction = next;
        }
    }
}

/// One fixed-timestep tick: commit the pending direction, advance the head,
/// wrap at the edges, drop a segment at the new position and trim the tail
/// back to the target length.
fn snake_movement(
    mut commands: Commands,
    mut heads: Query<(&mut Position, &Size, &mut SnakeHead)>,
) {
    for (mut position, size, mut head) in heads.iter_mut() {
        head.direction = head.input_direction;
        let (dx, dy) = head.direction.velocity(head.step);
        position.x += dx;
        position.y += dy;
        wrap_position(position.as_mut(), size);

        let segment = spawn_segment(&mut commands, *position);
        head.tail.push(segment);
        while head.tail.len() > head.target_len {
            commands.entity(head.tail.remove(0)).despawn();
        }
    }
}
