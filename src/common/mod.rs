use bevy::prelude::*;
use iyes_loopless::prelude::*;

use components::Size;

use crate::common::components::Position;
use crate::common::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::snake::components::SnakeHead;
use crate::state::GameState;

pub mod components;
pub mod constants;

pub struct CommonPlugin;

impl Plugin for CommonPlugin {
    fn build(&self, app: &mut App) {
        app.add_startup_system(setup_camera)
            .add_system(start_game.run_in_state(GameState::Ready))
            .add_system_set_to_stage(
                CoreStage::PostUpdate,
                SystemSet::new()
                    .with_system(position_translation)
                    .with_system(size_scaling),
            );
    }
}

/// Wraps each axis independently once the square extends past an edge
/// ("transparent" walls). After wrapping, the square lies fully on screen.
pub fn wrap_position(pos: &mut Position, size: &Size) {
    if pos.x + size.width > SCREEN_WIDTH {
        pos.x = 0.0;
    } else if pos.x < 0.0 {
        pos.x = SCREEN_WIDTH - size.width;
    }

    if pos.y + size.height > SCREEN_HEIGHT {
        pos.y = 0.0;
    } else if pos.y < 0.0 {
        pos.y = SCREEN_HEIGHT - size.height;
    }
}

/// Axis-aligned bounding-box overlap, exclusive at the edges.
pub fn overlaps(a: &Position, a_size: &Size, b: &Position, b_size: &Size) -> bool {
    a.x < b.x + b_size.width
        && b.x < a.x + a_size.width
        && a.y < b.y + b_size.height
        && b.y < a.y + a_size.height
}

fn start_game(mut commands: Commands, keys: Res<Input<KeyCode>>) {
    if keys.just_pressed(KeyCode::Space) {
        info!("starting game");
        commands.insert_resource(NextState(GameState::Running));
    }
}

fn size_scaling(mut q: Query<(&Size, &mut Transform)>) {
    // Sprites are unit squares; scale carries the pixel extent
    for (size, mut transform) in q.iter_mut() {
        transform.scale = Vec3::new(size.width, size.height, 1.0);
    }
}

fn position_translation(mut q: Query<(&Position, &Size, &mut Transform, Option<&SnakeHead>)>) {
    // Screen space is top-left anchored with y down; Bevy's world space is
    // centered with y up. Heads draw above segments and rewards.
    for (pos, size, mut transform, head) in q.iter_mut() {
        let z = if head.is_some() { 1.0 } else { 0.0 };

        transform.translation = Vec3::new(
            pos.x - SCREEN_WIDTH / 2.0 + size.width / 2.0,
            SCREEN_HEIGHT / 2.0 - pos.y - size.height / 2.0,
            z,
        );
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn_bundle(Camera2dBundle::default());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::components::Direction;
    use crate::common::constants::{SQUARE_SIZE, STEP};

    fn advance(pos: &mut Position, dir: Direction, step: f32) {
        let (dx, dy) = dir.velocity(step);
        pos.x += dx;
        pos.y += dy;
    }

    #[test]
    fn head_near_right_edge_wraps_to_zero() {
        let size = Size::square(SQUARE_SIZE);
        let mut pos = Position { x: 638.0, y: 240.0 };
        advance(&mut pos, Direction::Right, STEP);
        wrap_position(&mut pos, &size);
        assert_eq!(pos.x, 0.0);
        assert_eq!(pos.y, 240.0);
    }

    #[test]
    fn head_past_left_edge_wraps_to_far_side() {
        let size = Size::square(SQUARE_SIZE);
        let mut pos = Position { x: 0.0, y: 100.0 };
        advance(&mut pos, Direction::Left, STEP);
        wrap_position(&mut pos, &size);
        assert_eq!(pos.x, SCREEN_WIDTH - SQUARE_SIZE);
    }

    #[test]
    fn vertical_wrap_is_symmetric() {
        let size = Size::square(SQUARE_SIZE);

        let mut pos = Position { x: 100.0, y: 478.0 };
        advance(&mut pos, Direction::Down, STEP);
        wrap_position(&mut pos, &size);
        assert_eq!(pos.y, 0.0);

        let mut pos = Position { x: 100.0, y: 2.0 };
        advance(&mut pos, Direction::Up, STEP);
        wrap_position(&mut pos, &size);
        assert_eq!(pos.y, SCREEN_HEIGHT - SQUARE_SIZE);
    }

    #[test]
    fn corner_exit_wraps_both_axes() {
        let size = Size::square(SQUARE_SIZE);
        let mut pos = Position { x: 639.0, y: 479.0 };
        wrap_position(&mut pos, &size);
        assert_eq!(pos.x, 0.0);
        assert_eq!(pos.y, 0.0);
    }

    #[test]
    fn wrapped_position_stays_on_screen() {
        let size = Size::square(SQUARE_SIZE);
        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let mut pos = Position { x: 320.0, y: 240.0 };
            for _ in 0..200 {
                advance(&mut pos, dir, STEP);
                wrap_position(&mut pos, &size);
                assert!(pos.x >= 0.0 && pos.x + size.width <= SCREEN_WIDTH);
                assert!(pos.y >= 0.0 && pos.y + size.height <= SCREEN_HEIGHT);
            }
        }
    }

    #[test]
    fn overlap_requires_intersection_on_both_axes() {
        let size = Size::square(SQUARE_SIZE);
        let head = Position { x: 100.0, y: 100.0 };

        let hit = Position { x: 103.0, y: 98.0 };
        assert!(overlaps(&head, &size, &hit, &size));

        // Same row, out of reach horizontally
        let miss_x = Position { x: 106.0, y: 100.0 };
        assert!(!overlaps(&head, &size, &miss_x, &size));

        // Touching edges do not count
        let touching = Position { x: 105.0, y: 100.0 };
        assert!(!overlaps(&head, &size, &touching, &size));
    }
}
