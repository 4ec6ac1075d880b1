use bevy::prelude::{Component, Entity};

use crate::common::components::Direction;

#[derive(Component)]
pub struct SnakeHead {
    /// Direction requested by input, committed at the next movement tick.
    pub input_direction: Direction,
    pub direction: Direction,
    pub step: f32,
    /// Body segments, oldest first.
    pub tail: Vec<Entity>,
    /// Target body length; doubles as the score.
    pub target_len: usize,
}

#[derive(Component)]
pub struct BodySegment;

/// A turn is rejected only when it reverses the committed direction.
pub fn turn(current: Direction, requested: Direction) -> Direction {
    if requested == current.opposite() {
        current
    } else {
        requested
    }
}
