use bevy::prelude::Component;

/// Top-left anchor in screen pixels, y growing downward.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn square(side: f32) -> Self {
        Size {
            width: side,
            height: side,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Velocity vector for one step along this direction (screen space, y down).
    pub fn velocity(&self, step: f32) -> (f32, f32) {
        match self {
            Direction::Up => (0.0, -step),
            Direction::Down => (0.0, step),
            Direction::Left => (-step, 0.0),
            Direction::Right => (step, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn velocity_matches_direction() {
        assert_eq!(Direction::Up.velocity(5.0), (0.0, -5.0));
        assert_eq!(Direction::Down.velocity(5.0), (0.0, 5.0));
        assert_eq!(Direction::Left.velocity(5.0), (-5.0, 0.0));
        assert_eq!(Direction::Right.velocity(5.0), (5.0, 0.0));
    }

    #[test]
    fn opposite_is_involutive() {
        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert_ne!(dir, dir.opposite());
            assert_eq!(dir, dir.opposite().opposite());
        }
    }
}
