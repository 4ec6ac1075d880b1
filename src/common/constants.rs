use std::time::Duration;

pub const SCREEN_WIDTH: f32 = 640.0;
pub const SCREEN_HEIGHT: f32 = 480.0;

/// Side length of every square entity (head, body segment, reward).
pub const SQUARE_SIZE: f32 = 5.0;
/// Pixels the head advances per movement tick.
pub const STEP: f32 = 5.0;

pub const INITIAL_TARGET_LEN: usize = 10;
pub const MAX_REWARDS: usize = 5;

pub const MOVE_TICK: Duration = Duration::from_millis(200);
pub const REWARD_TICK: Duration = Duration::from_millis(500);
