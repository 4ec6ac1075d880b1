use bevy::prelude::*;
use iyes_loopless::prelude::*;
use rand::random;

use crate::common::components::{Position, Size};
use crate::common::constants::{
    MAX_REWARDS, REWARD_TICK, SCREEN_HEIGHT, SCREEN_WIDTH, SQUARE_SIZE,
};
use crate::common::overlaps;
use crate::reward::components::Reward;
use crate::reward::resources::RewardId;
use crate::snake::components::SnakeHead;
use crate::state::GameState;

pub mod components;
pub mod resources;

pub struct RewardPlugin;

impl Plugin for RewardPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(RewardId { id: 0 })
            .add_system(eat_reward.run_in_state(GameState::Running))
            .add_fixed_timestep(REWARD_TICK, "reward")
            .add_fixed_timestep_system(
                "reward",
                0,
                auto_spawn_reward.run_in_state(GameState::Running),
            );
    }
}

const REWARD_COLOR: Color = Color::rgb(1.0, 0.9, 0.0);

pub fn spawn_reward(commands: &mut Commands, reward_id: &mut RewardId, position: Position) {
    commands
        .spawn_bundle(SpriteBundle {
            sprite: Sprite {
                color: REWARD_COLOR,
                ..default()
            },
            ..default()
        })
        .insert(Reward { id: reward_id.id })
        .insert(position)
        .insert(Size::square(SQUARE_SIZE));
    reward_id.id += 1;
}

/// Entities to despawn, oldest spawn order first, to hold the reward cap.
fn over_cap<T: Copy>(mut alive: Vec<(T, u32)>) -> Vec<T> {
    if alive.len() <= MAX_REWARDS {
        return vec![];
    }
    alive.sort_by_key(|(_, id)| *id);
    let excess = alive.len() - MAX_REWARDS;
    alive.into_iter().take(excess).map(|(e, _)| e).collect()
}

/// One reward tick: spawn at a random in-bounds position while under the
/// cap, cull oldest first if the cap is ever exceeded.
fn auto_spawn_reward(
    mut commands: Commands,
    mut reward_id: ResMut<RewardId>,
    rewards: Query<(Entity, &Reward)>,
) {
    let alive: Vec<(Entity, u32)> = rewards.iter().map(|(e, r)| (e, r.id)).collect();

    if alive.len() < MAX_REWARDS {
        let position = Position {
            x: random::<f32>() * (SCREEN_WIDTH - SQUARE_SIZE),
            y: random::<f32>() * (SCREEN_HEIGHT - SQUARE_SIZE),
        };
        spawn_reward(&mut commands, reward_id.as_mut(), position);
    }

    for entity in over_cap(alive) {
        commands.entity(entity).despawn();
    }
}

/// Eats at most one reward per head per frame on bounding-box overlap.
fn eat_reward(
    mut commands: Commands,
    rewards: Query<(Entity, &Position, &Size), With<Reward>>,
    mut heads: Query<(&Position, &Size, &mut SnakeHead), Without<Reward>>,
) {
    for (position, size, mut head) in heads.iter_mut() {
        for (entity, reward_pos, reward_size) in rewards.iter() {
            if overlaps(position, size, reward_pos, reward_size) {
                commands.entity(entity).despawn();
                head.target_len += 1;
                info!("score: {}", head.target_len);
                break;
            }
        }
    }
}
