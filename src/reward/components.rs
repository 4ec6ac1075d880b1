use bevy::prelude::Component;

#[derive(Component)]
pub struct Reward {
    /// Monotonic spawn order, used to cull oldest first.
    pub id: u32,
}
