use bevy::prelude::Component;

// Tag component for the score overlay text
#[derive(Component)]
pub struct ScoreText;

// Tag component used to tag entities shown only before the game starts
#[derive(Component)]
pub struct OnReadyScreen;
