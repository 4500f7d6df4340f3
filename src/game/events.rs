//! Game events (messages).

use bevy::prelude::*;

use super::Position;

/// Message triggered when the snake's head reaches the apple.
#[derive(Message)]
pub struct AppleEaten {
    pub position: Position,
}

/// Message triggered when the snake ran into itself and was reset.
#[derive(Message)]
pub struct SnakeReset;
