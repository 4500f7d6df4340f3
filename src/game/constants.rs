//! Game constants for window and grid size, colors, timing, and rendering layers.

use bevy::prelude::*;
use std::time::Duration;

use super::Position;

// Window
pub const WINDOW_TITLE: &str = "Snake";
pub const WINDOW_WIDTH: u32 = 640;
pub const WINDOW_HEIGHT: u32 = 480;

// Grid dimensions
pub const CELL_SIZE: u32 = 20;
pub const GRID_WIDTH: i32 = (WINDOW_WIDTH / CELL_SIZE) as i32;
pub const GRID_HEIGHT: i32 = (WINDOW_HEIGHT / CELL_SIZE) as i32;

// Timing
pub const MOVE_SPEED: u64 = 20;
pub const MOVE_INTERVAL: Duration = Duration::from_millis(1000 / MOVE_SPEED);

// Snake
pub const BOARD_CENTER: Position = Position {
    x: GRID_WIDTH / 2,
    y: GRID_HEIGHT / 2,
};
/// Body cells behind the head that a one-cell move can never land on.
pub const NECK_LENGTH: usize = 4;

// Colors
pub const BACKGROUND_COLOR: Color = Color::srgb(0.0, 0.0, 0.0);
pub const GRID_BORDER_COLOR: Color = Color::srgb(93.0 / 255.0, 216.0 / 255.0, 228.0 / 255.0);
pub const APPLE_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
pub const SNAKE_COLOR: Color = Color::srgb(0.0, 1.0, 0.0);

// Z-index constants for rendering layers
pub const Z_TILE: f32 = 0.0;
pub const Z_BORDER: f32 = 1.0;
