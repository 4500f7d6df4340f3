//! Food plugin - handles apple placement and respawning.

use bevy::prelude::*;
use rand::Rng;

use crate::game::{
    APPLE_COLOR, AppleEaten, Canvas, Draw, GRID_HEIGHT, GRID_WIDTH, Position, SnakeReset, TickStep,
};
use crate::snake::Snake;

/// Plugin for food-related systems.
pub struct FoodPlugin;

impl Plugin for FoodPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, place_apple)
            .add_systems(Update, respawn_apple.in_set(TickStep::Feed));
    }
}

/// The single apple on the board.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Apple {
    position: Position,
}

impl Apple {
    #[cfg(test)]
    pub fn at(position: Position) -> Self {
        Apple { position }
    }

    /// Places an apple on a random cell the snake does not occupy.
    pub fn spawn<R: Rng + ?Sized>(snake: &Snake, rng: &mut R) -> Self {
        Apple {
            position: free_cell(snake, rng),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn relocate<R: Rng + ?Sized>(&mut self, snake: &Snake, rng: &mut R) {
        self.position = free_cell(snake, rng);
    }
}

impl Draw for Apple {
    fn draw(&self, canvas: &mut Canvas) {
        canvas.paint(self.position, APPLE_COLOR);
    }
}

fn free_cell<R: Rng + ?Sized>(snake: &Snake, rng: &mut R) -> Position {
    // Keep generating positions until we find one that doesn't overlap with the snake
    loop {
        let position = Position {
            x: rng.random_range(0..GRID_WIDTH),
            y: rng.random_range(0..GRID_HEIGHT),
        };
        if !snake.occupies(position) {
            return position;
        }
    }
}

/// Startup system placing the first apple.
fn place_apple(mut commands: Commands, snake: Res<Snake>) {
    let apple = Apple::spawn(&snake, &mut rand::rng());
    info!("First apple at {:?}", apple.position());
    commands.insert_resource(apple);
}

/// System to move the apple once it is eaten, or when a reset put the snake on it.
fn respawn_apple(
    mut apple: ResMut<Apple>,
    snake: Res<Snake>,
    mut eaten_reader: MessageReader<AppleEaten>,
    mut reset_reader: MessageReader<SnakeReset>,
) {
    let mut eaten = false;
    for event in eaten_reader.read() {
        debug!("Apple eaten at {:?}, snake length {}", event.position, snake.length());
        eaten = true;
    }
    let reset = reset_reader.read().count() > 0;

    if eaten || (reset && snake.occupies(apple.position())) {
        apple.relocate(&snake, &mut rand::rng());
    }
}
