//! Snake plugin - handles snake movement, input, growth, and self-collision.

use bevy::prelude::*;
use rand::Rng;
use std::collections::VecDeque;

use crate::food::Apple;
use crate::game::{
    AppleEaten, BOARD_CENTER, Canvas, Direction, Draw, GameSet, NECK_LENGTH, Position,
    SNAKE_COLOR, SnakeReset, TickStep,
};

/// Plugin for snake-related systems.
pub struct SnakePlugin;

impl Plugin for SnakePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Snake>()
            .add_systems(
                Update,
                (read_direction_input, exit_on_escape).in_set(GameSet::Input),
            )
            .add_systems(Update, advance_snake.in_set(TickStep::Move));
    }
}

/// Outcome of a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Moved,
    Grew,
    Collided,
}

/// The snake: body cells head first, plus the length it is growing towards.
#[derive(Resource, Debug, Clone)]
pub struct Snake {
    /// Head first, never empty.
    body: VecDeque<Position>,
    length: usize,
    direction: Direction,
    next_direction: Option<Direction>,
    previous_tail: Option<Position>,
}

impl Default for Snake {
    fn default() -> Self {
        Snake::new(BOARD_CENTER, Direction::Right)
    }
}

impl Snake {
    pub fn new(start: Position, direction: Direction) -> Self {
        Snake {
            body: VecDeque::from([start]),
            length: 1,
            direction,
            next_direction: None,
            previous_tail: None,
        }
    }

    pub fn head(&self) -> Position {
        self.body.front().copied().unwrap_or(BOARD_CENTER)
    }

    #[cfg(test)]
    pub fn body(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    pub fn occupies(&self, cell: Position) -> bool {
        self.body.contains(&cell)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Target length.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[cfg(test)]
    pub fn pending_direction(&self) -> Option<Direction> {
        self.next_direction
    }

    /// Cell vacated by the last move, if the snake did not grow.
    #[cfg(test)]
    pub fn previous_tail(&self) -> Option<Position> {
        self.previous_tail
    }

    /// Queues a turn for the next move. Reversing into the neck is ignored.
    pub fn turn(&mut self, direction: Direction) {
        if direction != self.direction.opposite() {
            self.next_direction = Some(direction);
        }
    }

    /// Applies the queued turn, if any.
    pub fn update_direction(&mut self) {
        if let Some(direction) = self.next_direction.take() {
            self.direction = direction;
        }
    }

    pub fn next_head(&self) -> Position {
        self.head().step(self.direction)
    }

    /// Moves one cell forward. With `grow` the tail stays put and the target
    /// length goes up by one, so the body always ends at `length` cells.
    pub fn advance(&mut self, grow: bool) -> Step {
        let new_head = self.next_head();
        self.body.push_front(new_head);
        self.previous_tail = None;

        if grow {
            self.length += 1;
        }
        while self.body.len() > self.length {
            self.previous_tail = self.body.pop_back();
        }

        if self.body.iter().skip(NECK_LENGTH).any(|&cell| cell == new_head) {
            Step::Collided
        } else if grow {
            Step::Grew
        } else {
            Step::Moved
        }
    }

    /// Back to a single cell in the board center, heading somewhere new.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Snake::new(BOARD_CENTER, Direction::random(rng));
    }
}

impl Draw for Snake {
    fn draw(&self, canvas: &mut Canvas) {
        // Erase first: the head may have moved into the cell the tail just left.
        if let Some(tail) = self.previous_tail {
            canvas.erase(tail);
        }
        canvas.paint(self.head(), SNAKE_COLOR);
    }
}

/// System to read every movement key pressed since the last frame.
fn read_direction_input(keyboard_input: Res<ButtonInput<KeyCode>>, mut snake: ResMut<Snake>) {
    for direction in keyboard_input
        .get_just_pressed()
        .filter_map(|&key| Direction::from_key(key))
    {
        snake.turn(direction);
    }
}

/// System to quit the game on Escape.
fn exit_on_escape(keyboard_input: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keyboard_input.just_pressed(KeyCode::Escape) {
        info!("Escape pressed, quitting");
        exit.write(AppExit::Success);
    }
}

/// System to move the snake one cell per tick.
fn advance_snake(
    mut snake: ResMut<Snake>,
    apple: Res<Apple>,
    mut eaten_writer: MessageWriter<AppleEaten>,
    mut reset_writer: MessageWriter<SnakeReset>,
) {
    snake.update_direction();
    let grow = snake.next_head() == apple.position();

    match snake.advance(grow) {
        Step::Collided => {
            let length = snake.length();
            snake.reset(&mut rand::rng());
            info!(
                "Snake ran into itself at length {}, restarting heading {:?}",
                length,
                snake.direction()
            );
            reset_writer.write(SnakeReset);
        }
        Step::Grew => {
            eaten_writer.write(AppleEaten {
                position: apple.position(),
            });
        }
        Step::Moved => {}
    }
}
