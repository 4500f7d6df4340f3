//! ECS components and grid primitives for the snake game.

use bevy::prelude::*;
use rand::Rng;

use super::{GRID_HEIGHT, GRID_WIDTH};

/// Grid cell on the board. `y` grows downward, like screen rows.
#[derive(Component, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Maps the cell onto the board, wrapping across opposite edges.
    pub fn wrapped(self) -> Self {
        Position {
            x: self.x.rem_euclid(GRID_WIDTH),
            y: self.y.rem_euclid(GRID_HEIGHT),
        }
    }

    /// The neighbouring cell in `direction`, wrapped onto the board.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Position::new(self.x + dx, self.y + dy).wrapped()
    }
}

/// Direction enum for snake movement.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];

    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Unit offset in grid space.
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    /// Maps a pressed key to a direction, if it is one of the movement keys.
    pub fn from_key(key: KeyCode) -> Option<Direction> {
        match key {
            KeyCode::ArrowLeft | KeyCode::KeyA => Some(Direction::Left),
            KeyCode::ArrowRight | KeyCode::KeyD => Some(Direction::Right),
            KeyCode::ArrowUp | KeyCode::KeyW => Some(Direction::Up),
            KeyCode::ArrowDown | KeyCode::KeyS => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Direction::ALL[rng.random_range(0..Direction::ALL.len())]
    }
}

/// Marks the sprite that fills one board cell.
#[derive(Component)]
pub struct Tile;

/// Marks the outline drawn around a painted board cell.
#[derive(Component)]
pub struct TileBorder;

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn wrapped_keeps_cells_on_the_board() {
        assert_eq!(Position::new(-1, 0).wrapped(), Position::new(GRID_WIDTH - 1, 0));
        assert_eq!(Position::new(GRID_WIDTH, GRID_HEIGHT).wrapped(), Position::new(0, 0));
        assert_eq!(Position::new(3, -25).wrapped(), Position::new(3, GRID_HEIGHT - 1));
    }

    #[test]
    fn step_crosses_every_edge() {
        assert_eq!(Position::new(GRID_WIDTH - 1, 5).step(Direction::Right), Position::new(0, 5));
        assert_eq!(Position::new(0, 5).step(Direction::Left), Position::new(GRID_WIDTH - 1, 5));
        assert_eq!(Position::new(4, 0).step(Direction::Up), Position::new(4, GRID_HEIGHT - 1));
        assert_eq!(Position::new(4, GRID_HEIGHT - 1).step(Direction::Down), Position::new(4, 0));
    }

    #[test]
    fn opposite_is_an_involution_with_negated_offset() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.offset();
            assert_eq!(direction.opposite().offset(), (-dx, -dy));
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn movement_keys_map_to_directions() {
        assert_eq!(Direction::from_key(KeyCode::ArrowUp), Some(Direction::Up));
        assert_eq!(Direction::from_key(KeyCode::KeyS), Some(Direction::Down));
        assert_eq!(Direction::from_key(KeyCode::ArrowLeft), Some(Direction::Left));
        assert_eq!(Direction::from_key(KeyCode::KeyD), Some(Direction::Right));
        assert_eq!(Direction::from_key(KeyCode::Escape), None);
    }

    #[test]
    fn random_direction_covers_all_four() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = Vec::new();
        for _ in 0..200 {
            let direction = Direction::random(&mut rng);
            if !seen.contains(&direction) {
                seen.push(direction);
            }
        }
        assert_eq!(seen.len(), 4);
    }
}
