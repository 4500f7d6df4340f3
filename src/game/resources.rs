//! Game resources (singleton state).

use bevy::prelude::*;

use super::{BACKGROUND_COLOR, GRID_HEIGHT, GRID_WIDTH, Position};

/// Retained picture of the board: one color per cell.
///
/// Entities paint onto it every tick and cells keep their color until they
/// are painted again, so only the head and the vacated tail need updating.
#[derive(Resource, Debug, Clone)]
pub struct Canvas {
    width: i32,
    height: i32,
    background: Color,
    cells: Vec<Color>,
}

impl Canvas {
    pub fn new(width: i32, height: i32, background: Color) -> Self {
        Canvas {
            width,
            height,
            background,
            cells: vec![background; (width * height) as usize],
        }
    }

    fn index(&self, cell: Position) -> Option<usize> {
        let inside = (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y);
        inside.then(|| (cell.y * self.width + cell.x) as usize)
    }

    pub fn paint(&mut self, cell: Position, color: Color) {
        if let Some(index) = self.index(cell) {
            self.cells[index] = color;
        }
    }

    /// Erases a single cell back to the background.
    pub fn erase(&mut self, cell: Position) {
        self.paint(cell, self.background);
    }

    /// Clears the whole board to the background.
    pub fn clear(&mut self) {
        self.cells.fill(self.background);
    }

    pub fn color_at(&self, cell: Position) -> Option<Color> {
        self.index(cell).map(|index| self.cells[index])
    }

    pub fn is_painted(&self, cell: Position) -> bool {
        self.color_at(cell)
            .is_some_and(|color| color != self.background)
    }

    #[cfg(test)]
    pub fn painted_cells(&self) -> usize {
        self.cells.iter().filter(|&&c| c != self.background).count()
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Canvas::new(GRID_WIDTH, GRID_HEIGHT, BACKGROUND_COLOR)
    }
}

/// Anything that can render itself onto the board at its current state.
pub trait Draw {
    fn draw(&self, canvas: &mut Canvas);
}
