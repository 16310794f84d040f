use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Color;
use crate::constants::GRID_SIZE;

/// Errors that can occur when addressing or building a grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("Cell ({row}, {col}) is outside the {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("Expected {expected} rows, found {found}")]
    WrongRowCount { expected: usize, found: usize },

    #[error("Row {row} has {found} cells, expected {expected}")]
    WrongRowLength { row: usize, expected: usize, found: usize },
}

/// The square canvas of colored cells.
///
/// Always `GRID_SIZE` x `GRID_SIZE`. Persisted as an array of rows, each row
/// an array of `#RRGGBB` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Color>>", into = "Vec<Vec<Color>>")]
pub struct Grid {
    cells: Vec<Color>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// An all-background grid
    pub fn new() -> Self {
        Self::filled(Color::WHITE)
    }

    pub fn filled(color: Color) -> Self {
        Self {
            cells: vec![color; GRID_SIZE * GRID_SIZE],
        }
    }

    /// Side length in cells
    pub fn size(&self) -> usize {
        GRID_SIZE
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < GRID_SIZE && col < GRID_SIZE
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Color> {
        self.contains(row, col).then(|| self.cells[row * GRID_SIZE + col])
    }

    /// Reads a cell that is known to be in bounds.
    ///
    /// Panics on out-of-range coordinates; the detectors only call this
    /// inside their own loops.
    pub fn at(&self, row: usize, col: usize) -> Color {
        self.cells[row * GRID_SIZE + col]
    }

    /// Sets a cell and returns the color it held before
    pub fn set(&mut self, row: usize, col: usize, color: Color) -> Result<Color, GridError> {
        if !self.contains(row, col) {
            return Err(GridError::OutOfBounds { row, col, size: GRID_SIZE });
        }
        let cell = &mut self.cells[row * GRID_SIZE + col];
        Ok(std::mem::replace(cell, color))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.cells.chunks(GRID_SIZE)
    }

    /// All cells with their coordinates, in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Color)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &color)| (i / GRID_SIZE, i % GRID_SIZE, color))
    }

    /// Number of non-background cells
    pub fn painted_cells(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_background()).count()
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.is_background())
    }
}

impl TryFrom<Vec<Vec<Color>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<Color>>) -> Result<Self, Self::Error> {
        if rows.len() != GRID_SIZE {
            return Err(GridError::WrongRowCount {
                expected: GRID_SIZE,
                found: rows.len(),
            });
        }
        let mut cells = Vec::with_capacity(GRID_SIZE * GRID_SIZE);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != GRID_SIZE {
                return Err(GridError::WrongRowLength {
                    row,
                    expected: GRID_SIZE,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }
        Ok(Self { cells })
    }
}

impl From<Grid> for Vec<Vec<Color>> {
    fn from(grid: Grid) -> Self {
        grid.rows().map(<[Color]>::to_vec).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_blank() {
        let grid = Grid::new();
        assert_eq!(grid.size(), GRID_SIZE);
        assert!(grid.is_blank());
        assert_eq!(grid.cells().count(), GRID_SIZE * GRID_SIZE);
    }

    #[test]
    fn test_set_returns_previous_color() {
        let mut grid = Grid::new();
        let red = Color::rgb(0xFF, 0, 0);
        assert_eq!(grid.set(2, 3, red), Ok(Color::WHITE));
        assert_eq!(grid.get(2, 3), Some(red));
        assert_eq!(grid.at(2, 3), red);
        assert_eq!(grid.painted_cells(), 1);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = Grid::new();
        assert_eq!(grid.get(GRID_SIZE, 0), None);
        assert_eq!(
            grid.set(0, GRID_SIZE, Color::BLACK),
            Err(GridError::OutOfBounds { row: 0, col: GRID_SIZE, size: GRID_SIZE })
        );
    }

    #[test]
    fn test_deserialize_rejects_wrong_shape() {
        let short = vec![vec![Color::WHITE; GRID_SIZE]; GRID_SIZE - 1];
        assert_eq!(
            Grid::try_from(short),
            Err(GridError::WrongRowCount { expected: GRID_SIZE, found: GRID_SIZE - 1 })
        );

        let mut ragged = vec![vec![Color::WHITE; GRID_SIZE]; GRID_SIZE];
        ragged[4].pop();
        assert!(matches!(
            Grid::try_from(ragged),
            Err(GridError::WrongRowLength { row: 4, .. })
        ));
    }

    #[test]
    fn test_json_layout_is_rows_of_hex() {
        let mut grid = Grid::new();
        grid.set(0, 1, Color::BLACK).unwrap();
        let value = serde_json::to_value(&grid).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), GRID_SIZE);
        assert_eq!(rows[0][0], "#FFFFFF");
        assert_eq!(rows[0][1], "#000000");
    }
}
