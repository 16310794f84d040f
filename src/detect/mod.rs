//! Pattern detection over a grid snapshot.
//!
//! Three independent detectors scan the whole grid: greedy rectangles,
//! run-length lines and flood-filled areas. They never mutate the grid and
//! keep no state between calls, so running them twice on the same grid
//! yields the same list in the same order.
//!
//! The same pixels may show up in several shapes (a solid block is a
//! rectangle, a stack of lines and a filled area at once). That overlap is
//! kept as is.

mod areas;
mod lines;
mod rectangles;

use serde::Serialize;
use std::fmt;

use crate::color::Color;
use crate::grid::Grid;

pub use areas::{detect_filled_areas, flood_fill, FloodFill};
pub use lines::detect_lines;
pub use rectangles::detect_rectangles;

/// Kind-specific measurements of a detected shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum ShapeKind {
    Rectangle {
        width: usize,
        height: usize,
    },
    HorizontalLine {
        length: usize,
    },
    VerticalLine {
        length: usize,
    },
    /// A 4-connected same-color region. `seed_row`/`seed_col` is the cell
    /// the fill started from, which always belongs to the region.
    FilledArea {
        pixel_count: usize,
        seed_row: usize,
        seed_col: usize,
    },
}

/// A detected pattern anchored at (`row`, `col`).
///
/// For rectangles and lines the anchor is the top-left cell. For filled
/// areas it is the minimum row and minimum column of the region, which need
/// not be a cell of the region itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shape {
    pub row: usize,
    pub col: usize,
    pub color: Color,
    #[serde(flatten)]
    pub kind: ShapeKind,
}

impl Shape {
    pub fn label(&self) -> &'static str {
        match self.kind {
            ShapeKind::Rectangle { .. } => "Rectangle",
            ShapeKind::HorizontalLine { .. } => "Horizontal Line",
            ShapeKind::VerticalLine { .. } => "Vertical Line",
            ShapeKind::FilledArea { .. } => "Filled Area",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ShapeKind::Rectangle { width, height } => write!(
                f,
                "{} {}x{} at ({}, {}) {}",
                self.label(), width, height, self.row, self.col, self.color
            ),
            ShapeKind::HorizontalLine { length } | ShapeKind::VerticalLine { length } => write!(
                f,
                "{} of {} at ({}, {}) {}",
                self.label(), length, self.row, self.col, self.color
            ),
            ShapeKind::FilledArea { pixel_count, .. } => write!(
                f,
                "{} of {} px at ({}, {}) {}",
                self.label(), pixel_count, self.row, self.col, self.color
            ),
        }
    }
}

/// Runs every detector: rectangles, then lines, then filled areas.
pub fn detect_shapes(grid: &Grid) -> Vec<Shape> {
    let mut shapes = detect_rectangles(grid);
    shapes.extend(detect_lines(grid));
    shapes.extend(detect_filled_areas(grid));
    log::debug!("Detected {} shapes", shapes.len());
    shapes
}

/// Per-call "already claimed" bookkeeping, sized to the grid
pub(crate) struct Visited {
    size: usize,
    marks: Vec<bool>,
}

impl Visited {
    pub(crate) fn for_grid(grid: &Grid) -> Self {
        let size = grid.size();
        Self {
            size,
            marks: vec![false; size * size],
        }
    }

    pub(crate) fn is_marked(&self, row: usize, col: usize) -> bool {
        self.marks[row * self.size + col]
    }

    /// Marks a cell, returning false if it was already marked
    pub(crate) fn mark(&mut self, row: usize, col: usize) -> bool {
        !std::mem::replace(&mut self.marks[row * self.size + col], true)
    }
}
