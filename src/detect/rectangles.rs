use super::{Shape, ShapeKind, Visited};
use crate::color::Color;
use crate::constants::MIN_RECT_SIDE;
use crate::grid::Grid;

/// Greedy rectangle scan.
///
/// Cells are visited in row-major order. From each unclaimed painted cell the
/// same-color run to the right gives the width, and the number of following
/// rows repeating that exact run gives the height. The whole block is claimed
/// whether or not it is large enough to report, so the first block found
/// wins over any later, possibly larger, interpretation.
pub fn detect_rectangles(grid: &Grid) -> Vec<Shape> {
    let mut visited = Visited::for_grid(grid);
    let mut shapes = Vec::new();

    for row in 0..grid.size() {
        for col in 0..grid.size() {
            let color = grid.at(row, col);
            if visited.is_marked(row, col) || color.is_background() {
                continue;
            }

            let (width, height) = measure_block(grid, row, col, color);
            for r in row..row + height {
                for c in col..col + width {
                    visited.mark(r, c);
                }
            }

            if width >= MIN_RECT_SIDE && height >= MIN_RECT_SIDE {
                shapes.push(Shape {
                    row,
                    col,
                    color,
                    kind: ShapeKind::Rectangle { width, height },
                });
            }
        }
    }

    shapes
}

fn measure_block(grid: &Grid, row: usize, col: usize, color: Color) -> (usize, usize) {
    let size = grid.size();
    let width = (col..size).take_while(|&c| grid.at(row, c) == color).count();
    let height = (row..size)
        .take_while(|&r| (col..col + width).all(|c| grid.at(r, c) == color))
        .count();
    (width, height)
}
