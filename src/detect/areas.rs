use super::{Shape, ShapeKind, Visited};
use crate::constants::MIN_AREA_PIXELS;
use crate::grid::Grid;

/// Result of filling one connected same-color region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloodFill {
    pub size: usize,
    pub min_row: usize,
    pub min_col: usize,
}

/// Finds 4-connected same-color regions of painted cells.
///
/// Every painted cell is filled at most once; regions of at least
/// `MIN_AREA_PIXELS` cells are reported.
pub fn detect_filled_areas(grid: &Grid) -> Vec<Shape> {
    let mut visited = Visited::for_grid(grid);
    let mut shapes = Vec::new();

    for row in 0..grid.size() {
        for col in 0..grid.size() {
            let color = grid.at(row, col);
            if visited.is_marked(row, col) || color.is_background() {
                continue;
            }

            let fill = fill_region(grid, row, col, &mut visited);
            if fill.size >= MIN_AREA_PIXELS {
                shapes.push(Shape {
                    row: fill.min_row,
                    col: fill.min_col,
                    color,
                    kind: ShapeKind::FilledArea {
                        pixel_count: fill.size,
                        seed_row: row,
                        seed_col: col,
                    },
                });
            }
        }
    }

    shapes
}

/// Fills the region containing (`row`, `col`) on a fresh visited buffer.
///
/// Returns `None` for coordinates outside the grid. Filling a background
/// cell measures the background region around it.
pub fn flood_fill(grid: &Grid, row: usize, col: usize) -> Option<FloodFill> {
    if !grid.contains(row, col) {
        return None;
    }
    let mut visited = Visited::for_grid(grid);
    Some(fill_region(grid, row, col, &mut visited))
}

/// Iterative depth-first fill with an explicit stack.
fn fill_region(grid: &Grid, row: usize, col: usize, visited: &mut Visited) -> FloodFill {
    let target = grid.at(row, col);
    let last = grid.size() - 1;
    let mut stack = vec![(row, col)];
    let mut fill = FloodFill {
        size: 0,
        min_row: row,
        min_col: col,
    };

    while let Some((r, c)) = stack.pop() {
        if grid.at(r, c) != target || !visited.mark(r, c) {
            continue;
        }
        fill.size += 1;
        fill.min_row = fill.min_row.min(r);
        fill.min_col = fill.min_col.min(c);

        if r < last {
            stack.push((r + 1, c));
        }
        if r > 0 {
            stack.push((r - 1, c));
        }
        if c < last {
            stack.push((r, c + 1));
        }
        if c > 0 {
            stack.push((r, c - 1));
        }
    }

    fill
}
