use super::{Shape, ShapeKind};
use crate::color::Color;
use crate::constants::MIN_LINE_LENGTH;
use crate::grid::Grid;

#[derive(Clone, Copy)]
enum Axis {
    Horizontal,
    Vertical,
}

/// Run-length scan of every row, then every column.
///
/// A run ends at a background cell, at a color change or at the grid edge.
/// Runs of at least `MIN_LINE_LENGTH` cells are reported.
pub fn detect_lines(grid: &Grid) -> Vec<Shape> {
    let mut shapes = Vec::new();
    for row in 0..grid.size() {
        scan_line(grid, Axis::Horizontal, row, &mut shapes);
    }
    for col in 0..grid.size() {
        scan_line(grid, Axis::Vertical, col, &mut shapes);
    }
    shapes
}

fn scan_line(grid: &Grid, axis: Axis, fixed: usize, out: &mut Vec<Shape>) {
    let cell = |i: usize| match axis {
        Axis::Horizontal => grid.at(fixed, i),
        Axis::Vertical => grid.at(i, fixed),
    };

    // (start index, color) of the run in progress
    let mut run: Option<(usize, Color)> = None;

    for i in 0..grid.size() {
        let color = cell(i);
        match run {
            Some((start, current)) if color.is_background() => {
                emit_run(axis, fixed, start, i, current, out);
                run = None;
            }
            Some((start, current)) if color != current => {
                emit_run(axis, fixed, start, i, current, out);
                run = Some((i, color));
            }
            None if !color.is_background() => run = Some((i, color)),
            _ => {}
        }
    }

    if let Some((start, current)) = run {
        emit_run(axis, fixed, start, grid.size(), current, out);
    }
}

fn emit_run(axis: Axis, fixed: usize, start: usize, end: usize, color: Color, out: &mut Vec<Shape>) {
    let length = end - start;
    if length < MIN_LINE_LENGTH {
        return;
    }
    let shape = match axis {
        Axis::Horizontal => Shape {
            row: fixed,
            col: start,
            color,
            kind: ShapeKind::HorizontalLine { length },
        },
        Axis::Vertical => Shape {
            row: start,
            col: fixed,
            color,
            kind: ShapeKind::VerticalLine { length },
        },
    };
    out.push(shape);
}
