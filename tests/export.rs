use std::path::PathBuf;

use pixel_canvas::constants::{EXPORT_FILE_NAME, EXPORT_PIXEL_SIZE, GRID_SIZE};
use pixel_canvas::export::{encode_png, export_png};
use pixel_canvas::{Color, Grid};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("pixel_canvas_{}_{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_png_decodes_to_grid_colors() {
    let mut grid = Grid::new();
    let teal = Color::rgb(0x00, 0x80, 0x80);
    grid.set(0, 0, teal).unwrap();
    grid.set(GRID_SIZE - 1, 3, Color::BLACK).unwrap();

    let bytes = encode_png(&grid).unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();

    let side = GRID_SIZE as u32 * EXPORT_PIXEL_SIZE;
    assert_eq!(decoded.dimensions(), (side, side));
    assert_eq!(*decoded.get_pixel(5, 5), teal.to_rgba());
    assert_eq!(*decoded.get_pixel(35, side - 1), Color::BLACK.to_rgba());
    assert_eq!(*decoded.get_pixel(15, 5), Color::WHITE.to_rgba());
}

#[test]
fn test_export_writes_named_file() {
    let dir = scratch_dir("export");
    let mut grid = Grid::new();
    grid.set(2, 2, Color::BLACK).unwrap();

    let path = export_png(&grid, &dir).unwrap();
    assert_eq!(path, dir.join(EXPORT_FILE_NAME));

    let written = std::fs::read(&path).unwrap();
    assert_eq!(written, encode_png(&grid).unwrap());

    // only the finished file is left behind
    let entries: Vec<_> = std::fs::read_dir(&dir).unwrap().collect();
    assert_eq!(entries.len(), 1);

    std::fs::remove_dir_all(&dir).unwrap();
}
