use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgba, RgbaImage};
use thiserror::Error;

use crate::color::Color;
use crate::constants::{EXPORT_FILE_NAME, EXPORT_PIXEL_SIZE};
use crate::grid::Grid;

/// Errors that can occur while exporting the canvas
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type ExportResult<T> = Result<T, ExportError>;

/// Rasterizes the grid, one `EXPORT_PIXEL_SIZE` square per cell
pub fn render(grid: &Grid) -> RgbaImage {
    let side = grid.size() as u32 * EXPORT_PIXEL_SIZE;
    let mut image = RgbaImage::from_pixel(side, side, Color::WHITE.to_rgba());

    for (row, col, color) in grid.cells() {
        if color.is_background() {
            continue;
        }
        let fill: Rgba<u8> = color.to_rgba();
        let x0 = col as u32 * EXPORT_PIXEL_SIZE;
        let y0 = row as u32 * EXPORT_PIXEL_SIZE;
        for y in y0..y0 + EXPORT_PIXEL_SIZE {
            for x in x0..x0 + EXPORT_PIXEL_SIZE {
                image.put_pixel(x, y, fill);
            }
        }
    }

    image
}

/// Encodes the rendered grid as PNG bytes
pub fn encode_png(grid: &Grid) -> ExportResult<Vec<u8>> {
    let mut bytes = Cursor::new(Vec::new());
    render(grid).write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

/// Writes `pixel-art.png` into `dir` and returns its path.
///
/// The image is encoded in memory and written to a temporary file that is
/// renamed into place, so a failure never leaves a truncated PNG behind.
pub fn export_png(grid: &Grid, dir: &Path) -> ExportResult<PathBuf> {
    let bytes = encode_png(grid)?;
    let path = dir.join(EXPORT_FILE_NAME);
    let partial = dir.join(format!(".{EXPORT_FILE_NAME}.part"));

    fs::write(&partial, &bytes).map_err(|source| ExportError::Write {
        path: partial.clone(),
        source,
    })?;
    if let Err(source) = fs::rename(&partial, &path) {
        let _ = fs::remove_file(&partial);
        return Err(ExportError::Write { path, source });
    }

    log::info!("Exported {} ({} bytes)", path.display(), bytes.len());
    Ok(path)
}
