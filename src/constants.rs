//! Fixed sizes, thresholds and storage keys for the canvas.

/// Side length of the square canvas, in cells.
pub const GRID_SIZE: usize = 30;

/// Number of prior grid snapshots kept for undo.
pub const HISTORY_CAPACITY: usize = 10;

/// A rectangle must be at least this wide and this tall to be reported.
pub const MIN_RECT_SIDE: usize = 3;

/// Shortest same-color run reported as a line.
pub const MIN_LINE_LENGTH: usize = 5;

/// Smallest connected component reported as a filled area.
pub const MIN_AREA_PIXELS: usize = 10;

/// Edge length of one grid cell in the exported image.
pub const EXPORT_PIXEL_SIZE: u32 = 10;

/// File name used for exported images.
pub const EXPORT_FILE_NAME: &str = "pixel-art.png";

/// Storage key for the serialized grid.
pub const STORAGE_KEY: &str = "pixelArtCanvas";

/// Storage key for the high score.
pub const HIGH_SCORE_KEY: &str = "pixelArtHighScore";
