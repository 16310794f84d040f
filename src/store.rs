use crate::color::Color;
use crate::command::Command;
use crate::constants::{HIGH_SCORE_KEY, STORAGE_KEY};
use crate::detect::{self, Shape};
use crate::grid::{Grid, GridError};
use crate::history::History;
use crate::storage::{KeyValueStore, PersistenceError, PersistenceResult};

/// Owns the canvas: the current grid, its undo history and the paint score.
///
/// Storage is handed in by the caller. Every change to the grid is written
/// back immediately; a failed write is logged and the session carries on.
pub struct GridStore<S: KeyValueStore> {
    grid: Grid,
    history: History,
    /// Cells painted this session
    paint_count: u64,
    /// Highest `paint_count` ever reached, persisted
    high_score: u64,
    storage: S,
}

impl<S: KeyValueStore> std::fmt::Debug for GridStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridStore")
            .field("painted_cells", &self.grid.painted_cells())
            .field("undo_depth", &self.history.depth())
            .field("paint_count", &self.paint_count)
            .field("high_score", &self.high_score)
            .finish()
    }
}

impl<S: KeyValueStore> GridStore<S> {
    /// Creates a store over `storage` and loads any saved canvas from it
    pub fn open(storage: S) -> Self {
        let mut store = Self {
            grid: Grid::new(),
            history: History::new(),
            paint_count: 0,
            high_score: 0,
            storage,
        };
        store.load();
        store
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn paint_count(&self) -> u64 {
        self.paint_count
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.depth()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Shapes detected on the current grid
    pub fn shapes(&self) -> Vec<Shape> {
        detect::detect_shapes(&self.grid)
    }

    /// Applies a command, returning whether the grid changed
    pub fn execute(&mut self, command: Command) -> Result<bool, GridError> {
        log::debug!("Executing {}", command.name());
        match command {
            Command::Paint { row, col, color } => self.paint(row, col, color),
            Command::Undo => Ok(self.undo()),
            Command::Clear => {
                self.clear();
                Ok(true)
            }
            Command::ResetScore => {
                self.reset_score();
                Ok(false)
            }
        }
    }

    /// Paints one cell.
    ///
    /// Painting a cell with the color it already holds changes nothing and
    /// returns `Ok(false)`.
    pub fn paint(&mut self, row: usize, col: usize, color: Color) -> Result<bool, GridError> {
        let current = self
            .grid
            .get(row, col)
            .ok_or(GridError::OutOfBounds { row, col, size: self.grid.size() })?;
        if current == color {
            return Ok(false);
        }

        self.history.record(self.grid.clone());
        self.grid.set(row, col, color)?;
        self.paint_count += 1;
        if self.paint_count > self.high_score {
            self.high_score = self.paint_count;
        }
        self.persist();
        Ok(true)
    }

    /// Restores the previous snapshot, returning false when there is none
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(previous) => {
                self.grid = previous;
                self.persist();
                true
            }
            None => false,
        }
    }

    /// Resets the canvas to the background color. Can be undone.
    pub fn clear(&mut self) {
        let previous = std::mem::take(&mut self.grid);
        self.history.record(previous);
        self.persist();
    }

    pub fn reset_score(&mut self) {
        self.paint_count = 0;
    }

    /// Reloads grid and high score from storage.
    ///
    /// A missing or unreadable grid falls back to a blank one. Undo history
    /// does not survive a reload.
    pub fn load(&mut self) {
        self.grid = match self.read_grid() {
            Ok(Some(grid)) => grid,
            Ok(None) => {
                log::debug!("No saved canvas, starting blank");
                Grid::new()
            }
            Err(err) => {
                log::warn!("Discarding saved canvas: {}", err);
                Grid::new()
            }
        };
        self.high_score = self.read_high_score();
        self.history.clear();
    }

    /// Writes grid and high score to storage
    pub fn save(&mut self) -> PersistenceResult<()> {
        let json = serde_json::to_string(&self.grid)?;
        self.storage.set(STORAGE_KEY, json)?;
        self.storage.set(HIGH_SCORE_KEY, self.high_score.to_string())?;
        Ok(())
    }

    fn persist(&mut self) {
        if let Err(err) = self.save() {
            log::error!("Failed to save canvas: {}", err);
        }
    }

    fn read_grid(&self) -> PersistenceResult<Option<Grid>> {
        match self.storage.get(STORAGE_KEY)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn read_high_score(&self) -> u64 {
        let raw = match self.storage.get(HIGH_SCORE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return 0,
            Err(err) => {
                log::warn!("Failed to read high score: {}", err);
                return 0;
            }
        };
        raw.trim().parse().unwrap_or_else(|_| {
            let err = PersistenceError::InvalidState(format!("high score {raw:?}"));
            log::warn!("Ignoring saved high score: {}", err);
            0
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    /// Storage whose writes always fail
    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> PersistenceResult<Option<String>> {
            self.0.get(key)
        }

        fn set(&mut self, key: &str, _value: String) -> PersistenceResult<()> {
            Err(PersistenceError::WriteError {
                key: key.to_owned(),
                reason: "read-only".to_owned(),
            })
        }
    }

    #[test]
    fn test_repainting_same_color_is_noop() {
        let mut store = GridStore::open(MemoryStore::new());
        assert_eq!(store.paint(0, 0, Color::BLACK), Ok(true));
        assert_eq!(store.paint(0, 0, Color::BLACK), Ok(false));
        assert_eq!(store.paint_count(), 1);
        assert_eq!(store.undo_depth(), 1);
    }

    #[test]
    fn test_out_of_bounds_paint_is_rejected() {
        let mut store = GridStore::open(MemoryStore::new());
        let size = store.grid().size();
        assert!(matches!(
            store.paint(size, 0, Color::BLACK),
            Err(GridError::OutOfBounds { .. })
        ));
        assert_eq!(store.paint_count(), 0);
        assert!(!store.can_undo());
    }

    #[test]
    fn test_write_failure_keeps_session_running() {
        let mut store = GridStore::open(ReadOnlyStore(MemoryStore::new()));
        assert_eq!(store.paint(1, 1, Color::BLACK), Ok(true));
        assert_eq!(store.grid().at(1, 1), Color::BLACK);
        assert!(store.save().is_err());
    }

    #[test]
    fn test_execute_dispatch() {
        let mut store = GridStore::open(MemoryStore::new());
        let paint = Command::Paint { row: 3, col: 3, color: Color::BLACK };
        assert_eq!(store.execute(paint), Ok(true));
        assert_eq!(store.execute(Command::ResetScore), Ok(false));
        assert_eq!(store.paint_count(), 0);
        assert_eq!(store.high_score(), 1);
        assert_eq!(store.execute(Command::Undo), Ok(true));
        assert!(store.grid().is_blank());
        assert_eq!(store.execute(Command::Undo), Ok(false));
    }
}
