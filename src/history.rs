use std::collections::VecDeque;

use crate::constants::HISTORY_CAPACITY;
use crate::grid::Grid;

/// Bounded list of grid snapshots with an undo cursor.
///
/// `cursor` counts the snapshots that can still be undone. Recording a new
/// snapshot discards anything past the cursor, so undo never replays a state
/// that was already stepped over.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: VecDeque<Grid>,
    cursor: usize,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            snapshots: VecDeque::with_capacity(capacity),
            cursor: 0,
            capacity,
        }
    }

    /// Records the grid as it was before a change
    pub fn record(&mut self, snapshot: Grid) {
        self.snapshots.truncate(self.cursor);
        self.snapshots.push_back(snapshot);
        while self.snapshots.len() > self.capacity {
            self.snapshots.pop_front();
        }
        self.cursor = self.snapshots.len();
    }

    /// Steps back one snapshot, or `None` once the oldest retained snapshot
    /// has been restored
    pub fn undo(&mut self) -> Option<Grid> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.snapshots.get(self.cursor).cloned()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Number of undo steps available
    pub fn depth(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.cursor = 0;
    }
}
