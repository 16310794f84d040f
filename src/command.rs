use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Actions the presentation layer can apply to the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Paint one cell
    Paint {
        row: usize,
        col: usize,
        color: Color,
    },
    /// Step back to the previous grid snapshot
    Undo,
    /// Reset every cell to the background color
    Clear,
    /// Zero the session paint counter; the high score is kept
    ResetScore,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Paint { .. } => "Paint",
            Command::Undo => "Undo",
            Command::Clear => "Clear",
            Command::ResetScore => "Reset Score",
        }
    }

    /// Whether running the command records an undo snapshot
    pub fn is_recorded(&self) -> bool {
        matches!(self, Command::Paint { .. } | Command::Clear)
    }
}
