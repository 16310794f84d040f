use std::path::PathBuf;

use crate::color::{self, Color};
use crate::command::Command;
use crate::detect::Shape;
use crate::export;
use crate::panels::{canvas_panel, color_picker_window, confirm_window, tools_panel};
use crate::storage::MemoryStore;
use crate::store::GridStore;

/// An action that waits for the user to confirm it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingConfirm {
    ClearCanvas,
    ResetScore,
}

impl PendingConfirm {
    pub fn message(&self) -> &'static str {
        match self {
            PendingConfirm::ClearCanvas => "Are you sure you want to clear the canvas?",
            PendingConfirm::ResetScore => {
                "Reset your score? Your current score is kept as the high score if it is higher."
            }
        }
    }

    pub fn command(&self) -> Command {
        match self {
            PendingConfirm::ClearCanvas => Command::Clear,
            PendingConfirm::ResetScore => Command::ResetScore,
        }
    }
}

pub struct PixelArtApp {
    store: GridStore<MemoryStore>,
    /// Detected shapes for the current grid, refreshed after every change
    shapes: Vec<Shape>,
    selected_color: Color,
    /// Text of the custom color field, not necessarily a valid color
    pub(crate) custom_hex: String,
    pub(crate) show_grid: bool,
    pub(crate) show_patterns: bool,
    pub(crate) show_color_picker: bool,
    pub(crate) pending_confirm: Option<PendingConfirm>,
    /// Last export result shown under the tools
    notice: Option<String>,
    export_dir: PathBuf,
}

impl std::fmt::Debug for PixelArtApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelArtApp")
            .field("store", &self.store)
            .field("shapes", &self.shapes.len())
            .field("selected_color", &self.selected_color)
            .field("export_dir", &self.export_dir)
            .finish()
    }
}

impl PixelArtApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let storage = MemoryStore::from_eframe(cc.storage);
        let export_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::with_store(GridStore::open(storage), export_dir)
    }

    pub fn with_store(store: GridStore<MemoryStore>, export_dir: PathBuf) -> Self {
        let shapes = store.shapes();
        Self {
            store,
            shapes,
            selected_color: Color::BLACK,
            custom_hex: Color::BLACK.to_hex(),
            show_grid: true,
            show_patterns: false,
            show_color_picker: false,
            pending_confirm: None,
            notice: None,
            export_dir,
        }
    }

    pub fn store(&self) -> &GridStore<MemoryStore> {
        &self.store
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn selected_color(&self) -> Color {
        self.selected_color
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn select_color(&mut self, color: Color) {
        self.selected_color = color;
    }

    /// Applies typed custom color text. The selection only changes once the
    /// text is a complete `#RRGGBB` value.
    pub fn set_custom_hex(&mut self, raw: &str) {
        self.custom_hex = color::normalize_hex_input(raw);
        if let Some(color) = color::parse_hex_input(&self.custom_hex) {
            self.selected_color = color;
        }
    }

    pub fn paint(&mut self, row: usize, col: usize) {
        let color = self.selected_color;
        self.execute(Command::Paint { row, col, color });
    }

    pub fn execute(&mut self, command: Command) {
        match self.store.execute(command) {
            Ok(true) => self.shapes = self.store.shapes(),
            Ok(false) => {}
            Err(err) => log::warn!("{} rejected: {}", command.name(), err),
        }
    }

    pub fn confirm(&mut self, accepted: bool) {
        if let Some(pending) = self.pending_confirm.take() {
            if accepted {
                log::info!("Confirmed {}", pending.command().name());
                self.execute(pending.command());
            }
        }
    }

    pub fn export(&mut self) {
        match export::export_png(self.store.grid(), &self.export_dir) {
            Ok(path) => self.notice = Some(format!("Saved {}", path.display())),
            Err(err) => {
                log::error!("Export failed: {}", err);
                self.notice = Some("Export failed. Please try again.".to_owned());
            }
        }
    }
}

impl eframe::App for PixelArtApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.store.storage().write_to_eframe(storage);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        canvas_panel(self, ctx);

        if self.show_color_picker {
            color_picker_window(self, ctx);
        }
        if self.pending_confirm.is_some() {
            confirm_window(self, ctx);
        }
    }
}
