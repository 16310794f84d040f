#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod command;
pub mod components;
pub mod constants;
pub mod detect;
pub mod export;
pub mod grid;
pub mod history;
pub mod panels;
pub mod storage;
pub mod store;

pub use app::PixelArtApp;
pub use color::Color;
pub use command::Command;
pub use detect::{detect_shapes, Shape, ShapeKind};
pub use grid::Grid;
pub use history::History;
pub use storage::{KeyValueStore, MemoryStore};
pub use store::GridStore;
