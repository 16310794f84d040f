mod canvas_panel;
mod color_picker;
mod confirm;
mod tools_panel;

pub use canvas_panel::{canvas_panel, cell_at};
pub use color_picker::color_picker_window;
pub use confirm::confirm_window;
pub use tools_panel::tools_panel;
