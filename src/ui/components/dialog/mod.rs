//! Dialog components for TUI

mod base;
mod error_dialog;
mod path_dialog;

pub use error_dialog::render_error_dialog;
pub use path_dialog::render_path_dialog;
