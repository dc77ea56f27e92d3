//! Application state module

mod app_state;
mod form_view;

pub use app_state::*;
pub use form_view::*;
