//! Form rendering module
//!
//! - `field_renderer`: per-type field drawing
//! - `form_page`: the demo form pages backed by the store

mod field_renderer;
mod form_page;

pub use form_page::draw as draw_form_page;
