//! Form demo TUI
//!
//! A Ratatui single-page app: a route table mounting a home page and two
//! demo form pages, backed by a store holding the form schema and data.
//!
//! - [`router`]: route table and history navigation
//! - [`store`]: form data and schema behind two load actions
//! - [`schema`]: `FormField` / `FormConfig` types and validation
//! - [`pages`]: page payloads the form views mount with

pub mod app;
pub mod config;
pub mod pages;
pub mod router;
pub mod schema;
pub mod state;
pub mod store;
pub mod ui;
