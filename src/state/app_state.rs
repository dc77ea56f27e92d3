//! Application state definitions

use super::FormViewState;
use crate::router::{Router, View};
use crate::store::Store;

/// Text entry for the "go to path" prompt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathInput {
    pub buffer: String,
}

impl PathInput {
    /// Prompt pre-filled with a leading slash
    pub fn new() -> Self {
        Self {
            buffer: "/".to_string(),
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.buffer.push(c);
    }

    pub fn pop_char(&mut self) {
        self.buffer.pop();
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub router: Router,

    // Data
    pub store: Store,

    // UI state
    pub form_view: FormViewState,
    pub path_input: Option<PathInput>,

    /// Error messages waiting to be shown, oldest first
    pub error_queue: Vec<String>,
}

impl AppState {
    pub fn current_view(&self) -> View {
        self.router.current_view()
    }

    /// Push an error message to the queue
    pub fn push_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.error_queue.push(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// Error currently on screen
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.first().map(String::as_str)
    }

    /// Dismiss the error currently on screen
    pub fn dismiss_error(&mut self) {
        if !self.error_queue.is_empty() {
            self.error_queue.remove(0);
        }
    }

    /// Number of fields in the mounted form
    pub fn field_count(&self) -> usize {
        self.store.form_config().len()
    }
}
