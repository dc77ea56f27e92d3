//! Application state and core logic

use crate::config::TuiConfig;
use crate::pages::{LocalPageSource, PageSource};
use crate::router::{Router, View, ROUTES};
use crate::state::{AppState, PathInput};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where form pages get their schema and data
    source: Box<dyn PageSource>,
    /// Whether the app should quit
    quit: bool,
    /// Status bar feedback message
    pub status_message: Option<String>,
    /// Selected entry in the home route list
    pub home_index: usize,
}

impl App {
    /// Create a new App instance positioned at the configured start path
    pub async fn new(config: &TuiConfig) -> Result<Self> {
        let source = LocalPageSource::from_env(config.schema_dir.clone());
        if let Some(dir) = source.schema_dir() {
            tracing::info!("Page schema directory: {}", dir.display());
        }

        let mut app = Self::with_source(Box::new(source));
        app.state.router = Router::at(config.initial_path());
        let view = app.state.current_view();
        if view.is_form_view() {
            app.mount(view).await;
        }
        Ok(app)
    }

    /// Create an App at "/" with the given page source
    pub fn with_source(source: Box<dyn PageSource>) -> Self {
        Self {
            state: AppState::default(),
            source,
            quit: false,
            status_message: None,
            home_index: 0,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Navigate to a path, mounting the page if the view changed
    pub async fn navigate(&mut self, path: &str) {
        let before = self.state.current_view();
        let view = self.state.router.push(path);
        tracing::info!("Navigated to {} ({})", self.state.router.current_path(), view.title());
        if view != before && view.is_form_view() {
            self.mount(view).await;
        }
    }

    /// Go back to previous route
    pub async fn go_back(&mut self) {
        let before = self.state.current_view();
        if !self.state.router.back() {
            return;
        }
        let view = self.state.current_view();
        if view != before && view.is_form_view() {
            self.mount(view).await;
        }
    }

    /// Fetch the page payload and load it into the store.
    /// On failure the store keeps its previous contents.
    pub async fn mount(&mut self, view: View) {
        match self.source.fetch_page(view).await {
            Ok(payload) => {
                let field_count = payload.config.len();
                self.state.store.load_form_config(payload.config);
                self.state.store.load_form_data(payload.data);
                self.sync_views();
                tracing::debug!("Mounted {} with {field_count} fields", view.title());
            }
            Err(err) => {
                self.push_error(format!("Failed to load {}: {err:#}", view.title()));
            }
        }
    }

    /// Bring view-local state in line with the store
    pub fn sync_views(&mut self) {
        let revision = self.state.store.revision();
        let count = self.state.field_count();
        self.state.form_view.sync(revision, count);
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Path prompt captures all keys while open
        if self.state.path_input.is_some() {
            self.handle_path_input_key(key).await;
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        match key.code {
            KeyCode::Char('q') => {
                self.quit = true;
                return Ok(());
            }
            KeyCode::Char('h') => {
                self.navigate("/").await;
                return Ok(());
            }
            KeyCode::Char('1') => {
                self.navigate("/form1").await;
                return Ok(());
            }
            KeyCode::Char('2') => {
                self.navigate("/form2").await;
                return Ok(());
            }
            KeyCode::Char('g') => {
                self.state.path_input = Some(PathInput::new());
                return Ok(());
            }
            KeyCode::Char('b') | KeyCode::Backspace => {
                self.go_back().await;
                return Ok(());
            }
            _ => {}
        }

        match self.state.current_view() {
            View::Home => self.handle_home_key(key).await,
            View::DemoForm1 | View::DemoForm2 => self.handle_form_key(key).await,
            View::NotFound => self.handle_not_found_key(key).await,
        }

        Ok(())
    }

    /// Handle keys while the path prompt is open
    async fn handle_path_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state.path_input = None,
            KeyCode::Enter => {
                if let Some(input) = self.state.path_input.take() {
                    self.navigate(&input.buffer).await;
                }
            }
            KeyCode::Backspace => {
                if let Some(input) = self.state.path_input.as_mut() {
                    input.pop_char();
                }
            }
            KeyCode::Char(c) => {
                if let Some(input) = self.state.path_input.as_mut() {
                    input.push_char(c);
                }
            }
            _ => {}
        }
    }

    /// Handle keys in Home view
    async fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if self.home_index + 1 < ROUTES.len() {
                    self.home_index += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.home_index = self.home_index.saturating_sub(1);
            }
            KeyCode::Enter => {
                if let Some((path, _)) = ROUTES.get(self.home_index) {
                    self.navigate(path).await;
                }
            }
            _ => {}
        }
    }

    /// Handle keys in the form views
    async fn handle_form_key(&mut self, key: KeyEvent) {
        let count = self.state.field_count();
        match key.code {
            KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => {
                self.state.form_view.next_field(count)
            }
            KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => {
                self.state.form_view.prev_field(count)
            }
            KeyCode::Char('r') => {
                let view = self.state.current_view();
                self.mount(view).await;
                if !self.state.has_errors() {
                    self.status_message = Some(format!("Reloaded {}", view.title()));
                }
            }
            KeyCode::Char('y') => {
                if let Err(err) = self.copy_form_data() {
                    self.push_error(format!("Failed to copy form data: {err:#}"));
                }
            }
            _ => {}
        }
    }

    /// Handle keys in NotFound view
    async fn handle_not_found_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Enter {
            self.navigate("/").await;
        }
    }

    /// Form data as pretty-printed JSON
    pub fn form_data_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self.state.store.form_data())?)
    }

    fn copy_form_data(&mut self) -> Result<()> {
        let json = self.form_data_json()?;
        self.copy_to_clipboard(&json)?;
        self.status_message = Some(format!(
            "Copied {} values",
            self.state.store.form_data().len()
        ));
        Ok(())
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::{contact_form, preferences_form, MockPageSource, PagePayload};
    use crate::schema::{FieldType, FieldValue, FormConfig, FormData, FormField};
    use anyhow::anyhow;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// Mock source serving the built-in pages
    fn builtin_source() -> MockPageSource {
        let mut source = MockPageSource::new();
        source.expect_fetch_page().returning(|view| match view {
            View::DemoForm1 => Ok(contact_form()),
            View::DemoForm2 => Ok(preferences_form()),
            _ => Err(anyhow!("no form")),
        });
        source
    }

    fn app() -> App {
        App::with_source(Box::new(builtin_source()))
    }

    mod navigation_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_starts_at_home_with_empty_store() {
            let app = app();
            assert_eq!(app.state.current_view(), View::Home);
            assert!(app.state.store.form_data().is_empty());
            assert!(app.state.store.form_config().is_empty());
            assert!(!app.should_quit());
        }

        #[tokio::test]
        async fn test_navigate_to_form_mounts_page() {
            let mut app = app();
            app.navigate("/form1").await;
            assert_eq!(app.state.current_view(), View::DemoForm1);
            let payload = contact_form();
            assert_eq!(app.state.store.form_config(), &payload.config);
            assert_eq!(app.state.store.form_data(), &payload.data);
        }

        #[tokio::test]
        async fn test_switching_forms_replaces_store() {
            let mut app = app();
            app.navigate("/form1").await;
            app.navigate("/form2").await;
            let payload = preferences_form();
            assert_eq!(app.state.store.form_config(), &payload.config);
            assert_eq!(app.state.store.form_data(), &payload.data);
            assert!(app.state.store.form_data().get("email").is_none());
        }

        #[tokio::test]
        async fn test_home_keeps_store_contents() {
            let mut app = app();
            app.navigate("/form1").await;
            app.navigate("/").await;
            assert_eq!(app.state.current_view(), View::Home);
            assert_eq!(app.state.store.form_config(), &contact_form().config);
        }

        #[tokio::test]
        async fn test_unknown_path_shows_not_found() {
            let mut app = app();
            app.navigate("/missing").await;
            assert_eq!(app.state.current_view(), View::NotFound);
            assert!(app.state.store.form_config().is_empty());
        }

        #[tokio::test]
        async fn test_same_view_does_not_remount() {
            let mut source = MockPageSource::new();
            source
                .expect_fetch_page()
                .times(1)
                .returning(|_| Ok(contact_form()));
            let mut app = App::with_source(Box::new(source));
            app.navigate("/form1").await;
            app.navigate("/form1?tab=2").await;
            assert_eq!(app.state.current_view(), View::DemoForm1);
        }

        #[tokio::test]
        async fn test_go_back_remounts_previous_form() {
            let mut app = app();
            app.navigate("/form1").await;
            app.navigate("/form2").await;
            app.go_back().await;
            assert_eq!(app.state.current_view(), View::DemoForm1);
            assert_eq!(app.state.store.form_config(), &contact_form().config);
        }

        #[tokio::test]
        async fn test_go_back_empty_history_does_nothing() {
            let mut app = app();
            app.go_back().await;
            assert_eq!(app.state.current_view(), View::Home);
        }

        #[tokio::test]
        async fn test_mount_failure_keeps_store_and_queues_error() {
            let mut source = MockPageSource::new();
            source
                .expect_fetch_page()
                .returning(|_| Err(anyhow!("disk on fire")));
            let mut app = App::with_source(Box::new(source));
            let mut data = FormData::new();
            data.insert("kept".to_string(), FieldValue::Bool(true));
            app.state.store.load_form_data(data.clone());

            app.navigate("/form2").await;

            assert_eq!(app.state.current_view(), View::DemoForm2);
            assert_eq!(app.state.store.form_data(), &data);
            assert_eq!(
                app.state.current_error(),
                Some("Failed to load Preferences form: disk on fire")
            );
        }

        #[tokio::test]
        async fn test_mount_loads_payload_unchanged() {
            let payload = PagePayload {
                config: FormConfig::new(vec![FormField::new(FieldType::Input, "a", "A")]),
                data: FormData::from([("b".to_string(), FieldValue::Number(2.0))]),
            };
            let expected = payload.clone();
            let mut source = MockPageSource::new();
            source
                .expect_fetch_page()
                .returning(move |_| Ok(payload.clone()));
            let mut app = App::with_source(Box::new(source));
            app.mount(View::DemoForm1).await;
            assert_eq!(app.state.store.form_config(), &expected.config);
            assert_eq!(app.state.store.form_data(), &expected.data);
            assert_eq!(app.state.store.revision(), 2);
        }
    }

    mod key_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_route_shortcuts() {
            let mut app = app();
            app.handle_key(key(KeyCode::Char('2'))).await.unwrap();
            assert_eq!(app.state.current_view(), View::DemoForm2);
            app.handle_key(key(KeyCode::Char('1'))).await.unwrap();
            assert_eq!(app.state.current_view(), View::DemoForm1);
            app.handle_key(key(KeyCode::Char('h'))).await.unwrap();
            assert_eq!(app.state.current_view(), View::Home);
            app.handle_key(key(KeyCode::Char('b'))).await.unwrap();
            assert_eq!(app.state.current_view(), View::DemoForm1);
        }

        #[tokio::test]
        async fn test_quit_key() {
            let mut app = app();
            app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
            assert!(app.should_quit());
        }

        #[tokio::test]
        async fn test_path_prompt_navigates() {
            let mut app = app();
            app.handle_key(key(KeyCode::Char('g'))).await.unwrap();
            for c in "form2".chars() {
                app.handle_key(key(KeyCode::Char(c))).await.unwrap();
            }
            assert_eq!(app.state.current_view(), View::Home);
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.current_view(), View::DemoForm2);
            assert!(app.state.path_input.is_none());
        }

        #[tokio::test]
        async fn test_path_prompt_escape_cancels() {
            let mut app = app();
            app.handle_key(key(KeyCode::Char('g'))).await.unwrap();
            app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert!(app.state.path_input.is_none());
            assert!(!app.should_quit());
            assert_eq!(app.state.current_view(), View::Home);
        }

        #[tokio::test]
        async fn test_path_prompt_backspace_edits() {
            let mut app = app();
            app.handle_key(key(KeyCode::Char('g'))).await.unwrap();
            app.handle_key(key(KeyCode::Char('x'))).await.unwrap();
            app.handle_key(key(KeyCode::Backspace)).await.unwrap();
            assert_eq!(app.state.path_input.as_ref().unwrap().buffer, "/");
        }

        #[tokio::test]
        async fn test_home_list_enter_navigates() {
            let mut app = app();
            app.handle_key(key(KeyCode::Char('j'))).await.unwrap();
            app.handle_key(key(KeyCode::Char('j'))).await.unwrap();
            app.handle_key(key(KeyCode::Char('j'))).await.unwrap();
            assert_eq!(app.home_index, 2);
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.current_view(), View::DemoForm2);
        }

        #[tokio::test]
        async fn test_form_focus_cycles() {
            let mut app = app();
            app.navigate("/form1").await;
            let count = app.state.field_count();
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            assert_eq!(app.state.form_view.active_field, 1);
            app.handle_key(key(KeyCode::BackTab)).await.unwrap();
            app.handle_key(key(KeyCode::BackTab)).await.unwrap();
            assert_eq!(app.state.form_view.active_field, count - 1);
        }

        #[tokio::test]
        async fn test_reload_sets_status() {
            let mut app = app();
            app.navigate("/form2").await;
            app.handle_key(key(KeyCode::Char('r'))).await.unwrap();
            assert_eq!(
                app.status_message.as_deref(),
                Some("Reloaded Preferences form")
            );
        }

        #[tokio::test]
        async fn test_error_dialog_is_modal() {
            let mut app = app();
            app.push_error("boom");
            app.handle_key(key(KeyCode::Char('1'))).await.unwrap();
            assert_eq!(app.state.current_view(), View::Home);
            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert!(!app.state.has_errors());
            app.handle_key(key(KeyCode::Char('1'))).await.unwrap();
            assert_eq!(app.state.current_view(), View::DemoForm1);
        }

        #[tokio::test]
        async fn test_not_found_enter_goes_home() {
            let mut app = app();
            app.navigate("/nope").await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.current_view(), View::Home);
        }
    }

    #[tokio::test]
    async fn test_form_data_json() {
        let mut app = app();
        app.navigate("/form2").await;
        let json = app.form_data_json().unwrap();
        let parsed: FormData = serde_json::from_str(&json).unwrap();
        assert_eq!(&parsed, app.state.store.form_data());
    }
}
