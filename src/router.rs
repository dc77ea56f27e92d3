//! Route table and history-mode navigation

/// Page views the router can mount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    DemoForm1,
    DemoForm2,
    /// Fallback for paths missing from the route table
    NotFound,
}

impl View {
    /// Registered path of the view (`None` for the fallback)
    pub fn path(&self) -> Option<&'static str> {
        ROUTES
            .iter()
            .find(|(_, view)| view == self)
            .map(|(path, _)| *path)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::DemoForm1 => "Contact form",
            Self::DemoForm2 => "Preferences form",
            Self::NotFound => "Not found",
        }
    }

    /// Views backed by the form store
    pub fn is_form_view(&self) -> bool {
        matches!(self, Self::DemoForm1 | Self::DemoForm2)
    }
}

/// Static route table
pub const ROUTES: [(&str, View); 3] = [
    ("/", View::Home),
    ("/form1", View::DemoForm1),
    ("/form2", View::DemoForm2),
];

/// Strip query and fragment, drop one trailing slash
fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => path,
    }
}

/// Comparable form of a location: normalized, lower-cased path part with the
/// query and fragment kept as typed
fn canonical(path: &str) -> String {
    let path = path.trim();
    let split = path.find(['?', '#']).unwrap_or(path.len());
    let (route, suffix) = path.split_at(split);
    format!("{}{suffix}", normalize(route).to_ascii_lowercase())
}

/// Resolve a path against the route table.
///
/// Matching is case-insensitive and tolerates a trailing slash, a query
/// string and a fragment.
pub fn resolve(path: &str) -> Option<View> {
    let path = normalize(path.trim());
    ROUTES
        .iter()
        .find(|(route, _)| route.eq_ignore_ascii_case(path))
        .map(|(_, view)| *view)
}

/// Current route plus back history
#[derive(Debug, Clone)]
pub struct Router {
    current_path: String,
    current_view: View,
    history: Vec<(String, View)>,
}

impl Default for Router {
    fn default() -> Self {
        Self {
            current_path: "/".to_string(),
            current_view: View::Home,
            history: Vec::new(),
        }
    }
}

impl Router {
    /// Create a router positioned at `path` with empty history
    pub fn at(path: &str) -> Self {
        Self {
            current_path: path.to_string(),
            current_view: resolve(path).unwrap_or(View::NotFound),
            history: Vec::new(),
        }
    }

    pub fn current_view(&self) -> View {
        self.current_view
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Navigate to `path`, recording the current entry in history.
    /// Unmatched paths land on [`View::NotFound`].
    pub fn push(&mut self, path: &str) -> View {
        let path = path.trim();
        if canonical(path) == canonical(&self.current_path) {
            return self.current_view;
        }
        let view = resolve(path).unwrap_or(View::NotFound);
        if view == View::NotFound {
            tracing::debug!("No route matches '{path}'");
        }
        let previous = std::mem::replace(&mut self.current_path, path.to_string());
        self.history.push((previous, self.current_view));
        self.current_view = view;
        view
    }

    /// Return to the previous entry. Returns false when history is empty.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some((path, view)) => {
                self.current_path = path;
                self.current_view = view;
                true
            }
            None => false,
        }
    }
}
