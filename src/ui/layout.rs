//! Layout components (sidebar, status bar)

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::router::{View, ROUTES};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Sidebar width in columns
pub const SIDEBAR_WIDTH: u16 = 22;

/// Shortcut keys shown on the sidebar buttons, in route table order
const SIDEBAR_KEYS: [&str; 3] = ["h", "1", "2"];

/// Create the main layout with sidebar.
/// Returns (sidebar, main content); the bottom row is left for the status bar.
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH), // Sidebar
            Constraint::Min(0),                // Main content
        ])
        .split(rows[0]);

    (columns[0], columns[1])
}

/// Draw the sidebar with one boxed button per route
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Home
            Constraint::Length(BUTTON_HEIGHT), // Form 1
            Constraint::Length(BUTTON_HEIGHT), // Form 2
            Constraint::Min(0),
        ])
        .split(area);

    let current = app.state.current_view();
    for (idx, ((_, view), key)) in ROUTES.iter().zip(SIDEBAR_KEYS).enumerate() {
        render_sidebar_button(frame, chunks[idx], key, view.title(), *view == current);
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", app.state.router.current_path()),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];

    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        get_view_hints(app.state.current_view()),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: View) -> &'static str {
    match view {
        View::Home => "j/k:nav  Enter:open  g:go to  q:quit",
        View::DemoForm1 | View::DemoForm2 => "Tab:next  r:reload  y:copy  b:back  g:go to  q:quit",
        View::NotFound => "Enter:home  b:back  g:go to  q:quit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_reserves_status_row() {
        let (sidebar, main) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(sidebar.height, 23);
        assert_eq!(main.x, SIDEBAR_WIDTH);
        assert_eq!(main.width, 80 - SIDEBAR_WIDTH);
        assert_eq!(main.height, 23);
    }

    #[test]
    fn test_every_view_has_hints() {
        for view in [View::Home, View::DemoForm1, View::DemoForm2, View::NotFound] {
            assert!(get_view_hints(view).contains("q:quit"));
        }
    }
}
