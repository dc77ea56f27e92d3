//! "Go to path" prompt dialog

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the path prompt with the text typed so far
pub fn render_path_dialog(frame: &mut Frame, buffer: &str) {
    let message = format!("{buffer}▌");
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::styled("Enter", key_style),
        Span::raw(" to go, "),
        Span::styled("Esc", key_style),
        Span::raw(" to cancel"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Go to path",
            title_color: Color::Cyan,
            border_color: Color::Cyan,
            message: &message,
            hint: Some(hint),
            max_width: 50,
        },
    );
}
