//! Demo form page rendering
//!
//! Reads the schema and data straight from the store and lays the fields
//! out top to bottom, scrolling so the focused field stays visible.

use super::field_renderer::{draw_field, draw_help_text, field_height};
use crate::app::App;
use crate::schema::FormField;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// First field to draw so that `active` fits within `available` rows
pub fn first_visible_field(fields: &[FormField], active: usize, available: u16) -> usize {
    let Some(last) = active.checked_add(1).filter(|end| *end <= fields.len()) else {
        return 0;
    };
    let mut used: u16 = 0;
    let mut first = last;
    while first > 0 {
        let height = field_height(&fields[first - 1]);
        if used.saturating_add(height) > available && first < last {
            break;
        }
        used = used.saturating_add(height);
        first -= 1;
    }
    first
}

/// Draw the form page for the current route
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.state.current_view();
    let block = Block::default()
        .title(format!(" {} ", view.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Fields
            Constraint::Length(1), // Help text
        ])
        .split(inner);

    let config = app.state.store.form_config();
    let data = app.state.store.form_data();

    if config.is_empty() {
        let empty = Paragraph::new("This form has no fields.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, chunks[0]);
    } else {
        let active = app.state.form_view.active_field;
        let fields_area = chunks[0];
        let first = first_visible_field(&config.fields, active, fields_area.height);

        let mut y = fields_area.y;
        let bottom = fields_area.y + fields_area.height;
        for (idx, field) in config.fields.iter().enumerate().skip(first) {
            let height = field_height(field).min(bottom.saturating_sub(y));
            if height == 0 {
                break;
            }
            let field_area = Rect {
                x: fields_area.x,
                y,
                width: fields_area.width,
                height,
            };
            draw_field(frame, field_area, field, data, idx == active);
            y += height;
        }
    }

    let help = format!(
        "{}/{} fields  Tab:next  Shift+Tab:prev  r:reload  y:copy data",
        (app.state.form_view.active_field + 1).min(config.len()),
        config.len()
    );
    draw_help_text(frame, chunks[1], &help);
}
