//! Field rendering utilities for forms

use crate::schema::{FieldType, FieldValue, FormData, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a textarea gets when the schema does not say
const DEFAULT_TEXTAREA_ROWS: u16 = 3;

/// Upper bound for a schema-provided `rows` attribute
const MAX_TEXTAREA_ROWS: u16 = 40;

/// Height in rows (including borders) a field needs
pub fn field_height(field: &FormField) -> u16 {
    match field.field_type {
        FieldType::Input | FieldType::Checkbox => 3,
        FieldType::Select => u16::try_from(field.options().len().max(1))
            .unwrap_or(u16::MAX)
            .saturating_add(2),
        FieldType::Textarea => {
            let rows = field
                .attr("rows")
                .and_then(|v| match v {
                    FieldValue::Number(n) if *n >= 1.0 => {
                        Some(n.min(f64::from(MAX_TEXTAREA_ROWS)) as u16)
                    }
                    _ => None,
                })
                .unwrap_or(DEFAULT_TEXTAREA_ROWS);
            rows.saturating_add(2)
        }
    }
}

fn styles(is_active: bool) -> (Style, Style) {
    if is_active {
        (
            Style::default().fg(Color::Cyan),
            Style::default().fg(Color::Cyan),
        )
    } else {
        (Style::default(), Style::default().fg(Color::DarkGray))
    }
}

/// Lines shown inside the field box
pub fn field_lines(field: &FormField, data: &FormData) -> Vec<Line<'static>> {
    match field.field_type {
        FieldType::Input | FieldType::Textarea => {
            let value = field.display_value(data);
            if value.is_empty() {
                let placeholder = field
                    .attr("placeholder")
                    .map(|p| p.to_string())
                    .unwrap_or_else(|| "(empty)".to_string());
                vec![Line::from(Span::styled(
                    placeholder,
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                ))]
            } else {
                value.lines().map(|l| Line::from(l.to_string())).collect()
            }
        }
        FieldType::Checkbox => {
            let checked = field.current_value(data).is_some_and(|v| v.is_truthy());
            let mark = if checked { "[x]" } else { "[ ]" };
            vec![Line::from(format!("{mark} {}", field.label))]
        }
        FieldType::Select => {
            let selected = field.selected_option(data);
            let mut lines: Vec<Line> = field
                .options()
                .iter()
                .enumerate()
                .map(|(idx, option)| {
                    if Some(idx) == selected {
                        Line::from(Span::styled(
                            format!("● {}", option.label),
                            Style::default().add_modifier(Modifier::BOLD),
                        ))
                    } else {
                        Line::from(format!("○ {}", option.label))
                    }
                })
                .collect();
            if lines.is_empty() {
                lines.push(Line::from("(no options)"));
            }
            lines
        }
    }
}

/// Draw a form field from the schema with its current value
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    data: &FormData,
    is_active: bool,
) {
    let (style, border_style) = styles(is_active);

    let title = format!(" {} ({}) ", field.label, field.field_type.label());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let paragraph = Paragraph::new(field_lines(field, data))
        .style(style)
        .block(block);
    let paragraph = if field.is_multiline() {
        paragraph.wrap(Wrap { trim: false })
    } else {
        paragraph
    };

    frame.render_widget(paragraph, area);
}

/// Draw help text at the bottom of a form
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
