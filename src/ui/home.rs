//! Home page: the route list

use crate::app::App;
use crate::router::ROUTES;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Home ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Intro
            Constraint::Min(0),    // Routes
        ])
        .split(inner);

    let intro = Paragraph::new(vec![
        Line::from(Span::styled(
            "Form demo",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Pick a page, or press g to type a path.",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(intro, chunks[0]);

    let items: Vec<ListItem> = ROUTES
        .iter()
        .map(|(path, view)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{path:<8}"), Style::default().fg(Color::Yellow)),
                Span::raw(view.title()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .highlight_symbol("▸ ");
    let mut list_state = ListState::default().with_selected(Some(app.home_index));
    frame.render_stateful_widget(list, chunks[1], &mut list_state);
}
