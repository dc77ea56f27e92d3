//! UI module for rendering the TUI

mod components;
mod forms;
mod home;
mod layout;
mod not_found;

use crate::app::App;
use crate::router::View;
use components::{render_error_dialog, render_path_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (sidebar_area, main_area) = layout::create_layout(area);
    layout::draw_sidebar(frame, sidebar_area, app);

    // Draw main content based on current route
    match app.state.current_view() {
        View::Home => home::draw(frame, main_area, app),
        View::DemoForm1 | View::DemoForm2 => forms::draw_form_page(frame, main_area, app),
        View::NotFound => not_found::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, app);

    // Overlays, errors on top
    if let Some(input) = &app.state.path_input {
        render_path_dialog(frame, &input.buffer);
    }
    if let Some(message) = app.state.current_error() {
        render_error_dialog(frame, message, app.state.error_queue.len() - 1);
    }
}
