//! UI module for rendering the TUI

mod components;
mod forms;
mod home;
mod layout;
mod theme;

use crate::app::App;
use crate::state::WorkflowKind;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    // Draw main content for the mounted workflow
    match &app.state.workflow {
        Some(workflow) => match workflow.kind() {
            WorkflowKind::SignIn => forms::draw_sign_in(frame, main_area, workflow),
            WorkflowKind::Registration => forms::draw_registration(frame, main_area, workflow),
        },
        None => home::draw(frame, main_area),
    }

    if let Some(notification) = app.state.workflow.as_ref().and_then(|w| w.notification()) {
        components::render_notification(frame, main_area, notification);
    }

    layout::draw_status_bar(frame, status_area, app);
}
