//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::{REVEAL_SHORTCUT, SIGN_OUT_SHORTCUT, SUBMIT_SHORTCUT, SWITCH_SCREEN_SHORTCUT};
use crate::state::View;
use crate::ui::theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the header with the current route
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " ELEGANCE ",
        Style::default()
            .fg(theme::CREAM)
            .bg(theme::ROSE_GOLD)
            .add_modifier(Modifier::BOLD),
    )];

    spans.push(Span::styled(
        format!(" {} ", app.state.current_view.title()),
        Style::default().fg(theme::ROSE_GOLD_LIGHT),
    ));

    if let Some(route) = app.state.current_route {
        spans.push(Span::styled(
            route.path(),
            Style::default().fg(theme::MUTED),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Credential status
    let signed_in = if app.state.signed_in {
        Span::styled(" ● ", Style::default().fg(theme::SUCCESS))
    } else {
        Span::styled(" ○ ", Style::default().fg(theme::SILVER))
    };
    spans.push(signed_in);

    // View-specific hints
    let hints = get_view_hints(&app.state.current_view, app.state.is_locked());
    spans.push(Span::styled(hints, Style::default().fg(theme::CREAM)));

    // Pending post-success navigation
    if let Some(route) = app.state.workflow.as_ref().and_then(|w| w.redirect_target()) {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("Redirecting to {}", route.path()),
            Style::default().fg(theme::ROSE_GOLD_LIGHT),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme::MUTED));

    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let hint_width = quit_hint.len() as u16;
    if area.width > hint_width {
        let hint_area = Rect {
            x: area.x + area.width - hint_width,
            width: hint_width,
            ..area
        };
        frame.render_widget(
            Paragraph::new(quit_hint).style(Style::default().fg(theme::CREAM).bg(theme::MUTED)),
            hint_area,
        );
    }
}

/// Get view-specific key hints
fn get_view_hints(view: &View, is_locked: bool) -> String {
    match view {
        View::SignIn | View::Registration if is_locked => "Please wait...  Esc:dismiss".to_string(),
        View::SignIn | View::Registration => format!(
            "Tab:next  {SUBMIT_SHORTCUT}:submit  {REVEAL_SHORTCUT}:show  Space:check  {SWITCH_SCREEN_SHORTCUT}:switch  Esc:dismiss"
        ),
        View::Home => format!("{SWITCH_SCREEN_SHORTCUT}:sign in  {SIGN_OUT_SHORTCUT}:sign out"),
    }
}
