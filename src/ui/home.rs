//! Landing screen for a signed-in user

use crate::platform::{SIGN_OUT_SHORTCUT, SWITCH_SCREEN_SHORTCUT};
use crate::ui::theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "ELEGANCE",
            Style::default()
                .fg(theme::ROSE_GOLD)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("You are signed in.", theme::title())),
        Line::from(Span::styled(
            "Welcome to our exclusive jewelry collection.",
            Style::default().fg(theme::SILVER),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{SWITCH_SCREEN_SHORTCUT}: sign in with another account   {SIGN_OUT_SHORTCUT}: sign out"),
            Style::default().fg(theme::MUTED),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ROSE_GOLD_DARK));
    frame.render_widget(
        Paragraph::new(content)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}
