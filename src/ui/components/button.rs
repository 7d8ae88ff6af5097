//! Button component for TUI

use crate::ui::theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a generic button with border
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_selected: bool,
    is_enabled: bool,
) {
    let border_style = if is_selected {
        theme::focused()
    } else {
        theme::unfocused()
    };

    let text_style = if !is_enabled {
        Style::default().fg(theme::MUTED)
    } else if is_selected {
        Style::default()
            .fg(theme::ROSE_GOLD)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme::CREAM)
    };

    let paragraph = Paragraph::new(format!(" {content} "))
        .style(text_style)
        .alignment(Alignment::Center);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Render a form's submit button; shows `busy_label` while a request is out
pub fn render_submit_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    busy_label: &str,
    is_selected: bool,
    is_busy: bool,
) {
    let content = if is_busy { busy_label } else { label };
    render_button(frame, area, content, is_selected, !is_busy);
}
