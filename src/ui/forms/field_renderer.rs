//! Field rendering utilities for forms

use crate::state::FormField;
use crate::ui::theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: bordered input plus its error line
pub const FIELD_HEIGHT: u16 = 4;

/// Draw a form field with the validation message for it underneath
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool, error: &str) {
    let has_error = !error.is_empty();
    let border_style = if has_error {
        Style::default().fg(theme::ERROR)
    } else if is_active {
        theme::focused()
    } else {
        theme::unfocused()
    };
    let text_style = if is_active {
        Style::default().fg(theme::CREAM)
    } else {
        Style::default().fg(theme::SILVER)
    };

    let cursor = if is_active && !field.is_flag() {
        "▌"
    } else {
        ""
    };

    let content = if field.is_flag() {
        Line::from(vec![
            Span::styled(field.display_value(), border_style),
            Span::raw(" "),
            Span::styled(field.label.as_str(), text_style),
        ])
    } else {
        let display_value = field.display_value();
        let display_str = if display_value.is_empty() && !is_active {
            "(empty)".to_string()
        } else {
            display_value
        };
        Line::from(vec![
            Span::styled(display_str, text_style),
            Span::styled(cursor, theme::focused()),
        ])
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    if !field.is_flag() {
        let title = if field.is_secret() && field.is_revealed() {
            format!(" {} (shown) ", field.label)
        } else {
            format!(" {} ", field.label)
        };
        block = block.title(title);
    }

    let input_area = Rect {
        height: area.height.min(3),
        ..area
    };
    frame.render_widget(Paragraph::new(content).block(block), input_area);

    if has_error && area.height > 3 {
        let error_area = Rect {
            x: area.x + 2,
            y: area.y + 3,
            width: area.width.saturating_sub(2),
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Span::styled(error, Style::default().fg(theme::ERROR))),
            error_area,
        );
    }
}
