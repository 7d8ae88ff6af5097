//! Toast notification for submission outcomes

use crate::state::{Notification, Severity};
use crate::ui::theme;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const MAX_WIDTH: u16 = 48;

/// Render a toast anchored to the top center of `area`
pub fn render_notification(frame: &mut Frame, area: Rect, notification: Notification) {
    let padding = 4u16; // 2 chars padding on each side
    let max_line_width = MAX_WIDTH.min(area.width).saturating_sub(padding).max(1) as usize;

    let wrapped_lines = wrap_text(notification.message, max_line_width);
    let title = notification.severity.label();

    let content_width = wrapped_lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(title.len()) as u16;
    let width = (content_width + padding).min(area.width);

    // title + message lines + hint + borders
    let height = (wrapped_lines.len() as u16 + 4).min(area.height);

    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + 1,
        width,
        height,
    };

    frame.render_widget(Clear, toast_area);

    let color = severity_color(notification.severity);
    let mut content = vec![Line::from(Span::styled(
        title,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];
    content.extend(wrapped_lines.into_iter().map(Line::from));
    content.push(Line::from(vec![
        Span::styled("Esc", Style::default().fg(theme::ROSE_GOLD)),
        Span::styled(" to dismiss", Style::default().fg(theme::MUTED)),
    ]));

    let toast = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(toast, toast_area);
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => theme::SUCCESS,
        Severity::Error => theme::ERROR,
    }
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            let current_len = current_line.chars().count();
            if current_len + word.chars().count() + 1 > max_width && !current_line.is_empty() {
                lines.push(current_line);
                current_line = String::new();
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_message() {
        assert_eq!(wrap_text("Login successful!", 40), vec!["Login successful!"]);
    }

    #[test]
    fn test_wrap_breaks_on_words() {
        let lines = wrap_text("Network error. Please try again later.", 16);
        assert_eq!(lines, vec!["Network error.", "Please try again", "later."]);
    }

    #[test]
    fn test_wrap_empty_message() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }
}
