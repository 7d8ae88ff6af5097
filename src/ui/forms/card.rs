//! Shared frame for the sign-in and registration screens

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::platform::SWITCH_SCREEN_SHORTCUT;
use crate::state::{FormField, Workflow};
use crate::ui::components::{render_submit_button, BUTTON_HEIGHT};
use crate::ui::theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Fixed copy of one screen
pub struct CardCopy<'a> {
    pub heading: &'a str,
    pub subheading: &'a str,
    pub submit_label: &'a str,
    pub busy_label: &'a str,
    pub link_prompt: &'a str,
    pub link_label: &'a str,
}

const CARD_WIDTH: u16 = 64;
const HEADER_HEIGHT: u16 = 4;
const LINK_HEIGHT: u16 = 2;

/// Rows the card needs around `field_rows` rows of fields
pub fn card_height(field_rows: u16) -> u16 {
    HEADER_HEIGHT + field_rows * FIELD_HEIGHT + BUTTON_HEIGHT + LINK_HEIGHT + 2
}

/// Center a card of the given size inside `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Draw the card and return the area reserved for fields
pub fn draw_card(
    frame: &mut Frame,
    area: Rect,
    workflow: &Workflow,
    copy: &CardCopy,
    field_rows: u16,
) -> Rect {
    let card = centered(area, CARD_WIDTH, card_height(field_rows));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ROSE_GOLD_DARK));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(LINK_HEIGHT),
        ])
        .horizontal_margin(2)
        .split(inner);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "ELEGANCE",
            Style::default()
                .fg(theme::ROSE_GOLD)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(copy.heading, theme::title())),
        Line::from(Span::styled(
            copy.subheading,
            Style::default().fg(theme::SILVER),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, chunks[0]);

    let form = workflow.form().as_form();
    render_submit_button(
        frame,
        chunks[2],
        copy.submit_label,
        copy.busy_label,
        form.is_submit_row_active(),
        workflow.outcome().is_pending(),
    );

    let link = Paragraph::new(Line::from(vec![
        Span::styled(copy.link_prompt, Style::default().fg(theme::SILVER)),
        Span::raw(" "),
        Span::styled(
            copy.link_label,
            Style::default()
                .fg(theme::ROSE_GOLD_LIGHT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" ({SWITCH_SCREEN_SHORTCUT})"),
            Style::default().fg(theme::MUTED),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(link, chunks[3]);

    chunks[1]
}

/// Range of field rows that fits on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowWindow {
    pub first: usize,
    pub count: usize,
}

impl RowWindow {
    fn can_scroll_up(&self) -> bool {
        self.first > 0
    }

    fn can_scroll_down(&self, row_count: usize) -> bool {
        self.first + self.count < row_count
    }
}

/// Pick the rows to draw in `height` lines, keeping `focus_row` on screen.
///
/// When everything fits no scrolling happens. Otherwise two lines go to the
/// scroll indicators and the window ends at the focused row, or at the last
/// row when focus is past the fields (on the submit button).
pub fn visible_rows(row_count: usize, focus_row: Option<usize>, height: u16) -> RowWindow {
    if row_count as u16 * FIELD_HEIGHT <= height {
        return RowWindow {
            first: 0,
            count: row_count,
        };
    }

    let usable = height.saturating_sub(2);
    let fit = ((usable / FIELD_HEIGHT) as usize).clamp(1, row_count.max(1));
    let focus = focus_row.unwrap_or(row_count.saturating_sub(1));
    let first = focus
        .saturating_sub(fit - 1)
        .min(row_count.saturating_sub(fit));

    RowWindow { first, count: fit }
}

/// Draw rows of fields, scrolling so the focused one stays visible.
///
/// Each row lists the focus indices of the fields it holds side by side.
pub fn draw_field_rows(frame: &mut Frame, area: Rect, workflow: &Workflow, rows: &[&[usize]]) {
    let form = workflow.form().as_form();
    let active = form.active_field();
    let fields = form.fields();

    let focus_row = rows.iter().position(|row| row.contains(&active));
    let window = visible_rows(rows.len(), focus_row, area.height);
    let scrolling = window.count < rows.len();

    let mut constraints = Vec::new();
    if scrolling {
        constraints.push(Constraint::Length(1)); // Up indicator
    }
    constraints.extend((0..window.count).map(|_| Constraint::Length(FIELD_HEIGHT)));
    if scrolling {
        constraints.push(Constraint::Length(1)); // Down indicator
    }
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let offset = usize::from(scrolling);
    if scrolling {
        draw_indicator(frame, chunks[0], "^", window.can_scroll_up());
        draw_indicator(
            frame,
            chunks[offset + window.count],
            "v",
            window.can_scroll_down(rows.len()),
        );
    }

    for (slot, row) in rows.iter().skip(window.first).take(window.count).enumerate() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, row.len() as u32); row.len()])
            .spacing(1)
            .split(chunks[offset + slot]);

        for (column, &index) in columns.iter().zip(row.iter()) {
            if let Some(field) = fields.get(index) {
                draw_indexed_field(frame, *column, workflow, index, field);
            }
        }
    }
}

fn draw_indicator(frame: &mut Frame, area: Rect, symbol: &str, shown: bool) {
    if shown {
        let indicator = Paragraph::new(symbol)
            .style(Style::default().fg(theme::MUTED))
            .alignment(Alignment::Center);
        frame.render_widget(indicator, area);
    }
}

/// Draw `field` at its focus index
fn draw_indexed_field(
    frame: &mut Frame,
    area: Rect,
    workflow: &Workflow,
    index: usize,
    field: &FormField,
) {
    let is_active = workflow.form().as_form().active_field() == index;
    draw_field(
        frame,
        area,
        field,
        is_active,
        workflow.errors().message(field.id),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_everything_fits() {
        assert_eq!(
            visible_rows(6, Some(5), 24),
            RowWindow { first: 0, count: 6 }
        );
    }

    #[test]
    fn test_window_follows_focus() {
        // 11 lines: indicators take 2, leaving room for 2 rows
        assert_eq!(
            visible_rows(6, Some(0), 11),
            RowWindow { first: 0, count: 2 }
        );
        assert_eq!(
            visible_rows(6, Some(3), 11),
            RowWindow { first: 2, count: 2 }
        );
        assert_eq!(
            visible_rows(6, Some(5), 11),
            RowWindow { first: 4, count: 2 }
        );
    }

    #[test]
    fn test_submit_focus_shows_last_rows() {
        assert_eq!(visible_rows(6, None, 11), RowWindow { first: 4, count: 2 });
    }

    #[test]
    fn test_tiny_area_still_shows_one_row() {
        assert_eq!(visible_rows(6, Some(2), 3), RowWindow { first: 2, count: 1 });
    }
}
