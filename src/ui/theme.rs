//! Storefront palette

use ratatui::style::{Color, Modifier, Style};

pub const ROSE_GOLD: Color = Color::Rgb(0xB7, 0x6E, 0x79);
pub const ROSE_GOLD_LIGHT: Color = Color::Rgb(0xE8, 0xC6, 0xC9);
pub const ROSE_GOLD_DARK: Color = Color::Rgb(0x8E, 0x4A, 0x52);
pub const SILVER: Color = Color::Rgb(0xC0, 0xC0, 0xC0);
pub const CREAM: Color = Color::Rgb(0xFF, 0xF9, 0xF5);

pub const SUCCESS: Color = Color::Green;
pub const ERROR: Color = Color::Red;
pub const MUTED: Color = Color::DarkGray;

/// Border and text style for the focused element
pub fn focused() -> Style {
    Style::default().fg(ROSE_GOLD)
}

pub fn unfocused() -> Style {
    Style::default().fg(MUTED)
}

pub fn title() -> Style {
    Style::default()
        .fg(ROSE_GOLD_LIGHT)
        .add_modifier(Modifier::BOLD)
}
