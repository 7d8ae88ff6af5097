//! Sign-in screen

use super::card::{draw_card, draw_field_rows, CardCopy};
use crate::state::Workflow;
use ratatui::{layout::Rect, Frame};

const COPY: CardCopy<'static> = CardCopy {
    heading: "Welcome Back",
    subheading: "Please sign in to access your account",
    submit_label: "Sign In",
    busy_label: "Signing in...",
    link_prompt: "Don't have an account?",
    link_label: "Sign Up",
};

const ROWS: [&[usize]; 2] = [&[0], &[1]];

/// Draw the sign-in form
pub fn draw_sign_in(frame: &mut Frame, area: Rect, workflow: &Workflow) {
    let fields_area = draw_card(frame, area, workflow, &COPY, ROWS.len() as u16);
    draw_field_rows(frame, fields_area, workflow, &ROWS);
}
