//! Registration screen

use super::card::{draw_card, draw_field_rows, CardCopy};
use crate::state::Workflow;
use ratatui::{layout::Rect, Frame};

const COPY: CardCopy<'static> = CardCopy {
    heading: "Create Your Account",
    subheading: "Join our exclusive jewelry collection",
    submit_label: "Sign Up",
    busy_label: "Creating account...",
    link_prompt: "Already have an account?",
    link_label: "Sign In",
};

/// Focus indices per row; the names share the first row
const ROWS: [&[usize]; 6] = [&[0, 1], &[2], &[3], &[4], &[5], &[6]];

/// Draw the registration form
pub fn draw_registration(frame: &mut Frame, area: Rect, workflow: &Workflow) {
    let fields_area = draw_card(frame, area, workflow, &COPY, ROWS.len() as u16);
    draw_field_rows(frame, fields_area, workflow, &ROWS);
}
