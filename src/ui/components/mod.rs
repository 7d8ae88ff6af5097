//! Reusable UI components

mod button;
mod notification;

pub use button::{render_submit_button, BUTTON_HEIGHT};
pub use notification::render_notification;
