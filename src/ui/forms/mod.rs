//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Field rendering utilities
//! - `card`: Frame shared by both screens
//! - `sign_in_form`: Sign-in screen
//! - `registration_form`: Registration screen

mod card;
mod field_renderer;
mod registration_form;
mod sign_in_form;

pub use registration_form::draw_registration;
pub use sign_in_form::draw_sign_in;
