//! Form domain layer
//!
//! Field values, the two workflow forms, and their validation rules.

mod field;
mod form_state;
mod validation;

pub use field::*;
pub use form_state::*;
pub use validation::*;
