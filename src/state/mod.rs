//! Application state module

mod app_state;
mod forms;
mod outcome;
mod route;
mod workflow;

pub use app_state::*;
pub use forms::*;
pub use outcome::*;
pub use route::*;
pub use workflow::*;
