//! Client for the storefront authentication service
//!
//! Two JSON endpoints, `/login` and `/signup`, behind a trait so the
//! submission workflow can be exercised against a mock.

mod client;
mod error;
mod traits;
mod types;

pub use client::{AuthClient, DEFAULT_AUTH_URL};
pub use error::AuthError;
pub use traits::AuthClientTrait;
pub use types::*;

#[cfg(test)]
pub use traits::MockAuthClientTrait;
