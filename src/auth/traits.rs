//! Trait abstraction for the auth client to enable mocking in tests

use super::error::AuthError;
use super::types::{AuthReply, LoginRequest, SignupRequest};
use async_trait::async_trait;

/// Operations offered by the authentication service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthClientTrait: Send + Sync {
    /// POST `/login`
    async fn login(&self, request: &LoginRequest) -> Result<AuthReply, AuthError>;

    /// POST `/signup`
    async fn signup(&self, request: &SignupRequest) -> Result<AuthReply, AuthError>;
}
