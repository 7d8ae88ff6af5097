//! Wire types for the authentication service

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Body of `POST /login`
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Body of `POST /signup`
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub phone_number: String,
    pub first_name: String,
    pub last_name: String,
}

impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("email", &self.email)
            .field("phone_number", &self.phone_number)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .finish()
    }
}

/// The fields we read from a response body, whatever its status
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ServiceBody {
    pub access_token: Option<String>,
    pub detail: Option<String>,
}

impl ServiceBody {
    /// Parse leniently: anything that isn't a JSON object, or a field that
    /// isn't a string, reads as absent.
    pub fn from_slice(bytes: &[u8]) -> Self {
        let json: Value = serde_json::from_slice(bytes).unwrap_or(Value::Null);
        let string_field = |name: &str| json.get(name).and_then(Value::as_str).map(String::from);

        Self {
            access_token: string_field("access_token"),
            detail: string_field("detail"),
        }
    }
}

impl fmt::Debug for ServiceBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceBody")
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("detail", &self.detail)
            .finish()
    }
}

/// A response from the service: its status and interesting body fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthReply {
    pub status: u16,
    pub body: ServiceBody,
}

impl AuthReply {
    pub fn new(status: u16, body: ServiceBody) -> Self {
        Self { status, body }
    }

    /// Any 2xx counts as acceptance
    pub fn is_accepted(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
