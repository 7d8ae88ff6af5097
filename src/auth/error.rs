//! Transport-level failures talking to the authentication service

use thiserror::Error;

/// No usable response was obtained from the service.
///
/// Rejections (non-2xx replies) are not errors; they arrive as an
/// [`AuthReply`](super::AuthReply).
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("invalid service url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AuthError::Timeout
        } else {
            AuthError::Transport(err.to_string())
        }
    }
}
