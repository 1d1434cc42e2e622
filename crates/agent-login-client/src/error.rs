//! Error types for the login client.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors reported by [`LoginClient::try_login`](crate::LoginClient::try_login).
///
/// The collapsing [`login`](crate::LoginClient::login) surface erases the
/// distinction between these variants; this enum preserves it for callers that
/// need to react differently to a rejected credential pair versus an
/// unreachable server.
#[derive(Error, Debug)]
pub enum LoginError {
    /// The server answered with a status outside 200-299. The response body is
    /// not read in this case.
    #[error("Login rejected by server: {status}")]
    Rejected { status: StatusCode },

    /// The request failed before a response was obtained (DNS, connection,
    /// TLS, timeout).
    #[error("Login transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server reported success but the response body was not valid JSON.
    #[error("Malformed login response: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl LoginError {
    /// HTTP status carried by a rejection, if that is what this error is.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            LoginError::Rejected { status } => Some(*status),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, LoginError::Transport(_))
    }
}
