//! Client SDK for authenticating agents against a remote backend
//!
//! This crate wraps the backend's agent login endpoint in a small typed client.
//! The backend historically answers every failure the same way from the caller's
//! point of view, so the client exposes two surfaces: [`LoginClient::login`]
//! preserves that contract (any failure collapses to `None`), while
//! [`LoginClient::try_login`] reports a tagged [`LoginError`] so callers that
//! care can tell a rejected credential pair from an unreachable server or a
//! malformed response body.

use async_trait::async_trait;
use serde_json::Value;

pub mod error;
pub mod http_client;
pub mod types;

pub use error::LoginError;
pub use http_client::HttpLoginClient;
pub use types::*;

/// LoginClient trait for authenticating against an agent backend
#[async_trait]
pub trait LoginClient: Send + Sync {
    /// Attempt a login and report the outcome as a tagged result.
    ///
    /// Exactly one request is issued per invocation; there are no retries.
    async fn try_login(&self, username: &str, password: &str) -> Result<Value, LoginError>;

    /// Attempt a login, collapsing every failure to `None`.
    ///
    /// Transport faults and malformed success bodies emit one diagnostic line
    /// through the `log` facade; rejected logins produce no diagnostic. Callers
    /// that need to distinguish the failure classes should use
    /// [`LoginClient::try_login`] instead.
    async fn login(&self, username: &str, password: &str) -> LoginResult {
        match self.try_login(username, password).await {
            Ok(payload) => Some(payload),
            Err(LoginError::Rejected { .. }) => None,
            Err(err) => {
                log::error!("Login error: {}", err);
                None
            }
        }
    }
}
