use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Credential pair sent to the login endpoint.
///
/// Serializes to exactly `{"username": <string>, "password": <string>}`. The
/// client performs no validation or transformation; empty strings and arbitrary
/// content pass through unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Outcome of the collapsing login surface: the parsed server payload on any
/// 2xx response, `None` for every failure class.
pub type LoginResult = Option<Value>;
