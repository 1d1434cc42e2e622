use async_trait::async_trait;
use serde_json::Value;
use std::env;
use std::time::Duration;

use crate::{Credentials, LoginClient, LoginError};

/// Path suffix appended to the base URL; the trailing slash is part of the
/// backend's route.
const LOGIN_PATH: &str = "/api/agent/login/";

/// Environment variable consulted by [`HttpLoginClient::from_env`].
pub const BACKEND_URL_ENV: &str = "AGENT_BACKEND_URL";

/// Development default used when no base URL is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://host.docker.internal:8000";

/// HTTP client for logging agents into a remote backend
pub struct HttpLoginClient {
    base_url: String,
    client: reqwest::Client,
    timeout: Option<Duration>,
}

impl HttpLoginClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
            timeout: None,
        }
    }

    /// Build a client from `AGENT_BACKEND_URL`, falling back to the
    /// development default.
    pub fn from_env() -> Self {
        let base_url =
            env::var(BACKEND_URL_ENV).unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        Self::new(base_url)
    }

    /// Apply a per-request timeout. No timeout is set unless the caller opts
    /// in; an unanswered request otherwise runs until the transport gives up.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn login_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), LOGIN_PATH)
    }
}

#[async_trait]
impl LoginClient for HttpLoginClient {
    async fn try_login(&self, username: &str, password: &str) -> Result<Value, LoginError> {
        let credentials = Credentials::new(username, password);

        let mut request = self
            .client
            .post(self.login_url())
            .header("Content-Type", "application/json")
            .json(&credentials);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoginError::Rejected { status });
        }

        // Parse by hand so a malformed body is reported as InvalidJson rather
        // than folded into the transport error.
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_url_joins_base_and_path() {
        let client = HttpLoginClient::new("http://localhost:8000");
        assert_eq!(
            client.login_url(),
            "http://localhost:8000/api/agent/login/"
        );
    }

    #[test]
    fn login_url_tolerates_trailing_slash_on_base() {
        let client = HttpLoginClient::new("http://localhost:8000/");
        assert_eq!(
            client.login_url(),
            "http://localhost:8000/api/agent/login/"
        );
    }
}
