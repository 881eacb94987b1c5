//! HTTP client for the Fantasy Premier League login endpoint.
//!
//! This module provides the `AuthClient` struct for exchanging credentials
//! for a session token. The login service is treated as opaque: one POST,
//! one JSON response, no retries.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::AuthError;

// ============================================================================
// Constants
// ============================================================================

/// Fixed login endpoint (users.premierleague.com handles authentication)
const LOGIN_URL: &str = "https://users.premierleague.com/accounts/login/";

/// Redirect target the login service expects in the request body
const REDIRECT_URI: &str = "https://fantasy.premierleague.com/a/login";

/// Client application identifier sent with every login request
const APP_ID: &str = "plfpl-web";

/// Fallback message when a rejection body carries no `message` field
const GENERIC_AUTH_FAILURE: &str = "Authentication failed";

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    login: &'a str,
    password: &'a str,
    redirect_uri: &'static str,
    app: &'static str,
}

/// Success body. The service is inconsistent about which field carries the
/// token; `session` wins when both are present, `access_token` is the
/// fallback.
#[derive(Debug, Deserialize)]
struct LoginResponse {
    session: Option<String>,
    access_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: Option<String>,
}

/// Login client for the FPL authentication service.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct AuthClient {
    client: Client,
    login_url: String,
}

impl Default for AuthClient {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthClient {
    /// Create a client against the production login endpoint.
    ///
    /// No request timeout is set: the login call awaits until the service
    /// responds or the connection drops.
    pub fn new() -> Self {
        Self::with_login_url(LOGIN_URL)
    }

    /// Create a client against an arbitrary login URL (mock servers, proxies).
    pub fn with_login_url(login_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            login_url: login_url.into(),
        }
    }

    /// Exchange credentials for a session token.
    ///
    /// A non-success status yields `AuthError::Authentication` with the
    /// body's `message` field (or a generic fallback). Connection and parse
    /// failures yield `AuthError::Transport`.
    pub async fn login(&self, login: &str, password: &str) -> Result<String, AuthError> {
        let body = LoginRequest {
            login,
            password,
            redirect_uri: REDIRECT_URI,
            app: APP_ID,
        };

        debug!(url = %self.login_url, login = login, "Sending login request");

        let response = self.client.post(&self.login_url).json(&body).send().await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .ok()
                .and_then(|e| e.message)
                .unwrap_or_else(|| GENERIC_AUTH_FAILURE.to_string());
            debug!(status = %status, message = %message, "Login rejected");
            return Err(AuthError::Authentication(message));
        }

        let parsed: LoginResponse = serde_json::from_str(&text)?;
        // The service sends the unused field as "" rather than omitting it;
        // an empty string is not a token.
        parsed
            .session
            .filter(|t| !t.is_empty())
            .or_else(|| parsed.access_token.filter(|t| !t.is_empty()))
            .ok_or_else(|| {
                AuthError::Transport("login response contained no session or access token".to_string())
            })
    }
}
