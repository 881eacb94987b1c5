use thiserror::Error;

/// Errors surfaced to callers of `sign_in`.
///
/// Both variants are also recorded into the session state's `error` field
/// (via their `Display` string) before being returned, so UI consumers can
/// show the message without catching the error themselves.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuthError {
    /// The login service rejected the credentials. The message comes from
    /// the response body's `message` field, or a generic fallback.
    #[error("{0}")]
    Authentication(String),

    /// The request never produced a usable response: connection failure,
    /// unreadable body, or a success body missing the token fields.
    #[error("transport error: {0}")]
    Transport(String),
}

impl AuthError {
    /// The human-readable message recorded into session state.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        AuthError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(err: serde_json::Error) -> Self {
        AuthError::Transport(err.to_string())
    }
}
