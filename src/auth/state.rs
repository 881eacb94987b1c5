use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Profile of a signed-in user, persisted as JSON alongside the raw token.
///
/// A record is always fully populated: email, non-empty token, and the
/// timestamp of the sign-in that produced it. There is no partially
/// constructed state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub email: String,
    pub token: String,
    pub authenticated_at: DateTime<Utc>,
}

/// Published authentication state.
///
/// `loading` is true exactly while hydration or a sign-in is in flight.
/// `error` holds the last sign-in failure message until the next attempt
/// or an explicit `clear_error`.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub user: Option<UserRecord>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SessionState {
    /// State at application start, before hydration has run.
    pub fn initial() -> Self {
        Self {
            user: None,
            loading: true,
            error: None,
        }
    }

    /// Derived: signed in exactly when a user record is present.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
