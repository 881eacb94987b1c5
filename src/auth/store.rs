//! The session store: hydration, sign-in/sign-out, and state publication.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::api::{AuthClient, AuthError};
use crate::storage::Storage;

use super::{SessionState, UserRecord};

// ============================================================================
// Constants
// ============================================================================

/// Storage key holding the raw session token
const TOKEN_KEY: &str = "fpl_token";

/// Storage key holding the JSON-serialized user record
const USER_KEY: &str = "fpl_user";

/// Holds the current authentication state and the means to change it.
///
/// State lives in a watch channel: every mutation publishes the new
/// `SessionState` to all subscribers. Concurrent `sign_in` calls are not
/// de-duplicated; whichever response resolves last determines the final
/// in-memory state.
pub struct SessionStore {
    client: AuthClient,
    storage: Arc<dyn Storage>,
    state: watch::Sender<SessionState>,
}

impl SessionStore {
    /// Create a store in the pre-hydration state
    /// (`user: None, loading: true, error: None`).
    ///
    /// Call `hydrate` once at startup to restore a persisted session.
    pub fn new(client: AuthClient, storage: Arc<dyn Storage>) -> Self {
        let (state, _) = watch::channel(SessionState::initial());
        Self {
            client,
            storage,
            state,
        }
    }

    /// Restore a persisted session, best effort.
    ///
    /// Adopts the stored user record only when both keys are present and the
    /// record parses. A record that fails to parse is logged and both keys
    /// are removed so the failure does not repeat on the next start. Always
    /// ends with `loading = false`; never reports an error to the caller.
    pub fn hydrate(&self) {
        let token = self.storage.get(TOKEN_KEY);
        let raw_user = self.storage.get(USER_KEY);

        let user = match (token, raw_user) {
            (Some(_), Some(raw)) => match serde_json::from_str::<UserRecord>(&raw) {
                Ok(record) => {
                    debug!(email = %record.email, "Restored session from storage");
                    Some(record)
                }
                Err(err) => {
                    warn!(error = %err, "Stored user data is corrupt, clearing session");
                    self.remove_persisted();
                    None
                }
            },
            _ => None,
        };

        self.state.send_modify(|s| {
            s.user = user;
            s.loading = false;
        });
    }

    /// Sign in against the login service.
    ///
    /// Sets `loading` and clears `error` for the duration of the call. On
    /// success the user record is persisted, adopted, and returned. On any
    /// failure the error's message is recorded in `error`, the in-memory
    /// user is left untouched, and the error is returned; a partially
    /// persisted session is cleared rather than left mismatched. `loading`
    /// is reset on every exit path.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<UserRecord, AuthError> {
        self.state.send_modify(|s| {
            s.loading = true;
            s.error = None;
        });

        match self.authenticate_and_persist(email, password).await {
            Ok(record) => {
                info!(email = email, "Signed in");
                self.state.send_modify(|s| {
                    s.user = Some(record.clone());
                    s.loading = false;
                });
                Ok(record)
            }
            Err(err) => {
                let message = err.message();
                debug!(error = %message, "Sign-in failed");
                self.state.send_modify(|s| {
                    s.error = Some(message);
                    s.loading = false;
                });
                Err(err)
            }
        }
    }

    async fn authenticate_and_persist(
        &self,
        email: &str,
        password: &str,
    ) -> Result<UserRecord, AuthError> {
        let token = self.client.login(email, password).await?;
        let record = UserRecord {
            email: email.to_string(),
            token,
            authenticated_at: Utc::now(),
        };

        // The user record goes first: it is what hydration adopts. If the
        // token write then fails, clear both keys so storage never pairs a
        // record from one sign-in with a token from another.
        let serialized = serde_json::to_string(&record)?;
        self.storage
            .set(USER_KEY, &serialized)
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        if let Err(err) = self.storage.set(TOKEN_KEY, &record.token) {
            self.remove_persisted();
            return Err(AuthError::Transport(err.to_string()));
        }

        Ok(record)
    }

    /// Sign out: remove both persisted keys and drop the in-memory user.
    /// No network call; cannot fail.
    pub fn sign_out(&self) {
        self.remove_persisted();
        self.state.send_modify(|s| {
            s.user = None;
            s.error = None;
        });
        info!("Signed out");
    }

    /// Clear the last sign-in failure message. Nothing else changes.
    pub fn clear_error(&self) {
        self.state.send_modify(|s| {
            s.error = None;
        });
    }

    /// Subscribe to state changes. The receiver starts at the current state.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn user(&self) -> Option<UserRecord> {
        self.state.borrow().user.clone()
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    pub fn loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    fn remove_persisted(&self) {
        // Removal failures are logged, not surfaced: sign-out must not fail.
        if let Err(err) = self.storage.remove(TOKEN_KEY) {
            warn!(error = %err, key = TOKEN_KEY, "Failed to remove storage key");
        }
        if let Err(err) = self.storage.remove(USER_KEY) {
            warn!(error = %err, key = USER_KEY, "Failed to remove storage key");
        }
    }
}
