//! Session store: the single source of truth for who is logged in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Built once by the root `App` and handed to pages through context. Every
//! mutation runs in three steps: compute the next `AuthState`, write it
//! through to `SessionStorage`, then commit it to the reactive signal that
//! components subscribe to.
//!
//! ERROR HANDLING
//! ==============
//! Network and storage failures are returned untouched; callers turn them
//! into toasts. A failed `sign_in` touches neither storage, headers nor
//! state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use super::auth::{AuthState, Session};
use super::storage::{SessionStorage, StorageError};
use crate::net::api::{ApiClient, ApiError};
use crate::net::types::{SessionResponse, SignInCredentials, User};

/// Errors surfaced by [`SessionStore`] operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The session endpoint could not be reached.
    #[error("network error: {0}")]
    Network(String),

    /// The session endpoint rejected the credentials (any non-2xx).
    #[error("authentication failed with status {status}")]
    Authentication { status: u16, message: Option<String> },

    /// A 2xx response did not carry `{token, user}`.
    #[error("invalid session response: {0}")]
    InvalidResponse(String),

    /// The persisted user could not be decoded.
    #[error("stored session is corrupt ({key}): {reason}")]
    CorruptSession { key: String, reason: String },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<ApiError> for SessionError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Network(reason) => Self::Network(reason),
            ApiError::Status { status, message } => Self::Authentication { status, message },
            ApiError::Decode(reason) | ApiError::Encode(reason) => Self::InvalidResponse(reason),
        }
    }
}

/// Shared handle to the session. Clones observe the same state.
#[derive(Clone, Debug)]
pub struct SessionStore {
    state: ArcRwSignal<AuthState>,
    storage: SessionStorage,
    api: ApiClient,
}

impl SessionStore {
    /// Hydrate from storage. With both keys present the stored session
    /// becomes the initial state and the API client starts sending its
    /// token; otherwise the store starts signed out.
    ///
    /// # Errors
    ///
    /// [`SessionError::CorruptSession`] when the stored user is not valid
    /// JSON, [`SessionError::Storage`] when storage cannot be read.
    pub fn initialize(storage: SessionStorage, api: ApiClient) -> Result<Self, SessionError> {
        let state = match storage.load()? {
            Some(Session { token, user }) => {
                api.set_authorization(&token);
                log::info!("restored session for user {}", user.id);
                AuthState::signed_in(token, user)
            }
            None => AuthState::signed_out(),
        };
        Ok(Self { state: ArcRwSignal::new(state), storage, api })
    }

    /// Like [`SessionStore::initialize`], but any failure starts signed out.
    /// A corrupt stored session is also removed from storage.
    pub fn initialize_or_reset(storage: SessionStorage, api: ApiClient) -> Self {
        match Self::initialize(storage.clone(), api.clone()) {
            Ok(store) => store,
            Err(err) => {
                log::warn!("discarding stored session: {err}");
                if matches!(err, SessionError::CorruptSession { .. }) {
                    if let Err(clear_err) = storage.clear() {
                        log::warn!("failed to clear stored session: {clear_err}");
                    }
                }
                Self { state: ArcRwSignal::new(AuthState::signed_out()), storage, api }
            }
        }
    }

    /// Exchange credentials for a session via `POST /sessions`.
    ///
    /// # Errors
    ///
    /// [`SessionError::Network`], [`SessionError::Authentication`] or
    /// [`SessionError::InvalidResponse`] from the request, and
    /// [`SessionError::Storage`] when the new session cannot be persisted.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), SessionError> {
        let credentials = SignInCredentials { email: email.to_owned(), password: password.to_owned() };
        let SessionResponse { token, user } = self.api.post_json("sessions", &credentials).await?;

        let session = Session { token, user };
        self.storage.save(&session)?;
        self.api.set_authorization(&session.token);
        log::info!("signed in as user {}", session.user.id);
        self.state.set(AuthState { session: Some(session) });
        Ok(())
    }

    /// Forget the session locally. No network call.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the keys cannot be removed. Storage,
    /// the in-memory state and the header are left as they were.
    pub fn sign_out(&self) -> Result<(), StorageError> {
        self.storage.clear()?;
        self.api.clear_authorization();
        self.state.set(AuthState::signed_out());
        log::info!("signed out");
        Ok(())
    }

    /// Replace the signed-in user, keeping the token. Does nothing when
    /// nobody is signed in.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the user cannot be persisted.
    pub fn update_user(&self, user: User) -> Result<(), StorageError> {
        let Some(next) = self.state.with_untracked(|state| state.with_user(user)) else {
            log::warn!("update_user called without a session; ignoring");
            return Ok(());
        };
        if let Some(user) = next.user() {
            self.storage.save_user(user)?;
        }
        self.state.set(next);
        Ok(())
    }

    /// Latest committed user. Tracks the signal inside reactive scopes.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.state.with(|state| state.user().cloned())
    }

    #[must_use]
    pub fn current_token(&self) -> Option<String> {
        self.state.with(|state| state.token().map(str::to_owned))
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.state.with(AuthState::is_signed_in)
    }

    /// Snapshot of the whole state.
    #[must_use]
    pub fn state(&self) -> AuthState {
        self.state.get()
    }

    /// Reactive handle for components that need to subscribe directly.
    #[must_use]
    pub fn signal(&self) -> ArcRwSignal<AuthState> {
        self.state.clone()
    }

    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.api
    }
}
