//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by route guards and user-aware components; written only through
//! `SessionStore`, which persists each transition before committing it.
//!
//! DESIGN
//! ======
//! Transitions here are pure: each returns the next `AuthState` and leaves
//! storage and headers to the store.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// A signed-in user together with the token the backend issued for them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Who is logged in. Token and user can only be present together.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    #[must_use]
    pub fn signed_in(token: impl Into<String>, user: User) -> Self {
        Self { session: Some(Session { token: token.into(), user }) }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self::default()
    }

    /// Replace the user, keeping the token. `None` when nobody is signed in.
    #[must_use]
    pub fn with_user(&self, user: User) -> Option<Self> {
        let session = self.session.as_ref()?;
        Some(Self::signed_in(session.token.clone(), user))
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }
}
