//! Typed access to the handles `App` provides.
//!
//! Reaching for a handle outside the provider is a programming error: the
//! `use_*` functions panic with a [`ContextError`] message instead of
//! handing back an empty value.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use leptos::prelude::*;

use super::session::SessionStore;
use super::toast::Toasts;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
    #[error("{name} must be used within the App provider")]
    MissingProvider { name: &'static str },
}

fn try_use<T: Clone + Send + Sync + 'static>(name: &'static str) -> Result<T, ContextError> {
    use_context::<T>().ok_or(ContextError::MissingProvider { name })
}

/// # Errors
///
/// [`ContextError::MissingProvider`] outside the `App` provider.
pub fn try_use_session() -> Result<SessionStore, ContextError> {
    try_use("use_session")
}

/// # Errors
///
/// [`ContextError::MissingProvider`] outside the `App` provider.
pub fn try_use_toasts() -> Result<Toasts, ContextError> {
    try_use("use_toasts")
}

/// # Errors
///
/// [`ContextError::MissingProvider`] outside the `App` provider.
pub fn try_use_api() -> Result<ApiClient, ContextError> {
    try_use("use_api")
}

/// # Errors
///
/// [`ContextError::MissingProvider`] outside the `App` provider.
pub fn try_use_config() -> Result<ClientConfig, ContextError> {
    try_use("use_config")
}

/// The session store provided by `App`.
///
/// # Panics
///
/// Outside the `App` provider.
pub fn use_session() -> SessionStore {
    try_use_session().unwrap_or_else(|e| panic!("{e}"))
}

/// # Panics
///
/// Outside the `App` provider.
pub fn use_toasts() -> Toasts {
    try_use_toasts().unwrap_or_else(|e| panic!("{e}"))
}

/// # Panics
///
/// Outside the `App` provider.
pub fn use_api() -> ApiClient {
    try_use_api().unwrap_or_else(|e| panic!("{e}"))
}

/// # Panics
///
/// Outside the `App` provider.
pub fn use_config() -> ClientConfig {
    try_use_config().unwrap_or_else(|e| panic!("{e}"))
}
