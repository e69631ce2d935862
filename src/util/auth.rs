//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Private pages (dashboard, profile) send signed-out visitors back to the
//! sign-in screen; the public auth pages send signed-in users on to the
//! dashboard. Every page applies the same rule through this module.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionStore;

pub const SIGN_IN_PATH: &str = "/";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Whether a route requires a signed-in user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Private,
}

/// Where to send the visitor, if anywhere.
#[must_use]
pub fn redirect_target(access: RouteAccess, signed_in: bool) -> Option<&'static str> {
    match (access, signed_in) {
        (RouteAccess::Private, false) => Some(SIGN_IN_PATH),
        (RouteAccess::Public, true) => Some(DASHBOARD_PATH),
        _ => None,
    }
}

/// Re-run the redirect rule whenever the session changes.
pub fn install_route_guard<F>(session: &SessionStore, access: RouteAccess, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let session = session.clone();
    Effect::new(move || {
        if let Some(target) = redirect_target(access, session.is_signed_in()) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
