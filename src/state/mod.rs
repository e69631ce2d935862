//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `session`, `toast`) so components can
//! depend on small focused models; `context` gives typed access to the
//! handles the root `App` provides.

pub mod auth;
pub mod context;
pub mod session;
pub mod storage;
pub mod toast;
