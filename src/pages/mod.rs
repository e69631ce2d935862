//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (validation, requests, toasts,
//! navigation) and delegates rendering details to `components`.

pub mod dashboard;
pub mod forgot_password;
pub mod profile;
pub mod reset_password;
pub mod sign_in;
pub mod sign_up;
