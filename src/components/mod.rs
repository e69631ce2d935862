//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Form controls shared by the auth and profile pages, plus the toast stack
//! mounted once by `App`.

pub mod button;
pub mod input;
pub mod toast_container;
