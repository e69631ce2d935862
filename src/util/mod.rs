//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate routing rules and form checks from page logic
//! so they can be tested without a browser.

pub mod auth;
pub mod validation;
