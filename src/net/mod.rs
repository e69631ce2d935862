//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the shared client and its transport seam; `types` defines the
//! request/response schema.

pub mod api;
#[cfg(test)]
pub(crate) mod mock;
pub mod types;
