//! # gobarber-web
//!
//! Leptos + WASM front-end for the GoBarber barbershop scheduler: sign-in,
//! sign-up, password recovery and profile screens with toast
//! notifications.
//!
//! The session store (`state::session`) is the one piece of real state: it
//! hydrates the signed-in user from `localStorage`, writes every change
//! back, and keeps the shared API client's `Authorization` header in sync.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
