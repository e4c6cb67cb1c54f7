//! # client
//!
//! Leptos + WASM single-page client for Cerebrum: login, home, and profile.
//!
//! Session logic (store, actions, guard, boot lifecycle) lives in the
//! `cerebrum` crate; this crate renders it and supplies the browser transport.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
