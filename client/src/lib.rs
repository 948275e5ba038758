//! # client
//!
//! Leptos + WASM frontend for the clip-path builder.
//!
//! This crate contains the page, the editor and menu components, and the
//! gallery state. Polygon editing itself lives in the `editor` crate; the
//! `ClipPathBuilder` component bridges DOM events into it.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("logger init failed: {err}");
    }
    leptos::mount::mount_to_body(app::App);
}
