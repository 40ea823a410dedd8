//! # aegis-ui
//!
//! Leptos + WASM front-end for the Aegis Cognitive Mesh baseline page: a
//! click counter and a light/dark theme toggle persisted to `localStorage`.
//!
//! The `ssr` feature is used by the `aegis-host` server to render the shell;
//! the `hydrate` feature builds the browser bundle.

pub mod app;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach reactivity to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
