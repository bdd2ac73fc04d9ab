//! # portal-client
//!
//! Leptos + WASM frontend for the student portal.
//!
//! This crate contains the provider stack (theme, auth, data, toasts), the
//! protected student layout, pages, and the JSON API client. The server links
//! it with the `ssr` feature for server rendering; the browser bundle is built
//! with `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod providers;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
