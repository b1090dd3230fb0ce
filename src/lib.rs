//! # devnest
//!
//! Leptos + WASM frontend chrome for the DevNest developer blog.
//!
//! This crate owns the site's theme handling: a light/dark/system mode that
//! is persisted in `localStorage`, follows the OS color-scheme preference
//! while in system mode, and is applied to `<html data-theme>` before first
//! paint by an inline bootstrap script generated from the same decision
//! function the runtime controller uses.

pub mod app;
pub mod components;
pub mod state;
pub mod theme;
pub mod util;

/// WASM entrypoint: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
