//! # astel
//!
//! Leptos + WASM frontend for the Astel landing page. Replaces the original
//! React single-page site with a Rust-native UI layer.
//!
//! The page is static content (nav, hero, feature grid, CTA, footer) plus two
//! pieces of client state: the active color theme and the mobile menu. The
//! theme is applied as a single marker class on `<html>`; all per-theme
//! styling keys off that marker in `style/astel.css`.

pub mod app;
pub mod components;
pub mod content;
pub mod state;
pub mod util;

/// WASM entry point. Mounts the application into the host document body.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
