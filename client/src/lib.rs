//! # client
//!
//! Leptos + WASM frontend for the web builder playground: a palette of
//! predefined components that are dragged onto a canvas, edited inline, and
//! exported as HTML.
//!
//! This crate contains the app shell, pages, components, builder state, and
//! the component/theme registries. With the `ssr` feature it renders on the
//! server; with `hydrate` it takes over in the browser.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating web builder");
    leptos::mount::hydrate_body(app::App);
}
