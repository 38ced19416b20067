//! # client
//!
//! Leptos + WASM frontend for the textbook storefront.
//!
//! This crate renders the login/registration screens, the guarded pages, and
//! the navigation chrome. Access decisions come from the `storefront` crate;
//! this crate only turns them into views and browser navigation.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
