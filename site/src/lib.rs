//! # site
//!
//! Leptos + WASM frontend for the course enrollment site: landing page,
//! enrollment form and payment instructions, with the registration posted to
//! an external form-collection endpoint.
//!
//! All mutable UI state lives in one `EnrollmentState` (see `state`); pages
//! and components read it from context and call its methods.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
