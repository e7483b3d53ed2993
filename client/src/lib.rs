//! # client
//!
//! Leptos + WASM front-end for the post monitor API: login/register forms,
//! a token-backed session with route guards, and dashboard/webhook views.
//!
//! The same crate is linked into the server with `ssr` for rendering and
//! compiled to WASM with `hydrate` for the browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod theme;
pub mod util;

/// WASM entry point: installs console logging and hydrates the server-rendered
/// body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = config::ApiConfig::from_document();
    log::info!("hydrating with API base {}", config.base_url());

    leptos::mount::hydrate_body(move || {
        provide_context(config);
        view! { <App/> }
    });
}
