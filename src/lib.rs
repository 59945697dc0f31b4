//! GameHost web client.
//!
//! A Leptos CSR application for browsing the game catalog, signing up or in,
//! viewing the member menu and preparing a game upload. There is no backend
//! wiring yet: forms keep their drafts locally and submits only log.
//!
//! # Modules
//!
//! - [`routes`] - navigation targets and the navigation-request capability
//! - [`models`] - categories, catalog entries, header configuration
//! - [`drafts`] - per-form state for auth and upload
//! - [`error`] - field validation errors
//! - [`config`] - asset locations, grid size, log level

mod app;
mod components;
mod pages;

pub mod config;
pub mod drafts;
pub mod error;
pub mod models;
pub mod routes;

pub use app::App;
pub use config::AppConfig;

use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::new();
    let _ = console_log::init_with_level(config.log_level);
    log::info!("GameHost client starting ({:?})", config);

    mount_to_body(move || view! { <App config=config /> });
}
