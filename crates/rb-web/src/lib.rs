pub mod app;
pub mod components;
pub mod config;
pub mod element;
pub mod error;
pub mod navigation;
pub mod pages;
pub mod redirect;

pub use components::{ButtonVariant, RedirectButton};
pub use element::{RedirectButtonProps, RedirectElement};
pub use error::RedirectError;
pub use redirect::RedirectTarget;

/// Client entry point: take over the server-rendered page
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
