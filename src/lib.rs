#![recursion_limit = "256"]

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod content;
pub mod nav;
pub mod schema;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // a second init (e.g. hot reload) keeps the existing logger
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating {}", content::PORTFOLIO.profile.brand);
    leptos::mount::hydrate_body(App);
}
