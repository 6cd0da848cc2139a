#![recursion_limit = "256"]

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod carousel;
pub mod content;
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod logger;
pub mod motion;
pub mod reveal;
pub mod seo;
pub mod typewriter;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    logger::init_browser_logger();
    leptos::mount::hydrate_body(App);
}
