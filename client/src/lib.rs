//! # client
//!
//! Leptos frontend for the feed page: a three-region layout with navigation,
//! a profile card, collapsible people lists, and the Recent/Trending filter.
//!
//! Built with `ssr` for the `feedboard` server and with `hydrate` for the
//! browser bundle.

pub mod app;
pub mod components;
pub mod content;
pub mod i18n;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// Browser entry point: attach handlers to the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let locale = util::document_locale::read();
    log::debug!("hydrating with locale {}", locale.tag());
    leptos::mount::hydrate_body(move || view! { <App locale/> });
}
