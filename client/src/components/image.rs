//! Plain image element; loading and caching are left to the browser.

use leptos::prelude::*;

#[component]
pub fn Image(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    width: u32,
    height: u32,
    #[prop(into, optional)] class: Option<String>,
) -> impl IntoView {
    view! {
        <img
            src=src
            alt=alt
            width=width.to_string()
            height=height.to_string()
            loading="lazy"
            decoding="async"
            class=class
        />
    }
}
