//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::i18n::Locale;
use crate::pages::feed::FeedScreen;

/// Stylesheet emitted by the Leptos build for the `feedboard` site.
pub const STYLESHEET_HREF: &str = "/pkg/feedboard.css";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions, locale: Locale) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang=locale.tag()>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App locale/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the locale context and routes `/` and `/feed` to the feed screen.
/// Other paths, including the static navigation targets that have no page
/// yet, render the fallback.
#[component]
pub fn App(#[prop(optional)] locale: Locale) -> impl IntoView {
    provide_meta_context();
    provide_context(locale);

    let labels = locale.labels();

    view! {
        <Stylesheet id="leptos" href=STYLESHEET_HREF/>
        <Title text=labels.app_title/>

        <Router>
            <Routes fallback=move || labels.not_found.into_view()>
                <Route path=StaticSegment("") view=FeedScreen/>
                <Route path=StaticSegment("feed") view=FeedScreen/>
            </Routes>
        </Router>
    }
}
