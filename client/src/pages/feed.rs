//! Feed page: heading plus the feed filter.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use leptos::prelude::*;

use crate::components::filter_control::FilterControl;
use crate::i18n::use_locale;
use crate::pages::layout::FeedLayout;

#[component]
pub fn FeedPage() -> impl IntoView {
    let labels = use_locale().labels();

    view! {
        <div class="p-8">
            <h1 class="text-xl font-semibold text-gray-800 mb-4">{labels.feed_title}</h1>
            <div>
                <FilterControl/>
            </div>
        </div>
    }
}

/// Route view: the feed page inside the page frame.
#[component]
pub fn FeedScreen() -> impl IntoView {
    view! {
        <FeedLayout>
            <FeedPage/>
        </FeedLayout>
    }
}
