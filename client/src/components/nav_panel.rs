//! Static navigation links for the left sidebar.

use leptos::prelude::*;

use crate::content::NavEntry;
use crate::i18n::use_locale;

#[component]
pub fn NavPanel() -> impl IntoView {
    let labels = use_locale().labels();

    let items = NavEntry::ALL
        .into_iter()
        .map(|entry| {
            view! {
                <li class="font-semibold flex items-center gap-2 hover:text-blue-500">
                    <span class="w-6 text-center" aria-hidden="true">{entry.glyph()}</span>
                    <a href=entry.href()>{entry.label(labels)}</a>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <nav class="text-gray-800 mx-8" aria-label="Main">
            <ul class="space-y-4">{items}</ul>
        </nav>
    }
}
