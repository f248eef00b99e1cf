//! Right-sidebar list of people that expands from a short preview.

#[cfg(test)]
#[path = "collapsible_list_test.rs"]
mod collapsible_list_test;

use leptos::prelude::*;

use crate::components::image::Image;
use crate::content::{PeopleList, placeholder_people};
use crate::i18n::use_locale;
use crate::state::disclosure::Disclosure;

/// Click handler for a list's show-more/show-less button.
pub fn toggle_disclosure(disclosure: RwSignal<Disclosure>) -> impl Fn() + Clone + Send + Sync + 'static {
    move || disclosure.update(Disclosure::toggle)
}

/// Titled people list with its own show-more/show-less state.
#[component]
pub fn CollapsibleList(list: PeopleList) -> impl IntoView {
    let disclosure = RwSignal::new(Disclosure::new(list.collapsed_count()));
    view! { <DisclosureList list disclosure/> }
}

#[component]
fn DisclosureList(list: PeopleList, disclosure: RwSignal<Disclosure>) -> impl IntoView {
    let labels = use_locale().labels();

    let entries = move || {
        placeholder_people(list, disclosure.get().visible_count(), labels)
            .into_iter()
            .map(|person| {
                let alt = person.name.clone();
                view! {
                    <li class="flex items-center gap-3">
                        <Image src=person.avatar_src alt=alt width=32 height=32 class="rounded-full"/>
                        <div class="flex flex-col leading-4">
                            <span class="font-semibold text-sm text-gray-800">{person.name}</span>
                            <span class="text-xs text-gray-400">{person.detail}</span>
                        </div>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    let list_class = move || format!("space-y-3 max-h-96 {}", disclosure.get().overflow_class());
    let expanded = move || if disclosure.get().expanded { "true" } else { "false" };
    let on_toggle = toggle_disclosure(disclosure);
    let toggle_label = move || if disclosure.get().expanded { labels.show_less } else { labels.show_more };

    view! {
        <section class="px-6 py-4">
            <h2 class="font-semibold text-gray-800 mb-3">{list.title(labels)}</h2>
            <ul class=list_class>{entries}</ul>
            <button
                type="button"
                class="mt-3 text-sm font-semibold text-blue-600 hover:underline cursor-pointer"
                aria-expanded=expanded
                on:click=move |_| on_toggle()
            >
                {toggle_label}
            </button>
        </section>
    }
}
