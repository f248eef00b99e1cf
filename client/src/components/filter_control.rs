//! Two-option feed filter built from [`Button`].
//!
//! DESIGN
//! ======
//! The selection lives in a signal created by `FilterControl` itself, so it
//! resets to `Recent` on every mount and is never visible to other
//! components.

#[cfg(test)]
#[path = "filter_control_test.rs"]
mod filter_control_test;

use leptos::prelude::*;

use crate::components::button::{Button, button_label};
use crate::i18n::use_locale;
use crate::state::filter::FeedFilter;

/// Callback that moves `selection` to `option`.
pub fn select_callback(selection: RwSignal<FeedFilter>, option: FeedFilter) -> Callback<()> {
    Callback::new(move |()| {
        selection.update(|current| current.select(option));
        #[cfg(feature = "hydrate")]
        log::debug!("feed filter: {}", option.key());
    })
}

/// What one filter button is wired to: its option, whether it is active, and
/// what a click does.
#[derive(Clone, Copy)]
pub struct OptionBinding {
    pub option: FeedFilter,
    pub active: Signal<bool>,
    pub on_select: Callback<()>,
}

/// One binding per option, in display order, all against `selection`.
pub fn option_bindings(selection: RwSignal<FeedFilter>) -> Vec<OptionBinding> {
    FeedFilter::ALL
        .into_iter()
        .map(|option| OptionBinding {
            option,
            active: Signal::derive(move || selection.get().is_selected(option)),
            on_select: select_callback(selection, option),
        })
        .collect()
}

/// Self-contained Recent/Trending toggle.
#[component]
pub fn FilterControl() -> impl IntoView {
    let selection = RwSignal::new(FeedFilter::default());
    view! { <FilterToggle selection/> }
}

/// Renders one button per option against an externally owned selection.
#[component]
fn FilterToggle(selection: RwSignal<FeedFilter>) -> impl IntoView {
    let labels = use_locale().labels();

    let buttons = option_bindings(selection)
        .into_iter()
        .map(|binding| {
            view! {
                <Button class="rounded-full" active=binding.active on_click=binding.on_select>
                    {button_label(binding.option.label(labels))}
                </Button>
            }
        })
        .collect::<Vec<_>>();

    view! { <div class="inline-flex bg-gray-200 rounded-full p-1" role="group">{buttons}</div> }
}
