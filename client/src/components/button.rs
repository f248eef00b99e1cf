//! Toggle-style button primitive.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::prelude::*;

const BASE_CLASSES: &str = "px-4 py-1 font-semibold transition-colors cursor-pointer";
const ACTIVE_CLASSES: &str = "bg-white text-blue-600";
const INACTIVE_CLASSES: &str = "text-gray-400 hover:text-blue-600";

/// Class string for a button in the given state, with optional extra classes
/// appended last.
pub fn button_class(active: bool, extra: Option<&str>) -> String {
    let state = if active { ACTIVE_CLASSES } else { INACTIVE_CLASSES };
    match extra.map(str::trim) {
        Some(extra) if !extra.is_empty() => format!("{BASE_CLASSES} {state} {extra}"),
        _ => format!("{BASE_CLASSES} {state}"),
    }
}

/// Click behavior: run the callback when there is one, otherwise nothing.
pub fn press(on_click: Option<&Callback<()>>) {
    if let Some(on_click) = on_click {
        on_click.run(());
    }
}

/// Handler bound to the button's click event.
pub fn press_handler(on_click: Option<Callback<()>>) -> impl Fn() + Clone + Send + Sync + 'static {
    move || press(on_click.as_ref())
}

/// Text child for a [`Button`]. An empty label renders no text node at all;
/// SSR would otherwise emit a lone space for it.
pub fn button_label(text: impl Into<String>) -> Option<String> {
    Some(text.into()).filter(|text| !text.is_empty())
}

/// Native `<button>` whose look is driven entirely by `active`.
///
/// Holds no state. Children are rendered as given, so string labels are
/// always escaped text; pass them through [`button_label`].
#[component]
pub fn Button(
    children: Children,
    #[prop(into, optional)] active: Signal<bool>,
    #[prop(into, optional)] on_click: Option<Callback<()>>,
    #[prop(into, optional)] class: Option<String>,
) -> impl IntoView {
    let class = move || button_class(active.get(), class.as_deref());
    let pressed = move || if active.get() { "true" } else { "false" };
    let on_press = press_handler(on_click);

    view! {
        <button type="button" class=class aria-pressed=pressed on:click=move |_| on_press()>
            {children()}
        </button>
    }
}
