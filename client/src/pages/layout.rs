//! Three-region page frame: left sidebar, main content, right sidebar.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;

use crate::components::left_panel::LeftPanel;
use crate::components::right_panel::RightPanel;

/// Full-screen frame around caller-supplied content.
///
/// The main region renders `children` untouched; when there are none it is
/// simply empty.
#[component]
pub fn FeedLayout(#[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <div class="flex w-full h-screen bg-gray-100">
            <LeftPanel/>
            <main class="flex-1 bg-gray-100 overflow-y-auto">{children.map(|children| children())}</main>
            <RightPanel/>
        </div>
    }
}
