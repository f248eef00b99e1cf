//! Right sidebar: follow requests and suggested connections.

use leptos::prelude::*;

use crate::components::collapsible_list::CollapsibleList;
use crate::content::PeopleList;

/// Each list owns its disclosure, so expanding one leaves the other as is.
#[component]
pub fn RightPanel() -> impl IntoView {
    view! {
        <aside class="w-80 h-full bg-white overflow-y-auto">
            <CollapsibleList list=PeopleList::Requests/>
            <CollapsibleList list=PeopleList::Suggestions/>
        </aside>
    }
}
