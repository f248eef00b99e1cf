//! Left sidebar: navigation above the profile card.

use leptos::prelude::*;

use crate::components::nav_panel::NavPanel;
use crate::components::profile_card::ProfileCard;

#[component]
pub fn LeftPanel() -> impl IntoView {
    view! {
        <aside class="w-80 h-full bg-white overflow-y-auto py-8">
            <NavPanel/>
            <ProfileCard/>
        </aside>
    }
}
