//! Profile summary card: avatar, name, tagline and three counters.

use leptos::prelude::*;

use crate::components::image::Image;
use crate::content::PROFILE;
use crate::i18n::use_locale;

#[component]
pub fn ProfileCard() -> impl IntoView {
    let labels = use_locale().labels();
    let profile = PROFILE;

    let stats = [
        (profile.posts, labels.stat_posts),
        (profile.followers, labels.stat_followers),
        (profile.following, labels.stat_following),
    ]
    .into_iter()
    .map(|(value, label)| {
        view! {
            <div class="flex flex-col items-center leading-3">
                <div class="font-bold text-gray-800">{value.to_string()}</div>
                <div class="text-sm text-gray-400">{label}</div>
            </div>
        }
    })
    .collect::<Vec<_>>();

    view! {
        <section class="flex flex-col items-center justify-center mt-8 gap-6">
            <div class="flex flex-col items-center gap-2">
                <Image
                    src=profile.avatar_src
                    alt=labels.avatar_alt
                    width=profile.avatar_size
                    height=profile.avatar_size
                />
                <div class="flex flex-col items-center">
                    <div class="font-semibold text-md text-gray-800">{profile.name}</div>
                    <div class="text-sm text-gray-400">{profile.tagline}</div>
                </div>
            </div>
            <div class="flex justify-between w-full px-8">{stats}</div>
        </section>
    }
}
