//! Static content shown in the sidebars.
//!
//! Nothing here is fetched; the profile and the people lists are fixed
//! placeholders until a backend exists.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::i18n::Labels;

/// Avatar used for the profile card and every placeholder person.
pub const DEFAULT_AVATAR_SRC: &str = "https://cdn-icons-png.flaticon.com/512/6858/6858504.png";

/// Destinations of the navigation panel, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavEntry {
    Feed,
    Explore,
    Direct,
    Settings,
}

impl NavEntry {
    pub const ALL: [NavEntry; 4] = [NavEntry::Feed, NavEntry::Explore, NavEntry::Direct, NavEntry::Settings];

    pub fn href(self) -> &'static str {
        match self {
            NavEntry::Feed => "/feed",
            NavEntry::Explore => "/explorar",
            NavEntry::Direct => "/direct",
            NavEntry::Settings => "/configuracoes",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            NavEntry::Feed => "\u{2302}",
            NavEntry::Explore => "\u{2609}",
            NavEntry::Direct => "\u{27A4}",
            NavEntry::Settings => "\u{2699}",
        }
    }

    pub fn label(self, labels: &Labels) -> &'static str {
        match self {
            NavEntry::Feed => labels.nav_feed,
            NavEntry::Explore => labels.nav_explore,
            NavEntry::Direct => labels.nav_direct,
            NavEntry::Settings => labels.nav_settings,
        }
    }
}

/// User summary rendered by the profile card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProfileSummary {
    pub avatar_src: &'static str,
    pub avatar_size: u32,
    pub name: &'static str,
    pub tagline: &'static str,
    pub posts: u32,
    pub followers: u32,
    pub following: u32,
}

pub const PROFILE: ProfileSummary = ProfileSummary {
    avatar_src: DEFAULT_AVATAR_SRC,
    avatar_size: 100,
    name: "Chiquitita",
    tagline: "Cabecinha de melão",
    posts: 123,
    followers: 123,
    following: 123,
};

/// The two people lists of the right sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PeopleList {
    Requests,
    Suggestions,
}

impl PeopleList {
    /// Entries shown while the list is collapsed.
    pub fn collapsed_count(self) -> usize {
        match self {
            PeopleList::Requests => 3,
            PeopleList::Suggestions => 4,
        }
    }

    pub fn title(self, labels: &Labels) -> &'static str {
        match self {
            PeopleList::Requests => labels.requests_title,
            PeopleList::Suggestions => labels.suggestions_title,
        }
    }

    fn detail(self, labels: &Labels) -> &'static str {
        match self {
            PeopleList::Requests => labels.requests_detail,
            PeopleList::Suggestions => labels.suggestions_detail,
        }
    }
}

/// A stand-in row for a person in one of the sidebar lists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaceholderPerson {
    pub name: String,
    pub detail: &'static str,
    pub avatar_src: &'static str,
}

/// First `count` placeholder rows for `list`, numbered from 1.
pub fn placeholder_people(list: PeopleList, count: usize, labels: &Labels) -> Vec<PlaceholderPerson> {
    (1..=count)
        .map(|n| PlaceholderPerson {
            name: format!("{} {n}", labels.person),
            detail: list.detail(labels),
            avatar_src: DEFAULT_AVATAR_SRC,
        })
        .collect()
}
