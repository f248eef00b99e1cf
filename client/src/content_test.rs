use super::*;
use crate::i18n::Locale;

#[test]
fn nav_entries_cover_four_static_links() {
    let hrefs: Vec<_> = NavEntry::ALL.iter().map(|e| e.href()).collect();
    assert_eq!(hrefs, ["/feed", "/explorar", "/direct", "/configuracoes"]);
}

#[test]
fn nav_labels_follow_locale() {
    let pt = Locale::PtBr.labels();
    let labels: Vec<_> = NavEntry::ALL.iter().map(|e| e.label(pt)).collect();
    assert_eq!(labels, ["Feed", "Explorar", "Direct", "Configurações"]);
}

#[test]
fn collapsed_counts_per_list() {
    assert_eq!(PeopleList::Requests.collapsed_count(), 3);
    assert_eq!(PeopleList::Suggestions.collapsed_count(), 4);
}

#[test]
fn placeholder_people_are_numbered_from_one() {
    let people = placeholder_people(PeopleList::Requests, 3, Locale::En.labels());
    let names: Vec<_> = people.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Person 1", "Person 2", "Person 3"]);
    assert!(people.iter().all(|p| p.detail == "wants to follow you"));
}

#[test]
fn placeholder_people_empty_for_zero() {
    assert!(placeholder_people(PeopleList::Suggestions, 0, Locale::En.labels()).is_empty());
}

#[test]
fn profile_uses_default_avatar() {
    assert_eq!(PROFILE.avatar_src, DEFAULT_AVATAR_SRC);
    assert_eq!(PROFILE.avatar_size, 100);
}
