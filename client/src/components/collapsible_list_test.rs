use leptos::tachys::view::RenderHtml;

use super::*;
use crate::i18n::Locale;
use crate::state::disclosure::EXPANDED_LIMIT;
use crate::test_support::{buttons, count, render_html};

fn render_with(list: PeopleList, disclosure: RwSignal<Disclosure>) -> String {
    view! { <DisclosureList list disclosure/> }.into_view().to_html()
}

#[test]
fn requests_start_collapsed_with_three_entries() {
    let html = render_html(|| view! { <CollapsibleList list=PeopleList::Requests/> });
    assert_eq!(count(&html, "<li"), 3);
    assert!(html.contains("Requests"));
    assert!(html.contains("overflow-hidden"));
    assert!(html.contains(r#"aria-expanded="false""#));
    assert!(buttons(&html)[0].contains("Show more"));
}

#[test]
fn suggestions_start_collapsed_with_four_entries() {
    let html = render_html(|| view! { <CollapsibleList list=PeopleList::Suggestions/> });
    assert_eq!(count(&html, "<li"), 4);
    assert!(html.contains("Suggested for you"));
}

#[test]
fn expanded_list_shows_ten_entries_and_scrolls() {
    let owner = Owner::new();
    owner.with(|| {
        let disclosure = RwSignal::new(Disclosure::new(PeopleList::Requests.collapsed_count()));
        disclosure.update(Disclosure::toggle);

        let html = render_with(PeopleList::Requests, disclosure);
        assert_eq!(count(&html, "<li"), EXPANDED_LIMIT);
        assert!(html.contains("overflow-y-auto"));
        assert!(html.contains(r#"aria-expanded="true""#));
        assert!(buttons(&html)[0].contains("Show less"));
    });
}

#[test]
fn toggling_one_list_leaves_the_other_collapsed() {
    let owner = Owner::new();
    owner.with(|| {
        let requests = RwSignal::new(Disclosure::new(PeopleList::Requests.collapsed_count()));
        let suggestions = RwSignal::new(Disclosure::new(PeopleList::Suggestions.collapsed_count()));

        toggle_disclosure(requests)();

        assert_eq!(count(&render_with(PeopleList::Requests, requests), "<li"), EXPANDED_LIMIT);
        assert_eq!(count(&render_with(PeopleList::Suggestions, suggestions), "<li"), 4);
    });
}

#[test]
fn labels_follow_locale_context() {
    let html = render_html(|| {
        provide_context(Locale::PtBr);
        view! { <CollapsibleList list=PeopleList::Suggestions/> }
    });
    assert!(html.contains("Sugestões"));
    assert!(html.contains("Ver mais"));
    assert!(html.contains("Pessoa 1"));
}

#[test]
fn toggle_handler_expands_then_collapses() {
    let owner = Owner::new();
    owner.with(|| {
        let disclosure = RwSignal::new(Disclosure::new(PeopleList::Requests.collapsed_count()));
        let on_toggle = toggle_disclosure(disclosure);

        on_toggle();
        assert!(disclosure.get_untracked().expanded);
        let html = render_with(PeopleList::Requests, disclosure);
        assert!(html.contains(r#"aria-expanded="true""#));
        assert!(html.contains("overflow-y-auto"));

        on_toggle();
        assert_eq!(disclosure.get_untracked().visible_count(), 3);
        assert_eq!(count(&render_with(PeopleList::Requests, disclosure), "<li"), 3);
    });
}
