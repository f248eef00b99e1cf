//! Server-side rendering helpers shared by component tests.

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Render the view built by `build` to an HTML string inside a fresh owner.
pub fn render_html<F, V>(build: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    let owner = Owner::new();
    owner.with(|| build().into_view().to_html())
}

/// Number of non-overlapping occurrences of `needle` in `haystack`.
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// Markup of every `<button>` element, in document order.
pub fn buttons(html: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut rest = html;
    while let Some(start) = rest.find("<button") {
        let Some(len) = rest[start..].find("</button>") else {
            break;
        };
        let end = start + len + "</button>".len();
        found.push(&rest[start..end]);
        rest = &rest[end..];
    }
    found
}
