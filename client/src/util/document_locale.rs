//! Locale recovery from the server-rendered document.
//!
//! The server writes the configured locale to `<html lang>`; the browser
//! bundle reads it back before hydrating. Requires a browser environment.

#[cfg(test)]
#[path = "document_locale_test.rs"]
mod document_locale_test;

use crate::i18n::Locale;

/// Locale named by `<html lang>`, or the default when it is missing or
/// unrecognized.
pub fn read() -> Locale {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
            .and_then(|el| el.get_attribute("lang"))
            .and_then(|tag| Locale::parse(&tag))
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Locale::default()
    }
}
