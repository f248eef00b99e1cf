//! Display strings per locale.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server picks a locale from configuration, writes it to `<html lang>`
//! and provides it as context; the browser bundle reads it back from the
//! document before hydrating so both renders agree on every string.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use leptos::prelude::use_context;

/// Supported display languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    PtBr,
}

impl Locale {
    /// Parse a BCP 47 tag. Only the primary subtag is significant, so `en-GB`
    /// maps to English and `pt-PT` to Brazilian Portuguese.
    pub fn parse(raw: &str) -> Option<Self> {
        let primary = raw.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Locale::En),
            "pt" => Some(Locale::PtBr),
            _ => None,
        }
    }

    /// Value for the `lang` attribute.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::PtBr => "pt-BR",
        }
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::En => &EN,
            Locale::PtBr => &PT_BR,
        }
    }
}

/// Locale from context, falling back to the default outside an `App`.
pub fn use_locale() -> Locale {
    use_context::<Locale>().unwrap_or_default()
}

/// Every static string rendered by the UI.
#[derive(Debug)]
pub struct Labels {
    pub app_title: &'static str,
    pub feed_title: &'static str,
    pub filter_recent: &'static str,
    pub filter_trending: &'static str,
    pub nav_feed: &'static str,
    pub nav_explore: &'static str,
    pub nav_direct: &'static str,
    pub nav_settings: &'static str,
    pub avatar_alt: &'static str,
    pub stat_posts: &'static str,
    pub stat_followers: &'static str,
    pub stat_following: &'static str,
    pub requests_title: &'static str,
    pub requests_detail: &'static str,
    pub suggestions_title: &'static str,
    pub suggestions_detail: &'static str,
    pub person: &'static str,
    pub show_more: &'static str,
    pub show_less: &'static str,
    pub not_found: &'static str,
}

static EN: Labels = Labels {
    app_title: "Feed",
    feed_title: "Feed",
    filter_recent: "Recent",
    filter_trending: "Trending",
    nav_feed: "Feed",
    nav_explore: "Explore",
    nav_direct: "Direct",
    nav_settings: "Settings",
    avatar_alt: "Profile picture",
    stat_posts: "Posts",
    stat_followers: "Followers",
    stat_following: "Following",
    requests_title: "Requests",
    requests_detail: "wants to follow you",
    suggestions_title: "Suggestions",
    suggestions_detail: "Suggested for you",
    person: "Person",
    show_more: "Show more",
    show_less: "Show less",
    not_found: "Page not found.",
};

static PT_BR: Labels = Labels {
    app_title: "Feed",
    feed_title: "Página de feed",
    filter_recent: "Recente",
    filter_trending: "Em alta",
    nav_feed: "Feed",
    nav_explore: "Explorar",
    nav_direct: "Direct",
    nav_settings: "Configurações",
    avatar_alt: "Foto de perfil",
    stat_posts: "Posts",
    stat_followers: "Seguidores",
    stat_following: "Seguindo",
    requests_title: "Solicitações",
    requests_detail: "quer seguir você",
    suggestions_title: "Sugestões",
    suggestions_detail: "Sugestão para você",
    person: "Pessoa",
    show_more: "Ver mais",
    show_less: "Ver menos",
    not_found: "Página não encontrada.",
};
