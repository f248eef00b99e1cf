use super::*;
use crate::i18n::Locale;

// =============================================================
// Defaults
// =============================================================

#[test]
fn feed_filter_default_is_recent() {
    assert_eq!(FeedFilter::default(), FeedFilter::Recent);
}

#[test]
fn all_lists_recent_before_trending() {
    assert_eq!(FeedFilter::ALL, [FeedFilter::Recent, FeedFilter::Trending]);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn select_trending_from_recent() {
    let mut filter = FeedFilter::default();
    filter.select(FeedFilter::Trending);
    assert_eq!(filter, FeedFilter::Trending);
}

#[test]
fn select_active_option_is_noop() {
    let mut filter = FeedFilter::Trending;
    filter.select(FeedFilter::Trending);
    assert_eq!(filter, FeedFilter::Trending);

    let mut filter = FeedFilter::Recent;
    filter.select(FeedFilter::Recent);
    assert_eq!(filter, FeedFilter::Recent);
}

#[test]
fn trending_then_recent_restores_initial_state() {
    let mut filter = FeedFilter::default();
    filter.select(FeedFilter::Trending);
    filter.select(FeedFilter::Recent);
    assert_eq!(filter, FeedFilter::default());
}

#[test]
fn exactly_one_option_selected_after_every_step() {
    let clicks = [
        FeedFilter::Trending,
        FeedFilter::Trending,
        FeedFilter::Recent,
        FeedFilter::Trending,
        FeedFilter::Recent,
        FeedFilter::Recent,
        FeedFilter::Trending,
    ];
    let mut filter = FeedFilter::default();
    for clicked in clicks {
        filter.select(clicked);
        let selected: Vec<_> = FeedFilter::ALL
            .into_iter()
            .filter(|option| filter.is_selected(*option))
            .collect();
        assert_eq!(selected, vec![clicked]);
    }
}

#[test]
fn rapid_alternation_ends_on_last_click() {
    let mut filter = FeedFilter::default();
    for i in 0..101 {
        let option = if i % 2 == 0 { FeedFilter::Trending } else { FeedFilter::Recent };
        filter.select(option);
    }
    assert_eq!(filter, FeedFilter::Trending);
}

// =============================================================
// Presentation
// =============================================================

#[test]
fn keys_are_distinct() {
    assert_eq!(FeedFilter::Recent.key(), "recent");
    assert_eq!(FeedFilter::Trending.key(), "trending");
}

#[test]
fn labels_follow_locale() {
    let en = Locale::En.labels();
    let pt = Locale::PtBr.labels();
    assert_eq!(FeedFilter::Recent.label(en), "Recent");
    assert_eq!(FeedFilter::Trending.label(en), "Trending");
    assert_eq!(FeedFilter::Recent.label(pt), "Recente");
    assert_eq!(FeedFilter::Trending.label(pt), "Em alta");
}
