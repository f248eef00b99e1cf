//! Exclusive selection state for the feed filter toggle.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::i18n::Labels;

/// Which slice of the feed is shown.
///
/// A single enum value rather than one flag per option, so "both selected"
/// and "neither selected" cannot be represented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FeedFilter {
    #[default]
    Recent,
    Trending,
}

impl FeedFilter {
    /// Options in display order.
    pub const ALL: [FeedFilter; 2] = [FeedFilter::Recent, FeedFilter::Trending];

    /// Move to `option`. Selecting the current option leaves the state as is.
    pub fn select(&mut self, option: FeedFilter) {
        *self = option;
    }

    pub fn is_selected(self, option: FeedFilter) -> bool {
        self == option
    }

    /// Stable machine name for logs.
    pub fn key(self) -> &'static str {
        match self {
            FeedFilter::Recent => "recent",
            FeedFilter::Trending => "trending",
        }
    }

    pub fn label(self, labels: &Labels) -> &'static str {
        match self {
            FeedFilter::Recent => labels.filter_recent,
            FeedFilter::Trending => labels.filter_trending,
        }
    }
}
