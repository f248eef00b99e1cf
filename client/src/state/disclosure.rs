//! Expand/collapse state for a list that shows a short preview by default.

#[cfg(test)]
#[path = "disclosure_test.rs"]
mod disclosure_test;

/// Upper bound on entries shown by an expanded list.
pub const EXPANDED_LIMIT: usize = 10;

/// Per-list disclosure state.
///
/// Starts collapsed. Only `expanded` changes after construction; the two
/// counts are fixed per list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Disclosure {
    pub expanded: bool,
    pub collapsed_count: usize,
    pub expanded_count: usize,
}

impl Disclosure {
    /// Collapsed disclosure showing `collapsed_count` entries, or up to
    /// [`EXPANDED_LIMIT`] once expanded.
    pub fn new(collapsed_count: usize) -> Self {
        Self {
            expanded: false,
            collapsed_count: collapsed_count.min(EXPANDED_LIMIT),
            expanded_count: EXPANDED_LIMIT,
        }
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn visible_count(&self) -> usize {
        if self.expanded { self.expanded_count } else { self.collapsed_count }
    }

    /// Overflow utility class for the list body.
    pub fn overflow_class(&self) -> &'static str {
        if self.expanded { "overflow-y-auto" } else { "overflow-hidden" }
    }
}
