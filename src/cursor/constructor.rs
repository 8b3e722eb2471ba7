//! Cursor construction

use crate::context::FrameStack;
use crate::filter::{ActiveFilter, Inclusion};
use crate::source::TokenSource;
use crate::stats::CursorStats;

use super::types::FilteringCursor;

impl<S: TokenSource> FilteringCursor<S> {
    /// Create a filtering cursor over `source`
    ///
    /// `filter` decides inclusion starting at root-level values,
    /// `inclusion` governs whether enclosing path tokens are surfaced, and
    /// `allow_multiple_matches` controls whether filtering continues after
    /// the first full match.
    pub fn new(
        source: S,
        filter: ActiveFilter,
        inclusion: Inclusion,
        allow_multiple_matches: bool,
    ) -> Self {
        Self {
            frames: FrameStack::new(Some(filter.clone())),
            item_filter: Some(filter.clone()),
            root_filter: filter,
            inclusion,
            allow_multiple_matches,
            current: None,
            last_cleared: None,
            exposed: None,
            match_count: 0,
            stats: CursorStats::default(),
            source,
        }
    }

    /// The filter applied to root-level values
    #[must_use]
    pub fn filter(&self) -> &ActiveFilter {
        &self.root_filter
    }

    /// The inclusion policy this cursor was built with
    #[must_use]
    pub fn inclusion(&self) -> Inclusion {
        self.inclusion
    }

    /// Consume the cursor, returning the upstream source
    pub fn into_source(self) -> S {
        self.source
    }
}
