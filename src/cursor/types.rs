//! Filtering cursor state

use crate::context::FrameStack;
use crate::filter::{ActiveFilter, Inclusion};
use crate::source::TokenSource;
use crate::stats::CursorStats;
use crate::tokens::TokenKind;

/// Streaming token-filter cursor
///
/// Sits between an upstream [`TokenSource`] and a consumer, re-exposing the
/// underlying stream while dropping tokens the filter rejects. Inclusion of
/// a composite value may hinge on children not yet produced; the cursor
/// then races ahead of the consumer, buffering the suppressed path markers
/// in its shadow frames, and replays them in original order once a
/// descendant earns inclusion.
pub struct FilteringCursor<S: TokenSource> {
    /// The upstream token source being filtered
    pub(super) source: S,
    /// Filter applied to root-level values
    pub(super) root_filter: ActiveFilter,
    /// Policy over path tokens and scalar nulls
    pub(super) inclusion: Inclusion,
    /// Whether filtering continues after the first full match
    pub(super) allow_multiple_matches: bool,
    /// Last token emitted to the consumer, if any
    pub(super) current: Option<TokenKind>,
    /// Token in effect when the consumer last cleared the current token
    pub(super) last_cleared: Option<TokenKind>,
    /// Shadow frames mirroring the upstream parse tree; the head frame is
    /// sometimes ahead of what the consumer has seen
    pub(super) frames: FrameStack,
    /// Index of the frame currently being drained for replay; `None` while
    /// the head and the consumer view are in sync
    pub(super) exposed: Option<usize>,
    /// Filter that applies to the next immediate value; carries decisions
    /// across the name/value gap and between array siblings
    pub(super) item_filter: Option<ActiveFilter>,
    /// Number of decisions counted against the match budget
    pub(super) match_count: u64,
    /// Processing counters
    pub(super) stats: CursorStats,
}

/// Outcome of draining the exposed frame chain
pub(super) enum Drained {
    /// A token to hand to the consumer
    Token(TokenKind),
    /// The stream ended while resuming from the live token
    Ended,
    /// Replay finished on a pending live property name; the state machine
    /// must consult the filter for it
    FallThrough,
}

/// Outcome of dispatching a container start token
pub(super) enum Entered {
    /// The start marker is emitted as-is
    Emit,
    /// The subtree was dropped and the source skipped past it
    Skipped,
    /// Inclusion is still undecided; a shadow frame was pushed unhandled
    Pending,
}
