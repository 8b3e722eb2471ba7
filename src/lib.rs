//! Streaming token filtering for JSON event streams
//!
//! This crate sits between a producer of structured tokens (objects,
//! arrays, property names, scalars) and a consumer, re-exposing the
//! underlying stream while dropping tokens a user-supplied predicate
//! rejects. Inclusion of a composite value may hinge on children not yet
//! produced; the cursor maintains a shadow context stack mirroring the
//! upstream one and, when a deep descendant proves the enclosing path
//! should be emitted, replays the previously-suppressed path tokens in
//! original order before resuming live forwarding.
//!
//! # Features
//!
//! - Drop-or-pass filtering with lazy, per-level predicate refinement
//! - Path surfacing: enclosing start markers and property names are
//!   emitted exactly when a descendant earns inclusion
//! - Single-match mode that stops after the first full match
//! - Replay buffering bounded by nesting depth, never by document size
//! - JSON Pointer matching out of the box
//!
//! # Examples
//!
//! ```rust
//! use tokensieve::{
//!     ActiveFilter, FilteringCursor, Inclusion, PointerFilter, TokenKind, ValueSource,
//! };
//!
//! let doc = serde_json::json!({"a": 1, "b": {"c": 2, "d": 3}});
//! let filter = ActiveFilter::custom(PointerFilter::new("/b/c").unwrap());
//! let mut cursor = FilteringCursor::new(
//!     ValueSource::new(&doc),
//!     filter,
//!     Inclusion::IncludeAllAndPath,
//!     false,
//! );
//!
//! let mut emitted = Vec::new();
//! while let Some(token) = cursor.next_token().unwrap() {
//!     emitted.push(token);
//! }
//! assert_eq!(
//!     emitted,
//!     vec![
//!         TokenKind::StartObject,
//!         TokenKind::PropertyName,
//!         TokenKind::StartObject,
//!         TokenKind::PropertyName,
//!         TokenKind::ValueInt,
//!         TokenKind::EndObject,
//!         TokenKind::EndObject,
//!     ],
//! );
//! assert_eq!(cursor.match_count(), 1);
//! ```

pub mod context;
pub mod cursor;
pub mod error;
pub mod filter;
pub mod source;
pub mod stats;
pub mod tokens;

pub use self::{
    context::{ContextFrame, FrameKind, FrameStack},
    cursor::{FilteringCursor, NameMatch, Tokens},
    error::{ErrorKind, FilterError, FilterResult},
    filter::{ActiveFilter, FilterDecision, Inclusion, PointerFilter, TokenFilter},
    source::{TokenSource, ValueSource},
    stats::CursorStats,
    tokens::{ScalarValue, TokenKind},
};
