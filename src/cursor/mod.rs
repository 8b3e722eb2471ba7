//! The filtering cursor
//!
//! [`FilteringCursor`] drives an upstream [`TokenSource`], consults the
//! shadow frames and the user filter for every token, and produces the
//! filtered sequence. Emitted tokens are a subsequence of the upstream
//! sequence, except that replay may deliver a contiguous prefix of
//! suppressed path tokens (start markers and property names) after their
//! natural position has passed; within the replayed prefix, relative order
//! matches upstream order, and replay always completes before any further
//! live token is emitted.
//!
//! [`TokenSource`]: crate::source::TokenSource

mod accessors;
mod buffering;
mod constructor;
mod iterator;
mod processing;
mod traversal;
mod types;

pub use iterator::Tokens;
pub use traversal::NameMatch;
pub use types::FilteringCursor;
