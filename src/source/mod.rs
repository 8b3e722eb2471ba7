//! Upstream token sources
//!
//! The filtering cursor sits on top of an opaque forward cursor over
//! tokens, described by the [`TokenSource`] trait: one-token lookahead, no
//! rewinding, textual accessors for the current token. [`ValueSource`]
//! walks a materialized `serde_json::Value` as such a stream, which is the
//! bridge from in-memory documents and the producer the test suites drive.

mod value;

pub use value::ValueSource;

use crate::error::FilterResult;
use crate::tokens::{ScalarValue, TokenKind};

/// An opaque forward cursor over a structured token stream
///
/// Implementations report the current token and expose its payload through
/// the textual and scalar accessors; the filtering cursor never copies
/// token content beyond property names that must survive the source's
/// advance.
pub trait TokenSource {
    /// Advance to the next token, or `None` at end of stream
    fn next_token(&mut self) -> FilterResult<Option<TokenKind>>;

    /// The token the source is currently positioned on
    fn current_token(&self) -> Option<TokenKind>;

    /// The property name when positioned on a name token
    fn current_name(&self) -> Option<&str>;

    /// Textual representation of the current token, if it has one
    fn text(&self) -> Option<&str>;

    /// Offset of the text within the source's internal buffer
    fn text_offset(&self) -> usize {
        0
    }

    /// Whether the current token's text is backed by real source characters
    fn has_text_characters(&self) -> bool;

    /// Scalar view of the current token when it is a leaf value
    fn scalar(&self) -> Option<ScalarValue<'_>>;

    /// String rendition of the current scalar value; `None` for null and
    /// structural tokens
    fn value_as_str(&self) -> Option<&str>;

    /// When positioned on a start marker, advance past the matching end
    /// marker and stop there; otherwise do nothing
    fn skip_children(&mut self) -> FilterResult<()>;
}
