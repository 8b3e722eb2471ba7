//! Token and text accessors
//!
//! Text accessors forward to the upstream source with one exception: when
//! the current token is a property name, the shadow frame's name is
//! authoritative, because the upstream cursor may already have moved past
//! it during lookahead buffering. The reported string is synthesized in
//! that case, so `has_text_characters` returns false.

use crate::context::ContextFrame;
use crate::error::{unsupported, FilterResult};
use crate::source::TokenSource;
use crate::stats::CursorStats;
use crate::tokens::{ScalarValue, TokenKind, ID_NO_TOKEN};

use super::types::FilteringCursor;

impl<S: TokenSource> FilteringCursor<S> {
    /// Last token emitted, or `None` before the first read, at end of
    /// stream, or after an explicit clear
    #[inline]
    #[must_use]
    pub fn current_token(&self) -> Option<TokenKind> {
        self.current
    }

    #[inline]
    #[must_use]
    pub fn has_current_token(&self) -> bool {
        self.current.is_some()
    }

    /// Numeric id of the current token, or [`ID_NO_TOKEN`]
    #[must_use]
    pub fn current_token_id(&self) -> u8 {
        self.current.map_or(ID_NO_TOKEN, TokenKind::id)
    }

    #[must_use]
    pub fn has_token_id(&self, id: u8) -> bool {
        self.current_token_id() == id
    }

    #[must_use]
    pub fn has_token(&self, kind: TokenKind) -> bool {
        self.current == Some(kind)
    }

    #[must_use]
    pub fn is_expected_start_object(&self) -> bool {
        self.current == Some(TokenKind::StartObject)
    }

    #[must_use]
    pub fn is_expected_start_array(&self) -> bool {
        self.current == Some(TokenKind::StartArray)
    }

    /// Null the current token, preserving it for [`last_cleared_token`]
    ///
    /// [`last_cleared_token`]: FilteringCursor::last_cleared_token
    pub fn clear_current_token(&mut self) {
        if let Some(token) = self.current.take() {
            self.last_cleared = Some(token);
        }
    }

    /// Token in effect when the current token was last cleared
    #[must_use]
    pub fn last_cleared_token(&self) -> Option<TokenKind> {
        self.last_cleared
    }

    /// Total decisions counted against the match budget so far
    #[must_use]
    pub fn match_count(&self) -> u64 {
        self.match_count
    }

    /// Processing counters for this cursor
    #[must_use]
    pub fn stats(&self) -> &CursorStats {
        &self.stats
    }

    /// The shadow frame the consumer is positioned in: the exposed frame
    /// while replay is draining, else the head
    #[must_use]
    pub fn stream_read_context(&self) -> &ContextFrame {
        self.frames.frame(self.filter_context_index())
    }

    pub(super) fn filter_context_index(&self) -> usize {
        self.exposed.unwrap_or_else(|| self.frames.head_index())
    }

    /// The current property name; for container-start tokens, the name the
    /// container is bound to in its parent
    #[must_use]
    pub fn current_name(&self) -> Option<&str> {
        let index = self.filter_context_index();
        match self.current {
            Some(TokenKind::StartObject) | Some(TokenKind::StartArray) => self
                .frames
                .parent_of(index)
                .and_then(|parent| parent.current_name()),
            _ => self.frames.frame(index).current_name(),
        }
    }

    /// Textual representation of the current token
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        if self.current == Some(TokenKind::PropertyName) {
            return self.current_name();
        }
        self.source.text()
    }

    #[must_use]
    pub fn text_length(&self) -> usize {
        self.text().map_or(0, str::len)
    }

    #[must_use]
    pub fn text_offset(&self) -> usize {
        if self.current == Some(TokenKind::PropertyName) {
            return 0;
        }
        self.source.text_offset()
    }

    /// Whether the current text is backed by real source characters; false
    /// for replayed property names, whose strings are synthesized
    #[must_use]
    pub fn has_text_characters(&self) -> bool {
        if self.current == Some(TokenKind::PropertyName) {
            return false;
        }
        self.source.has_text_characters()
    }

    /// Scalar view of the current token when it is a leaf value
    #[must_use]
    pub fn scalar(&self) -> Option<ScalarValue<'_>> {
        if self.current == Some(TokenKind::PropertyName) {
            return None;
        }
        self.source.scalar()
    }

    /// String rendition of the current value
    #[must_use]
    pub fn value_as_str(&self) -> Option<&str> {
        if self.current == Some(TokenKind::PropertyName) {
            return self.current_name();
        }
        self.source.value_as_str()
    }

    /// Overriding the current name is not supported during a filtered read
    pub fn override_current_name(&mut self, _name: &str) -> FilterResult<()> {
        Err(unsupported(
            "cannot override the current name during a filtered read",
        ))
    }
}
