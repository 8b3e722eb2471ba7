//! Derived traversal operations

use crate::error::FilterResult;
use crate::source::TokenSource;
use crate::tokens::TokenKind;

use super::types::FilteringCursor;

/// Result of matching the next property name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMatch {
    /// The next token was a property name accepted by the matcher
    Matched,
    /// The next token was a property name the matcher rejected
    Unmatched,
    /// The next token closed the enclosing object
    EndObject,
    /// The next token was something else entirely
    Other,
}

impl<S: TokenSource> FilteringCursor<S> {
    /// Advance like [`next_token`], skipping over a property name to its
    /// value
    ///
    /// [`next_token`]: FilteringCursor::next_token
    pub fn next_value(&mut self) -> FilterResult<Option<TokenKind>> {
        let token = self.next_token()?;
        if token == Some(TokenKind::PropertyName) {
            return self.next_token();
        }
        Ok(token)
    }

    /// When positioned on a start marker, advance past the matching end
    /// marker; otherwise do nothing
    ///
    /// Nesting is counted with this cursor's own `next_token`: the upstream
    /// cursor may be at a different position due to buffering, so its skip
    /// must never be delegated to.
    pub fn skip_children(&mut self) -> FilterResult<()> {
        if !matches!(self.current, Some(t) if t.is_struct_start()) {
            return Ok(());
        }
        let mut open = 1u32;
        loop {
            match self.next_token()? {
                None => return Ok(()),
                Some(t) if t.is_struct_start() => open += 1,
                Some(t) if t.is_struct_end() => {
                    open -= 1;
                    if open == 0 {
                        return Ok(());
                    }
                }
                Some(_) => {}
            }
        }
    }

    /// Advance and return the property name if the next token is one
    pub fn next_name(&mut self) -> FilterResult<Option<&str>> {
        if self.next_token()? == Some(TokenKind::PropertyName) {
            Ok(self.current_name())
        } else {
            Ok(None)
        }
    }

    /// Advance and check the next token for a specific property name
    pub fn next_name_is(&mut self, expected: &str) -> FilterResult<bool> {
        Ok(self.next_token()? == Some(TokenKind::PropertyName)
            && self.current_name() == Some(expected))
    }

    /// Advance and classify the next token through a name predicate
    pub fn next_name_match<F>(&mut self, mut matcher: F) -> FilterResult<NameMatch>
    where
        F: FnMut(&str) -> bool,
    {
        match self.next_token()? {
            Some(TokenKind::PropertyName) => {
                let matched = self.current_name().map_or(false, &mut matcher);
                Ok(if matched {
                    NameMatch::Matched
                } else {
                    NameMatch::Unmatched
                })
            }
            Some(TokenKind::EndObject) => Ok(NameMatch::EndObject),
            _ => Ok(NameMatch::Other),
        }
    }
}
