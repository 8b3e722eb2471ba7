//! Iterator adapter over filtered tokens

use crate::error::FilterResult;
use crate::source::TokenSource;
use crate::tokens::TokenKind;

use super::types::FilteringCursor;

/// Iterator over the tokens a [`FilteringCursor`] emits
pub struct Tokens<'a, S: TokenSource> {
    cursor: &'a mut FilteringCursor<S>,
}

impl<S: TokenSource> FilteringCursor<S> {
    /// Iterate over the remaining filtered tokens
    pub fn tokens(&mut self) -> Tokens<'_, S> {
        Tokens { cursor: self }
    }
}

impl<S: TokenSource> Iterator for Tokens<'_, S> {
    type Item = FilterResult<TokenKind>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.cursor.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => None,
            Err(err) => Some(Err(err)),
        }
    }
}
