//! Buffered lookahead
//!
//! Entered when a tentative composite is opened under path inclusion: its
//! start marker (and any property names along the way) stay suppressed in
//! the shadow frames while the upstream cursor races ahead. The first
//! descendant that earns inclusion triggers replay, which emits the
//! buffered path tokens from the buffer root downward before live
//! forwarding resumes. If the tentative subtree closes without a match,
//! control falls back to the live loop with nothing emitted.

use crate::error::{internal_error, FilterResult};
use crate::filter::ActiveFilter;
use crate::source::TokenSource;
use crate::tokens::TokenKind;

use super::types::{Entered, FilteringCursor};

impl<S: TokenSource> FilteringCursor<S> {
    /// Pull upstream tokens below `buffer_root` until a descendant earns
    /// inclusion (returning the first replayed path token) or the buffer
    /// root closes (returning `None`)
    pub(super) fn next_with_buffering(
        &mut self,
        buffer_root: usize,
    ) -> FilterResult<Option<TokenKind>> {
        loop {
            let token = match self.source.next_token()? {
                Some(t) => t,
                None => return Ok(None),
            };
            self.stats.tokens_read += 1;

            match token {
                TokenKind::StartArray | TokenKind::StartObject => {
                    let array = token == TokenKind::StartArray;
                    match self.enter_container(array)? {
                        // the path down to this container comes first; the
                        // live start marker follows once the drain exhausts
                        Entered::Emit => return self.next_buffered(buffer_root).map(Some),
                        Entered::Skipped | Entered::Pending => {}
                    }
                }

                TokenKind::EndArray | TokenKind::EndObject => {
                    if self.finish_frame(token) {
                        return self.next_buffered(buffer_root).map(Some);
                    }
                    let got_end = self.frames.head_index() == buffer_root;
                    let return_end = got_end && self.frames.head().start_handled();
                    self.frames.pop();
                    self.item_filter = self.frames.head().filter().cloned();
                    if return_end {
                        return Ok(Some(token));
                    }
                    if got_end {
                        return Ok(None);
                    }
                }

                TokenKind::PropertyName => {
                    let name = self.property_name()?;
                    let narrowed = match self.frames.head_mut().set_property_name(&name) {
                        Some(ActiveFilter::IncludeAll) => {
                            self.item_filter = Some(ActiveFilter::IncludeAll);
                            return self.next_buffered(buffer_root).map(Some);
                        }
                        None => {
                            self.skip_next_value()?;
                            continue;
                        }
                        Some(f) => f.include_property(&name),
                    };
                    let narrowed = match narrowed {
                        None => {
                            self.skip_next_value()?;
                            continue;
                        }
                        Some(f) => f,
                    };
                    self.item_filter = Some(narrowed.clone());
                    if narrowed.is_include_all() {
                        if self.verify_allowed_matches() {
                            return self.next_buffered(buffer_root).map(Some);
                        }
                        // budget denied: re-set the property name so the next
                        // iteration is not seeded with the stale decision
                        self.item_filter = self.frames.head_mut().set_property_name(&name);
                    }
                }

                scalar => match self.item_filter.clone() {
                    Some(ActiveFilter::IncludeAll) => {
                        return self.next_buffered(buffer_root).map(Some)
                    }
                    Some(f) => {
                        if self.scalar_matches(&f, scalar) && self.verify_allowed_matches() {
                            return self.next_buffered(buffer_root).map(Some);
                        }
                    }
                    None => {}
                },
            }
        }
    }

    /// Begin replay: expose the buffer root and hand out its first queued
    /// token, leaving the exposed pointer set so the drain continues on
    /// subsequent reads
    pub(super) fn next_buffered(&mut self, buffer_root: usize) -> FilterResult<TokenKind> {
        log::trace!(
            "replaying suppressed path tokens from depth {} to {}",
            buffer_root,
            self.frames.head_index()
        );
        self.exposed = Some(buffer_root);
        let mut index = buffer_root;
        loop {
            if let Some(token) = self.frames.frame_mut(index).next_token_to_read() {
                self.stats.tokens_replayed += 1;
                return Ok(token);
            }
            if index == self.frames.head_index() {
                return Err(internal_error("failed to locate expected buffered tokens"));
            }
            index += 1;
            self.exposed = Some(index);
        }
    }
}
