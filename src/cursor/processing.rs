//! Core token processing
//!
//! `next_token` runs in phases. Early termination first: with multiple
//! matches disabled, a scalar already counted as the sole match ends the
//! stream without touching upstream. Replay drain second: while an exposed
//! frame is being drained, suppressed path tokens flow out before anything
//! live. Live reading last: one upstream token is pulled and dispatched
//! against the shadow frames and the user filter.

use crate::error::{internal_error, FilterResult};
use crate::filter::{ActiveFilter, Inclusion};
use crate::source::TokenSource;
use crate::tokens::TokenKind;

use super::types::{Drained, Entered, FilteringCursor};

impl<S: TokenSource> FilteringCursor<S> {
    /// Advance to the next filtered token, or `None` at end of the
    /// filtered stream
    pub fn next_token(&mut self) -> FilterResult<Option<TokenKind>> {
        if self.single_match_exhausted() {
            self.current = None;
            return Ok(None);
        }
        if let Some(exposed) = self.exposed {
            match self.drain_exposed(exposed)? {
                Drained::Token(token) => {
                    self.current = Some(token);
                    self.stats.tokens_emitted += 1;
                    return Ok(Some(token));
                }
                Drained::Ended => {
                    self.current = None;
                    return Ok(None);
                }
                Drained::FallThrough => {}
            }
        }
        let token = self.next_live()?;
        self.current = token;
        if token.is_some() {
            self.stats.tokens_emitted += 1;
        }
        Ok(token)
    }

    /// The one-match contract: once a bare scalar has been emitted as the
    /// single allowed match, the filtered stream is over.
    fn single_match_exhausted(&self) -> bool {
        if self.allow_multiple_matches || self.exposed.is_some() {
            return false;
        }
        matches!(self.current, Some(t) if t.is_scalar())
            && !self.frames.head().start_handled()
            && self.inclusion == Inclusion::OnlyIncludeAll
            && matches!(self.item_filter, Some(ActiveFilter::IncludeAll))
    }

    /// Walk the exposed frame chain toward the head, handing out buffered
    /// tokens. On exhaustion, resume from the upstream cursor's current
    /// token, which the consumer has not seen yet.
    fn drain_exposed(&mut self, start: usize) -> FilterResult<Drained> {
        let mut index = start;
        loop {
            if let Some(token) = self.frames.frame_mut(index).next_token_to_read() {
                self.stats.tokens_replayed += 1;
                return Ok(Drained::Token(token));
            }
            if index == self.frames.head_index() {
                self.exposed = None;
                let token = self.source.current_token();
                if self.frames.head().in_array() {
                    if token == Some(TokenKind::EndArray) {
                        self.frames.pop();
                        self.item_filter = self.frames.head().filter().cloned();
                    }
                    return Ok(match token {
                        Some(t) => Drained::Token(t),
                        None => Drained::Ended,
                    });
                }
                if token == Some(TokenKind::EndObject) {
                    self.frames.pop();
                    self.item_filter = self.frames.head().filter().cloned();
                }
                // a live property name was already replayed from the frame;
                // the filter must be consulted before reading past it
                if token == Some(TokenKind::PropertyName) {
                    return Ok(Drained::FallThrough);
                }
                return Ok(match token {
                    Some(t) => Drained::Token(t),
                    None => Drained::Ended,
                });
            }
            index += 1;
            self.exposed = Some(index);
        }
    }

    /// Pull upstream tokens until one is emittable or the stream ends
    pub(super) fn next_live(&mut self) -> FilterResult<Option<TokenKind>> {
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
                        Entered::Emit => return Ok(Some(token)),
                        Entered::Skipped => {}
                        Entered::Pending => {
                            if self.inclusion == Inclusion::IncludeAllAndPath {
                                let buffer_root = self.frames.head_index();
                                if let Some(t) = self.next_with_buffering(buffer_root)? {
                                    return Ok(Some(t));
                                }
                            }
                        }
                    }
                }

                TokenKind::EndArray | TokenKind::EndObject => {
                    if let Some(t) = self.leave_container(token)? {
                        return Ok(Some(t));
                    }
                }

                TokenKind::PropertyName => {
                    let name = self.property_name()?;
                    let narrowed = match self.frames.head_mut().set_property_name(&name) {
                        Some(ActiveFilter::IncludeAll) => {
                            self.item_filter = Some(ActiveFilter::IncludeAll);
                            return Ok(Some(token));
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
                            if self.inclusion == Inclusion::IncludeAllAndPath {
                                return Ok(Some(token));
                            }
                        } else {
                            self.skip_next_value()?;
                        }
                        continue;
                    }
                    if self.inclusion != Inclusion::OnlyIncludeAll {
                        let buffer_root = self.frames.head_index();
                        if let Some(t) = self.next_with_buffering(buffer_root)? {
                            return Ok(Some(t));
                        }
                    }
                }

                scalar => {
                    match self.item_filter.clone() {
                        Some(ActiveFilter::IncludeAll) => return Ok(Some(scalar)),
                        Some(f) => {
                            if self.scalar_matches(&f, scalar) && self.verify_allowed_matches() {
                                return Ok(Some(scalar));
                            }
                        }
                        None => {}
                    }
                    // leaves are never auto-included by path inclusion
                }
            }
        }
    }

    /// Dispatch a container start against the item filter
    pub(super) fn enter_container(&mut self, array: bool) -> FilterResult<Entered> {
        let custom = match self.item_filter.clone() {
            Some(ActiveFilter::IncludeAll) => {
                self.push_child(array, Some(ActiveFilter::IncludeAll), true);
                return Ok(Entered::Emit);
            }
            None => {
                self.source.skip_children()?;
                return Ok(Entered::Skipped);
            }
            Some(f) => f,
        };
        let refined = match self.frames.head_mut().check_value(&custom) {
            None => {
                log::trace!("subtree dropped at depth {}", self.frames.depth());
                self.source.skip_children()?;
                return Ok(Entered::Skipped);
            }
            Some(f) => f,
        };
        let resolved = if array {
            refined.filter_start_array()
        } else {
            refined.filter_start_object()
        };
        self.item_filter = resolved.clone();
        match resolved {
            Some(filter @ ActiveFilter::IncludeAll) => {
                self.push_child(array, Some(filter), true);
                Ok(Entered::Emit)
            }
            Some(filter) if self.inclusion == Inclusion::IncludeNonNull => {
                self.push_child(array, Some(filter), true);
                Ok(Entered::Emit)
            }
            undecided => {
                self.push_child(array, undecided, false);
                Ok(Entered::Pending)
            }
        }
    }

    /// Dispatch a container end in live mode
    fn leave_container(&mut self, end: TokenKind) -> FilterResult<Option<TokenKind>> {
        let return_end = self.frames.head().start_handled();
        if self.finish_frame(end) {
            let head = self.frames.head_index();
            return self.next_buffered(head).map(Some);
        }
        self.frames.pop();
        self.item_filter = self.frames.head().filter().cloned();
        Ok(if return_end { Some(end) } else { None })
    }

    /// Run the finish hooks for the head frame and report whether an empty
    /// container should be synthesized via replay
    ///
    /// Synthesis only applies while the frame's start marker is still
    /// suppressed; an already-started container closes through the normal
    /// end-marker path.
    pub(super) fn finish_frame(&mut self, end: TokenKind) -> bool {
        let start_handled = self.frames.head().start_handled();
        let filter = match self.frames.head().filter().cloned() {
            Some(ActiveFilter::Custom(f)) => f,
            _ => return false,
        };
        if end == TokenKind::EndArray {
            let include_empty =
                !start_handled && filter.include_empty_array(self.frames.head().has_current_index());
            filter.filter_finish_array();
            include_empty
        } else {
            let include_empty =
                !start_handled && filter.include_empty_object(self.frames.head().has_current_name());
            filter.filter_finish_object();
            if include_empty {
                // drop the pending name of the last dropped property and
                // report the enclosing frame's name instead
                let parent_name = self
                    .frames
                    .parent_of(self.frames.head_index())
                    .and_then(|p| p.current_name().map(str::to_string));
                self.frames.head_mut().reset_for_empty(parent_name);
                log::trace!("synthesizing empty object at depth {}", self.frames.depth());
            }
            include_empty
        }
    }

    /// Refine the item filter for a scalar and ask it for acceptance
    pub(super) fn scalar_matches(&mut self, filter: &ActiveFilter, kind: TokenKind) -> bool {
        let refined = match self.frames.head_mut().check_value(filter) {
            Some(f) => f,
            None => return false,
        };
        let accepted = match refined {
            ActiveFilter::IncludeAll => true,
            ActiveFilter::Custom(f) => match self.source.scalar() {
                Some(value) => f.include_value(&value),
                None => false,
            },
        };
        accepted && self.scalar_emittable(kind)
    }

    fn scalar_emittable(&self, kind: TokenKind) -> bool {
        self.inclusion != Inclusion::IncludeNonNull || kind != TokenKind::ValueNull
    }

    /// Count a decision against the match budget
    pub(super) fn verify_allowed_matches(&mut self) -> bool {
        if self.match_count == 0 || self.allow_multiple_matches {
            self.match_count += 1;
            return true;
        }
        false
    }

    pub(super) fn push_child(&mut self, array: bool, filter: Option<ActiveFilter>, start_handled: bool) {
        if array {
            self.frames.push_array(filter, start_handled);
        } else {
            self.frames.push_object(filter, start_handled);
        }
        self.stats.note_depth(self.frames.depth());
    }

    pub(super) fn property_name(&mut self) -> FilterResult<String> {
        self.source
            .current_name()
            .map(str::to_string)
            .ok_or_else(|| internal_error("property name missing from upstream source"))
    }

    /// Advance past the property value that was just filtered out
    pub(super) fn skip_next_value(&mut self) -> FilterResult<()> {
        self.source.next_token()?;
        self.source.skip_children()
    }
}
