//! Shadow context frames
//!
//! One [`ContextFrame`] exists per open container in the upstream stream,
//! mirroring the upstream parse tree. A frame records the filter in force
//! for its container, the path component (property name or element index)
//! of the child currently being processed, and the replay state for its
//! suppressed tokens: a start marker not yet emitted downstream and at most
//! one pending property name. Scalars and skipped subtrees are never
//! buffered; the decision to drop them is already final. Memory cost is
//! therefore bounded by depth, not document size.

use crate::filter::ActiveFilter;
use crate::tokens::TokenKind;

/// Kind of container a shadow frame mirrors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// The virtual frame enclosing all root-level values
    Root,
    /// An object container
    Object,
    /// An array container
    Array,
}

/// One frame of the shadow context stack
#[derive(Debug, Clone)]
pub struct ContextFrame {
    kind: FrameKind,
    filter: Option<ActiveFilter>,
    current_name: Option<String>,
    current_index: Option<usize>,
    start_handled: bool,
    need_name: bool,
}

impl ContextFrame {
    /// The root frame; lives for the cursor's lifetime and never replays a
    /// start marker
    #[must_use]
    pub fn root(filter: Option<ActiveFilter>) -> Self {
        Self {
            kind: FrameKind::Root,
            filter,
            current_name: None,
            current_index: None,
            start_handled: true,
            need_name: false,
        }
    }

    /// A frame for an object container
    #[must_use]
    pub fn object(filter: Option<ActiveFilter>, start_handled: bool) -> Self {
        Self {
            kind: FrameKind::Object,
            filter,
            current_name: None,
            current_index: None,
            start_handled,
            need_name: false,
        }
    }

    /// A frame for an array container
    #[must_use]
    pub fn array(filter: Option<ActiveFilter>, start_handled: bool) -> Self {
        Self {
            kind: FrameKind::Array,
            filter,
            current_name: None,
            current_index: None,
            start_handled,
            need_name: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> FrameKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn in_array(&self) -> bool {
        self.kind == FrameKind::Array
    }

    #[inline]
    #[must_use]
    pub fn in_object(&self) -> bool {
        self.kind == FrameKind::Object
    }

    /// The filter in force for this container, if any
    #[must_use]
    pub fn filter(&self) -> Option<&ActiveFilter> {
        self.filter.as_ref()
    }

    /// Whether the start marker of this container was emitted downstream
    #[inline]
    #[must_use]
    pub fn start_handled(&self) -> bool {
        self.start_handled
    }

    /// The property name of the child currently being processed
    #[must_use]
    pub fn current_name(&self) -> Option<&str> {
        self.current_name.as_deref()
    }

    /// The index of the child currently being processed
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Whether any property name was seen in this frame
    #[must_use]
    pub fn has_current_name(&self) -> bool {
        self.current_name.is_some()
    }

    /// Whether any element was seen in this frame
    #[must_use]
    pub fn has_current_index(&self) -> bool {
        self.current_index.is_some()
    }

    /// Record the property name of the upcoming value and mark it pending
    /// for replay; a newly set name replaces any still-pending one.
    /// Returns the filter to consult for the value.
    pub fn set_property_name(&mut self, name: &str) -> Option<ActiveFilter> {
        self.current_name = Some(name.to_string());
        self.need_name = true;
        self.filter.clone()
    }

    /// Refine `filter` for the next child value of this container
    ///
    /// For array and root frames this advances the element index and asks
    /// the filter; for object frames the property-name step has already
    /// narrowed the filter and this is a pass-through.
    pub fn check_value(&mut self, filter: &ActiveFilter) -> Option<ActiveFilter> {
        match self.kind {
            FrameKind::Object => Some(filter.clone()),
            FrameKind::Array => {
                let index = self.advance_index();
                filter.include_element(index)
            }
            FrameKind::Root => {
                let index = self.advance_index();
                filter.include_root_value(index)
            }
        }
    }

    fn advance_index(&mut self) -> usize {
        let index = self.current_index.map_or(0, |i| i + 1);
        self.current_index = Some(index);
        index
    }

    /// Pop the next replay token owed by this frame: the start marker
    /// first, then a pending property name. Returns `None` when drained.
    pub fn next_token_to_read(&mut self) -> Option<TokenKind> {
        if !self.start_handled {
            self.start_handled = true;
            return Some(match self.kind {
                FrameKind::Object => TokenKind::StartObject,
                _ => TokenKind::StartArray,
            });
        }
        if self.need_name && self.kind == FrameKind::Object {
            self.need_name = false;
            return Some(TokenKind::PropertyName);
        }
        None
    }

    /// Drop any pending property name before synthesizing an empty object,
    /// restoring the enclosing frame's name for path reporting. The pending
    /// name belongs to a property whose value was already dropped.
    pub(crate) fn reset_for_empty(&mut self, parent_name: Option<String>) {
        self.current_name = parent_name;
        self.need_name = false;
    }
}
