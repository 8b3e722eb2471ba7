//! The user-supplied predicate contract
//!
//! A [`TokenFilter`] is a tree of decisions paralleling the document
//! structure, but the tree is never materialized: each callback returns the
//! child decision lazily. Returning [`FilterDecision::IncludeAll`]
//! short-circuits every future decision inside that subtree; returning
//! [`FilterDecision::Descend`] means "keep deciding child-by-child with this
//! same filter"; returning [`FilterDecision::Skip`] drops the entire value
//! including its subtree.

use std::fmt;
use std::sync::Arc;

use crate::tokens::ScalarValue;

/// Verdict returned by filter callbacks for a value position
#[derive(Clone, Default)]
pub enum FilterDecision {
    /// Emit the whole subtree without further consultation
    IncludeAll,
    /// Drop the value and everything beneath it
    Skip,
    /// Keep consulting this same filter for nested children
    #[default]
    Descend,
    /// Consult the given filter for nested children
    Delegate(Arc<dyn TokenFilter>),
}

impl fmt::Debug for FilterDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterDecision::IncludeAll => f.write_str("IncludeAll"),
            FilterDecision::Skip => f.write_str("Skip"),
            FilterDecision::Descend => f.write_str("Descend"),
            FilterDecision::Delegate(inner) => write!(f, "Delegate({:?})", inner),
        }
    }
}

/// Policy over whether enclosing path tokens and scalar nulls are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inclusion {
    /// Emit only tokens for which a filter resolved to include-all; suppress
    /// enclosing containers and property names
    OnlyIncludeAll,
    /// When a descendant is included, also emit the enclosing start markers
    /// and property names on the path down to it, in original order
    IncludeAllAndPath,
    /// Like path inclusion, but accepted scalar nulls are never emitted
    IncludeNonNull,
}

/// Predicate tree consulted while filtering a token stream
///
/// Every callback has a permissive default so implementations override only
/// the decisions they care about: structural callbacks keep deciding
/// child-by-child, scalars are accepted, and empty containers are not
/// synthesized.
pub trait TokenFilter: fmt::Debug {
    /// Decide inclusion of the array element at `index`
    fn include_element(&self, _index: usize) -> FilterDecision {
        FilterDecision::Descend
    }

    /// Decide inclusion of the object property named `name`
    fn include_property(&self, _name: &str) -> FilterDecision {
        FilterDecision::Descend
    }

    /// Decide inclusion of the root-level value at `index`
    fn include_root_value(&self, _index: usize) -> FilterDecision {
        FilterDecision::Descend
    }

    /// Decide inclusion of a leaf scalar
    fn include_value(&self, _value: &ScalarValue<'_>) -> bool {
        true
    }

    /// Refine the filter when an object value starts
    fn filter_start_object(&self) -> FilterDecision {
        FilterDecision::Descend
    }

    /// Refine the filter when an array value starts
    fn filter_start_array(&self) -> FilterDecision {
        FilterDecision::Descend
    }

    /// Notification that an object value being filtered has ended
    fn filter_finish_object(&self) {}

    /// Notification that an array value being filtered has ended
    fn filter_finish_array(&self) {}

    /// Whether to synthesize an empty object when nothing inside matched.
    /// `has_name` reports whether any property name was seen in it.
    fn include_empty_object(&self, _has_name: bool) -> bool {
        false
    }

    /// Whether to synthesize an empty array when nothing inside matched.
    /// `has_index` reports whether any element was seen in it.
    fn include_empty_array(&self, _has_index: bool) -> bool {
        false
    }
}
