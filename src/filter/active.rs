//! Runtime filter handles
//!
//! [`ActiveFilter`] is the value that occupies the nullable filter slots of
//! the cursor and its shadow frames: either the distinguished include-all
//! sentinel or a user filter. The sentinel is a dedicated variant, so it is
//! always distinguishable from a user filter that happens to accept
//! everything. Slots where the filter may be absent altogether (the value
//! was dropped) use `Option<ActiveFilter>`.

use std::sync::Arc;

use super::contract::{FilterDecision, TokenFilter};
use crate::tokens::ScalarValue;

/// Filter currently in force for a value position
#[derive(Debug, Clone)]
pub enum ActiveFilter {
    /// Emit everything in this subtree without further consultation
    IncludeAll,
    /// Consult the wrapped user filter
    Custom(Arc<dyn TokenFilter>),
}

impl ActiveFilter {
    /// Wrap a user filter
    pub fn custom(filter: impl TokenFilter + 'static) -> Self {
        ActiveFilter::Custom(Arc::new(filter))
    }

    /// Check whether this handle is the include-all sentinel
    #[inline]
    #[must_use]
    pub fn is_include_all(&self) -> bool {
        matches!(self, ActiveFilter::IncludeAll)
    }

    /// Resolve a callback decision against the filter that produced it
    fn resolve(current: &Arc<dyn TokenFilter>, decision: FilterDecision) -> Option<ActiveFilter> {
        match decision {
            FilterDecision::IncludeAll => Some(ActiveFilter::IncludeAll),
            FilterDecision::Skip => None,
            FilterDecision::Descend => Some(ActiveFilter::Custom(Arc::clone(current))),
            FilterDecision::Delegate(next) => Some(ActiveFilter::Custom(next)),
        }
    }

    /// Narrow this filter for the array element at `index`
    pub fn include_element(&self, index: usize) -> Option<ActiveFilter> {
        match self {
            ActiveFilter::IncludeAll => Some(ActiveFilter::IncludeAll),
            ActiveFilter::Custom(f) => Self::resolve(f, f.include_element(index)),
        }
    }

    /// Narrow this filter for the object property named `name`
    pub fn include_property(&self, name: &str) -> Option<ActiveFilter> {
        match self {
            ActiveFilter::IncludeAll => Some(ActiveFilter::IncludeAll),
            ActiveFilter::Custom(f) => Self::resolve(f, f.include_property(name)),
        }
    }

    /// Narrow this filter for the root-level value at `index`
    pub fn include_root_value(&self, index: usize) -> Option<ActiveFilter> {
        match self {
            ActiveFilter::IncludeAll => Some(ActiveFilter::IncludeAll),
            ActiveFilter::Custom(f) => Self::resolve(f, f.include_root_value(index)),
        }
    }

    /// Refine this filter at the start of an object value
    pub fn filter_start_object(&self) -> Option<ActiveFilter> {
        match self {
            ActiveFilter::IncludeAll => Some(ActiveFilter::IncludeAll),
            ActiveFilter::Custom(f) => Self::resolve(f, f.filter_start_object()),
        }
    }

    /// Refine this filter at the start of an array value
    pub fn filter_start_array(&self) -> Option<ActiveFilter> {
        match self {
            ActiveFilter::IncludeAll => Some(ActiveFilter::IncludeAll),
            ActiveFilter::Custom(f) => Self::resolve(f, f.filter_start_array()),
        }
    }

    /// Ask this filter to accept a leaf scalar
    pub fn include_value(&self, value: &ScalarValue<'_>) -> bool {
        match self {
            ActiveFilter::IncludeAll => true,
            ActiveFilter::Custom(f) => f.include_value(value),
        }
    }
}
