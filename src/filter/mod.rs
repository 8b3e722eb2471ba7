//! Filtering predicates
//!
//! This module defines the contract between user code and the filtering
//! cursor: the [`TokenFilter`] predicate tree, the per-call
//! [`FilterDecision`] verdicts including the include-all sentinel, the
//! runtime [`ActiveFilter`] handle the cursor threads through its shadow
//! frames, the [`Inclusion`] policy over path emission, and a ready-made
//! [`PointerFilter`] for single-path matching.

mod active;
mod contract;
mod pointer;

pub use active::ActiveFilter;
pub use contract::{FilterDecision, Inclusion, TokenFilter};
pub use pointer::PointerFilter;
