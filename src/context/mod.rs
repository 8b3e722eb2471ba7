//! Shadow context tracking
//!
//! While filtering, the cursor maintains a shadow context tree mirroring
//! the upstream one: one [`ContextFrame`] per open container, held in an
//! explicit [`FrameStack`]. Frames record the filter in force, the current
//! path component, and which suppressed tokens (start marker, pending
//! property name) still owe emission should a descendant later earn
//! inclusion.

mod frame;
mod stack;

pub use frame::{ContextFrame, FrameKind};
pub use stack::FrameStack;
