//! Error handling for token filtering
//!
//! Three error kinds flow out of the cursor: upstream read failures, which
//! propagate unchanged; internal invariant violations, which indicate bugs
//! in the filtering machinery rather than user error; and misuse of
//! operations that cannot be supported during a filtered read. No error is
//! retried and none is hidden.

mod constructors;
mod types;

pub use constructors::{internal_error, invalid_pointer, read_error, unsupported};
pub use types::{ErrorKind, FilterError, FilterResult};

impl From<serde_json::Error> for FilterError {
    fn from(err: serde_json::Error) -> Self {
        FilterError::read(err.to_string())
    }
}
