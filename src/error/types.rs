//! Error types for token filtering operations

use std::error::Error;
use std::fmt;

/// Token filtering error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Upstream cursor read failure
    Read,
    /// Malformed JSON Pointer expression
    InvalidPointer,
    /// Internal invariant violation; indicates a bug, not user error
    Internal,
    /// Operation not supported during a filtered read
    Unsupported,
}

/// Main error type for the filtering cursor and its collaborators
#[derive(Debug, Clone)]
pub struct FilterError {
    pub kind: ErrorKind,
    pub message: String,
}

impl FilterError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: String) -> Self {
        Self { kind, message }
    }

    pub fn read(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Read, msg.into())
    }

    pub fn invalid_pointer(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPointer, msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, msg.into())
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unsupported, msg.into())
    }

    /// Check whether this error reports an internal invariant violation
    #[must_use]
    pub fn is_internal(&self) -> bool {
        self.kind == ErrorKind::Internal
    }
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.kind {
            ErrorKind::Read => "read error",
            ErrorKind::InvalidPointer => "invalid pointer",
            ErrorKind::Internal => "internal error",
            ErrorKind::Unsupported => "unsupported",
        };
        write!(f, "{}: {}", prefix, self.message)
    }
}

impl Error for FilterError {}

/// Result type for token filtering operations
pub type FilterResult<T> = Result<T, FilterError>;
