//! Error constructor functions
//!
//! Convenient factory functions for creating filtering error values with
//! proper classification.

use super::types::FilterError;

/// Upstream cursor read failure; propagated unchanged to the consumer
pub fn read_error(message: impl Into<String>) -> FilterError {
    FilterError::read(message)
}

/// Malformed JSON Pointer expression
pub fn invalid_pointer(message: impl Into<String>) -> FilterError {
    FilterError::invalid_pointer(message)
}

/// Internal invariant violation, such as a broken replay chain or missing
/// buffered tokens
pub fn internal_error(message: impl Into<String>) -> FilterError {
    FilterError::internal(message)
}

/// Operation not supported during a filtered read
pub fn unsupported(message: impl Into<String>) -> FilterError {
    FilterError::unsupported(message)
}
