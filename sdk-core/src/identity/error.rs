//! Error types for identifier derivation and parsing.

use thiserror::Error;

/// Errors raised while deriving or parsing identifiers.
///
/// All of these are caller-input errors. None are retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// A namespace name failed validation.
    #[error("invalid namespace name '{name}': {reason}")]
    InvalidName {
        /// The rejected name (or full path).
        name: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A hex-encoded id or address could not be parsed.
    #[error("invalid hex value '{value}'")]
    InvalidHex {
        /// The rejected input.
        value: String,
    },

    /// A decoded address has the wrong number of bytes.
    #[error("invalid address length: expected {expected} bytes, got {got}")]
    InvalidAddressLength {
        /// Expected number of bytes.
        expected: usize,
        /// Actual number of bytes.
        got: usize,
    },
}
