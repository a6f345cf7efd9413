//! Receipt mapping and alias resolution errors.

use thiserror::Error;

use super::types::{ReceiptSource, ReceiptType};

/// Failures turning receipt records into the receipt model.
///
/// Any failure aborts the whole statement being mapped.
#[derive(Debug, Error)]
pub enum ReceiptError {
    #[error("unknown receipt type 0x{code:04X}")]
    UnknownReceiptType { code: u64 },

    #[error("{receipt_type} is not a {shape} receipt")]
    ShapeMismatch {
        receipt_type: ReceiptType,
        shape: &'static str,
    },

    #[error("invalid receipt field {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("malformed receipt json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures of an alias lookup.
///
/// "Never existed" and "not yet bound at that point" are kept apart because
/// callers such as block re-validators treat them differently.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("no resolution entries for alias {alias}")]
    UnresolvedAliasNotFound { alias: String },

    #[error("alias {alias} has no binding at or before {at}")]
    NoApplicableBinding { alias: String, at: ReceiptSource },

    #[error("alias {alias} has more than one entry at {at}")]
    DuplicateSource { alias: String, at: ReceiptSource },
}
