//! Aggregate bodies, embedded transactions and cosignatures.
//!
//! An aggregate wraps inner transactions that share the outer fee, deadline
//! and signature. Each inner transaction keeps its own signer. Parties other
//! than the outer signer approve by appending cosignatures, which live after
//! the inner-transaction payload and are not covered by the outer signature.

use super::body::TransactionBody;
use super::codec::CodecError;
use crate::config::AGGREGATE_ALIGNMENT;
use crate::crypto::keys::{PublicKey, Signature};
use crate::identity::NetworkType;

/// Number of zero bytes that follow an inner transaction of `size` bytes.
pub fn padding_len(size: usize) -> usize {
    (AGGREGATE_ALIGNMENT - size % AGGREGATE_ALIGNMENT) % AGGREGATE_ALIGNMENT
}

/// `size` rounded up to the aggregate alignment.
pub fn padded_len(size: usize) -> usize {
    size + padding_len(size)
}

// ---------------------------------------------------------------------------
// EmbeddedTransaction
// ---------------------------------------------------------------------------

/// An inner transaction. It has no fee, deadline or signature of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedTransaction {
    pub signer: PublicKey,
    pub network_type: NetworkType,
    pub version: u8,
    pub body: TransactionBody,
}

impl EmbeddedTransaction {
    /// Fails with [`CodecError::NestedAggregate`] when `body` is itself an
    /// aggregate.
    pub fn new(
        signer: PublicKey,
        network_type: NetworkType,
        body: TransactionBody,
    ) -> Result<Self, CodecError> {
        let transaction_type = body.transaction_type();
        if transaction_type.is_aggregate() {
            return Err(CodecError::NestedAggregate { transaction_type });
        }
        Ok(Self {
            signer,
            network_type,
            version: transaction_type.current_version(),
            body,
        })
    }
}

// ---------------------------------------------------------------------------
// Cosignature
// ---------------------------------------------------------------------------

/// A cosigner's signature over the aggregate hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cosignature {
    pub signer: PublicKey,
    pub signature: Signature,
}

// ---------------------------------------------------------------------------
// AggregateBody
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AggregateBody {
    pub transactions: Vec<EmbeddedTransaction>,
    pub cosignatures: Vec<Cosignature>,
}

impl AggregateBody {
    pub fn new(transactions: Vec<EmbeddedTransaction>) -> Self {
        Self {
            transactions,
            cosignatures: Vec::new(),
        }
    }
}
