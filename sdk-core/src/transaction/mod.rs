//! # Transaction Module
//!
//! Construction, binary encoding, signing and verification of Catapult
//! transactions.
//!
//! ## Architecture
//!
//! ```text
//! types.rs        — TransactionType, Deadline and small body value types
//! body.rs         — TransactionBody and the per-kind body structs
//! aggregate.rs    — aggregate bodies, embedded transactions, cosignatures
//! builder.rs      — Transaction and the fluent TransactionBuilder
//! codec.rs        — encode / decode against the wire layout
//! signing.rs      — sign, cosign, transaction hash
//! signed.rs       — SignedTransaction and CosignatureSignedTransaction
//! verification.rs — signature and cosignature checks on raw payloads
//! ```
//!
//! ## Transaction Lifecycle
//!
//! 1. **Build** — [`TransactionBuilder`] produces an unsigned [`Transaction`].
//! 2. **Sign** — [`sign`] encodes it and binds a signature to the network's
//!    generation hash, yielding a [`SignedTransaction`].
//! 3. **Cosign** — for aggregates, other parties [`cosign`] the hash.
//! 4. **Announce** — the transport submits [`SignedTransaction::payload_hex`].
//! 5. **Correlate** — listeners match events by [`SignedTransaction::hash`].

pub mod aggregate;
pub mod body;
pub mod builder;
pub mod codec;
mod reader;
pub mod signed;
pub mod signing;
pub mod types;
pub mod verification;

pub use aggregate::{AggregateBody, Cosignature, EmbeddedTransaction};
pub use body::{
    AddressAliasBody, HashLockBody, MosaicAliasBody, MosaicDefinitionBody, MosaicMetadataBody,
    MosaicSupplyChangeBody, NamespaceRegistration, RegisterNamespaceBody, TransactionBody,
    TransferBody,
};
pub use builder::{Transaction, TransactionBuilder};
pub use codec::{decode, encode, CodecError, DecodedTransaction};
pub use signed::{CosignatureSignedTransaction, SignedTransaction};
pub use signing::{
    attach_cosignatures, cosign, sign, sign_with_cosignatories, transaction_hash, SigningError,
};
pub use types::{
    AliasAction, Deadline, Message, Mosaic, MosaicFlags, MosaicSupplyDirection, TransactionType,
};
pub use verification::{
    check_cosignatures, check_signature, verify, verify_cosignature, VerificationError,
};
