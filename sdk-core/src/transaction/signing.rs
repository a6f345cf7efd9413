//! # Signing Pipeline
//!
//! Signing is a separate step from building because the key may not be at
//! hand when the transaction is assembled (hardware wallet, remote signer).
//!
//! ```text
//! raw            = encode(tx)
//! signed region  = raw[100..end]
//! signing input  = generation_hash ++ signed region
//! hash           = SHA3-256(generation_hash ++ signature ++ signer ++ signed region)
//! ```
//!
//! `end` is the end of the payload, except for aggregates where it stops
//! before the cosignature section. Cosignatures can therefore be appended
//! after signing without changing the signature or the hash.
//!
//! The generation hash binds every signature and hash to one network, so a
//! signature made for one network never verifies on another.

use thiserror::Error;
use tracing::debug;

use super::aggregate::Cosignature;
use super::builder::Transaction;
use super::codec::{encode, CodecError};
use super::signed::{CosignatureSignedTransaction, SignedTransaction};
use super::types::TransactionType;
use crate::config::{
    HASH_LENGTH, SIGNATURE_OFFSET, SIGNED_REGION_OFFSET, SIGNER_OFFSET, SIZE_FIELD_LENGTH,
    TRANSACTION_HEADER_SIZE, TYPE_OFFSET,
};
use crate::crypto::hash::sha3_256_parts;
use crate::crypto::keys::PrivateKey;
use crate::crypto::signatures::{CryptoError, SignatureScheme};

#[derive(Debug, Error)]
pub enum SigningError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error("{transaction_type} is not an aggregate and cannot carry cosignatures")]
    NotAggregate { transaction_type: TransactionType },
}

// ---------------------------------------------------------------------------
// Signed region & hash
// ---------------------------------------------------------------------------

/// The bytes covered by the signature and the hash.
///
/// Only the header is inspected. For aggregates the region ends after the
/// inner-transaction payload.
pub(crate) fn signed_region(payload: &[u8]) -> Result<&[u8], CodecError> {
    if payload.len() < TRANSACTION_HEADER_SIZE {
        return Err(CodecError::malformed(format!(
            "payload of {} bytes is shorter than the {}-byte header",
            payload.len(),
            TRANSACTION_HEADER_SIZE
        )));
    }

    let code = u16::from_le_bytes([payload[TYPE_OFFSET], payload[TYPE_OFFSET + 1]]);
    let end = match TransactionType::from_code(code) {
        Some(tx_type) if tx_type.is_aggregate() => {
            let at = TRANSACTION_HEADER_SIZE;
            let size_bytes = payload
                .get(at..at + SIZE_FIELD_LENGTH)
                .ok_or_else(|| CodecError::malformed("aggregate payload size missing"))?;
            let mut size = [0u8; SIZE_FIELD_LENGTH];
            size.copy_from_slice(size_bytes);
            at + SIZE_FIELD_LENGTH + u32::from_le_bytes(size) as usize
        }
        _ => payload.len(),
    };

    payload
        .get(SIGNED_REGION_OFFSET..end)
        .ok_or_else(|| CodecError::malformed("aggregate payload size runs past the payload"))
}

/// Recomputes the hash of an already signed payload.
///
/// Listeners use this to correlate confirmation events with payloads they
/// did not build themselves.
pub fn transaction_hash(
    payload: &[u8],
    generation_hash: &[u8; HASH_LENGTH],
) -> Result<[u8; HASH_LENGTH], CodecError> {
    let region = signed_region(payload)?;
    Ok(sha3_256_parts(&[
        generation_hash,
        &payload[SIGNATURE_OFFSET..SIGNER_OFFSET],
        &payload[SIGNER_OFFSET..SIGNED_REGION_OFFSET],
        region,
    ]))
}

pub(crate) fn signing_input(
    payload: &[u8],
    generation_hash: &[u8; HASH_LENGTH],
) -> Result<Vec<u8>, CodecError> {
    let region = signed_region(payload)?;
    let mut input = Vec::with_capacity(HASH_LENGTH + region.len());
    input.extend_from_slice(generation_hash);
    input.extend_from_slice(region);
    Ok(input)
}

// ---------------------------------------------------------------------------
// Signing
// ---------------------------------------------------------------------------

/// Signs `tx` for the network identified by `generation_hash`.
///
/// # Example
///
/// ```
/// use nem_sdk_core::crypto::{Ed25519, PrivateKey};
/// use nem_sdk_core::identity::NetworkType;
/// use nem_sdk_core::transaction::{sign, verify, TransactionBuilder};
///
/// let key = PrivateKey::generate();
/// let generation_hash = [7u8; 32];
/// let tx = TransactionBuilder::new(NetworkType::MijinTest)
///     .register_root_namespace("newnamespace", 10_000)
///     .unwrap();
///
/// let signed = sign(&tx, &key, &generation_hash, &Ed25519).unwrap();
/// assert!(verify(signed.payload(), &generation_hash, &Ed25519));
/// ```
pub fn sign<S: SignatureScheme + ?Sized>(
    tx: &Transaction,
    private_key: &PrivateKey,
    generation_hash: &[u8; HASH_LENGTH],
    scheme: &S,
) -> Result<SignedTransaction, SigningError> {
    let mut payload = encode(tx)?;
    let input = signing_input(&payload, generation_hash)?;

    let signature = scheme.sign(private_key, &input)?;
    let signer = scheme.derive_public_key(private_key)?;
    payload[SIGNATURE_OFFSET..SIGNER_OFFSET].copy_from_slice(signature.as_bytes());
    payload[SIGNER_OFFSET..SIGNED_REGION_OFFSET].copy_from_slice(signer.as_bytes());

    let hash = transaction_hash(&payload, generation_hash)?;
    debug!(
        tx_type = %tx.transaction_type(),
        hash = %hex::encode_upper(hash),
        size = payload.len(),
        "signed transaction"
    );

    Ok(SignedTransaction::new(
        payload,
        hash,
        tx.transaction_type(),
        tx.network_type,
        signer,
    ))
}

/// Cosigns the aggregate with hash `aggregate_hash`.
///
/// Only the 32-byte hash is signed. It already commits to the generation
/// hash, so no prefix is added.
pub fn cosign<S: SignatureScheme + ?Sized>(
    aggregate_hash: &[u8; HASH_LENGTH],
    private_key: &PrivateKey,
    scheme: &S,
) -> Result<CosignatureSignedTransaction, SigningError> {
    let signature = scheme.sign(private_key, aggregate_hash)?;
    let signer = scheme.derive_public_key(private_key)?;
    debug!(parent = %hex::encode_upper(aggregate_hash), %signer, "cosigned aggregate");
    Ok(CosignatureSignedTransaction {
        parent_hash: *aggregate_hash,
        signature,
        signer,
    })
}

/// Appends cosignatures to a signed aggregate and fixes up its size field.
///
/// The hash does not change.
pub fn attach_cosignatures(
    signed: &SignedTransaction,
    cosignatures: &[Cosignature],
) -> Result<SignedTransaction, SigningError> {
    let transaction_type = signed.transaction_type();
    if !transaction_type.is_aggregate() {
        return Err(SigningError::NotAggregate { transaction_type });
    }

    let mut payload = signed.payload().to_vec();
    for cosignature in cosignatures {
        payload.extend_from_slice(cosignature.signer.as_bytes());
        payload.extend_from_slice(cosignature.signature.as_bytes());
    }
    let size = u32::try_from(payload.len()).map_err(|_| CodecError::FieldTooLarge {
        field: "transaction",
        len: payload.len(),
        max: u32::MAX as usize,
    })?;
    payload[..SIZE_FIELD_LENGTH].copy_from_slice(&size.to_le_bytes());

    Ok(SignedTransaction::new(
        payload,
        *signed.hash(),
        transaction_type,
        signed.network_type(),
        *signed.signer(),
    ))
}

/// Signs an aggregate with `initiator` and collects a cosignature from every
/// key in `cosigners`, in order.
pub fn sign_with_cosignatories<S: SignatureScheme + ?Sized>(
    tx: &Transaction,
    initiator: &PrivateKey,
    cosigners: &[PrivateKey],
    generation_hash: &[u8; HASH_LENGTH],
    scheme: &S,
) -> Result<SignedTransaction, SigningError> {
    let transaction_type = tx.transaction_type();
    if !transaction_type.is_aggregate() {
        return Err(SigningError::NotAggregate { transaction_type });
    }

    let signed = sign(tx, initiator, generation_hash, scheme)?;
    let cosignatures = cosigners
        .iter()
        .map(|key| cosign(signed.hash(), key, scheme).map(Cosignature::from))
        .collect::<Result<Vec<_>, _>>()?;
    attach_cosignatures(&signed, &cosignatures)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
