//! Signature verification for signed payloads.
//!
//! [`verify`] answers a yes/no question and never fails: a payload that is
//! too short, inconsistently sized, badly framed or carrying a bad signature
//! is simply not valid. [`check_signature`] gives the reason when the caller
//! wants it.
//!
//! Only the header and the aggregate payload size are read. The body is not
//! decoded.

use thiserror::Error;
use tracing::debug;

use super::aggregate::Cosignature;
use super::codec::CodecError;
use super::signing::{signed_region, signing_input, transaction_hash};
use crate::config::{
    COSIGNATURE_SIZE, HASH_LENGTH, PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH, SIGNATURE_OFFSET,
    SIGNED_REGION_OFFSET, SIGNER_OFFSET, SIZE_FIELD_LENGTH,
};
use crate::crypto::keys::{PublicKey, Signature};
use crate::crypto::signatures::SignatureScheme;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VerificationError {
    #[error("size field says {declared} bytes, payload has {actual}")]
    SizeMismatch { declared: usize, actual: usize },

    #[error(transparent)]
    Framing(#[from] CodecError),

    #[error("signature does not verify against signer {signer}")]
    InvalidSignature { signer: PublicKey },

    #[error("cosignature {index} does not verify against signer {signer}")]
    InvalidCosignature { index: usize, signer: PublicKey },
}

// ---------------------------------------------------------------------------
// Verification
// ---------------------------------------------------------------------------

/// `true` if `payload` carries a valid signature for the network identified
/// by `generation_hash`.
pub fn verify<S: SignatureScheme + ?Sized>(
    payload: &[u8],
    generation_hash: &[u8; HASH_LENGTH],
    scheme: &S,
) -> bool {
    match check_signature(payload, generation_hash, scheme) {
        Ok(()) => true,
        Err(err) => {
            debug!(len = payload.len(), error = %err, "signature verification failed");
            false
        }
    }
}

/// Like [`verify`], but reports why verification failed.
pub fn check_signature<S: SignatureScheme + ?Sized>(
    payload: &[u8],
    generation_hash: &[u8; HASH_LENGTH],
    scheme: &S,
) -> Result<(), VerificationError> {
    check_size(payload)?;
    let input = signing_input(payload, generation_hash)?;

    let (signer, signature) = header_signing_material(payload);
    if scheme.verify(&signer, &input, &signature) {
        Ok(())
    } else {
        Err(VerificationError::InvalidSignature { signer })
    }
}

/// `true` if `cosignature` is a valid signature over `aggregate_hash`.
pub fn verify_cosignature<S: SignatureScheme + ?Sized>(
    cosignature: &Cosignature,
    aggregate_hash: &[u8; HASH_LENGTH],
    scheme: &S,
) -> bool {
    scheme.verify(&cosignature.signer, aggregate_hash, &cosignature.signature)
}

/// Checks the outer signature and then every cosignature appended to an
/// aggregate payload.
pub fn check_cosignatures<S: SignatureScheme + ?Sized>(
    payload: &[u8],
    generation_hash: &[u8; HASH_LENGTH],
    scheme: &S,
) -> Result<(), VerificationError> {
    check_signature(payload, generation_hash, scheme)?;
    let hash = transaction_hash(payload, generation_hash)?;

    // The signed region ends where the cosignatures begin.
    let region_end = SIGNED_REGION_OFFSET + signed_region(payload)?.len();
    let tail = &payload[region_end..];
    if tail.len() % COSIGNATURE_SIZE != 0 {
        return Err(CodecError::malformed(format!(
            "cosignature section of {} bytes is not a multiple of {}",
            tail.len(),
            COSIGNATURE_SIZE
        ))
        .into());
    }

    for (index, entry) in tail.chunks_exact(COSIGNATURE_SIZE).enumerate() {
        let mut signer = [0u8; PUBLIC_KEY_LENGTH];
        signer.copy_from_slice(&entry[..PUBLIC_KEY_LENGTH]);
        let mut signature = [0u8; SIGNATURE_LENGTH];
        signature.copy_from_slice(&entry[PUBLIC_KEY_LENGTH..]);
        let cosignature = Cosignature {
            signer: PublicKey::from_bytes(signer),
            signature: Signature::from_bytes(signature),
        };
        if !verify_cosignature(&cosignature, &hash, scheme) {
            return Err(VerificationError::InvalidCosignature {
                index,
                signer: cosignature.signer,
            });
        }
    }
    Ok(())
}

fn check_size(payload: &[u8]) -> Result<(), VerificationError> {
    let Some(size_bytes) = payload.get(..SIZE_FIELD_LENGTH) else {
        return Err(CodecError::malformed("payload has no size field").into());
    };
    let mut size = [0u8; SIZE_FIELD_LENGTH];
    size.copy_from_slice(size_bytes);
    let declared = u32::from_le_bytes(size) as usize;
    if declared != payload.len() {
        return Err(VerificationError::SizeMismatch {
            declared,
            actual: payload.len(),
        });
    }
    Ok(())
}

/// Callers must have checked the payload covers the header.
fn header_signing_material(payload: &[u8]) -> (PublicKey, Signature) {
    let mut signature = [0u8; SIGNATURE_LENGTH];
    signature.copy_from_slice(&payload[SIGNATURE_OFFSET..SIGNER_OFFSET]);
    let mut signer = [0u8; PUBLIC_KEY_LENGTH];
    signer.copy_from_slice(&payload[SIGNER_OFFSET..SIGNED_REGION_OFFSET]);
    (PublicKey::from_bytes(signer), Signature::from_bytes(signature))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::keys::PrivateKey;
    use crate::crypto::signatures::Ed25519;
    use crate::identity::{MosaicId, NamespaceId, NetworkType};
    use crate::transaction::builder::{Transaction, TransactionBuilder};
    use crate::transaction::signing::{cosign, sign, sign_with_cosignatories};
    use crate::transaction::types::{Deadline, Message, Mosaic};

    const GEN_HASH: [u8; 32] = [0x33; 32];

    fn key(byte: u8) -> PrivateKey {
        PrivateKey::from_bytes([byte; 32])
    }

    fn builder() -> TransactionBuilder {
        TransactionBuilder::new(NetworkType::MijinTest).deadline(Deadline::from_network_time(1))
    }

    fn namespace_tx() -> Transaction {
        builder().register_root_namespace("newnamespace", 10_000).unwrap()
    }

    fn aggregate_tx() -> Transaction {
        let signer = Ed25519.derive_public_key(&key(1)).unwrap();
        let inner = builder()
            .transfer(
                NamespaceId::new(0x8000_0000_0000_0001),
                vec![Mosaic::new(MosaicId::new(1), 1)],
                Message::plain("x"),
            )
            .to_aggregate(signer)
            .unwrap();
        builder().aggregate_complete(vec![inner])
    }

    #[test]
    fn valid_signature_verifies() {
        let signed = sign(&namespace_tx(), &key(1), &GEN_HASH, &Ed25519).unwrap();
        assert!(verify(signed.payload(), &GEN_HASH, &Ed25519));
    }

    #[test]
    fn other_generation_hash_fails() {
        let signed = sign(&namespace_tx(), &key(1), &GEN_HASH, &Ed25519).unwrap();
        assert!(!verify(signed.payload(), &[0x44; 32], &Ed25519));
    }

    #[test]
    fn any_flipped_byte_in_signed_region_fails() {
        let signed = sign(&namespace_tx(), &key(1), &GEN_HASH, &Ed25519).unwrap();
        for i in 100..signed.payload().len() {
            let mut tampered = signed.payload().to_vec();
            tampered[i] ^= 0x01;
            assert!(!verify(&tampered, &GEN_HASH, &Ed25519), "byte {} not covered", i);
        }
    }

    #[test]
    fn flipped_signature_or_signer_fails() {
        let signed = sign(&namespace_tx(), &key(1), &GEN_HASH, &Ed25519).unwrap();
        for i in [4, 67, 68, 99] {
            let mut tampered = signed.payload().to_vec();
            tampered[i] ^= 0x80;
            assert!(!verify(&tampered, &GEN_HASH, &Ed25519));
        }
    }

    #[test]
    fn unsigned_payload_fails() {
        let payload = crate::transaction::codec::encode(&namespace_tx()).unwrap();
        assert!(!verify(&payload, &GEN_HASH, &Ed25519));
    }

    #[test]
    fn short_and_missized_payloads_fail() {
        assert!(!verify(&[], &GEN_HASH, &Ed25519));
        assert!(!verify(&[0u8; 50], &GEN_HASH, &Ed25519));

        let signed = sign(&namespace_tx(), &key(1), &GEN_HASH, &Ed25519).unwrap();
        let mut extended = signed.payload().to_vec();
        extended.push(0);
        match check_signature(&extended, &GEN_HASH, &Ed25519) {
            Err(VerificationError::SizeMismatch { declared, actual }) => {
                assert_eq!(declared + 1, actual)
            }
            other => panic!("expected SizeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn invalid_signature_reports_signer() {
        let signed = sign(&namespace_tx(), &key(1), &GEN_HASH, &Ed25519).unwrap();
        match check_signature(signed.payload(), &[0u8; 32], &Ed25519) {
            Err(VerificationError::InvalidSignature { signer }) => {
                assert_eq!(&signer, signed.signer())
            }
            other => panic!("expected InvalidSignature, got {:?}", other),
        }
    }

    #[test]
    fn aggregate_with_cosignatures_verifies() {
        let signed =
            sign_with_cosignatories(&aggregate_tx(), &key(1), &[key(2)], &GEN_HASH, &Ed25519)
                .unwrap();
        assert!(verify(signed.payload(), &GEN_HASH, &Ed25519));
        assert!(check_cosignatures(signed.payload(), &GEN_HASH, &Ed25519).is_ok());
    }

    #[test]
    fn tampered_cosignature_detected() {
        let signed =
            sign_with_cosignatories(&aggregate_tx(), &key(1), &[key(2)], &GEN_HASH, &Ed25519)
                .unwrap();
        let mut payload = signed.payload().to_vec();
        let last = payload.len() - 1;
        payload[last] ^= 0x01;
        // outer signature is unaffected by the cosignature section
        assert!(verify(&payload, &GEN_HASH, &Ed25519));
        match check_cosignatures(&payload, &GEN_HASH, &Ed25519) {
            Err(VerificationError::InvalidCosignature { index: 0, .. }) => {}
            other => panic!("expected InvalidCosignature, got {:?}", other),
        }
    }

    #[test]
    fn cosignature_verification() {
        let hash = [0x77; 32];
        let cosig: Cosignature = cosign(&hash, &key(5), &Ed25519).unwrap().into();
        assert!(verify_cosignature(&cosig, &hash, &Ed25519));
        assert!(!verify_cosignature(&cosig, &[0x78; 32], &Ed25519));
    }
}
