//! # Signature Primitive
//!
//! The signing pipeline never talks to a curve library directly. It goes
//! through [`SignatureScheme`], so the primitive can be swapped for a
//! hardware key store, a remote signer, or a network-specific Ed25519
//! variant without touching the codec or the hashing rules.
//!
//! [`Ed25519`] is the default implementation, backed by `ed25519-dalek`.
//!
//! ## Reentrancy
//!
//! Implementations must be `Send + Sync` and safe to call concurrently. A
//! scheme backed by a device that cannot handle parallel requests must
//! serialize internally.

use ed25519_dalek::{Signature as DalekSignature, Signer, SigningKey, VerifyingKey};
use thiserror::Error;

use super::keys::{PrivateKey, PublicKey, Signature};

/// Failures raised by a signature primitive.
///
/// The pipeline propagates these untouched; it never inspects or retries.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("signature primitive failed: {0}")]
    Primitive(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// The externally supplied sign/verify capability.
pub trait SignatureScheme: Send + Sync {
    /// Derives the 32-byte public key for `private_key`.
    fn derive_public_key(&self, private_key: &PrivateKey) -> Result<PublicKey, CryptoError>;

    /// Signs `message` with `private_key`, producing 64 bytes.
    fn sign(&self, private_key: &PrivateKey, message: &[u8]) -> Result<Signature, CryptoError>;

    /// Returns `true` if `signature` is valid for `message` under
    /// `public_key`. Never errors; any malformed input is just `false`.
    fn verify(&self, public_key: &PublicKey, message: &[u8], signature: &Signature) -> bool;
}

/// RFC 8032 Ed25519 via `ed25519-dalek`, with strict verification.
///
/// This is the SHA-512 variant. Catapult nodes of this protocol generation
/// expect Ed25519 over SHA3-512, so signatures produced here are not
/// accepted by such a network; plug in a [`SignatureScheme`] for that
/// variant when announcing to one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519;

impl SignatureScheme for Ed25519 {
    fn derive_public_key(&self, private_key: &PrivateKey) -> Result<PublicKey, CryptoError> {
        let signing_key = SigningKey::from_bytes(private_key.as_bytes());
        Ok(PublicKey::from_bytes(signing_key.verifying_key().to_bytes()))
    }

    fn sign(&self, private_key: &PrivateKey, message: &[u8]) -> Result<Signature, CryptoError> {
        let signing_key = SigningKey::from_bytes(private_key.as_bytes());
        let signature = signing_key
            .try_sign(message)
            .map_err(|e| CryptoError::Primitive(Box::new(e)))?;
        Ok(Signature::from_bytes(signature.to_bytes()))
    }

    fn verify(&self, public_key: &PublicKey, message: &[u8], signature: &Signature) -> bool {
        let Ok(verifying_key) = VerifyingKey::from_bytes(public_key.as_bytes()) else {
            return false;
        };
        let dalek_sig = DalekSignature::from_bytes(signature.as_bytes());
        verifying_key.verify_strict(message, &dalek_sig).is_ok()
    }
}
