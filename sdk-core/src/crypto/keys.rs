//! # Key Material
//!
//! Typed wrappers for the three byte strings the signing pipeline moves
//! around: private keys, public keys and signatures.
//!
//! These are plain containers. They do not know which curve produced them;
//! that is the job of a [`SignatureScheme`](super::signatures::SignatureScheme).
//! A `PublicKey` read off the wire may be an all-zero placeholder and must be
//! representable, so construction never validates curve membership.
//!
//! Private key bytes are never printed by `Debug` and never logged.

use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::config::{PRIVATE_KEY_LENGTH, PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH};

/// Errors parsing key material from external representations.
///
/// Deliberately vague about the offending bytes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("invalid hex encoding")]
    InvalidHex,

    #[error("invalid key length: expected {expected} bytes, got {got}")]
    InvalidLength { expected: usize, got: usize },
}

fn decode_fixed<const N: usize>(hex_str: &str) -> Result<[u8; N], KeyError> {
    let bytes = hex::decode(hex_str).map_err(|_| KeyError::InvalidHex)?;
    bytes
        .as_slice()
        .try_into()
        .map_err(|_| KeyError::InvalidLength {
            expected: N,
            got: bytes.len(),
        })
}

// ---------------------------------------------------------------------------
// PrivateKey
// ---------------------------------------------------------------------------

/// A 32-byte private key (the Ed25519 seed for the default scheme).
///
/// Intentionally not `Serialize`/`Deserialize`: exporting key material
/// should be an explicit call to [`PrivateKey::to_bytes`].
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    bytes: [u8; PRIVATE_KEY_LENGTH],
}

impl PrivateKey {
    /// Fresh key from the OS RNG.
    pub fn generate() -> Self {
        let mut bytes = [0u8; PRIVATE_KEY_LENGTH];
        OsRng.fill_bytes(&mut bytes);
        Self { bytes }
    }

    pub fn from_bytes(bytes: [u8; PRIVATE_KEY_LENGTH]) -> Self {
        Self { bytes }
    }

    /// Parses a hex-encoded private key. Useful for test fixtures and devnet
    /// config; production keys belong in a key store.
    pub fn from_hex(hex_str: &str) -> Result<Self, KeyError> {
        Ok(Self {
            bytes: decode_fixed(hex_str)?,
        })
    }

    /// Raw key bytes. Handle with care.
    pub fn to_bytes(&self) -> [u8; PRIVATE_KEY_LENGTH] {
        self.bytes
    }

    pub fn as_bytes(&self) -> &[u8; PRIVATE_KEY_LENGTH] {
        &self.bytes
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey(<redacted>)")
    }
}

// ---------------------------------------------------------------------------
// PublicKey
// ---------------------------------------------------------------------------

/// A 32-byte public key as it appears in transaction headers, embedded
/// transactions, cosignatures and receipts.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PublicKey {
    bytes: [u8; PUBLIC_KEY_LENGTH],
}

impl PublicKey {
    /// The all-zero placeholder written into unsigned payloads.
    pub const ZERO: PublicKey = PublicKey {
        bytes: [0u8; PUBLIC_KEY_LENGTH],
    };

    pub fn from_bytes(bytes: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        Self { bytes }
    }

    pub fn from_hex(hex_str: &str) -> Result<Self, KeyError> {
        Ok(Self {
            bytes: decode_fixed(hex_str)?,
        })
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.bytes
    }

    /// Returns `true` for the unsigned placeholder.
    pub fn is_zero(&self) -> bool {
        self.bytes == [0u8; PUBLIC_KEY_LENGTH]
    }

    /// Uppercase hex, the form REST endpoints use.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.bytes)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", &self.to_hex()[..16])
    }
}

// ---------------------------------------------------------------------------
// Signature
// ---------------------------------------------------------------------------

/// A 64-byte signature.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature {
    bytes: [u8; SIGNATURE_LENGTH],
}

impl Signature {
    /// The all-zero placeholder written into unsigned payloads.
    pub const ZERO: Signature = Signature {
        bytes: [0u8; SIGNATURE_LENGTH],
    };

    pub fn from_bytes(bytes: [u8; SIGNATURE_LENGTH]) -> Self {
        Self { bytes }
    }

    pub fn from_hex(hex_str: &str) -> Result<Self, KeyError> {
        Ok(Self {
            bytes: decode_fixed(hex_str)?,
        })
    }

    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LENGTH] {
        &self.bytes
    }

    pub fn is_zero(&self) -> bool {
        self.bytes == [0u8; SIGNATURE_LENGTH]
    }

    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.bytes)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex_str = self.to_hex();
        write!(f, "Signature({}...{})", &hex_str[..8], &hex_str[120..])
    }
}
