//! # Cryptographic Primitives
//!
//! Everything security-related the SDK touches flows through here:
//!
//! - **SHA3-256** for id derivation and transaction hashes.
//! - **Ed25519** (by default) for transaction signatures and cosignatures,
//!   reached through the [`SignatureScheme`] seam.
//!
//! Nothing here is hand-rolled. The hash comes from `sha3`, the curve from
//! `ed25519-dalek`.

pub mod hash;
pub mod keys;
pub mod signatures;

pub use hash::{sha3_256, sha3_256_parts};
pub use keys::{KeyError, PrivateKey, PublicKey, Signature};
pub use signatures::{CryptoError, Ed25519, SignatureScheme};
