//! # Id Derivation
//!
//! Namespace and mosaic ids are not assigned by the network; every client
//! derives them locally from public inputs with SHA3-256:
//!
//! ```text
//! namespace id = low64(SHA3-256(parent_id as 8 LE bytes ++ name))  | 1 << 63
//! mosaic id    = low64(SHA3-256(nonce as 4 LE bytes ++ owner key)) & !(1 << 63)
//! ```
//!
//! `low64` reads the first eight digest bytes as a little-endian integer.
//! Root namespaces use parent id 0. A path of depth > 1 is derived level by
//! level, each child hashed against its parent's already-derived id.
//!
//! Every function here is pure: identical inputs yield identical ids on
//! every implementation, which is what lets two clients agree on an id
//! without asking a node.

use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::error::IdError;
use super::ids::{MosaicId, NamespaceId};
use crate::config::{MAX_NAMESPACE_DEPTH, MAX_NAME_LENGTH, NAMESPACE_FLAG};
use crate::crypto::hash::{digest_low_u64, sha3_256_parts};
use crate::crypto::keys::PublicKey;

// ---------------------------------------------------------------------------
// Namespace names
// ---------------------------------------------------------------------------

/// Checks a single namespace name (one path segment).
///
/// Valid names are 1 to 31 bytes of `[a-z0-9_-]`.
pub fn validate_namespace_name(name: &str) -> Result<(), IdError> {
    let invalid = |reason: String| IdError::InvalidName {
        name: name.to_string(),
        reason,
    };

    if name.is_empty() {
        return Err(invalid("name is empty".to_string()));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(invalid(format!(
            "name is {} bytes, maximum is {}",
            name.len(),
            MAX_NAME_LENGTH
        )));
    }
    if let Some(bad) = name
        .chars()
        .find(|c| !matches!(c, 'a'..='z' | '0'..='9' | '_' | '-'))
    {
        return Err(invalid(format!("character {:?} is not allowed", bad)));
    }
    Ok(())
}

/// Derives the id of the namespace `name` under `parent_id`.
///
/// Pass `NamespaceId::new(0)` for a root namespace.
///
/// # Example
///
/// ```
/// use nem_sdk_core::identity::{derive_namespace_id, NamespaceId};
///
/// let id = derive_namespace_id("newnamespace", NamespaceId::new(0)).unwrap();
/// assert_eq!(id.to_hex(), "C053DFAFB8B3E97E");
/// ```
pub fn derive_namespace_id(name: &str, parent_id: NamespaceId) -> Result<NamespaceId, IdError> {
    validate_namespace_name(name)?;
    let digest = sha3_256_parts(&[&parent_id.to_le_bytes(), name.as_bytes()]);
    Ok(NamespaceId::new(digest_low_u64(&digest) | NAMESPACE_FLAG))
}

/// Derives every level of a dotted namespace path, root first.
///
/// `"foo.bar.baz"` yields `[id(foo), id(bar under foo), id(baz under bar)]`.
pub fn derive_namespace_path(path: &str) -> Result<Vec<NamespaceId>, IdError> {
    let segments: Vec<&str> = path.split('.').collect();
    if segments.len() > MAX_NAMESPACE_DEPTH {
        return Err(IdError::InvalidName {
            name: path.to_string(),
            reason: format!(
                "path has {} levels, maximum is {}",
                segments.len(),
                MAX_NAMESPACE_DEPTH
            ),
        });
    }

    let mut ids = Vec::with_capacity(segments.len());
    let mut parent = NamespaceId::new(0);
    for segment in segments {
        parent = derive_namespace_id(segment, parent)?;
        ids.push(parent);
    }
    Ok(ids)
}

// ---------------------------------------------------------------------------
// Mosaic ids
// ---------------------------------------------------------------------------

/// The 4-byte nonce that, together with the owner's key, determines a
/// mosaic id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MosaicNonce([u8; 4]);

impl MosaicNonce {
    pub fn new(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Random nonce from the OS RNG.
    pub fn random() -> Self {
        let mut bytes = [0u8; 4];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Nonce whose little-endian encoding is `value`.
    pub fn from_u32(value: u32) -> Self {
        Self(value.to_le_bytes())
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    pub fn to_u32(self) -> u32 {
        u32::from_le_bytes(self.0)
    }
}

/// Derives the id of the mosaic created by `owner` with `nonce`.
pub fn derive_mosaic_id(nonce: MosaicNonce, owner: &PublicKey) -> MosaicId {
    let digest = sha3_256_parts(&[nonce.as_bytes(), owner.as_bytes()]);
    MosaicId::new(digest_low_u64(&digest) & !NAMESPACE_FLAG)
}
