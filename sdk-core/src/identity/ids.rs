//! 64-bit entity identifiers.
//!
//! Both id kinds are transparent `u64` newtypes. Equality, hashing and
//! ordering all operate on the raw bit pattern.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::IdError;
use crate::config::NAMESPACE_FLAG;

fn parse_hex_u64(value: &str) -> Result<u64, IdError> {
    u64::from_str_radix(value, 16).map_err(|_| IdError::InvalidHex {
        value: value.to_string(),
    })
}

// ---------------------------------------------------------------------------
// NamespaceId
// ---------------------------------------------------------------------------

/// Identifier of a registered namespace.
///
/// Derive with [`derive_namespace_id`](super::derive_namespace_id); construct
/// from raw values only when reading them off the wire or from REST.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamespaceId(u64);

impl NamespaceId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(self) -> u64 {
        self.0
    }

    /// Two's-complement view of the id. Frequently negative.
    pub fn as_i64(self) -> i64 {
        self.0 as i64
    }

    /// Parses the 16-digit hex form (big-endian digits, as REST prints ids).
    pub fn from_hex(value: &str) -> Result<Self, IdError> {
        parse_hex_u64(value).map(Self)
    }

    pub fn to_hex(self) -> String {
        format!("{:016X}", self.0)
    }

    pub fn to_le_bytes(self) -> [u8; 8] {
        self.0.to_le_bytes()
    }
}

impl fmt::Display for NamespaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for NamespaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NamespaceId({})", self.to_hex())
    }
}

// ---------------------------------------------------------------------------
// MosaicId
// ---------------------------------------------------------------------------

/// Identifier of a mosaic (token) definition.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MosaicId(u64);

impl MosaicId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(self) -> u64 {
        self.0
    }

    pub fn as_i64(self) -> i64 {
        self.0 as i64
    }

    pub fn from_hex(value: &str) -> Result<Self, IdError> {
        parse_hex_u64(value).map(Self)
    }

    pub fn to_hex(self) -> String {
        format!("{:016X}", self.0)
    }

    pub fn to_le_bytes(self) -> [u8; 8] {
        self.0.to_le_bytes()
    }
}

impl fmt::Display for MosaicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for MosaicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MosaicId({})", self.to_hex())
    }
}

// ---------------------------------------------------------------------------
// UnresolvedMosaicId
// ---------------------------------------------------------------------------

/// A mosaic reference as it appears inside a transaction body: either the
/// concrete id or a namespace aliasing it.
///
/// Holds the raw wire value. Which of the two it is gets decided by the
/// namespace flag when asked, so any value read or built survives a
/// re-encode bit for bit.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnresolvedMosaicId(u64);

impl UnresolvedMosaicId {
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn from_hex(value: &str) -> Result<Self, IdError> {
        parse_hex_u64(value).map(Self)
    }

    /// The raw 64-bit wire value.
    pub fn raw(self) -> u64 {
        self.0
    }

    pub fn to_le_bytes(self) -> [u8; 8] {
        self.0.to_le_bytes()
    }

    pub fn is_alias(self) -> bool {
        self.0 & NAMESPACE_FLAG != 0
    }

    /// The aliasing namespace, if the namespace flag is set.
    pub fn alias(self) -> Option<NamespaceId> {
        self.is_alias().then_some(NamespaceId(self.0))
    }

    /// The concrete mosaic id, if the namespace flag is clear.
    pub fn mosaic_id(self) -> Option<MosaicId> {
        (!self.is_alias()).then_some(MosaicId(self.0))
    }
}

impl From<MosaicId> for UnresolvedMosaicId {
    fn from(id: MosaicId) -> Self {
        Self(id.0)
    }
}

impl From<NamespaceId> for UnresolvedMosaicId {
    fn from(id: NamespaceId) -> Self {
        Self(id.0)
    }
}

impl fmt::Display for UnresolvedMosaicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016X}", self.0)
    }
}

impl fmt::Debug for UnresolvedMosaicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_alias() { "Alias" } else { "Mosaic" };
        write!(f, "UnresolvedMosaicId::{}({:016X})", kind, self.0)
    }
}
