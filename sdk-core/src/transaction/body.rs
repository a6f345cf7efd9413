//! Type-specific transaction bodies.
//!
//! [`TransactionBody`] is a closed enum: adding a transaction kind means
//! adding a variant here and an arm in the codec, and the compiler points at
//! every place that has to change.

use serde::{Deserialize, Serialize};

use super::aggregate::AggregateBody;
use super::types::{
    AliasAction, Message, Mosaic, MosaicFlags, MosaicSupplyDirection, TransactionType,
};
use crate::config::MAX_NAMESPACE_DEPTH;
use crate::crypto::keys::PublicKey;
use crate::identity::{
    derive_mosaic_id, derive_namespace_id, derive_namespace_path, Address, IdError, MosaicId,
    MosaicNonce, NamespaceId, UnresolvedAddress, UnresolvedMosaicId,
};

// ---------------------------------------------------------------------------
// TransactionBody
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionBody {
    Transfer(TransferBody),
    RegisterNamespace(RegisterNamespaceBody),
    AddressAlias(AddressAliasBody),
    MosaicAlias(MosaicAliasBody),
    MosaicDefinition(MosaicDefinitionBody),
    MosaicSupplyChange(MosaicSupplyChangeBody),
    HashLock(HashLockBody),
    MosaicMetadata(MosaicMetadataBody),
    AggregateComplete(AggregateBody),
    AggregateBonded(AggregateBody),
}

impl TransactionBody {
    pub fn transaction_type(&self) -> TransactionType {
        match self {
            Self::Transfer(_) => TransactionType::Transfer,
            Self::RegisterNamespace(_) => TransactionType::RegisterNamespace,
            Self::AddressAlias(_) => TransactionType::AddressAlias,
            Self::MosaicAlias(_) => TransactionType::MosaicAlias,
            Self::MosaicDefinition(_) => TransactionType::MosaicDefinition,
            Self::MosaicSupplyChange(_) => TransactionType::MosaicSupplyChange,
            Self::HashLock(_) => TransactionType::HashLock,
            Self::MosaicMetadata(_) => TransactionType::MosaicMetadata,
            Self::AggregateComplete(_) => TransactionType::AggregateComplete,
            Self::AggregateBonded(_) => TransactionType::AggregateBonded,
        }
    }

    pub fn as_aggregate(&self) -> Option<&AggregateBody> {
        match self {
            Self::AggregateComplete(body) | Self::AggregateBonded(body) => Some(body),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Namespaces
// ---------------------------------------------------------------------------

/// Root namespaces rent for a duration; sub-namespaces inherit it from their
/// parent and carry the parent id instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamespaceRegistration {
    Root { duration: u64 },
    Sub { parent_id: NamespaceId },
}

impl NamespaceRegistration {
    pub fn tag(self) -> u8 {
        match self {
            Self::Root { .. } => 0,
            Self::Sub { .. } => 1,
        }
    }

    /// Parent used for id derivation: 0 for roots.
    pub fn parent_id(self) -> NamespaceId {
        match self {
            Self::Root { .. } => NamespaceId::new(0),
            Self::Sub { parent_id } => parent_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterNamespaceBody {
    pub registration: NamespaceRegistration,
    pub namespace_id: NamespaceId,
    pub name: String,
}

impl RegisterNamespaceBody {
    pub fn root(name: &str, duration: u64) -> Result<Self, IdError> {
        Self::derive(name, NamespaceRegistration::Root { duration })
    }

    pub fn sub(name: &str, parent_id: NamespaceId) -> Result<Self, IdError> {
        Self::derive(name, NamespaceRegistration::Sub { parent_id })
    }

    /// Sub-namespace under a dotted parent path such as `"foo.bar"`.
    ///
    /// The parent may have at most `MAX_NAMESPACE_DEPTH - 1` levels, so the
    /// registered namespace stays within the depth limit.
    pub fn sub_of(name: &str, parent_path: &str) -> Result<Self, IdError> {
        let depth = parent_path.split('.').count();
        if depth >= MAX_NAMESPACE_DEPTH {
            return Err(IdError::InvalidName {
                name: format!("{}.{}", parent_path, name),
                reason: format!(
                    "path has {} levels, maximum is {}",
                    depth + 1,
                    MAX_NAMESPACE_DEPTH
                ),
            });
        }
        let parent_id = derive_namespace_path(parent_path)?
            .last()
            .copied()
            .ok_or_else(|| IdError::InvalidName {
                name: parent_path.to_string(),
                reason: "parent path is empty".to_string(),
            })?;
        Self::sub(name, parent_id)
    }

    fn derive(name: &str, registration: NamespaceRegistration) -> Result<Self, IdError> {
        let namespace_id = derive_namespace_id(name, registration.parent_id())?;
        Ok(Self {
            registration,
            namespace_id,
            name: name.to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressAliasBody {
    pub action: AliasAction,
    pub namespace_id: NamespaceId,
    pub address: Address,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MosaicAliasBody {
    pub action: AliasAction,
    pub namespace_id: NamespaceId,
    pub mosaic_id: MosaicId,
}

// ---------------------------------------------------------------------------
// Mosaics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MosaicDefinitionBody {
    pub nonce: MosaicNonce,
    pub mosaic_id: MosaicId,
    pub flags: MosaicFlags,
    pub divisibility: u8,
    pub duration: u64,
}

impl MosaicDefinitionBody {
    /// The mosaic id is derived from `nonce` and the owner's key.
    pub fn new(
        nonce: MosaicNonce,
        owner: &PublicKey,
        flags: MosaicFlags,
        divisibility: u8,
        duration: u64,
    ) -> Self {
        Self {
            nonce,
            mosaic_id: derive_mosaic_id(nonce, owner),
            flags,
            divisibility,
            duration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MosaicSupplyChangeBody {
    pub mosaic_id: UnresolvedMosaicId,
    pub direction: MosaicSupplyDirection,
    pub delta: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MosaicMetadataBody {
    pub target_public_key: PublicKey,
    pub scoped_metadata_key: u64,
    pub target_mosaic_id: UnresolvedMosaicId,
    pub value_size_delta: i16,
    pub value: Vec<u8>,
}

// ---------------------------------------------------------------------------
// Transfers & locks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferBody {
    pub recipient: UnresolvedAddress,
    pub mosaics: Vec<Mosaic>,
    pub message: Message,
}

/// Locks funds until the aggregate with `hash` is confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashLockBody {
    pub mosaic: Mosaic,
    pub duration: u64,
    pub hash: [u8; 32],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_body_derives_id() {
        let body = RegisterNamespaceBody::root("newnamespace", 10_000).unwrap();
        assert_eq!(body.namespace_id.to_hex(), "C053DFAFB8B3E97E");
        assert_eq!(body.registration.tag(), 0);
    }

    #[test]
    fn sub_body_derives_under_parent() {
        let parent = NamespaceId::new(4_635_294_387_305_441_662);
        let body = RegisterNamespaceBody::sub("subnamespace", parent).unwrap();
        assert_eq!(hex::encode(body.namespace_id.to_le_bytes()), "0312981b7879a3f1");
        assert_eq!(body.registration.parent_id(), parent);
    }

    #[test]
    fn sub_of_path_uses_last_segment_as_parent() {
        let body = RegisterNamespaceBody::sub_of("root-test-namespace", "parent-test-namespace")
            .unwrap();
        assert_eq!(body.namespace_id.id(), 0xF3BB_A12C_DF07_4292);
    }

    #[test]
    fn sub_of_respects_depth_limit() {
        let body = RegisterNamespaceBody::sub_of("c", "a.b").unwrap();
        assert_eq!(body.registration.parent_id(), derive_namespace_path("a.b").unwrap()[1]);

        match RegisterNamespaceBody::sub_of("d", "a.b.c") {
            Err(IdError::InvalidName { name, .. }) => assert_eq!(name, "a.b.c.d"),
            other => panic!("expected InvalidName, got {:?}", other),
        }
    }

    #[test]
    fn invalid_name_rejected_by_factory() {
        match RegisterNamespaceBody::root("Bad Name", 1) {
            Err(IdError::InvalidName { .. }) => {}
            other => panic!("expected InvalidName, got {:?}", other),
        }
    }

    #[test]
    fn mosaic_definition_derives_id() {
        let owner = PublicKey::from_bytes([3; 32]);
        let nonce = MosaicNonce::from_u32(42);
        let body = MosaicDefinitionBody::new(nonce, &owner, MosaicFlags::default(), 6, 0);
        assert_eq!(body.mosaic_id, derive_mosaic_id(nonce, &owner));
    }

    #[test]
    fn body_reports_type() {
        let body = TransactionBody::RegisterNamespace(
            RegisterNamespaceBody::root("abc", 1).unwrap(),
        );
        assert_eq!(body.transaction_type(), TransactionType::RegisterNamespace);
        assert!(body.as_aggregate().is_none());
    }
}
