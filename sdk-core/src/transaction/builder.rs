//! Transaction construction via the builder pattern.
//!
//! [`TransactionBuilder`] holds the header fields shared by every kind
//! (network, version, max fee, deadline) and its terminal methods produce an
//! unsigned [`Transaction`] for one body kind. Identifiers that the network
//! derives (namespace ids, mosaic ids) are derived here too, so a caller can
//! never put a mismatched id on the wire.
//!
//! The builder does not sign. That happens in [`super::signing`], which keeps
//! construction testable without key material.

use chrono::Duration;

use super::aggregate::{AggregateBody, EmbeddedTransaction};
use super::body::{
    AddressAliasBody, HashLockBody, MosaicAliasBody, MosaicDefinitionBody, MosaicMetadataBody,
    MosaicSupplyChangeBody, RegisterNamespaceBody, TransactionBody, TransferBody,
};
use super::codec::CodecError;
use super::types::{
    AliasAction, Deadline, Message, Mosaic, MosaicFlags, MosaicSupplyDirection, TransactionType,
};
use crate::config::{SdkConfig, DEFAULT_DEADLINE_SECS};
use crate::crypto::keys::PublicKey;
use crate::identity::{
    Address, IdError, MosaicId, MosaicNonce, NamespaceId, NetworkType, UnresolvedAddress,
    UnresolvedMosaicId,
};

// ---------------------------------------------------------------------------
// Transaction
// ---------------------------------------------------------------------------

/// A logical, unsigned transaction.
///
/// Its binary form comes from [`super::codec::encode`]; signing produces a
/// separate [`super::SignedTransaction`] and leaves this value untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub network_type: NetworkType,
    pub version: u8,
    pub max_fee: u64,
    pub deadline: Deadline,
    pub body: TransactionBody,
}

impl Transaction {
    pub fn transaction_type(&self) -> TransactionType {
        self.body.transaction_type()
    }

    /// Converts this transaction into an inner transaction of an aggregate
    /// signed by `signer`. Fee and deadline are dropped; the aggregate's
    /// apply instead.
    pub fn to_aggregate(&self, signer: PublicKey) -> Result<EmbeddedTransaction, CodecError> {
        let mut inner = EmbeddedTransaction::new(signer, self.network_type, self.body.clone())?;
        inner.version = self.version;
        Ok(inner)
    }
}

// ---------------------------------------------------------------------------
// TransactionBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for unsigned [`Transaction`]s.
///
/// # Usage
///
/// ```
/// use nem_sdk_core::identity::NetworkType;
/// use nem_sdk_core::transaction::TransactionBuilder;
///
/// let tx = TransactionBuilder::new(NetworkType::MijinTest)
///     .max_fee(10_000)
///     .register_root_namespace("newnamespace", 10_000)
///     .unwrap();
/// assert_eq!(tx.body.transaction_type().code(), 0x414E);
/// ```
///
/// Defaults: version is the body kind's current version, max fee 0, and
/// the deadline two hours from now.
#[derive(Debug, Clone)]
pub struct TransactionBuilder {
    network_type: NetworkType,
    version: Option<u8>,
    max_fee: u64,
    deadline: Deadline,
}

impl TransactionBuilder {
    pub fn new(network_type: NetworkType) -> Self {
        Self {
            network_type,
            version: None,
            max_fee: 0,
            deadline: Deadline::new(Duration::seconds(DEFAULT_DEADLINE_SECS)),
        }
    }

    /// Builder seeded with a config's network, default fee and deadline.
    pub fn from_config(config: &SdkConfig) -> Self {
        Self {
            network_type: config.network_type,
            version: None,
            max_fee: config.default_max_fee,
            deadline: config.deadline(),
        }
    }

    /// Overrides the schema version byte.
    pub fn version(mut self, version: u8) -> Self {
        self.version = Some(version);
        self
    }

    pub fn max_fee(mut self, max_fee: u64) -> Self {
        self.max_fee = max_fee;
        self
    }

    pub fn deadline(mut self, deadline: Deadline) -> Self {
        self.deadline = deadline;
        self
    }

    /// Terminal step shared by every kind-specific method.
    pub fn build(self, body: TransactionBody) -> Transaction {
        let version = self
            .version
            .unwrap_or_else(|| body.transaction_type().current_version());
        Transaction {
            network_type: self.network_type,
            version,
            max_fee: self.max_fee,
            deadline: self.deadline,
            body,
        }
    }

    // ---- Namespaces ----

    pub fn register_root_namespace(self, name: &str, duration: u64) -> Result<Transaction, IdError> {
        let body = RegisterNamespaceBody::root(name, duration)?;
        Ok(self.build(TransactionBody::RegisterNamespace(body)))
    }

    pub fn register_sub_namespace(
        self,
        name: &str,
        parent_id: NamespaceId,
    ) -> Result<Transaction, IdError> {
        let body = RegisterNamespaceBody::sub(name, parent_id)?;
        Ok(self.build(TransactionBody::RegisterNamespace(body)))
    }

    /// Sub-namespace whose parent is given by dotted path (`"foo.bar"`).
    pub fn register_sub_namespace_of(
        self,
        name: &str,
        parent_path: &str,
    ) -> Result<Transaction, IdError> {
        let body = RegisterNamespaceBody::sub_of(name, parent_path)?;
        Ok(self.build(TransactionBody::RegisterNamespace(body)))
    }

    pub fn address_alias(
        self,
        action: AliasAction,
        namespace_id: NamespaceId,
        address: Address,
    ) -> Transaction {
        self.build(TransactionBody::AddressAlias(AddressAliasBody {
            action,
            namespace_id,
            address,
        }))
    }

    pub fn mosaic_alias(
        self,
        action: AliasAction,
        namespace_id: NamespaceId,
        mosaic_id: MosaicId,
    ) -> Transaction {
        self.build(TransactionBody::MosaicAlias(MosaicAliasBody {
            action,
            namespace_id,
            mosaic_id,
        }))
    }

    // ---- Mosaics ----

    pub fn mosaic_definition(
        self,
        nonce: MosaicNonce,
        owner: &PublicKey,
        flags: MosaicFlags,
        divisibility: u8,
        duration: u64,
    ) -> Transaction {
        let body = MosaicDefinitionBody::new(nonce, owner, flags, divisibility, duration);
        self.build(TransactionBody::MosaicDefinition(body))
    }

    pub fn mosaic_supply_change(
        self,
        mosaic_id: impl Into<UnresolvedMosaicId>,
        direction: MosaicSupplyDirection,
        delta: u64,
    ) -> Transaction {
        self.build(TransactionBody::MosaicSupplyChange(MosaicSupplyChangeBody {
            mosaic_id: mosaic_id.into(),
            direction,
            delta,
        }))
    }

    pub fn mosaic_metadata(
        self,
        target_public_key: PublicKey,
        scoped_metadata_key: u64,
        target_mosaic_id: impl Into<UnresolvedMosaicId>,
        value_size_delta: i16,
        value: Vec<u8>,
    ) -> Transaction {
        self.build(TransactionBody::MosaicMetadata(MosaicMetadataBody {
            target_public_key,
            scoped_metadata_key,
            target_mosaic_id: target_mosaic_id.into(),
            value_size_delta,
            value,
        }))
    }

    // ---- Transfers & locks ----

    /// Mosaics are written in ascending raw-id order; nodes reject any other
    /// order.
    pub fn transfer(
        self,
        recipient: impl Into<UnresolvedAddress>,
        mut mosaics: Vec<Mosaic>,
        message: Message,
    ) -> Transaction {
        mosaics.sort_by_key(|mosaic| mosaic.id.raw());
        self.build(TransactionBody::Transfer(TransferBody {
            recipient: recipient.into(),
            mosaics,
            message,
        }))
    }

    /// Locks `mosaic` for `duration` blocks against the aggregate bonded
    /// transaction with hash `aggregate_hash`.
    pub fn hash_lock(self, mosaic: Mosaic, duration: u64, aggregate_hash: [u8; 32]) -> Transaction {
        self.build(TransactionBody::HashLock(HashLockBody {
            mosaic,
            duration,
            hash: aggregate_hash,
        }))
    }

    // ---- Aggregates ----

    pub fn aggregate_complete(self, transactions: Vec<EmbeddedTransaction>) -> Transaction {
        self.build(TransactionBody::AggregateComplete(AggregateBody::new(transactions)))
    }

    pub fn aggregate_bonded(self, transactions: Vec<EmbeddedTransaction>) -> Transaction {
        self.build(TransactionBody::AggregateBonded(AggregateBody::new(transactions)))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NETWORK_EPOCH_MS;
    use crate::transaction::body::NamespaceRegistration;

    fn builder() -> TransactionBuilder {
        TransactionBuilder::new(NetworkType::MijinTest)
            .max_fee(10_000)
            .deadline(Deadline::from_network_time(1))
    }

    #[test]
    fn root_namespace_fields() {
        let tx = builder().register_root_namespace("newnamespace", 10_000).unwrap();
        assert_eq!(tx.transaction_type(), TransactionType::RegisterNamespace);
        assert_eq!(tx.version, 1);
        assert_eq!(tx.max_fee, 10_000);
        match &tx.body {
            TransactionBody::RegisterNamespace(body) => {
                assert_eq!(body.registration, NamespaceRegistration::Root { duration: 10_000 });
                assert_eq!(body.namespace_id.to_hex(), "C053DFAFB8B3E97E");
            }
            other => panic!("expected RegisterNamespace, got {:?}", other),
        }
    }

    #[test]
    fn invalid_namespace_name_fails() {
        match builder().register_sub_namespace("UPPER", NamespaceId::new(1)) {
            Err(IdError::InvalidName { .. }) => {}
            other => panic!("expected InvalidName, got {:?}", other),
        }
    }

    #[test]
    fn version_override() {
        let tx = builder().version(2).register_root_namespace("abc", 1).unwrap();
        assert_eq!(tx.version, 2);
    }

    #[test]
    fn default_deadline_in_future() {
        let tx = TransactionBuilder::new(NetworkType::MijinTest)
            .register_root_namespace("abc", 1)
            .unwrap();
        assert!(tx.deadline.to_datetime(NETWORK_EPOCH_MS) > chrono::Utc::now());
    }

    #[test]
    fn from_config_applies_defaults() {
        let config = SdkConfig {
            network_type: NetworkType::TestNet,
            default_max_fee: 77,
            ..SdkConfig::default()
        };
        let tx = TransactionBuilder::from_config(&config)
            .register_root_namespace("abc", 1)
            .unwrap();
        assert_eq!(tx.network_type, NetworkType::TestNet);
        assert_eq!(tx.max_fee, 77);
    }

    #[test]
    fn transfer_sorts_mosaics() {
        let tx = builder().transfer(
            NamespaceId::new(0x8000_0000_0000_0001),
            vec![Mosaic::new(MosaicId::new(9), 1), Mosaic::new(MosaicId::new(3), 2)],
            Message::plain("hi"),
        );
        match tx.body {
            TransactionBody::Transfer(body) => {
                let ids: Vec<u64> = body.mosaics.iter().map(|m| m.id.raw()).collect();
                assert_eq!(ids, vec![3, 9]);
                assert!(body.recipient.is_alias());
            }
            other => panic!("expected Transfer, got {:?}", other),
        }
    }

    #[test]
    fn to_aggregate_keeps_body_and_version() {
        let tx = builder().version(3).register_root_namespace("abc", 1).unwrap();
        let signer = PublicKey::from_bytes([7; 32]);
        let inner = tx.to_aggregate(signer).unwrap();
        assert_eq!(inner.signer, signer);
        assert_eq!(inner.version, 3);
        assert_eq!(inner.body, tx.body);
    }

    #[test]
    fn aggregate_cannot_be_embedded() {
        let aggregate = builder().aggregate_complete(vec![]);
        match aggregate.to_aggregate(PublicKey::ZERO) {
            Err(CodecError::NestedAggregate { transaction_type }) => {
                assert_eq!(transaction_type, TransactionType::AggregateComplete)
            }
            other => panic!("expected NestedAggregate, got {:?}", other),
        }
    }
}
