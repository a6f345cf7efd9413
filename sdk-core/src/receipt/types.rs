//! Receipt discriminants, versions and sources.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ReceiptError;

// ---------------------------------------------------------------------------
// ReceiptType
// ---------------------------------------------------------------------------

/// Closed set of receipt discriminants. A code outside this set is a
/// protocol upgrade, not something the client can guess at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum ReceiptType {
    HarvestFee = 0x2143,
    LockHashCreated = 0x3148,
    LockHashCompleted = 0x2248,
    LockHashExpired = 0x2348,
    LockSecretCreated = 0x3152,
    LockSecretCompleted = 0x2252,
    LockSecretExpired = 0x2352,
    MosaicRentalFee = 0x134D,
    NamespaceRentalFee = 0x134E,
    MosaicExpired = 0x414D,
    NamespaceExpired = 0x414E,
    NamespaceDeleted = 0x424E,
    Inflation = 0x5143,
    MosaicLevy = 0x124D,
    TransactionGroup = 0xE143,
    AddressAliasResolution = 0xF143,
    MosaicAliasResolution = 0xF243,
}

impl ReceiptType {
    pub fn code(self) -> u16 {
        self as u16
    }

    pub fn from_code(code: u16) -> Option<Self> {
        let receipt_type = match code {
            0x2143 => Self::HarvestFee,
            0x3148 => Self::LockHashCreated,
            0x2248 => Self::LockHashCompleted,
            0x2348 => Self::LockHashExpired,
            0x3152 => Self::LockSecretCreated,
            0x2252 => Self::LockSecretCompleted,
            0x2352 => Self::LockSecretExpired,
            0x134D => Self::MosaicRentalFee,
            0x134E => Self::NamespaceRentalFee,
            0x414D => Self::MosaicExpired,
            0x414E => Self::NamespaceExpired,
            0x424E => Self::NamespaceDeleted,
            0x5143 => Self::Inflation,
            0x124D => Self::MosaicLevy,
            0xE143 => Self::TransactionGroup,
            0xF143 => Self::AddressAliasResolution,
            0xF243 => Self::MosaicAliasResolution,
            _ => return None,
        };
        Some(receipt_type)
    }
}

impl TryFrom<u16> for ReceiptType {
    type Error = ReceiptError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(ReceiptError::UnknownReceiptType {
            code: u64::from(code),
        })
    }
}

impl fmt::Display for ReceiptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::HarvestFee => "HARVEST_FEE",
            Self::LockHashCreated => "LOCK_HASH_CREATED",
            Self::LockHashCompleted => "LOCK_HASH_COMPLETED",
            Self::LockHashExpired => "LOCK_HASH_EXPIRED",
            Self::LockSecretCreated => "LOCK_SECRET_CREATED",
            Self::LockSecretCompleted => "LOCK_SECRET_COMPLETED",
            Self::LockSecretExpired => "LOCK_SECRET_EXPIRED",
            Self::MosaicRentalFee => "MOSAIC_RENTAL_FEE",
            Self::NamespaceRentalFee => "NAMESPACE_RENTAL_FEE",
            Self::MosaicExpired => "MOSAIC_EXPIRED",
            Self::NamespaceExpired => "NAMESPACE_EXPIRED",
            Self::NamespaceDeleted => "NAMESPACE_DELETED",
            Self::Inflation => "INFLATION",
            Self::MosaicLevy => "MOSAIC_LEVY",
            Self::TransactionGroup => "TRANSACTION_GROUP",
            Self::AddressAliasResolution => "ADDRESS_ALIAS_RESOLUTION",
            Self::MosaicAliasResolution => "MOSAIC_ALIAS_RESOLUTION",
        };
        write!(f, "{}", name)
    }
}

// ---------------------------------------------------------------------------
// ReceiptVersion
// ---------------------------------------------------------------------------

/// Schema versions of the receipt and statement records.
#[derive(Debug, Clone, Copy)]
pub struct ReceiptVersion;

impl ReceiptVersion {
    pub const BALANCE_CHANGE: u8 = 1;
    pub const BALANCE_TRANSFER: u8 = 1;
    pub const ARTIFACT_EXPIRY: u8 = 1;
    pub const INFLATION: u8 = 1;
    pub const TRANSACTION_STATEMENT: u8 = 1;
    pub const RESOLUTION_STATEMENT: u8 = 1;
}

// ---------------------------------------------------------------------------
// ReceiptSource
// ---------------------------------------------------------------------------

/// Where in a block an effect happened.
///
/// `primary_id` is the 1-based index of the transaction in the block,
/// `secondary_id` the 1-based index of the inner transaction inside an
/// aggregate (0 for top-level transactions). Ordering is lexicographic on
/// `(primary_id, secondary_id)`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptSource {
    pub primary_id: u32,
    pub secondary_id: u32,
}

impl ReceiptSource {
    pub const fn new(primary_id: u32, secondary_id: u32) -> Self {
        Self {
            primary_id,
            secondary_id,
        }
    }
}

impl fmt::Display for ReceiptSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.primary_id, self.secondary_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_roundtrip() {
        for code in [0x2143u16, 0x3148, 0x134E, 0x414D, 0x5143, 0xF243] {
            assert_eq!(ReceiptType::try_from(code).unwrap().code(), code);
        }
    }

    #[test]
    fn unknown_code() {
        match ReceiptType::try_from(0xFFFF) {
            Err(ReceiptError::UnknownReceiptType { code: 0xFFFF }) => {}
            other => panic!("expected UnknownReceiptType, got {:?}", other),
        }
    }

    #[test]
    fn source_order_is_lexicographic() {
        assert!(ReceiptSource::new(1, 5) < ReceiptSource::new(2, 0));
        assert!(ReceiptSource::new(2, 0) < ReceiptSource::new(2, 1));
        assert_eq!(ReceiptSource::new(3, 0), ReceiptSource::new(3, 0));
    }

    #[test]
    fn source_serde_camel_case() {
        let source: ReceiptSource =
            serde_json::from_str(r#"{ "primaryId": 2, "secondaryId": 1 }"#).unwrap();
        assert_eq!(source, ReceiptSource::new(2, 1));
        assert_eq!(source.to_string(), "(2, 1)");
    }
}
