//! The four receipt shapes.
//!
//! Each shape accepts only the receipt types that produce it; constructing
//! one with any other type fails with [`ReceiptError::ShapeMismatch`].

use super::error::ReceiptError;
use super::types::{ReceiptType, ReceiptVersion};
use crate::crypto::keys::PublicKey;
use crate::identity::{Address, MosaicId, NamespaceId};

fn expect_shape(
    receipt_type: ReceiptType,
    allowed: &[ReceiptType],
    shape: &'static str,
) -> Result<(), ReceiptError> {
    if allowed.contains(&receipt_type) {
        Ok(())
    } else {
        Err(ReceiptError::ShapeMismatch {
            receipt_type,
            shape,
        })
    }
}

// ---------------------------------------------------------------------------
// Balance change
// ---------------------------------------------------------------------------

/// An account's balance of one mosaic went up or down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceChangeReceipt {
    receipt_type: ReceiptType,
    pub target_public_key: PublicKey,
    pub mosaic_id: MosaicId,
    pub amount: u64,
}

impl BalanceChangeReceipt {
    pub const TYPES: [ReceiptType; 7] = [
        ReceiptType::HarvestFee,
        ReceiptType::LockHashCreated,
        ReceiptType::LockHashCompleted,
        ReceiptType::LockHashExpired,
        ReceiptType::LockSecretCreated,
        ReceiptType::LockSecretCompleted,
        ReceiptType::LockSecretExpired,
    ];

    pub fn new(
        receipt_type: ReceiptType,
        target_public_key: PublicKey,
        mosaic_id: MosaicId,
        amount: u64,
    ) -> Result<Self, ReceiptError> {
        expect_shape(receipt_type, &Self::TYPES, "balance change")?;
        Ok(Self {
            receipt_type,
            target_public_key,
            mosaic_id,
            amount,
        })
    }

    pub fn receipt_type(&self) -> ReceiptType {
        self.receipt_type
    }
}

// ---------------------------------------------------------------------------
// Balance transfer
// ---------------------------------------------------------------------------

/// Funds moved from one account to another (rental fees).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceTransferReceipt {
    receipt_type: ReceiptType,
    pub sender_public_key: PublicKey,
    pub recipient_address: Address,
    pub mosaic_id: MosaicId,
    pub amount: u64,
}

impl BalanceTransferReceipt {
    pub const TYPES: [ReceiptType; 2] =
        [ReceiptType::MosaicRentalFee, ReceiptType::NamespaceRentalFee];

    pub fn new(
        receipt_type: ReceiptType,
        sender_public_key: PublicKey,
        recipient_address: Address,
        mosaic_id: MosaicId,
        amount: u64,
    ) -> Result<Self, ReceiptError> {
        expect_shape(receipt_type, &Self::TYPES, "balance transfer")?;
        Ok(Self {
            receipt_type,
            sender_public_key,
            recipient_address,
            mosaic_id,
            amount,
        })
    }

    pub fn receipt_type(&self) -> ReceiptType {
        self.receipt_type
    }
}

// ---------------------------------------------------------------------------
// Artifact expiry
// ---------------------------------------------------------------------------

/// The entity an expiry receipt refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactId {
    Mosaic(MosaicId),
    Namespace(NamespaceId),
}

/// A mosaic or namespace expired (or a namespace was deleted).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactExpiryReceipt {
    receipt_type: ReceiptType,
    pub artifact_id: ArtifactId,
}

impl ArtifactExpiryReceipt {
    pub const TYPES: [ReceiptType; 3] = [
        ReceiptType::MosaicExpired,
        ReceiptType::NamespaceExpired,
        ReceiptType::NamespaceDeleted,
    ];

    /// The artifact kind must agree with the type: mosaic ids for
    /// `MosaicExpired`, namespace ids otherwise.
    pub fn new(receipt_type: ReceiptType, artifact_id: ArtifactId) -> Result<Self, ReceiptError> {
        expect_shape(receipt_type, &Self::TYPES, "artifact expiry")?;
        let consistent = matches!(
            (receipt_type, artifact_id),
            (ReceiptType::MosaicExpired, ArtifactId::Mosaic(_))
                | (ReceiptType::NamespaceExpired, ArtifactId::Namespace(_))
                | (ReceiptType::NamespaceDeleted, ArtifactId::Namespace(_))
        );
        if !consistent {
            return Err(ReceiptError::InvalidField {
                field: "artifactId",
                reason: format!("{:?} does not match {}", artifact_id, receipt_type),
            });
        }
        Ok(Self {
            receipt_type,
            artifact_id,
        })
    }

    pub fn receipt_type(&self) -> ReceiptType {
        self.receipt_type
    }
}

// ---------------------------------------------------------------------------
// Inflation
// ---------------------------------------------------------------------------

/// New currency created by the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InflationReceipt {
    pub mosaic_id: MosaicId,
    pub amount: u64,
}

// ---------------------------------------------------------------------------
// Receipt
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Receipt {
    BalanceChange(BalanceChangeReceipt),
    BalanceTransfer(BalanceTransferReceipt),
    ArtifactExpiry(ArtifactExpiryReceipt),
    Inflation(InflationReceipt),
}

impl Receipt {
    pub fn receipt_type(&self) -> ReceiptType {
        match self {
            Self::BalanceChange(r) => r.receipt_type(),
            Self::BalanceTransfer(r) => r.receipt_type(),
            Self::ArtifactExpiry(r) => r.receipt_type(),
            Self::Inflation(_) => ReceiptType::Inflation,
        }
    }

    pub fn version(&self) -> u8 {
        match self {
            Self::BalanceChange(_) => ReceiptVersion::BALANCE_CHANGE,
            Self::BalanceTransfer(_) => ReceiptVersion::BALANCE_TRANSFER,
            Self::ArtifactExpiry(_) => ReceiptVersion::ARTIFACT_EXPIRY,
            Self::Inflation(_) => ReceiptVersion::INFLATION,
        }
    }
}
