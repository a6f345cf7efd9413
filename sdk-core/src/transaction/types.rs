//! Core type definitions for Catapult transactions.
//!
//! These types form the vocabulary shared by the body model, the codec and
//! the factories. Most are small `Copy` enums with an explicit wire value.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::NETWORK_EPOCH_MS;
use crate::identity::UnresolvedMosaicId;

// ---------------------------------------------------------------------------
// TransactionType
// ---------------------------------------------------------------------------

/// Discriminant written as a little-endian `u16` at offset 102 of every
/// transaction header (offset 38 of an embedded one).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum TransactionType {
    Transfer = 0x4154,
    RegisterNamespace = 0x414E,
    AddressAlias = 0x424E,
    MosaicAlias = 0x434E,
    MosaicDefinition = 0x414D,
    MosaicSupplyChange = 0x424D,
    HashLock = 0x4148,
    MosaicMetadata = 0x4244,
    AggregateComplete = 0x4141,
    AggregateBonded = 0x4241,
}

impl TransactionType {
    pub fn code(self) -> u16 {
        self as u16
    }

    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            0x4154 => Some(Self::Transfer),
            0x414E => Some(Self::RegisterNamespace),
            0x424E => Some(Self::AddressAlias),
            0x434E => Some(Self::MosaicAlias),
            0x414D => Some(Self::MosaicDefinition),
            0x424D => Some(Self::MosaicSupplyChange),
            0x4148 => Some(Self::HashLock),
            0x4244 => Some(Self::MosaicMetadata),
            0x4141 => Some(Self::AggregateComplete),
            0x4241 => Some(Self::AggregateBonded),
            _ => None,
        }
    }

    pub fn is_aggregate(self) -> bool {
        matches!(self, Self::AggregateComplete | Self::AggregateBonded)
    }

    /// Schema version the SDK writes for this kind.
    ///
    /// Every kind is currently at version 1. The match is kept exhaustive so
    /// a schema bump for one kind is a one-line change.
    pub fn current_version(self) -> u8 {
        match self {
            Self::Transfer
            | Self::RegisterNamespace
            | Self::AddressAlias
            | Self::MosaicAlias
            | Self::MosaicDefinition
            | Self::MosaicSupplyChange
            | Self::HashLock
            | Self::MosaicMetadata
            | Self::AggregateComplete
            | Self::AggregateBonded => 1,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transfer => write!(f, "TRANSFER"),
            Self::RegisterNamespace => write!(f, "REGISTER_NAMESPACE"),
            Self::AddressAlias => write!(f, "ADDRESS_ALIAS"),
            Self::MosaicAlias => write!(f, "MOSAIC_ALIAS"),
            Self::MosaicDefinition => write!(f, "MOSAIC_DEFINITION"),
            Self::MosaicSupplyChange => write!(f, "MOSAIC_SUPPLY_CHANGE"),
            Self::HashLock => write!(f, "LOCK"),
            Self::MosaicMetadata => write!(f, "MOSAIC_METADATA"),
            Self::AggregateComplete => write!(f, "AGGREGATE_COMPLETE"),
            Self::AggregateBonded => write!(f, "AGGREGATE_BONDED"),
        }
    }
}

// ---------------------------------------------------------------------------
// Deadline
// ---------------------------------------------------------------------------

/// Absolute expiry instant, stored as milliseconds since the network epoch.
///
/// An expired deadline is still a valid value: the codec and signer never
/// look at the clock. Rejecting stale transactions is the network's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deadline(u64);

impl Deadline {
    /// `duration` from now, on the default network epoch.
    pub fn new(duration: Duration) -> Self {
        Self::with_epoch(duration, NETWORK_EPOCH_MS)
    }

    /// `duration` from now, relative to a network epoch given in Unix ms.
    pub fn with_epoch(duration: Duration, epoch_ms: i64) -> Self {
        let unix_ms = Utc::now()
            .timestamp_millis()
            .saturating_add(duration.num_milliseconds());
        Self(unix_ms.saturating_sub(epoch_ms).max(0) as u64)
    }

    /// Wraps a raw network-time value (as read off the wire).
    pub const fn from_network_time(ms: u64) -> Self {
        Self(ms)
    }

    pub fn network_time(self) -> u64 {
        self.0
    }

    /// Wall-clock instant of this deadline given the network epoch.
    pub fn to_datetime(self, epoch_ms: i64) -> DateTime<Utc> {
        let offset = i64::try_from(self.0).unwrap_or(i64::MAX);
        Utc.timestamp_millis_opt(epoch_ms.saturating_add(offset))
            .single()
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

// ---------------------------------------------------------------------------
// Small body enums
// ---------------------------------------------------------------------------

/// Link or unlink an alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum AliasAction {
    Unlink = 0,
    Link = 1,
}

impl AliasAction {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Self::Unlink),
            1 => Some(Self::Link),
            _ => None,
        }
    }
}

/// Direction of a mosaic supply change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum MosaicSupplyDirection {
    Decrease = 0,
    Increase = 1,
}

impl MosaicSupplyDirection {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Self::Decrease),
            1 => Some(Self::Increase),
            _ => None,
        }
    }
}

/// Mosaic property flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MosaicFlags {
    pub supply_mutable: bool,
    pub transferable: bool,
    pub restrictable: bool,
}

impl MosaicFlags {
    const SUPPLY_MUTABLE: u8 = 0x01;
    const TRANSFERABLE: u8 = 0x02;
    const RESTRICTABLE: u8 = 0x04;

    pub fn new(supply_mutable: bool, transferable: bool, restrictable: bool) -> Self {
        Self {
            supply_mutable,
            transferable,
            restrictable,
        }
    }

    pub fn to_byte(self) -> u8 {
        let mut byte = 0;
        if self.supply_mutable {
            byte |= Self::SUPPLY_MUTABLE;
        }
        if self.transferable {
            byte |= Self::TRANSFERABLE;
        }
        if self.restrictable {
            byte |= Self::RESTRICTABLE;
        }
        byte
    }

    /// `None` when undefined bits are set.
    pub fn from_byte(byte: u8) -> Option<Self> {
        let known = Self::SUPPLY_MUTABLE | Self::TRANSFERABLE | Self::RESTRICTABLE;
        if byte & !known != 0 {
            return None;
        }
        Some(Self {
            supply_mutable: byte & Self::SUPPLY_MUTABLE != 0,
            transferable: byte & Self::TRANSFERABLE != 0,
            restrictable: byte & Self::RESTRICTABLE != 0,
        })
    }
}

// ---------------------------------------------------------------------------
// Mosaic & Message
// ---------------------------------------------------------------------------

/// An amount of a (possibly aliased) mosaic, in absolute units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mosaic {
    pub id: UnresolvedMosaicId,
    pub amount: u64,
}

impl Mosaic {
    pub fn new(id: impl Into<UnresolvedMosaicId>, amount: u64) -> Self {
        Self {
            id: id.into(),
            amount,
        }
    }
}

/// Transfer message. On the wire: one type byte followed by the payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Message {
    /// Type 0: plain bytes (usually UTF-8 text).
    Plain(Vec<u8>),
    /// Type 1: payload encrypted by the sender. Opaque to this crate.
    Encrypted(Vec<u8>),
}

impl Message {
    pub fn plain(text: &str) -> Self {
        Self::Plain(text.as_bytes().to_vec())
    }

    pub fn empty() -> Self {
        Self::Plain(Vec::new())
    }

    pub fn type_byte(&self) -> u8 {
        match self {
            Self::Plain(_) => 0,
            Self::Encrypted(_) => 1,
        }
    }

    pub fn payload(&self) -> &[u8] {
        match self {
            Self::Plain(bytes) | Self::Encrypted(bytes) => bytes,
        }
    }

    pub fn from_parts(type_byte: u8, payload: Vec<u8>) -> Option<Self> {
        match type_byte {
            0 => Some(Self::Plain(payload)),
            1 => Some(Self::Encrypted(payload)),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
