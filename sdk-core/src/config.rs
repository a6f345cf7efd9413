//! # SDK Configuration & Constants
//!
//! Every wire-format size, offset and protocol constant the SDK depends on
//! lives here. These numbers are dictated by the network's consensus layer;
//! changing any of them produces payloads that nodes silently reject.
//!
//! The runtime-tunable part (which network, which generation hash, default
//! fee and deadline) is [`SdkConfig`].

use chrono::Duration;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::identity::NetworkType;
use crate::transaction::types::Deadline;

// ---------------------------------------------------------------------------
// Entity Header Layout
// ---------------------------------------------------------------------------

/// Length of the leading little-endian `u32` size field.
pub const SIZE_FIELD_LENGTH: usize = 4;

/// Ed25519 signature length. 64 bytes, always.
pub const SIGNATURE_LENGTH: usize = 64;

/// Ed25519 public key length.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Ed25519 private key (seed) length.
pub const PRIVATE_KEY_LENGTH: usize = 32;

/// SHA3-256 digest length. Used for transaction hashes and generation hashes.
pub const HASH_LENGTH: usize = 32;

/// Offset of the signature inside a top-level transaction.
pub const SIGNATURE_OFFSET: usize = SIZE_FIELD_LENGTH;

/// Offset of the signer public key inside a top-level transaction.
pub const SIGNER_OFFSET: usize = SIGNATURE_OFFSET + SIGNATURE_LENGTH;

/// First byte covered by the signature: everything before it (size,
/// signature, signer) is either derived after signing or redundant.
pub const SIGNED_REGION_OFFSET: usize = SIGNER_OFFSET + PUBLIC_KEY_LENGTH;

/// Full top-level header: size, signature, signer, version, network, type,
/// max fee, deadline.
pub const TRANSACTION_HEADER_SIZE: usize = SIGNED_REGION_OFFSET + 1 + 1 + 2 + 8 + 8;

/// Embedded (inner) header: size, signer, version, network, type.
pub const EMBEDDED_HEADER_SIZE: usize = SIZE_FIELD_LENGTH + PUBLIC_KEY_LENGTH + 1 + 1 + 2;

/// Offset of the type discriminant inside a top-level header.
pub const TYPE_OFFSET: usize = SIGNED_REGION_OFFSET + 2;

/// Inner transactions of an aggregate are aligned to this many bytes.
pub const AGGREGATE_ALIGNMENT: usize = 8;

/// One cosignature entry: signer public key followed by signature.
pub const COSIGNATURE_SIZE: usize = PUBLIC_KEY_LENGTH + SIGNATURE_LENGTH;

/// Raw decoded address length (network byte + 24 bytes).
pub const ADDRESS_LENGTH: usize = 25;

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

/// Maximum namespace name length in bytes.
pub const MAX_NAME_LENGTH: usize = 31;

/// Maximum depth of a namespace path (`root.sub.leaf`).
pub const MAX_NAMESPACE_DEPTH: usize = 3;

/// High bit marking an id as a namespace id. Mosaic ids never carry it,
/// which is how an unresolved mosaic reference tells the two apart.
pub const NAMESPACE_FLAG: u64 = 1 << 63;

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

/// Network epoch (2016-04-01T00:00:00Z) in Unix milliseconds. Deadlines are
/// encoded relative to this instant.
pub const NETWORK_EPOCH_MS: i64 = 1_459_468_800_000;

/// Default deadline offset used by [`SdkConfig::default`]: two hours.
pub const DEFAULT_DEADLINE_SECS: i64 = 2 * 60 * 60;

// ---------------------------------------------------------------------------
// SdkConfig
// ---------------------------------------------------------------------------

/// Errors loading an [`SdkConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid generation hash: expected {expected} hex bytes, got {got}")]
    GenerationHash { expected: usize, got: usize },
}

/// Per-network settings a caller supplies once and reuses for every
/// transaction it builds.
///
/// The generation hash is hex-encoded (64 characters) the way nodes report
/// it in `/block/1` and `/node/info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SdkConfig {
    /// Network every built transaction is tagged with.
    pub network_type: NetworkType,

    /// Hex-encoded generation hash of the target network.
    pub generation_hash: String,

    /// Network epoch in Unix milliseconds.
    pub epoch_adjustment_ms: i64,

    /// Seconds from "now" used by [`SdkConfig::deadline`].
    pub default_deadline_secs: i64,

    /// Max fee applied when a factory is not given one explicitly.
    pub default_max_fee: u64,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            network_type: NetworkType::MijinTest,
            generation_hash: "0".repeat(HASH_LENGTH * 2),
            epoch_adjustment_ms: NETWORK_EPOCH_MS,
            default_deadline_secs: DEFAULT_DEADLINE_SECS,
            default_max_fee: 0,
        }
    }
}

impl SdkConfig {
    /// Parses a JSON config document. Missing keys fall back to defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.generation_hash_bytes()?;
        Ok(config)
    }

    /// Decoded generation hash.
    pub fn generation_hash_bytes(&self) -> Result<[u8; HASH_LENGTH], ConfigError> {
        let bytes = hex::decode(&self.generation_hash).map_err(|_| ConfigError::GenerationHash {
            expected: HASH_LENGTH,
            got: self.generation_hash.len() / 2,
        })?;
        bytes
            .as_slice()
            .try_into()
            .map_err(|_| ConfigError::GenerationHash {
                expected: HASH_LENGTH,
                got: bytes.len(),
            })
    }

    /// A deadline `default_deadline_secs` from now on this network's epoch.
    pub fn deadline(&self) -> Deadline {
        Deadline::with_epoch(
            Duration::seconds(self.default_deadline_secs),
            self.epoch_adjustment_ms,
        )
    }
}
