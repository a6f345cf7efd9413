//! Signed artifacts handed to the transport layer.

use super::aggregate::Cosignature;
use super::types::TransactionType;
use crate::config::HASH_LENGTH;
use crate::crypto::keys::{PublicKey, Signature};
use crate::identity::NetworkType;

/// A signed, announce-ready transaction.
///
/// Immutable: the payload and hash are fixed at signing time. The hash is
/// the value confirmation and status events are correlated by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTransaction {
    payload: Vec<u8>,
    hash: [u8; HASH_LENGTH],
    transaction_type: TransactionType,
    network_type: NetworkType,
    signer: PublicKey,
}

impl SignedTransaction {
    pub(crate) fn new(
        payload: Vec<u8>,
        hash: [u8; HASH_LENGTH],
        transaction_type: TransactionType,
        network_type: NetworkType,
        signer: PublicKey,
    ) -> Self {
        Self {
            payload,
            hash,
            transaction_type,
            network_type,
            signer,
        }
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Uppercase hex, as the announce endpoints take it.
    pub fn payload_hex(&self) -> String {
        hex::encode_upper(&self.payload)
    }

    pub fn hash(&self) -> &[u8; HASH_LENGTH] {
        &self.hash
    }

    pub fn hash_hex(&self) -> String {
        hex::encode_upper(self.hash)
    }

    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    pub fn network_type(&self) -> NetworkType {
        self.network_type
    }

    pub fn signer(&self) -> &PublicKey {
        &self.signer
    }
}

/// A cosignature over an existing aggregate, in the shape the transport's
/// cosignature announce call expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CosignatureSignedTransaction {
    pub parent_hash: [u8; HASH_LENGTH],
    pub signature: Signature,
    pub signer: PublicKey,
}

impl CosignatureSignedTransaction {
    pub fn parent_hash_hex(&self) -> String {
        hex::encode_upper(self.parent_hash)
    }
}

impl From<CosignatureSignedTransaction> for Cosignature {
    fn from(signed: CosignatureSignedTransaction) -> Self {
        Cosignature {
            signer: signed.signer,
            signature: signed.signature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_accessors_are_uppercase() {
        let signed = SignedTransaction::new(
            vec![0xab, 0xcd],
            [0xef; 32],
            TransactionType::Transfer,
            NetworkType::MijinTest,
            PublicKey::ZERO,
        );
        assert_eq!(signed.payload_hex(), "ABCD");
        assert_eq!(signed.hash_hex(), "EF".repeat(32));
    }

    #[test]
    fn cosignature_conversion_keeps_signer_and_signature() {
        let signed = CosignatureSignedTransaction {
            parent_hash: [1; 32],
            signature: Signature::from_bytes([2; 64]),
            signer: PublicKey::from_bytes([3; 32]),
        };
        let cosignature = Cosignature::from(signed);
        assert_eq!(cosignature.signer, signed.signer);
        assert_eq!(cosignature.signature, signed.signature);
        assert_eq!(signed.parent_hash_hex(), "01".repeat(32));
    }
}
