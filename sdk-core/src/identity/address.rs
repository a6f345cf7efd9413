//! Account addresses and unresolved address references.
//!
//! The SDK handles addresses in their decoded 25-byte form: one network
//! byte followed by the key hash and checksum. The REST layer hands them
//! over hex-encoded; that is the only text form parsed here.

use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;

use super::error::IdError;
use super::ids::NamespaceId;
use super::network::NetworkType;
use crate::config::ADDRESS_LENGTH;

/// Low bit of byte 0 in a 25-byte unresolved address: set for aliases.
const ALIAS_FLAG: u8 = 0x01;

// ---------------------------------------------------------------------------
// Address
// ---------------------------------------------------------------------------

/// A decoded 25-byte account address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, SerializeDisplay, DeserializeFromStr)]
pub struct Address {
    bytes: [u8; ADDRESS_LENGTH],
}

impl Address {
    pub fn from_bytes(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self { bytes }
    }

    pub fn from_hex(value: &str) -> Result<Self, IdError> {
        let bytes = hex::decode(value).map_err(|_| IdError::InvalidHex {
            value: value.to_string(),
        })?;
        let bytes: [u8; ADDRESS_LENGTH] =
            bytes
                .as_slice()
                .try_into()
                .map_err(|_| IdError::InvalidAddressLength {
                    expected: ADDRESS_LENGTH,
                    got: bytes.len(),
                })?;
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.bytes
    }

    /// The network this address claims to belong to, if the leading byte
    /// is a known network.
    pub fn network_type(&self) -> Option<NetworkType> {
        NetworkType::from_byte(self.bytes[0])
    }

    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex())
    }
}

impl FromStr for Address {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// ---------------------------------------------------------------------------
// UnresolvedAddress
// ---------------------------------------------------------------------------

/// An address reference inside a transaction body: a concrete address or a
/// namespace aliasing one.
///
/// On the wire both shapes occupy 25 bytes. The alias form is
/// `[network | 0x01][namespace id, 8 bytes LE][16 zero bytes]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnresolvedAddress {
    Address(Address),
    Alias(NamespaceId),
}

impl UnresolvedAddress {
    /// Wire form. `network` supplies the leading byte of the alias form and
    /// is ignored for concrete addresses, which carry their own.
    pub fn to_bytes(&self, network: NetworkType) -> [u8; ADDRESS_LENGTH] {
        match self {
            Self::Address(address) => address.bytes,
            Self::Alias(namespace_id) => {
                let mut bytes = [0u8; ADDRESS_LENGTH];
                bytes[0] = network.as_byte() | ALIAS_FLAG;
                bytes[1..9].copy_from_slice(&namespace_id.to_le_bytes());
                bytes
            }
        }
    }

    pub fn from_bytes(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        if bytes[0] & ALIAS_FLAG != 0 {
            let mut id = [0u8; 8];
            id.copy_from_slice(&bytes[1..9]);
            Self::Alias(NamespaceId::new(u64::from_le_bytes(id)))
        } else {
            Self::Address(Address { bytes })
        }
    }

    pub fn from_hex(value: &str) -> Result<Self, IdError> {
        Address::from_hex(value).map(|raw| Self::from_bytes(raw.bytes))
    }

    pub fn is_alias(&self) -> bool {
        matches!(self, Self::Alias(_))
    }
}

impl From<Address> for UnresolvedAddress {
    fn from(address: Address) -> Self {
        Self::Address(address)
    }
}

impl From<NamespaceId> for UnresolvedAddress {
    fn from(id: NamespaceId) -> Self {
        Self::Alias(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "9050B9837EFAB4BBE8A4B9BB32D812F9885C00D8FC1650E142";

    #[test]
    fn address_hex_roundtrip() {
        let address = Address::from_hex(SAMPLE).unwrap();
        assert_eq!(address.to_hex(), SAMPLE);
        assert_eq!(address.network_type(), Some(NetworkType::MijinTest));
    }

    #[test]
    fn address_wrong_length() {
        match Address::from_hex("9050B9") {
            Err(IdError::InvalidAddressLength { expected: 25, got: 3 }) => {}
            other => panic!("expected InvalidAddressLength, got {:?}", other),
        }
    }

    #[test]
    fn alias_wire_form() {
        let alias = UnresolvedAddress::Alias(NamespaceId::new(0xC053_DFAF_B8B3_E97E));
        let bytes = alias.to_bytes(NetworkType::MijinTest);
        assert_eq!(
            hex::encode(bytes),
            "917ee9b3b8afdf53c000000000000000000000000000000000"
        );
        assert_eq!(UnresolvedAddress::from_bytes(bytes), alias);
    }

    #[test]
    fn concrete_address_ignores_network_argument() {
        let address = Address::from_hex(SAMPLE).unwrap();
        let unresolved = UnresolvedAddress::from(address);
        assert_eq!(unresolved.to_bytes(NetworkType::MainNet), *address.as_bytes());
        assert!(!UnresolvedAddress::from_bytes(*address.as_bytes()).is_alias());
    }

    #[test]
    fn address_serde_as_hex_string() {
        let address = Address::from_hex(SAMPLE).unwrap();
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, format!("\"{}\"", SAMPLE));
        let recovered: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, address);
    }
}
