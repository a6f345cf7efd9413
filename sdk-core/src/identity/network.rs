//! Network identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The network a transaction or address belongs to.
///
/// The discriminant is the byte written into every transaction header and
/// at the front of every address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum NetworkType {
    /// Public main network.
    MainNet = 0x68,
    /// Public test network.
    TestNet = 0x98,
    /// Private (Mijin) network.
    Mijin = 0x60,
    /// Private test network.
    MijinTest = 0x90,
}

impl NetworkType {
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x68 => Some(Self::MainNet),
            0x98 => Some(Self::TestNet),
            0x60 => Some(Self::Mijin),
            0x90 => Some(Self::MijinTest),
            _ => None,
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MainNet => write!(f, "MAIN_NET"),
            Self::TestNet => write!(f, "TEST_NET"),
            Self::Mijin => write!(f, "MIJIN"),
            Self::MijinTest => write!(f, "MIJIN_TEST"),
        }
    }
}
