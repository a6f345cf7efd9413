//! # Hashing Utilities
//!
//! The network uses exactly one hash function on the client side: FIPS-202
//! SHA3-256. It derives namespace and mosaic ids, and it produces the
//! transaction hash that listeners correlate confirmations by.
//!
//! Note that this is *not* Keccak-256 (the pre-standard padding Ethereum
//! uses). The two disagree on every input.

use sha3::{Digest, Sha3_256};

use crate::config::HASH_LENGTH;

/// Compute the SHA3-256 digest of `data`.
///
/// # Example
///
/// ```
/// use nem_sdk_core::crypto::sha3_256;
///
/// let digest = sha3_256(b"");
/// assert_eq!(digest[0], 0xa7);
/// ```
pub fn sha3_256(data: &[u8]) -> [u8; HASH_LENGTH] {
    sha3_256_parts(&[data])
}

/// Compute SHA3-256 over the concatenation of `parts` without allocating
/// the concatenated buffer.
///
/// Every id derivation and hash in the protocol is defined over a
/// concatenation of fields, so this is the form callers actually want.
pub fn sha3_256_parts(parts: &[&[u8]]) -> [u8; HASH_LENGTH] {
    let mut hasher = Sha3_256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// Reads the first 8 bytes of a digest as a little-endian `u64`.
pub(crate) fn digest_low_u64(digest: &[u8; HASH_LENGTH]) -> u64 {
    let mut low = [0u8; 8];
    low.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(low)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha3_256_empty_vector() {
        // FIPS-202 test vector for the empty message.
        assert_eq!(
            hex::encode(sha3_256(b"")),
            "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
        );
    }

    #[test]
    fn test_sha3_256_abc_vector() {
        assert_eq!(
            hex::encode(sha3_256(b"abc")),
            "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"
        );
    }

    #[test]
    fn test_parts_matches_concatenation() {
        let whole = sha3_256(b"hello world");
        let split = sha3_256_parts(&[b"hello", b" ", b"world"]);
        assert_eq!(whole, split);
    }

    #[test]
    fn test_parts_empty_slice() {
        assert_eq!(sha3_256_parts(&[]), sha3_256(b""));
    }

    #[test]
    fn test_digest_low_u64_is_little_endian() {
        let mut digest = [0u8; 32];
        digest[0] = 0x01;
        digest[7] = 0x80;
        assert_eq!(digest_low_u64(&digest), 0x8000_0000_0000_0001);
    }
}
