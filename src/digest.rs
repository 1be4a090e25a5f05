//! # SHA-1 Digest Value
//!
//! Defines [`Sha1Digest`], the fixed 20-byte output of digesting a
//! message, together with its 40-character lowercase hex rendering.
//!
//! A digest is purely derived data: immutable once computed, compared
//! byte-for-byte, and serializable for embedding in larger records.

use serde::{Deserialize, Serialize};

use crate::error::DigestParseError;
use crate::hex::{bytes_to_hex, hex_to_bytes};

/// Length of a SHA-1 digest in bytes (FIPS 180-1).
pub const SHA1_DIGEST_LEN: usize = 20;

/// A SHA-1 message digest.
///
/// Produced by [`Sha1Message::digest()`](crate::Sha1Message::digest) or
/// parsed back from its hex rendering via [`Sha1Digest::from_hex()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sha1Digest([u8; SHA1_DIGEST_LEN]);

impl Sha1Digest {
    /// Wrap raw digest bytes.
    ///
    /// Prefer [`Sha1Message::digest()`](crate::Sha1Message::digest) for
    /// computing digests; this constructor exists for carrying digests
    /// obtained elsewhere.
    pub const fn from_bytes(bytes: [u8; SHA1_DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Borrow the raw 20 digest bytes.
    pub const fn as_bytes(&self) -> &[u8; SHA1_DIGEST_LEN] {
        &self.0
    }

    /// Consume the digest, returning the raw 20 bytes.
    pub const fn into_bytes(self) -> [u8; SHA1_DIGEST_LEN] {
        self.0
    }

    /// Render the digest as a 40-character lowercase hex string.
    pub fn to_hex(&self) -> String {
        bytes_to_hex(&self.0)
    }

    /// Parse a digest from its 40-character hex rendering.
    ///
    /// # Errors
    ///
    /// Returns [`DigestParseError::WrongLength`] unless the input is
    /// exactly 40 characters, and [`DigestParseError::Hex`] if any of
    /// them is not a hex digit.
    pub fn from_hex(hex: &str) -> Result<Self, DigestParseError> {
        if hex.len() != SHA1_DIGEST_LEN * 2 {
            return Err(DigestParseError::WrongLength {
                expected: SHA1_DIGEST_LEN * 2,
                actual: hex.len(),
            });
        }
        let decoded = hex_to_bytes(hex)?;
        let mut bytes = [0u8; SHA1_DIGEST_LEN];
        bytes.copy_from_slice(&decoded);
        Ok(Self(bytes))
    }
}

impl std::fmt::Display for Sha1Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Sha1Digest {
    type Err = DigestParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl AsRef<[u8]> for Sha1Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HexError;

    // SHA-1 of the empty message.
    const EMPTY_HEX: &str = "da39a3ee5e6b4b0d3255bfef95601890afd80709";

    #[test]
    fn test_hex_round_trip() {
        let digest = Sha1Digest::from_hex(EMPTY_HEX).unwrap();
        assert_eq!(digest.to_hex(), EMPTY_HEX);
    }

    #[test]
    fn test_display_matches_to_hex() {
        let digest = Sha1Digest::from_hex(EMPTY_HEX).unwrap();
        assert_eq!(format!("{digest}"), digest.to_hex());
    }

    #[test]
    fn test_from_str() {
        let digest: Sha1Digest = EMPTY_HEX.parse().unwrap();
        assert_eq!(digest.to_hex(), EMPTY_HEX);
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert_eq!(
            Sha1Digest::from_hex("da39a3"),
            Err(DigestParseError::WrongLength {
                expected: 40,
                actual: 6
            })
        );
    }

    #[test]
    fn test_invalid_digit_rejected() {
        let bad = "zz39a3ee5e6b4b0d3255bfef95601890afd80709";
        assert_eq!(
            Sha1Digest::from_hex(bad),
            Err(DigestParseError::Hex(HexError::InvalidDigit {
                digit: 'z',
                position: 0
            }))
        );
    }

    #[test]
    fn test_byte_accessors() {
        let digest = Sha1Digest::from_bytes([0xab; 20]);
        assert_eq!(digest.as_bytes(), &[0xab; 20]);
        assert_eq!(digest.into_bytes(), [0xab; 20]);
    }

    #[test]
    fn test_serde_round_trip() {
        let digest = Sha1Digest::from_hex(EMPTY_HEX).unwrap();
        let json = serde_json::to_string(&digest).unwrap();
        let back: Sha1Digest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, digest);
    }
}
