//! # Error Types
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! The digest pipeline itself is infallible: a value with no [`Project`]
//! impl is a compile error, allocation failure aborts, and the SHA-1
//! primitive is total. The only runtime failures live on the inverse
//! surfaces — hex decoding and digest parsing.
//!
//! [`Project`]: crate::project::Project

use thiserror::Error;

/// Error decoding a hex string back into bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    /// The input length is odd; every byte needs exactly two digits.
    #[error("hex string has odd length {0}")]
    OddLength(usize),

    /// A character outside `[0-9a-fA-F]` was encountered.
    /// The position is a byte offset into the input.
    #[error("invalid hex digit {digit:?} at byte {position}")]
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// Byte offset of the offending character.
        position: usize,
    },
}

/// Error parsing a [`Sha1Digest`](crate::Sha1Digest) from its hex rendering.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigestParseError {
    /// The input is not exactly 40 hex characters.
    #[error("expected {expected} hex chars for a SHA-1 digest, got {actual}")]
    WrongLength {
        /// Required number of hex characters (always 40).
        expected: usize,
        /// Number of characters actually supplied.
        actual: usize,
    },

    /// The input contains a non-hex character.
    #[error("invalid digest hex: {0}")]
    Hex(#[from] HexError),
}
