//! # Hex Encoding
//!
//! Lowercase hex rendering of raw bytes and its strict inverse.
//!
//! Encoding is total: for `N` input bytes it emits exactly `2N`
//! characters from `[0-9a-f]`, most-significant nibble of each byte
//! first. Decoding rejects odd lengths and non-hex digits with
//! positioned errors; it accepts uppercase digits on input.

use crate::error::HexError;

/// Encode bytes as a lowercase hex string.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}

/// Decode a hex string into bytes.
///
/// # Errors
///
/// Returns [`HexError::OddLength`] if the input length is odd, and
/// [`HexError::InvalidDigit`] for the first character outside
/// `[0-9a-fA-F]`.
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, HexError> {
    if hex.len() % 2 != 0 {
        return Err(HexError::OddLength(hex.len()));
    }
    let mut out = Vec::with_capacity(hex.len() / 2);
    for (i, pair) in hex.as_bytes().chunks_exact(2).enumerate() {
        let hi = decode_nibble(pair[0], 2 * i)?;
        let lo = decode_nibble(pair[1], 2 * i + 1)?;
        out.push((hi << 4) | lo);
    }
    Ok(out)
}

/// Decode one hex digit, reporting its byte offset on failure.
fn decode_nibble(digit: u8, position: usize) -> Result<u8, HexError> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'a'..=b'f' => Ok(digit - b'a' + 10),
        b'A'..=b'F' => Ok(digit - b'A' + 10),
        other => Err(HexError::InvalidDigit {
            digit: other as char,
            position,
        }),
    }
}
