//! # Message Accumulator
//!
//! [`Sha1Message`] owns an append-only byte buffer. Values go in
//! through the projection pipeline ([`append()`](Sha1Message::append))
//! or verbatim ([`write_raw()`](Sha1Message::write_raw)); the digest
//! comes out through the external SHA-1 primitive
//! ([`digest()`](Sha1Message::digest)).
//!
//! ## Ordering Invariant
//!
//! Appends are strictly left-to-right and never reordered or batched.
//! No separator is ever inserted between appends — a caller wanting
//! separation between logically distinct values appends a literal
//! separator explicitly. Digests are therefore sensitive to append
//! order whenever the concatenated projections differ.
//!
//! ## Lifecycle
//!
//! One accumulator per logical message, mutated only by its owner,
//! discarded when done. The buffer grows monotonically and is never
//! implicitly cleared — digesting is non-destructive, so appending
//! after a digest and digesting again reflects the larger buffer.

use sha1::{Digest, Sha1};

use crate::digest::{Sha1Digest, SHA1_DIGEST_LEN};
use crate::project::{Project, ProjectionSink};

/// Accumulates a message for SHA-1 digesting.
#[derive(Debug, Clone, Default)]
pub struct Sha1Message {
    buf: Vec<u8>,
}

impl Sha1Message {
    /// Create an empty message.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Project a value and append its canonical form to the message.
    ///
    /// The value is borrowed only for the duration of the call.
    /// Returns `&mut self` so appends chain.
    pub fn append<T: Project + ?Sized>(&mut self, value: &T) -> &mut Self {
        let mut sink = ProjectionSink::new(&mut self.buf);
        value.project(&mut sink);
        self
    }

    /// Append bytes verbatim, bypassing projection.
    ///
    /// For binary-exact content that must enter the message as-is
    /// rather than as a textual rendering.
    pub fn write_raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    /// Compute the SHA-1 digest of the entire current message.
    ///
    /// Idempotent and non-destructive: the buffer is unchanged, so
    /// further appends followed by another digest reflect the new,
    /// larger message.
    pub fn digest(&self) -> Sha1Digest {
        let hash = Sha1::digest(&self.buf);
        let mut bytes = [0u8; SHA1_DIGEST_LEN];
        bytes.copy_from_slice(&hash);
        Sha1Digest::from_bytes(bytes)
    }

    /// Compute the digest and render it as 40 lowercase hex chars.
    pub fn digest_hex(&self) -> String {
        self.digest().to_hex()
    }

    /// Borrow the accumulated message bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Returns the length of the accumulated message in bytes.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

/// Digest a sequence of values in one shot.
///
/// Builds a fresh [`Sha1Message`], appends every argument left to
/// right, and returns the [`Sha1Digest`](crate::Sha1Digest). With no
/// arguments it yields the digest of the empty message.
#[macro_export]
macro_rules! sha1_digest {
    ($($value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut msg = $crate::Sha1Message::new();
        $(msg.append(&$value);)*
        msg.digest()
    }};
}

/// Digest a sequence of values in one shot, hex-encoded.
///
/// Identical to [`sha1_digest!`] but returns the 40-character
/// lowercase hex rendering.
#[macro_export]
macro_rules! sha1_digest_hex {
    ($($value:expr),* $(,)?) => {
        $crate::sha1_digest!($($value),*).to_hex()
    };
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The same value sequence always digests to the same bytes.
        #[test]
        fn digest_deterministic(parts in proptest::collection::vec(".{0,20}", 0..8)) {
            let mut a = Sha1Message::new();
            let mut b = Sha1Message::new();
            for part in &parts {
                a.append(part.as_str());
                b.append(part.as_str());
            }
            prop_assert_eq!(a.digest(), b.digest());
        }

        /// Splitting a string across appends never changes the digest.
        #[test]
        fn split_appends_equivalent(text in "[a-zA-Z0-9 ]{0,40}", split in 0usize..41) {
            let split = split.min(text.len());
            let mut whole = Sha1Message::new();
            whole.append(text.as_str());
            let mut parts = Sha1Message::new();
            parts.append(&text[..split]).append(&text[split..]);
            prop_assert_eq!(parts.digest(), whole.digest());
        }

        /// Raw writes of UTF-8 bytes match the text projection.
        #[test]
        fn raw_matches_text(text in ".{0,40}") {
            let mut raw = Sha1Message::new();
            raw.write_raw(text.as_bytes());
            let mut projected = Sha1Message::new();
            projected.append(text.as_str());
            prop_assert_eq!(raw.digest(), projected.digest());
        }

        /// The digest hex rendering always has 40 lowercase hex chars.
        #[test]
        fn digest_hex_shape(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
            let mut msg = Sha1Message::new();
            msg.write_raw(&bytes);
            let hex = msg.digest_hex();
            prop_assert_eq!(hex.len(), 40);
            prop_assert!(hex.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
        }
    }
}
