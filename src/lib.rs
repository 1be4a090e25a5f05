//! # sha1-message — Type-Directed SHA-1 Message Digests
//!
//! Computes a deterministic SHA-1 digest over an ordered sequence of
//! heterogeneous, possibly nested, in-memory values without
//! hand-written serialization. Each value is projected into a
//! canonical textual form by the [`Project`] trait, accumulated in an
//! append-only [`Sha1Message`] buffer, and digested through the
//! external SHA-1 primitive.
//!
//! ```
//! use sha1_message::{sha1_digest_hex, Sha1Message};
//!
//! let mut msg = Sha1Message::new();
//! msg.append("Hello").append(" ").append("World").append("!");
//! assert_eq!(msg.digest_hex(), "2ef7bde608ce5404e97d5f042f95f89f1c232871");
//!
//! // One-shot, with a sequence flattened in element order:
//! assert_eq!(sha1_digest_hex!(["Hello ", "World", "!"]), msg.digest_hex());
//! ```
//!
//! ## Key Design Principles
//!
//! 1. **Static, exhaustive dispatch.** The projection strategy for a
//!    value — scalar/text, sequence, or optional — is fixed by its type
//!    at compile time. A type with no [`Project`] impl does not compile;
//!    nothing is ever inspected at runtime or silently coerced.
//!
//! 2. **One sanctioned write path.** All projected content enters the
//!    buffer through [`ProjectionSink`]; the only bypass is the explicit
//!    [`Sha1Message::write_raw()`] for binary-exact bytes.
//!
//! 3. **Concatenation is the contract.** No separators are inserted
//!    between appends or sequence elements, and the absent-optional
//!    sentinel is fixed. Digest compatibility depends on both.
//!
//! 4. **The hash primitive stays external.** SHA-1 (FIPS 180-1) comes
//!    from the `sha1` crate and is treated as an opaque, always-
//!    succeeding computation.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Fully synchronous; an accumulator is single-owner and carries no
//!   internal synchronization or global state.
//! - One-way: projections are not decodable (this is not a
//!   serialization format). Only the hex rendering has an inverse.

pub mod digest;
pub mod error;
pub mod hex;
pub mod message;
pub mod project;

// Re-export primary types for ergonomic imports.
pub use digest::{Sha1Digest, SHA1_DIGEST_LEN};
pub use error::{DigestParseError, HexError};
pub use hex::{bytes_to_hex, hex_to_bytes};
pub use message::Sha1Message;
#[cfg(feature = "option")]
pub use project::NONE_SENTINEL;
pub use project::{Project, ProjectionSink};
