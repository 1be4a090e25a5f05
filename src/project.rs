//! # Value Projection
//!
//! Turns a value into its canonical textual form, written straight into
//! the message buffer. This is the type-directed half of the digest
//! pipeline: [`Sha1Message::append()`](crate::Sha1Message::append)
//! accepts any `T: Project` and the impl set below decides how each
//! shape of value is rendered.
//!
//! ## Dispatch Rules
//!
//! Exactly one strategy applies to any supported type, selected at
//! compile time:
//!
//! 1. **Scalar/Text** — `bool`, `char`, integers, floats via their
//!    default `Display` formatting; `str`/`String` verbatim.
//! 2. **Sequence** — slices, arrays, `Vec`, `VecDeque`: each element
//!    projected recursively in traversal order, concatenated with no
//!    separator.
//! 3. **Optional** — `Option<T>`: a present value projects its
//!    contents; an absent one emits the [`NONE_SENTINEL`] placeholder.
//!
//! A type outside this set has no `Project` impl and fails to compile
//! when offered to the accumulator; nothing ever falls through to a
//! default representation.
//!
//! ## Compatibility Invariant
//!
//! The rendered form is part of the digest compatibility contract.
//! Sequences concatenate bare (no `", "` between elements) and the
//! absent-optional sentinel is fixed at `"(NONE)"`; changing either
//! silently changes every digest computed over composite values.

use core::fmt::{self, Write};

#[cfg(feature = "seq")]
use std::collections::VecDeque;

/// Placeholder text projected for an absent `Option`.
///
/// Deliberately distinct from the empty projection so that
/// `digest(None)` never collides with `digest()` of nothing.
#[cfg(feature = "option")]
pub const NONE_SENTINEL: &str = "(NONE)";

// ---------------------------------------------------------------------------
// Sink
// ---------------------------------------------------------------------------

/// Write target handed to [`Project::project()`].
///
/// Wraps the accumulator's byte buffer. Writes are infallible and go
/// straight into the buffer; `fmt::Write` is implemented so impls can
/// use `write!` for `Display`-formatted values without an intermediate
/// allocation.
#[derive(Debug)]
pub struct ProjectionSink<'a> {
    buf: &'a mut Vec<u8>,
}

impl<'a> ProjectionSink<'a> {
    pub(crate) fn new(buf: &'a mut Vec<u8>) -> Self {
        Self { buf }
    }

    /// Append literal text to the projection output.
    pub fn push_str(&mut self, s: &str) {
        self.buf.extend_from_slice(s.as_bytes());
    }

    /// Append a value rendered with its default `Display` formatting.
    pub fn push_display(&mut self, value: &impl fmt::Display) {
        // write_str below never errors, so this can only fail if the
        // Display impl itself returns Err; the std scalar impls do not.
        let _ = write!(self, "{value}");
    }
}

impl fmt::Write for ProjectionSink<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buf.extend_from_slice(s.as_bytes());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Projection trait
// ---------------------------------------------------------------------------

/// Canonical textual projection of a value for digesting.
///
/// Implementations must be pure: the same value always writes the same
/// bytes, and nothing is written anywhere but the sink. The value is
/// borrowed only for the duration of the call.
pub trait Project {
    /// Write this value's canonical form into the sink.
    fn project(&self, sink: &mut ProjectionSink<'_>);
}

// Borrowed values project like their referents, so collections of
// references and chained borrows need no dedicated impls.
impl<T: Project + ?Sized> Project for &T {
    fn project(&self, sink: &mut ProjectionSink<'_>) {
        (**self).project(sink);
    }
}

// ---------------------------------------------------------------------------
// Scalar/Text strategy
// ---------------------------------------------------------------------------

macro_rules! impl_project_scalar {
    ($($scalar:ty),* $(,)?) => {$(
        impl Project for $scalar {
            fn project(&self, sink: &mut ProjectionSink<'_>) {
                sink.push_display(self);
            }
        }
    )*};
}

impl_project_scalar!(
    bool, char,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
);

impl Project for str {
    fn project(&self, sink: &mut ProjectionSink<'_>) {
        sink.push_str(self);
    }
}

impl Project for String {
    fn project(&self, sink: &mut ProjectionSink<'_>) {
        sink.push_str(self);
    }
}

// ---------------------------------------------------------------------------
// Sequence strategy
// ---------------------------------------------------------------------------

#[cfg(feature = "seq")]
impl<T: Project> Project for [T] {
    fn project(&self, sink: &mut ProjectionSink<'_>) {
        for value in self {
            value.project(sink);
        }
    }
}

#[cfg(feature = "seq")]
impl<T: Project, const N: usize> Project for [T; N] {
    fn project(&self, sink: &mut ProjectionSink<'_>) {
        self.as_slice().project(sink);
    }
}

#[cfg(feature = "seq")]
impl<T: Project> Project for Vec<T> {
    fn project(&self, sink: &mut ProjectionSink<'_>) {
        self.as_slice().project(sink);
    }
}

#[cfg(feature = "seq")]
impl<T: Project> Project for VecDeque<T> {
    fn project(&self, sink: &mut ProjectionSink<'_>) {
        for value in self {
            value.project(sink);
        }
    }
}

// ---------------------------------------------------------------------------
// Optional strategy
// ---------------------------------------------------------------------------

#[cfg(feature = "option")]
impl<T: Project> Project for Option<T> {
    fn project(&self, sink: &mut ProjectionSink<'_>) {
        match self {
            Some(value) => value.project(sink),
            None => sink.push_str(NONE_SENTINEL),
        }
    }
}
