//! Error types for cuid generation.
//!
//! Identifier construction itself is infallible: once a generator holds a
//! fingerprint, every operation is a pure, synchronous computation. Errors
//! only arise at the edges: decoding foreign text, reading the hostname for
//! a fingerprint, or a poisoned lock around the process-wide default
//! generator.

/// A result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All error variants this crate can emit.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A byte outside the base-36 alphabet was found while decoding.
    #[error("invalid base-36 byte {byte:#04x} at index {index}")]
    InvalidBase36 {
        /// The offending byte.
        byte: u8,
        /// Its position within the input.
        index: usize,
    },

    /// The decoded value does not fit in a `u128`.
    #[error("decoded value overflows u128")]
    DecodeOverflow,

    /// The hostname could not be read while computing a process fingerprint.
    ///
    /// There is no fallback value. Callers that cannot tolerate this failure
    /// can construct a generator with an explicit fingerprint and skip host
    /// introspection entirely.
    #[error("could not read hostname for process fingerprint")]
    Hostname(#[from] std::io::Error),

    /// The default generator lock was poisoned by a panicking thread.
    ///
    /// With the `parking-lot` feature enabled, mutexes do not poison and this
    /// variant is not available.
    #[cfg(not(feature = "parking-lot"))]
    #[error("default generator lock poisoned")]
    LockPoisoned,
}

#[cfg(not(feature = "parking-lot"))]
use std::sync::{MutexGuard, PoisonError};

#[cfg(not(feature = "parking-lot"))]
impl<T> From<PoisonError<MutexGuard<'_, T>>> for Error {
    fn from(_: PoisonError<MutexGuard<'_, T>>) -> Self {
        Self::LockPoisoned
    }
}
