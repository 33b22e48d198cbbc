//! Process-wide default generator.
//!
//! The [`cuid()`] and [`slug()`] conveniences share one generator per
//! process, created lazily on first use and guarded by a mutex so that every
//! caller draws from the same counter. The singleton has no teardown; it
//! lives until the process exits.

use std::sync::OnceLock;

use crate::error::Result;
use crate::generator::CuidGenerator;
use crate::mutex::Mutex;

static DEFAULT: OnceLock<Mutex<CuidGenerator>> = OnceLock::new();

/// Returns the default generator, constructing it on first use.
///
/// Construction computes the process fingerprint. Two threads racing the
/// first call may both compute it; `OnceLock` keeps one instance and the
/// loser's is dropped.
fn default_generator() -> Result<&'static Mutex<CuidGenerator>> {
    if let Some(generator) = DEFAULT.get() {
        return Ok(generator);
    }
    let generator = CuidGenerator::new()?;
    Ok(DEFAULT.get_or_init(|| Mutex::new(generator)))
}

/// Generates a full-length cuid from the process-wide default generator.
///
/// # Panics
///
/// Panics if the process fingerprint cannot be computed or the internal lock
/// is poisoned; [`try_cuid`] is the fallible form. A generator constructed
/// with [`CuidGenerator::with_fingerprint`] avoids the fingerprint failure
/// entirely.
///
/// # Example
///
/// ```
/// let id = cuid::cuid();
/// assert_eq!(id.len(), 25);
/// assert!(id.starts_with('c'));
/// ```
pub fn cuid() -> String {
    try_cuid().expect("default cuid generator unavailable")
}

/// Fallible form of [`cuid()`].
///
/// # Errors
///
/// Returns [`Error::Hostname`](crate::Error::Hostname) if the fingerprint
/// cannot be computed on first use, or a lock-poisoning error if a thread
/// panicked while holding the default generator.
pub fn try_cuid() -> Result<String> {
    let generator = default_generator()?;
    #[cfg(feature = "parking-lot")]
    let mut generator = generator.lock();
    #[cfg(not(feature = "parking-lot"))]
    let mut generator = generator.lock()?;
    Ok(generator.cuid())
}

/// Generates a 7-character slug from the process-wide default generator.
///
/// # Panics
///
/// Panics under the same conditions as [`cuid()`]; [`try_slug`] is the
/// fallible form.
///
/// # Example
///
/// ```
/// let short = cuid::slug();
/// assert_eq!(short.len(), 7);
/// ```
pub fn slug() -> String {
    try_slug().expect("default cuid generator unavailable")
}

/// Fallible form of [`slug()`].
///
/// # Errors
///
/// Same conditions as [`try_cuid`].
pub fn try_slug() -> Result<String> {
    let generator = default_generator()?;
    #[cfg(feature = "parking-lot")]
    let mut generator = generator.lock();
    #[cfg(not(feature = "parking-lot"))]
    let mut generator = generator.lock()?;
    Ok(generator.slug())
}
