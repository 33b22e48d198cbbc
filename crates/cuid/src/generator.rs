//! Cuid construction.

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::base36::{BLOCK_SIZE, DISCRETE_VALUES, encode, pad};
use crate::counter::RolloverCounter;
use crate::error::Result;
use crate::fingerprint::process_fingerprint;
use crate::rand::{RandSource, ThreadRandom};
use crate::time::{SystemClock, TimeSource};

/// Generates cuids: short, sortable, collision-resistant identifiers that
/// uncoordinated hosts can mint independently.
///
/// A generator owns one fingerprint, computed once at construction, and one
/// rollover counter that separates identifiers minted within the same
/// millisecond. Generation reads the clock and the entropy source; it never
/// blocks and performs no other I/O.
///
/// A single generator is not safe for unsynchronized concurrent use: the
/// counter's read-increment-wrap sequence must not race. The `&mut`
/// receivers on [`Self::cuid`] and [`Self::slug`] push that contract to
/// compile time, so callers either keep one generator per thread or wrap a
/// shared one in a mutex. The process-wide [`cuid()`](crate::cuid()) and
/// [`slug()`](crate::slug()) conveniences do the latter.
///
/// # Ordering
///
/// Identifiers from one instance compare lexicographically non-decreasing in
/// generation order, as long as the encoded timestamp keeps its width and
/// the counter has not wrapped. Both exceptions are documented traits of the
/// format: the timestamp grows one digit roughly every 36-fold interval of
/// calendar time, and the counter wraps after [`DISCRETE_VALUES`] ids in one
/// millisecond window.
///
/// # Example
///
/// ```
/// use cuid::CuidGenerator;
///
/// let mut generator = CuidGenerator::new()?;
/// let id = generator.cuid();
/// assert_eq!(id.len(), 25);
/// assert!(id.starts_with('c'));
/// # Ok::<(), cuid::Error>(())
/// ```
pub struct CuidGenerator<T = SystemClock, R = ThreadRandom>
where
    T: TimeSource,
    R: RandSource,
{
    fingerprint: String,
    counter: RolloverCounter,
    time: T,
    rng: R,
}

impl CuidGenerator {
    /// Creates a generator using the system clock, the thread-local RNG, and
    /// a fingerprint computed from the current process id and hostname.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Hostname`](crate::Error::Hostname) when the hostname
    /// cannot be read; use [`Self::with_fingerprint`] to bypass host
    /// introspection.
    pub fn new() -> Result<Self> {
        Ok(Self::from_parts(
            process_fingerprint()?,
            SystemClock,
            ThreadRandom,
        ))
    }

    /// Creates a generator with an explicit fingerprint instead of deriving
    /// one from the process id and hostname.
    ///
    /// The fingerprint should be 4 base-36 characters; anything else changes
    /// the identifier width.
    ///
    /// # Example
    ///
    /// ```
    /// use cuid::CuidGenerator;
    ///
    /// let generator = CuidGenerator::with_fingerprint("a1b2");
    /// assert_eq!(generator.fingerprint(), "a1b2");
    /// ```
    pub fn with_fingerprint(fingerprint: impl Into<String>) -> Self {
        Self::from_parts(fingerprint.into(), SystemClock, ThreadRandom)
    }
}

impl<T, R> CuidGenerator<T, R>
where
    T: TimeSource,
    R: RandSource,
{
    /// Creates a generator from an explicit fingerprint, clock, and entropy
    /// source. Useful for tests that pin time or randomness.
    pub fn from_parts(fingerprint: String, time: T, rng: R) -> Self {
        Self {
            fingerprint,
            counter: RolloverCounter::new(),
            time,
            rng,
        }
    }

    /// Returns the fingerprint this generator stamps into every identifier.
    ///
    /// The fingerprint never changes for the generator's lifetime.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Generates a full-length cuid.
    ///
    /// The identifier is the literal `'c'`, the current epoch milliseconds in
    /// unpadded base-36, the counter padded to 4 characters, the 4-character
    /// fingerprint, and two independently sampled 4-character random blocks:
    /// 25 characters for the current timestamp width. The timestamp is never
    /// truncated; when its encoded width eventually grows, identifiers grow
    /// with it.
    ///
    /// Advances the counter by one.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn cuid(&mut self) -> String {
        let timestamp = encode(u128::from(self.time.current_millis()));
        let count = pad(&encode(u128::from(self.counter.next())), BLOCK_SIZE);

        let mut id = String::with_capacity(
            1 + timestamp.len() + BLOCK_SIZE + self.fingerprint.len() + 2 * BLOCK_SIZE,
        );
        id.push('c');
        id.push_str(&timestamp);
        id.push_str(&count);
        id.push_str(&self.fingerprint);
        id.push_str(&self.random_block());
        id.push_str(&self.random_block());
        id
    }

    /// Generates a 7-character slug.
    ///
    /// The slug keeps the last 2 timestamp characters, the counter truncated
    /// to its last base-36 digit, the first and last fingerprint characters,
    /// and the last 2 characters of one random block. Far more likely to
    /// collide than [`Self::cuid`]; prefer full-length cuids where possible.
    ///
    /// Advances the counter by one.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn slug(&mut self) -> String {
        let timestamp = encode(u128::from(self.time.current_millis()));
        let count = pad(&encode(u128::from(self.counter.next())), 1);
        let random = self.random_block();

        let mut id = String::with_capacity(7);
        id.push_str(tail(&timestamp, 2));
        id.push_str(&count);
        id.extend(self.fingerprint.chars().next());
        id.extend(self.fingerprint.chars().next_back());
        id.push_str(tail(&random, 2));
        id
    }

    /// Samples one 4-character random block.
    fn random_block(&self) -> String {
        // The upper bound is inclusive, one wider than the counter's range.
        // Existing cuid implementations sample the same way; keeping the
        // quirk keeps the output distribution identical across ports.
        let sample = self.rng.random_in(DISCRETE_VALUES);
        pad(&encode(u128::from(sample)), BLOCK_SIZE)
    }
}

/// Last `n` characters of an encoded (ASCII) block.
fn tail(s: &str, n: usize) -> &str {
    &s[s.len().saturating_sub(n)..]
}
