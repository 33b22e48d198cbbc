//! Entropy sources for random blocks.

use rand::Rng;

/// A source of uniformly distributed random integers.
///
/// Abstracting the RNG lets tests supply fixed entropy. Collision avoidance
/// across uncoordinated generators is the only requirement; cryptographic
/// unguessability is not.
///
/// # Example
///
/// ```
/// use cuid::RandSource;
///
/// struct FixedRand;
/// impl RandSource for FixedRand {
///     fn random_in(&self, _upper: u64) -> u64 {
///         1234
///     }
/// }
///
/// let rng = FixedRand;
/// assert_eq!(rng.random_in(u64::MAX), 1234);
/// ```
pub trait RandSource {
    /// Returns a uniformly distributed value in `[0, upper]`, inclusive on
    /// both ends.
    fn random_in(&self, upper: u64) -> u64;
}

/// A [`RandSource`] drawing from the thread-local RNG.
///
/// The thread-local generator is fast, seeded from the operating system, and
/// reseeded periodically. Each OS thread owns its own instance, so calls from
/// multiple threads never contend. This type stores nothing itself; it
/// reaches the thread-local generator on each call.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandSource for ThreadRandom {
    fn random_in(&self, upper: u64) -> u64 {
        rand::rng().random_range(0..=upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_random_respects_the_inclusive_upper_bound() {
        let rng = ThreadRandom;
        for _ in 0..1_000 {
            assert!(rng.random_in(5) <= 5);
        }
        assert_eq!(rng.random_in(0), 0);
    }
}
