//! Process/host fingerprint derivation.

use crate::base36::{BASE, encode, pad};
use crate::error::{Error, Result};

/// Width of one fingerprint segment (pid or hostname hash).
const SEGMENT_WIDTH: usize = 2;

/// Derives the fixed 4-character fingerprint for a process id and hostname.
///
/// The first two characters are the pid in base-36; the last two encode a
/// hostname hash: the sum of the hostname's character code points, plus the
/// number of characters, plus 36. Both segments are padded or tail-truncated
/// to two characters.
///
/// The derivation is pure: the same `(pid, hostname)` pair always produces
/// the same output.
///
/// # Example
///
/// ```
/// use cuid::fingerprint;
///
/// let fp = fingerprint(1, "localhost");
/// assert_eq!(fp.len(), 4);
/// assert_eq!(fp, fingerprint(1, "localhost"));
/// ```
pub fn fingerprint(pid: u32, hostname: &str) -> String {
    let mut out = pad(&encode(u128::from(pid)), SEGMENT_WIDTH);
    let host_hash = hostname.chars().map(|c| c as u64).sum::<u64>()
        + hostname.chars().count() as u64
        + BASE;
    out.push_str(&pad(&encode(u128::from(host_hash)), SEGMENT_WIDTH));
    out
}

/// Computes the fingerprint for the current process and host.
///
/// # Errors
///
/// Returns [`Error::Hostname`] when the hostname cannot be read. There is no
/// fallback value; callers that cannot tolerate the failure can construct a
/// [`CuidGenerator`](crate::CuidGenerator) with an explicit fingerprint and
/// skip host introspection entirely.
pub fn process_fingerprint() -> Result<String> {
    let hostname = hostname::get().map_err(Error::Hostname)?;
    Ok(fingerprint(std::process::id(), &hostname.to_string_lossy()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_deterministic() {
        assert_eq!(fingerprint(42, "host-a"), fingerprint(42, "host-a"));
    }

    #[test]
    fn fingerprint_is_always_four_characters() {
        for (pid, host) in [
            (0, ""),
            (1, "a"),
            (u32::MAX, "a-very-long-hostname.example.com"),
        ] {
            assert_eq!(fingerprint(pid, host).len(), 4, "({pid}, {host:?})");
        }
    }

    #[test]
    fn segments_encode_pid_then_hostname_hash() {
        // pid 0 encodes to "0", padded to "00"; the empty hostname hashes to
        // 0 + 0 + 36 = 36, which is "10" in base-36.
        assert_eq!(fingerprint(0, ""), "0010");
        // pid 1_000_000 is "lfls" in base-36; only the tail survives.
        assert_eq!(fingerprint(1_000_000, "example.com"), "lsw8");
    }

    #[test]
    fn process_fingerprint_matches_direct_derivation() {
        let fp = process_fingerprint().expect("hostname should be readable");
        assert_eq!(fp.len(), 4);
        assert_eq!(fp, process_fingerprint().unwrap());
    }
}
