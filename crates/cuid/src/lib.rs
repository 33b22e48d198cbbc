//! Collision-resistant, sortable string identifiers.
//!
//! A cuid packs a millisecond timestamp, a rollover counter, a process/host
//! fingerprint, and two random blocks into a 25-character base-36 string
//! that uncoordinated hosts and processes can mint independently. A
//! 7-character slug form trades collision resistance for brevity.
//!
//! The random blocks are a collision-avoidance aid, not a security property:
//! cuids are not unguessable.
//!
//! # Example
//!
//! ```
//! let id = cuid::cuid();
//! assert_eq!(id.len(), 25);
//! assert!(id.starts_with('c'));
//!
//! let short = cuid::slug();
//! assert_eq!(short.len(), 7);
//! ```

mod base36;
mod counter;
mod default;
mod error;
mod fingerprint;
mod generator;
mod mutex;
mod rand;
mod time;

pub use crate::base36::*;
pub use crate::counter::*;
pub use crate::default::*;
pub use crate::error::*;
pub use crate::fingerprint::*;
pub use crate::generator::*;
pub use crate::rand::*;
pub use crate::time::*;
