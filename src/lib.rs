//! vartape - byte-packed sequences of variable-width records
//!
//! This crate implements a contiguous container whose elements may have
//! different encoded widths, with insertion and removal anywhere in the
//! sequence and forward *and* backward iteration over the records without
//! an auxiliary index:
//!
//! - **[`Extent`]**: a growable allocation holding a metadata header and a
//!   byte region, with gap-opening insertion, ordering-careful erasure,
//!   and a pluggable [`ByteCopier`] strategy for all byte movement
//! - **Codecs**: the pluggable record format: the [`Varint`] base-128
//!   continuation-bit codec, the fixed-width [`Blittable`] codec for
//!   plain-old-data types, and the length-prefixed [`PrefixedBytes`]
//!   byte-string codec
//! - **[`Tape`]**: the element-level sequence built on one extent and one
//!   codec, with codec-aware equality and ordering
//!
//! # Quick Start
//!
//! ```rust
//! use vartape::Tape;
//!
//! let mut tape: Tape = Tape::from_values(&[1, 130, 70_000]);
//! tape.push(5);
//!
//! let forward: Vec<u64> = tape.iter().collect();
//! assert_eq!(forward, vec![1, 130, 70_000, 5]);
//!
//! // Backward iteration scans record boundaries from the raw bytes.
//! let backward: Vec<u64> = tape.iter().rev().collect();
//! assert_eq!(backward, vec![5, 70_000, 130, 1]);
//! ```
//!
//! Tapes are single-threaded structures: all mutation takes `&mut self`.
//! The only cross-thread guarantee carried by the layout is described in
//! the [`extent`] module docs (suffix erases update the size field before
//! releasing bytes).

#![warn(missing_docs)]

pub mod codec;
pub mod copier;
pub mod error;
pub mod extent;
pub mod iter;
pub mod position;
pub mod tape;

// Re-exports for convenience
pub use codec::{Blittable, Codec, PrefixedBytes, ReverseCodec, Varint};
pub use copier::{ByteCopier, MemCopier};
pub use error::EncodingError;
pub use extent::Extent;
pub use iter::{Cursor, Iter, ReverseCursor};
pub use position::Position;
pub use tape::Tape;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::codec::{Codec, ReverseCodec, Varint};
    pub use crate::iter::{Cursor, ReverseCursor};
    pub use crate::position::Position;
    pub use crate::tape::Tape;
}
