//! Byte positions within a tape's record region.
//!
//! A `Position` names a record boundary: the byte offset where a record
//! starts, or the offset one past the last record (the end position).
//! Positions are only meaningful for the tape that produced them and are
//! invalidated by any mutation of that tape.

use std::fmt;
use std::ops::Sub;

/// A byte offset into a tape's record region, naming a record boundary.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(usize);

impl Position {
    /// The position of the first record.
    pub const START: Self = Self(0);

    /// Create a position from a raw byte offset.
    #[inline]
    pub const fn new(offset: usize) -> Self {
        Self(offset)
    }

    /// Get the raw byte offset.
    #[inline]
    pub const fn offset(&self) -> usize {
        self.0
    }
}

impl Sub for Position {
    type Output = usize;

    /// Byte distance between two positions.
    ///
    /// # Panics
    /// Panics if `rhs` is past `self`.
    #[inline]
    fn sub(self, rhs: Position) -> usize {
        self.0 - rhs.0
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({})", self.0)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
