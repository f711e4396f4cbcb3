//! Errors surfaced when validating encoded byte regions.

/// Defects found while walking an encoded record region.
///
/// Returned by the validating entry points ([`Tape::from_encoded`] and
/// [`Tape::check_integrity`]); the trusting decode paths do not construct
/// these.
///
/// [`Tape::from_encoded`]: crate::Tape::from_encoded
/// [`Tape::check_integrity`]: crate::Tape::check_integrity
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    /// A record starting at `offset` is truncated: its continuation chain
    /// or length prefix runs past the end of the region.
    #[error("record at byte {offset} is truncated or unterminated")]
    UnterminatedRecord {
        /// Byte offset of the defective record's start.
        offset: usize,
    },
    /// The stored element count disagrees with the number of records the
    /// region actually holds.
    #[error("element count mismatch: header records {stored}, region holds {walked}")]
    CountMismatch {
        /// Count recorded in the buffer's metadata.
        stored: usize,
        /// Count found by walking the region.
        walked: usize,
    },
}
