//! The variable-width record sequence.
//!
//! A tape owns one extent whose metadata is the element count, plus a
//! codec instance. Element-level operations translate into byte-range
//! operations against the extent, with the codec supplying encoded sizes
//! and the record walks.
//!
//! Positions name record boundaries as byte offsets; every mutation
//! invalidates previously obtained positions and iterators. The element
//! count lives in the extent's metadata and therefore exists only while
//! the extent is allocated; an emptied tape reports `len() == 0` through
//! the empty check, not from stored metadata.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Range;

use crate::codec::{Codec, Varint};
use crate::error::EncodingError;
use crate::extent::Extent;
use crate::iter::Iter;
use crate::position::Position;

/// Extent metadata for a tape: the number of records stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct TapeMeta {
    len: usize,
}

/// A contiguous, byte-packed sequence of variable-width records.
///
/// Elements are stored back to back in their encoded form with no padding
/// and no index; record boundaries are discoverable only through the
/// codec. Insertion and erasure work anywhere in the sequence, priced as
/// byte moves of the tail. Iteration is forward for any codec and
/// additionally backward for [`ReverseCodec`] implementations.
///
/// A tape is exclusively owned: cloning deep-copies the bytes, moving
/// transfers them, and `std::mem::take` leaves an empty tape behind.
///
/// [`ReverseCodec`]: crate::codec::ReverseCodec
pub struct Tape<D: Codec = Varint> {
    extent: Extent<TapeMeta>,
    codec: D,
}

impl<D: Codec + Default> Tape<D> {
    /// Create an empty tape with a default codec instance.
    pub fn new() -> Self {
        Self::with_codec(D::default())
    }

    /// Bulk-encode a sequence of values into a fresh tape with a single
    /// allocation.
    pub fn from_values(values: &[D::Value]) -> Self {
        Self::from_values_with(D::default(), values)
    }

    /// Adopt an encoded record region produced by [`Tape::as_encoded`],
    /// validating it record by record and deriving the element count.
    pub fn from_encoded(bytes: &[u8]) -> Result<Self, EncodingError> {
        Self::from_encoded_with(D::default(), bytes)
    }
}

impl<D: Codec + Default> Default for Tape<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Codec> Tape<D> {
    /// Create an empty tape using the given codec instance.
    pub fn with_codec(codec: D) -> Self {
        Self {
            extent: Extent::new(),
            codec,
        }
    }

    /// Bulk-encode `values` using the given codec instance.
    pub fn from_values_with(codec: D, values: &[D::Value]) -> Self {
        let mut tape = Self::with_codec(codec);
        tape.insert(Position::START, values);
        tape
    }

    /// As [`Tape::from_encoded`], with an explicit codec instance.
    pub fn from_encoded_with(codec: D, bytes: &[u8]) -> Result<Self, EncodingError> {
        let count = validated_record_count(&codec, bytes)?;
        let mut tape = Self::with_codec(codec);
        if !bytes.is_empty() {
            tape.extent.append(bytes.len(), |dst| dst.copy_from_slice(bytes));
            if let Some(meta) = tape.extent.metadata_mut() {
                meta.len = count;
            }
        }
        Ok(tape)
    }

    /// The codec instance.
    pub fn codec(&self) -> &D {
        &self.codec
    }

    /// Number of records stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.extent.metadata().map_or(0, |meta| meta.len)
    }

    /// True iff no records are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total encoded size of the stored records in bytes.
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.extent.size()
    }

    /// Bytes of data capacity currently allocated.
    #[inline]
    pub fn byte_capacity(&self) -> usize {
        self.extent.capacity()
    }

    /// Ensure room for at least `additional` more encoded bytes.
    pub fn reserve_bytes(&mut self, additional: usize) {
        self.extent.reserve(additional);
    }

    /// Drop unused capacity; releases the allocation when the tape is
    /// empty.
    pub fn shrink_to_fit(&mut self) {
        self.extent.shrink_to_fit();
    }

    /// Remove all records and release the allocation.
    pub fn clear(&mut self) {
        self.extent.clear();
    }

    /// The encoded record region: `[record_0][record_1]...`, no padding.
    ///
    /// This is the interop surface; feed it back through
    /// [`Tape::from_encoded`] to reconstruct an equal tape.
    #[inline]
    pub fn as_encoded(&self) -> &[u8] {
        self.extent.as_slice()
    }

    /// Cursor over the records, positioned at the start.
    pub fn iter(&self) -> Iter<'_, D> {
        Iter::new(self.extent.as_slice(), &self.codec)
    }

    /// The position of the first record.
    #[inline]
    pub fn start(&self) -> Position {
        Position::START
    }

    /// The position one past the last record.
    #[inline]
    pub fn end(&self) -> Position {
        Position::new(self.byte_len())
    }

    /// The position of the `index`-th record, by forward walk; `locate(len())`
    /// is the end position.
    ///
    /// # Panics
    /// Panics if `index > len()`.
    pub fn locate(&self, index: usize) -> Position {
        assert!(
            index <= self.len(),
            "index {index} out of bounds (len {})",
            self.len()
        );
        let bytes = self.as_encoded();
        let mut offset = 0;
        for _ in 0..index {
            offset += self.codec.record_len(&bytes[offset..]);
        }
        Position::new(offset)
    }

    /// Append one value.
    pub fn push(&mut self, value: D::Value) {
        let len = self.codec.encoded_len(&value);
        let codec = &self.codec;
        self.extent.append(len, |dst| codec.encode_into(&value, dst));
        if let Some(meta) = self.extent.metadata_mut() {
            meta.len += 1;
        }
    }

    /// Encode `values` into the tape at `at`, which must be a record
    /// boundary. The total encoded size is computed in one pass over the
    /// input, then a single byte-range insert encodes each value in turn.
    /// Returns the byte range the new records occupy.
    pub fn insert(&mut self, at: Position, values: &[D::Value]) -> Range<Position> {
        let total: usize = values.iter().map(|v| self.codec.encoded_len(v)).sum();
        let codec = &self.codec;
        let start = self.extent.insert(at.offset(), total, |dst| {
            let mut offset = 0;
            for value in values {
                let len = codec.encoded_len(value);
                codec.encode_into(value, &mut dst[offset..offset + len]);
                offset += len;
            }
        });
        if let Some(meta) = self.extent.metadata_mut() {
            meta.len += values.len();
        }
        Position::new(start)..Position::new(start + total)
    }

    /// Copy the records of `source` within `range` into this tape at `at`.
    ///
    /// The bytes are already encoded, so the writer copies them raw with
    /// no decode/re-encode round trip. Both ends of `range` must be record
    /// boundaries of `source`, and `at` a boundary of this tape. Splicing
    /// a tape into itself is ruled out by the borrows.
    pub fn splice(
        &mut self,
        at: Position,
        source: &Tape<D>,
        range: Range<Position>,
    ) -> Range<Position> {
        let src = &source.as_encoded()[range.start.offset()..range.end.offset()];
        let count = record_count(&self.codec, src);
        let start = self.extent.insert(at.offset(), src.len(), |dst| {
            dst.copy_from_slice(src);
        });
        if let Some(meta) = self.extent.metadata_mut() {
            meta.len += count;
        }
        Position::new(start)..Position::new(start + src.len())
    }

    /// Remove the records in `range` (both ends record boundaries).
    ///
    /// Returns the position following the erasure, or `None` if the erase
    /// emptied the tape and released its allocation.
    pub fn erase(&mut self, range: Range<Position>) -> Option<Position> {
        let at = range.start.offset();
        let len = range.end - range.start;
        let removed = record_count(&self.codec, &self.as_encoded()[at..at + len]);
        match self.extent.erase(at, len) {
            Some(offset) => {
                if let Some(meta) = self.extent.metadata_mut() {
                    meta.len -= removed;
                }
                Some(Position::new(offset))
            }
            None => None,
        }
    }

    /// Re-walk the encoded region and verify it against the stored count.
    pub fn check_integrity(&self) -> Result<(), EncodingError> {
        let walked = validated_record_count(&self.codec, self.as_encoded())?;
        let stored = self.len();
        if walked != stored {
            return Err(EncodingError::CountMismatch { stored, walked });
        }
        Ok(())
    }
}

/// Count records in a well-formed region (trusted walk).
fn record_count<D: Codec>(codec: &D, bytes: &[u8]) -> usize {
    let mut count = 0;
    let mut offset = 0;
    while offset < bytes.len() {
        offset += codec.record_len(&bytes[offset..]);
        count += 1;
    }
    count
}

/// Count records in an untrusted region, failing on the first record that
/// does not delimit within it.
fn validated_record_count<D: Codec>(codec: &D, bytes: &[u8]) -> Result<usize, EncodingError> {
    let mut count = 0;
    let mut offset = 0;
    while offset < bytes.len() {
        match codec.try_record_len(&bytes[offset..]) {
            Some(len) => {
                offset += len;
                count += 1;
            }
            None => return Err(EncodingError::UnterminatedRecord { offset }),
        }
    }
    Ok(count)
}

impl<D: Codec + Clone> Clone for Tape<D> {
    /// Deep copy; the clone's capacity equals its size.
    fn clone(&self) -> Self {
        Self {
            extent: self.extent.clone(),
            codec: self.codec.clone(),
        }
    }
}

impl<D: Codec> PartialEq for Tape<D>
where
    D::Value: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        if D::EQUALITY_PRESERVING {
            self.byte_len() == other.byte_len() && self.as_encoded() == other.as_encoded()
        } else {
            self.iter().eq(other.iter())
        }
    }
}

impl<D: Codec> Eq for Tape<D> where D::Value: Eq {}

impl<D: Codec> PartialOrd for Tape<D>
where
    D::Value: Ord,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<D: Codec> Ord for Tape<D>
where
    D::Value: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        if D::ORDER_PRESERVING {
            self.as_encoded().cmp(other.as_encoded())
        } else {
            self.iter().cmp(other.iter())
        }
    }
}

impl<D: Codec> fmt::Debug for Tape<D>
where
    D::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<D: Codec> Extend<D::Value> for Tape<D> {
    fn extend<I: IntoIterator<Item = D::Value>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<D: Codec + Default> FromIterator<D::Value> for Tape<D> {
    fn from_iter<I: IntoIterator<Item = D::Value>>(iter: I) -> Self {
        let mut tape = Self::new();
        tape.extend(iter);
        tape
    }
}

impl<'a, D: Codec> IntoIterator for &'a Tape<D> {
    type Item = D::Value;
    type IntoIter = Iter<'a, D>;

    fn into_iter(self) -> Iter<'a, D> {
        self.iter()
    }
}
