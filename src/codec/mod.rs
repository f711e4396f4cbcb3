//! Encoding/decoding model for tape records.
//!
//! A codec turns values into byte records and back. Records are
//! self-delimiting: their extent in a byte region is recoverable from the
//! bytes alone, either by an in-band terminator convention or by a length
//! prefix. Codecs that can also find record boundaries scanning backward
//! implement [`ReverseCodec`] and unlock backward iteration; prefix-
//! delimited codecs implement only [`Codec`] and iterate forward only.
//!
//! Codecs are pure: bytes in, value and length out (and the reverse). They
//! own nothing and may carry small configuration state; all methods take
//! `&self`.

mod blittable;
mod bytes;
mod varint;

pub use blittable::Blittable;
pub use bytes::PrefixedBytes;
pub use varint::Varint;

/// Encode/decode contract for tape records.
pub trait Codec {
    /// The value type carried by one record.
    type Value;

    /// Whether byte-equality of two encoded records is equivalent to
    /// value-equality. Requires encodings to be canonical (one encoding
    /// per value).
    const EQUALITY_PRESERVING: bool;

    /// Whether byte-lexicographic order of encoded regions matches value
    /// order.
    const ORDER_PRESERVING: bool;

    /// Encoded length for the given value.
    ///
    /// Must be at least 1: element counting is tied to byte insertion, so
    /// zero-byte records are not representable.
    fn encoded_len(&self, value: &Self::Value) -> usize;

    /// Encode the value into the provided buffer.
    ///
    /// Implementations must write exactly `encoded_len(value)` bytes.
    fn encode_into(&self, value: &Self::Value, dst: &mut [u8]);

    /// Length in bytes of the record starting at `buf[0]`.
    ///
    /// Trusts well-formed input: a record that runs past the end of `buf`
    /// panics on the slice bound. Use [`Codec::try_record_len`] to probe
    /// untrusted bytes.
    fn record_len(&self, buf: &[u8]) -> usize;

    /// Length of the record starting at `buf[0]`, or `None` if the record
    /// is truncated or otherwise does not delimit within `buf`.
    fn try_record_len(&self, buf: &[u8]) -> Option<usize>;

    /// Decode the record starting at `buf[0]`.
    fn decode(&self, buf: &[u8]) -> Self::Value;

    /// Decode the record starting at `buf[0]` and report its length, in
    /// one pass. Codecs whose decoding already discovers the length should
    /// override this to avoid re-scanning.
    fn read(&self, buf: &[u8]) -> (Self::Value, usize) {
        (self.decode(buf), self.record_len(buf))
    }
}

/// Backward decoding for codecs whose records can be delimited scanning
/// from the end.
///
/// Both operations are O(length of the record found): locating the start
/// of the previous record is a byte scan, not a lookup.
pub trait ReverseCodec: Codec {
    /// Offset where the last record in `buf` starts. `buf` must end on a
    /// record boundary; an empty `buf` has no predecessor and yields 0.
    fn previous_boundary(&self, buf: &[u8]) -> usize;

    /// Decode the record ending at `buf.len()` and report its length.
    /// An empty `buf` yields the default value with length 0.
    fn read_backward(&self, buf: &[u8]) -> (Self::Value, usize);
}
