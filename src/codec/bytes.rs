//! Length-prefixed byte-string codec.

use crate::codec::{Codec, Varint};

/// Codec for byte strings, stored as a varint length prefix followed by
/// the payload.
///
/// ## Format
///
/// ```text
/// [length: varint][payload: length bytes]
/// ```
///
/// The prefix delimits records from the front only, so this codec does not
/// support backward decoding and tapes using it iterate forward only.
/// Encodings are canonical (the prefix is a canonical varint), so
/// byte-equality matches value-equality; byte order does not match
/// lexicographic value order because the prefix compares before the
/// payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrefixedBytes;

impl Codec for PrefixedBytes {
    type Value = Vec<u8>;

    const EQUALITY_PRESERVING: bool = true;
    const ORDER_PRESERVING: bool = false;

    fn encoded_len(&self, value: &Vec<u8>) -> usize {
        Varint.encoded_len(&(value.len() as u64)) + value.len()
    }

    fn encode_into(&self, value: &Vec<u8>, dst: &mut [u8]) {
        let prefix = Varint.encoded_len(&(value.len() as u64));
        Varint.encode_into(&(value.len() as u64), dst);
        dst[prefix..prefix + value.len()].copy_from_slice(value);
    }

    fn record_len(&self, buf: &[u8]) -> usize {
        let (payload, prefix) = Varint.read(buf);
        prefix + payload as usize
    }

    fn try_record_len(&self, buf: &[u8]) -> Option<usize> {
        let prefix = Varint.try_record_len(buf)?;
        let payload = Varint.decode(&buf[..prefix]);
        let total = prefix.checked_add(usize::try_from(payload).ok()?)?;
        (total <= buf.len()).then_some(total)
    }

    fn decode(&self, buf: &[u8]) -> Vec<u8> {
        let (payload, prefix) = Varint.read(buf);
        buf[prefix..prefix + payload as usize].to_vec()
    }

    fn read(&self, buf: &[u8]) -> (Vec<u8>, usize) {
        let (payload, prefix) = Varint.read(buf);
        let total = prefix + payload as usize;
        (buf[prefix..total].to_vec(), total)
    }
}
