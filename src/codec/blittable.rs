//! Fixed-width codec for plain-old-data values.

use std::marker::PhantomData;
use std::mem;

use bytemuck::{Pod, Zeroable};

use crate::codec::{Codec, ReverseCodec};

/// Codec for `bytemuck::Pod` types, stored as their in-memory bytes.
///
/// Every record is exactly `size_of::<T>()` bytes, which makes the codec
/// trivially delimited in both directions. Byte-equality matches
/// value-equality for types whose `Eq` is bitwise (the integer types);
/// byte order does not match value order (little-endian layout).
///
/// Zero-sized types are not supported: records must occupy at least one
/// byte.
pub struct Blittable<T>(PhantomData<T>);

impl<T> Blittable<T> {
    /// Create the codec.
    pub const fn new() -> Self {
        Self(PhantomData)
    }

    #[inline]
    fn len() -> usize {
        mem::size_of::<T>()
    }
}

impl<T> Default for Blittable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Blittable<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Copy for Blittable<T> {}

impl<T> std::fmt::Debug for Blittable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Blittable<{}>", std::any::type_name::<T>())
    }
}

impl<T: Pod> Codec for Blittable<T> {
    type Value = T;

    const EQUALITY_PRESERVING: bool = true;
    const ORDER_PRESERVING: bool = false;

    #[inline]
    fn encoded_len(&self, _value: &T) -> usize {
        Self::len()
    }

    #[inline]
    fn encode_into(&self, value: &T, dst: &mut [u8]) {
        dst[..Self::len()].copy_from_slice(bytemuck::bytes_of(value));
    }

    #[inline]
    fn record_len(&self, buf: &[u8]) -> usize {
        debug_assert!(buf.len() >= Self::len());
        Self::len()
    }

    #[inline]
    fn try_record_len(&self, buf: &[u8]) -> Option<usize> {
        let len = Self::len();
        (len > 0 && buf.len() >= len).then_some(len)
    }

    #[inline]
    fn decode(&self, buf: &[u8]) -> T {
        bytemuck::pod_read_unaligned(&buf[..Self::len()])
    }
}

impl<T: Pod> ReverseCodec for Blittable<T> {
    #[inline]
    fn previous_boundary(&self, buf: &[u8]) -> usize {
        if buf.is_empty() {
            return 0;
        }
        buf.len() - Self::len()
    }

    #[inline]
    fn read_backward(&self, buf: &[u8]) -> (T, usize) {
        if buf.is_empty() {
            return (T::zeroed(), 0);
        }
        let start = buf.len() - Self::len();
        (self.decode(&buf[start..]), Self::len())
    }
}
