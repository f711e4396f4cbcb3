//! Tape integration tests.
//!
//! Exercises the public surface end to end: the reference varint codec,
//! forward/backward iteration, growth, insertion, erasure, splicing,
//! equality and ordering, and the encoded-bytes boundary.

use vartape::{
    Blittable, Codec, Cursor, EncodingError, Position, PrefixedBytes, ReverseCodec, ReverseCursor,
    Tape, Varint,
};

// ============ Codec scenarios ============

#[test]
fn test_varint_reference_encoding() {
    let mut buf = vec![0u8; Varint.encoded_len(&300)];
    Varint.encode_into(&300, &mut buf);
    assert_eq!(buf, vec![0xAC, 0x02]);
    assert_eq!(Varint.record_len(&buf), 2);
    assert_eq!(Varint.decode(&buf), 300);
}

#[test]
fn test_varint_round_trip_boundaries() {
    let mut samples = vec![0u64, u64::MAX];
    for bits in [7u32, 14, 21, 28, 35, 42, 49, 56, 63] {
        let edge = 1u64 << bits;
        samples.extend([edge - 1, edge, edge + 1]);
    }
    for v in samples {
        let len = Varint.encoded_len(&v);
        let mut buf = vec![0u8; len];
        Varint.encode_into(&v, &mut buf);
        assert_eq!(Varint.record_len(&buf), len, "size mismatch for {v}");
        assert_eq!(Varint.decode(&buf), v, "decode mismatch for {v}");
        assert_eq!(Varint.read_backward(&buf), (v, len), "backward mismatch for {v}");
    }
}

// ============ Tape scenarios ============

#[test]
fn test_iterate_both_directions() {
    let tape: Tape = Tape::from_values(&[1, 130, 70_000]);
    assert_eq!(tape.len(), 3);
    assert_eq!(tape.iter().collect::<Vec<_>>(), vec![1, 130, 70_000]);
    assert_eq!(tape.iter().rev().collect::<Vec<_>>(), vec![70_000, 130, 1]);
}

#[test]
fn test_bulk_and_pushed_tapes_compare_equal() {
    let bulk: Tape = Tape::from_values(&[5, 6, 7]);
    let mut pushed: Tape = Tape::new();
    pushed.push(5);
    pushed.push(6);
    pushed.push(7);
    assert_eq!(bulk, pushed);
}

#[test]
fn test_erase_middle_element() {
    let mut tape: Tape = Tape::from_values(&[10, 20, 30]);
    tape.erase(tape.locate(1)..tape.locate(2));
    assert_eq!(tape.len(), 2);
    assert_eq!(tape.iter().collect::<Vec<_>>(), vec![10, 30]);
}

#[test]
fn test_insert_at_front() {
    let mut tape: Tape = Tape::from_values(&[1, 2]);
    tape.insert(Position::START, &[99]);
    assert_eq!(tape.len(), 3);
    assert_eq!(tape.iter().collect::<Vec<_>>(), vec![99, 1, 2]);
}

#[test]
fn test_empty_tape() {
    let tape: Tape = Tape::new();
    assert_eq!(tape.len(), 0);
    assert!(tape.is_empty());
    assert_eq!(tape.byte_len(), 0);
    assert_eq!(tape.byte_capacity(), 0);
    assert_eq!(tape.iter().next(), None);
}

// ============ Properties ============

#[test]
fn test_forward_backward_symmetry_at_every_boundary() {
    let values = [1u64, 300, 70_000, 0, u64::MAX, 127, 128];
    let tape: Tape = Tape::from_values(&values);
    let mut cursor = tape.iter();
    for expected in values {
        let here = cursor.location();
        let value = cursor.peek();
        assert_eq!(value, Some(expected));
        assert!(cursor.advance());
        assert!(cursor.retreat());
        assert_eq!(cursor.location(), here);
        assert_eq!(cursor.peek(), Some(expected));
        cursor.advance();
    }
    assert!(!cursor.advance());
}

#[test]
fn test_capacity_monotone_under_growth() {
    let mut tape: Tape = Tape::new();
    let mut last_capacity = 0;
    for v in 0..200u64 {
        tape.push(v * 997);
        assert!(tape.byte_capacity() >= last_capacity);
        last_capacity = tape.byte_capacity();
    }
    assert_eq!(tape.len(), 200);
}

#[test]
fn test_erase_insert_inverse_is_byte_identical() {
    let original: Tape = Tape::from_values(&[10, 300, 70_000, 40]);
    let mut tape = original.clone();
    let range = tape.locate(1)..tape.locate(3);
    tape.erase(range);
    assert_eq!(tape.iter().collect::<Vec<_>>(), vec![10, 40]);
    tape.insert(tape.locate(1), &[300, 70_000]);
    assert_eq!(tape, original);
    assert_eq!(tape.as_encoded(), original.as_encoded());
}

#[test]
fn test_equality_uses_bytes_for_canonical_codec() {
    // Same length in elements, different bytes: unequal without decoding.
    let a: Tape = Tape::from_values(&[1, 2]);
    let b: Tape = Tape::from_values(&[1, 300]);
    assert!(Varint::EQUALITY_PRESERVING);
    assert_ne!(a, b);
    assert_ne!(a.byte_len(), b.byte_len());
}

#[test]
fn test_ordering_is_by_decoded_values() {
    // Byte-lexicographic order would put [300] before [5] (0xAC < 0x05 is
    // false, but multi-byte encodings reorder); decoded order must win.
    let small: Tape = Tape::from_values(&[5]);
    let large: Tape = Tape::from_values(&[300]);
    assert!(small < large);

    let prefix: Tape = Tape::from_values(&[5]);
    let longer: Tape = Tape::from_values(&[5, 0]);
    assert!(prefix < longer);
}

// ============ Splicing and positions ============

#[test]
fn test_splice_between_tapes() {
    let source: Tape = Tape::from_values(&[100, 200, 300]);
    let mut target: Tape = Tape::from_values(&[1, 2]);
    let range = source.locate(0)..source.locate(2);
    let inserted = target.splice(target.locate(1), &source, range);
    assert_eq!(target.iter().collect::<Vec<_>>(), vec![1, 100, 200, 2]);
    assert_eq!(target.len(), 4);
    assert_eq!(inserted.start, target.locate(1));
    assert_eq!(inserted.end, target.locate(3));
}

#[test]
fn test_erase_suffix_then_empty() {
    let mut tape: Tape = Tape::from_values(&[1, 2, 3]);
    let after = tape.erase(tape.locate(2)..tape.end());
    assert_eq!(after, Some(tape.end()));
    assert_eq!(tape.len(), 2);
    assert_eq!(tape.erase(tape.start()..tape.end()), None);
    assert!(tape.is_empty());
    assert_eq!(tape.byte_capacity(), 0);
}

// ============ Encoded-bytes boundary ============

#[test]
fn test_encoded_bytes_round_trip() {
    let tape: Tape = Tape::from_values(&[1, 130, 70_000]);
    let restored: Tape = Tape::from_encoded(tape.as_encoded()).unwrap();
    assert_eq!(restored, tape);
    assert_eq!(restored.check_integrity(), Ok(()));
}

#[test]
fn test_from_encoded_rejects_unterminated_record() {
    let tape: Tape = Tape::from_values(&[1, 70_000]);
    let bytes = tape.as_encoded();
    // Drop the final byte: the last record's continuation chain no longer
    // terminates inside the region.
    let truncated = &bytes[..bytes.len() - 1];
    assert_eq!(
        Tape::<Varint>::from_encoded(truncated),
        Err(EncodingError::UnterminatedRecord { offset: 1 })
    );
}

#[test]
fn test_from_encoded_empty_region() {
    let tape: Tape = Tape::from_encoded(&[]).unwrap();
    assert!(tape.is_empty());
    assert_eq!(tape.byte_capacity(), 0);
}

// ============ Other codecs ============

#[test]
fn test_blittable_tape_is_bidirectional() {
    let tape: Tape<Blittable<u32>> = Tape::from_values(&[7, 8, 9]);
    assert_eq!(tape.byte_len(), 12);
    assert_eq!(tape.iter().collect::<Vec<_>>(), vec![7, 8, 9]);
    assert_eq!(tape.iter().rev().collect::<Vec<_>>(), vec![9, 8, 7]);
}

#[test]
fn test_prefixed_bytes_tape() {
    let values = [b"tape".to_vec(), Vec::new(), vec![0u8; 150]];
    let mut tape: Tape<PrefixedBytes> = Tape::from_values(&values);
    assert_eq!(tape.len(), 3);
    assert_eq!(tape.iter().collect::<Vec<_>>(), values.to_vec());

    tape.erase(tape.locate(1)..tape.locate(2));
    assert_eq!(
        tape.iter().collect::<Vec<_>>(),
        vec![b"tape".to_vec(), vec![0u8; 150]]
    );

    let restored = Tape::<PrefixedBytes>::from_encoded(tape.as_encoded()).unwrap();
    assert_eq!(restored, tape);
}
