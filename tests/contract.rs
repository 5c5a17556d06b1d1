//! Calls outside a vector's contract panic instead of corrupting memory.

use rt_bitvector::BitVector;

#[test]
#[should_panic(expected = "set_bit: bit 32 out of range")]
fn test_set_bit_past_fixed_capacity() {
    let mut bits = BitVector::fixed(32);
    bits.set_bit(32);
}

#[test]
#[should_panic(expected = "clear_bit: bit 64 out of range")]
fn test_clear_bit_past_capacity() {
    let mut bits = BitVector::fixed(64);
    bits.clear_bit(64);
}

#[test]
#[should_panic(expected = "clear_bit")]
fn test_clear_bit_past_growable_capacity() {
    let mut bits = BitVector::growable(32);
    bits.clear_bit(100);
}

#[test]
#[should_panic(expected = "is_bit_set: bit 96 out of range")]
fn test_is_bit_set_past_capacity() {
    let bits = BitVector::growable(96);
    let _ = bits.is_bit_set(96);
}

#[test]
#[should_panic(expected = "set_initial_bits: bit 33 out of range")]
fn test_set_initial_bits_past_capacity() {
    let mut bits = BitVector::growable(32);
    bits.set_initial_bits(33);
}

#[test]
#[should_panic(expected = "copy_from: mismatched bit vector sizes (1 words, 2 words)")]
fn test_copy_from_mismatched_sizes() {
    let mut dest = BitVector::fixed(32);
    let src = BitVector::fixed(64);
    dest.copy_from(&src);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_extend_fixed_vector_past_capacity() {
    let mut bits = BitVector::fixed(32);
    bits.extend([1, 2, 40]);
}

#[test]
fn test_growable_set_bit_does_not_panic() {
    let mut bits = BitVector::growable(0);
    bits.set_bit(12_345);
    assert!(bits.is_bit_set(12_345));
}
