//! Word-level storage for the bit vector.

use alloc::{boxed::Box, vec};
use core::ops::{Deref, DerefMut};

/// The unsigned storage unit bits are packed into.
pub type Word = u32;

/// Number of bit positions held by one [`Word`].
pub const WORD_BITS: usize = Word::BITS as usize;

/// Number of whole words needed to address `bits` bit positions.
#[inline(always)]
pub(crate) const fn words_for_bits(bits: usize) -> usize {
    bits.div_ceil(WORD_BITS)
}

/// Mask covering the low `n` bits of a word. `n` must be below `WORD_BITS`.
#[inline(always)]
pub(crate) const fn low_mask(n: usize) -> Word {
    debug_assert!(n < WORD_BITS);
    (1 << n) - 1
}

/// Removes trailing zero words from a slice.
///
/// Two vectors hold the same set of bits exactly when their trimmed slices
/// are equal, whatever their capacities.
#[inline(always)]
pub(crate) const fn rtrim0(mut slice: &[Word]) -> &[Word] {
    while let [rest @ .., 0] = slice {
        slice = rest;
    }
    slice
}

/// Owned, exclusively held word buffer.
///
/// The buffer is never shared between vectors: cloning copies the words.
#[derive(Clone, Default, PartialEq, Eq)]
pub(crate) struct WordBuf(Box<[Word]>);

impl WordBuf {
    /// Allocates `len` zeroed words.
    pub(crate) fn zeroed(len: usize) -> Self {
        Self(vec![0; len].into_boxed_slice())
    }

    /// Replaces the buffer with a zero-extended copy of `new_len` words.
    ///
    /// The new buffer is fully built before the old one is released, so an
    /// allocation failure (which aborts) never leaves a half-grown buffer
    /// behind.
    pub(crate) fn grow_to(&mut self, new_len: usize) {
        debug_assert!(new_len > self.0.len(), "grow_to must increase the length");
        let mut grown = vec![0; new_len];
        grown[..self.0.len()].copy_from_slice(&self.0);
        self.0 = grown.into_boxed_slice();
    }
}

impl Deref for WordBuf {
    type Target = [Word];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for WordBuf {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
