//! `BitVector` struct and single-bit operations.

use crate::{
    iter::Iter,
    macros::{bitpos, event},
    storage::{WORD_BITS, Word, WordBuf, low_mask, rtrim0, words_for_bits},
    traits::SizeMismatchError,
};

/// A word-packed bit vector over positions `0..capacity`.
///
/// # Overview
///
/// Bits are stored in an owned array of 32-bit [`Word`]s, so the capacity
/// is always a multiple of [`WORD_BITS`]. Whether the vector may grow is
/// fixed at construction:
///
/// - A **growable** vector reallocates on demand when a bit past its
///   capacity is set or allocated, or when an aggregate operation needs room
///   for its result.
/// - A **fixed** vector never changes size. Addressing a bit past its
///   capacity is a contract violation and panics.
///
/// # Examples
///
/// ```
/// use rt_bitvector::BitVector;
///
/// let mut regs = BitVector::fixed(32);
/// assert_eq!(regs.allocate_first_clear_bit(), Some(0));
/// assert_eq!(regs.allocate_first_clear_bit(), Some(1));
/// regs.clear_bit(0);
/// assert_eq!(regs.allocate_first_clear_bit(), Some(0));
/// assert_eq!(regs.count_set_bits(), 2);
/// ```
#[derive(Clone)]
pub struct BitVector {
    pub(crate) words: WordBuf,
    growable: bool,
}

impl BitVector {
    /// Creates a zeroed vector with room for at least `initial_bits` bits.
    ///
    /// The capacity is `initial_bits` rounded up to whole words.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rt_bitvector::BitVector;
    /// let bits = BitVector::new(40, false);
    /// assert_eq!(bits.capacity(), 64);
    /// assert_eq!(bits.word_count(), 2);
    /// assert!(!bits.is_growable());
    /// ```
    #[must_use]
    pub fn new(initial_bits: usize, growable: bool) -> Self {
        Self {
            words: WordBuf::zeroed(words_for_bits(initial_bits)),
            growable,
        }
    }

    /// Creates a fixed-capacity vector. See [`new`](Self::new).
    #[must_use]
    pub fn fixed(bits: usize) -> Self {
        Self::new(bits, false)
    }

    /// Creates a growable vector. See [`new`](Self::new).
    #[must_use]
    pub fn growable(bits: usize) -> Self {
        Self::new(bits, true)
    }

    /// Returns `true` if the vector grows on demand.
    #[must_use]
    #[inline(always)]
    pub const fn is_growable(&self) -> bool {
        self.growable
    }

    /// Number of words currently allocated.
    #[must_use]
    #[inline(always)]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of addressable bits, always a multiple of [`WORD_BITS`].
    #[must_use]
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.words.len() * WORD_BITS
    }

    /// The storage words, lowest positions first.
    #[must_use]
    pub fn as_words(&self) -> &[Word] {
        &self.words
    }

    /// The storage words with trailing zero words removed.
    pub(crate) fn as_words_rtrim(&self) -> &[Word] {
        rtrim0(&self.words)
    }

    /// Finds the lowest clear bit, sets it, and returns its position.
    ///
    /// When every bit is set, a growable vector grows by at least one word
    /// and hands out the first new position (the old capacity). A full fixed
    /// vector returns `None` and is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rt_bitvector::BitVector;
    /// let mut fixed = BitVector::fixed(32);
    /// fixed.set_initial_bits(32);
    /// assert_eq!(fixed.allocate_first_clear_bit(), None);
    ///
    /// let mut growable = BitVector::growable(32);
    /// growable.set_initial_bits(32);
    /// assert_eq!(growable.allocate_first_clear_bit(), Some(32));
    /// assert!(growable.capacity() >= 64);
    /// ```
    pub fn allocate_first_clear_bit(&mut self) -> Option<usize> {
        if let Some(wi) = self.words.iter().position(|&w| w != Word::MAX) {
            let bi = (!self.words[wi]).trailing_zeros() as usize;
            self.words[wi] |= 1 << bi;
            return Some(wi * WORD_BITS + bi);
        }

        if !self.growable {
            return None;
        }

        let bit = self.capacity();
        self.grow_to_cover(bit);
        let (wi, bi) = bitpos!(bit);
        self.words[wi] |= 1 << bi;
        Some(bit)
    }

    /// Sets bit `n`, growing a growable vector to cover it if needed.
    ///
    /// # Panics
    ///
    /// Panics if the vector is fixed and `n >= self.capacity()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rt_bitvector::BitVector;
    /// let mut bits = BitVector::growable(16);
    /// bits.set_bit(40);
    /// assert!(bits.is_bit_set(40));
    /// assert!(bits.capacity() > 40);
    /// ```
    #[track_caller]
    pub fn set_bit(&mut self, n: usize) {
        if n >= self.capacity() {
            if !self.growable {
                out_of_range("set_bit", n, self.capacity());
            }
            self.grow_to_cover(n);
        }
        let (wi, bi) = bitpos!(n);
        self.words[wi] |= 1 << bi;
    }

    /// Clears bit `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n >= self.capacity()`, growable or not.
    #[track_caller]
    pub fn clear_bit(&mut self, n: usize) {
        self.check_index("clear_bit", n);
        let (wi, bi) = bitpos!(n);
        self.words[wi] &= !(1 << bi);
    }

    /// Clears every bit. The capacity is unchanged.
    pub fn clear_all(&mut self) {
        self.words.fill(0);
    }

    /// Sets bits `0..num_bits`, leaving all other bits as they are.
    ///
    /// This never grows the vector; it is meant for seeding a freshly sized
    /// one.
    ///
    /// # Panics
    ///
    /// Panics if `num_bits > self.capacity()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rt_bitvector::BitVector;
    /// let mut bits = BitVector::fixed(64);
    /// bits.set_initial_bits(35);
    /// assert_eq!(bits.count_set_bits(), 35);
    /// assert!(bits.is_bit_set(34));
    /// assert!(!bits.is_bit_set(35));
    /// ```
    #[track_caller]
    pub fn set_initial_bits(&mut self, num_bits: usize) {
        if num_bits > self.capacity() {
            out_of_range("set_initial_bits", num_bits, self.capacity());
        }
        let (full, rem) = bitpos!(num_bits);
        self.words[..full].fill(Word::MAX);
        if rem != 0 {
            self.words[full] |= low_mask(rem);
        }
    }

    /// Returns whether bit `n` is set.
    ///
    /// # Panics
    ///
    /// Panics if `n >= self.capacity()`. Use [`contains`](Self::contains)
    /// for a lookup that treats positions past the end as clear.
    #[must_use]
    #[track_caller]
    pub fn is_bit_set(&self, n: usize) -> bool {
        self.check_index("is_bit_set", n);
        let (wi, bi) = bitpos!(n);
        (self.words[wi] >> bi) & 1 != 0
    }

    /// Returns whether bit `n` is set, treating positions past the capacity
    /// as clear.
    #[must_use]
    #[inline]
    pub fn contains(&self, n: usize) -> bool {
        let (wi, bi) = bitpos!(n);
        self.words.get(wi).is_some_and(|w| (w >> bi) & 1 != 0)
    }

    /// Returns the number of set bits.
    ///
    /// Time complexity: O(n) where n is the number of words.
    #[must_use]
    pub fn count_set_bits(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns `true` if no bit is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Returns an iterator over the positions of set bits, in increasing
    /// order.
    ///
    /// The iterator borrows the vector, so the vector cannot be grown or
    /// modified while it is alive.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rt_bitvector::BitVector;
    /// let mut bits = BitVector::fixed(64);
    /// for n in [0, 3, 31, 32] {
    ///     bits.set_bit(n);
    /// }
    /// let mut it = bits.iter();
    /// assert_eq!(it.next(), Some(0));
    /// assert_eq!(it.next(), Some(3));
    /// assert_eq!(it.next(), Some(31));
    /// assert_eq!(it.next(), Some(32));
    /// assert_eq!(it.next(), None);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.words)
    }

    /// Makes room for at least `required_words` words.
    ///
    /// Fixed vectors are never resized; if they are too small the error is
    /// returned and nothing is touched.
    pub(crate) fn ensure_words(
        &mut self,
        required_words: usize,
    ) -> Result<(), SizeMismatchError> {
        let available_words = self.word_count();
        if required_words <= available_words {
            return Ok(());
        }
        if !self.growable {
            event!(
                debug,
                required_words,
                available_words,
                "fixed bit vector too small for result"
            );
            return Err(SizeMismatchError {
                required_words,
                available_words,
            });
        }
        self.grow_words(required_words);
        Ok(())
    }

    /// Grows a growable vector so that bit `n` is addressable.
    #[inline]
    fn grow_to_cover(&mut self, n: usize) {
        debug_assert!(self.growable);
        self.grow_words(n / WORD_BITS + 1);
    }

    /// Grows to the next power of two of `required_words`, so a run of
    /// increasing indices reallocates a logarithmic number of times.
    #[cold]
    fn grow_words(&mut self, required_words: usize) {
        let new_words = required_words.next_power_of_two();
        debug_assert!(new_words > self.word_count());
        event!(
            debug,
            old_words = self.word_count(),
            new_words,
            "growing bit vector"
        );
        self.words.grow_to(new_words);
    }

    #[inline(always)]
    #[track_caller]
    fn check_index(&self, op: &'static str, n: usize) {
        if n >= self.capacity() {
            out_of_range(op, n, self.capacity());
        }
    }
}

/// Reports an access outside the vector's capacity. This is a caller bug,
/// so it never returns.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn out_of_range(op: &'static str, index: usize, capacity: usize) -> ! {
    event!(error, op, index, capacity, "bit index out of range");
    panic!("{op}: bit {index} out of range for bit vector of {capacity} bits");
}
