//! Vector-to-vector operations for `BitVector`.
//!
//! Operands may have different capacities. Words missing from the shorter
//! operand count as zero, and only the significant (non-zero) part of a
//! result has to fit in the destination.

use crate::{
    BitVector,
    macros::event,
    storage::{Word, rtrim0},
    traits::SizeMismatchError,
};

impl BitVector {
    /// Copies every word of `src` into `self`.
    ///
    /// # Panics
    ///
    /// Panics if the two vectors have different word counts.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rt_bitvector::BitVector;
    /// let mut src = BitVector::fixed(64);
    /// src.set_bit(40);
    /// let mut dest = BitVector::fixed(64);
    /// dest.set_bit(1);
    ///
    /// dest.copy_from(&src);
    /// assert!(dest.is_bit_set(40));
    /// assert!(!dest.is_bit_set(1));
    /// ```
    #[track_caller]
    pub fn copy_from(&mut self, src: &Self) {
        if self.word_count() != src.word_count() {
            event!(
                error,
                dest_words = self.word_count(),
                src_words = src.word_count(),
                "mismatched bit vector sizes"
            );
            panic!(
                "copy_from: mismatched bit vector sizes ({} words, {} words)",
                self.word_count(),
                src.word_count()
            );
        }
        self.words.copy_from_slice(&src.words);
    }

    /// Stores `src1 & src2` into `self`.
    ///
    /// Words past the shorter operand are treated as zero, so every bit of
    /// `self` beyond the common range is cleared.
    ///
    /// # Errors
    ///
    /// Returns [`SizeMismatchError`] if `self` is fixed and too small to hold
    /// the set bits of the intersection. `self` is not modified in that case.
    /// A growable `self` grows instead.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rt_bitvector::BitVector;
    /// let a: BitVector = [1, 5, 9].into_iter().collect();
    /// let b: BitVector = [5, 9, 12].into_iter().collect();
    ///
    /// let mut dest = BitVector::fixed(32);
    /// dest.intersect(&a, &b)?;
    /// assert_eq!(dest.iter().collect::<Vec<_>>(), vec![5, 9]);
    /// # Ok::<(), rt_bitvector::SizeMismatchError>(())
    /// ```
    pub fn intersect(&mut self, src1: &Self, src2: &Self) -> Result<(), SizeMismatchError> {
        let common = src1.word_count().min(src2.word_count());
        let (a, b) = (&src1.words[..common], &src2.words[..common]);
        let required = a
            .iter()
            .zip(b)
            .rposition(|(x, y)| x & y != 0)
            .map_or(0, |i| i + 1);
        self.ensure_words(required)?;

        for (i, dst) in self.words.iter_mut().enumerate() {
            *dst = if i < common { a[i] & b[i] } else { 0 };
        }
        Ok(())
    }

    /// Stores `src1 | src2` into `self`.
    ///
    /// Words past the shorter operand are treated as zero.
    ///
    /// # Errors
    ///
    /// Returns [`SizeMismatchError`] if `self` is fixed and too small to hold
    /// the set bits of the union. `self` is not modified in that case. A
    /// growable `self` grows instead.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rt_bitvector::BitVector;
    /// let mut a = BitVector::fixed(32);
    /// a.set_bit(3);
    /// let mut b = BitVector::fixed(96);
    /// b.set_bit(70);
    ///
    /// let mut small = BitVector::fixed(32);
    /// assert!(small.unify(&a, &b).is_err());
    /// assert!(small.is_empty());
    ///
    /// let mut dest = BitVector::growable(0);
    /// dest.unify(&a, &b)?;
    /// assert_eq!(dest.iter().collect::<Vec<_>>(), vec![3, 70]);
    /// # Ok::<(), rt_bitvector::SizeMismatchError>(())
    /// ```
    pub fn unify(&mut self, src1: &Self, src2: &Self) -> Result<(), SizeMismatchError> {
        let (a, b) = (src1.as_words_rtrim(), src2.as_words_rtrim());
        self.ensure_words(a.len().max(b.len()))?;

        for (i, dst) in self.words.iter_mut().enumerate() {
            *dst = word_at(a, i) | word_at(b, i);
        }
        Ok(())
    }

    /// Merges `src` into `self` (`self |= src`) and reports whether any bit
    /// of `self` went from 0 to 1.
    ///
    /// This is the step function of a fixed-point iteration: once every
    /// merge returns `Ok(false)` the analysis has converged. Growing `self`
    /// does not by itself count as a change.
    ///
    /// # Errors
    ///
    /// Returns [`SizeMismatchError`] if `self` is fixed and cannot hold the
    /// set bits of `src`. `self` is not modified in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rt_bitvector::BitVector;
    /// let mut live_in = BitVector::growable(32);
    /// let mut succ = BitVector::growable(32);
    /// succ.set_bit(4);
    ///
    /// assert_eq!(live_in.merge_checked(&succ), Ok(true));
    /// assert_eq!(live_in.merge_checked(&succ), Ok(false));
    /// ```
    pub fn merge_checked(&mut self, src: &Self) -> Result<bool, SizeMismatchError> {
        let src = src.as_words_rtrim();
        self.ensure_words(src.len())?;

        let mut changed = false;
        for (dst, &s) in self.words.iter_mut().zip(src) {
            let merged = *dst | s;
            if merged != *dst {
                *dst = merged;
                changed = true;
            }
        }
        Ok(changed)
    }

    /// Intersects `self` with `src` in place (`self &= src`) and reports
    /// whether any bit of `self` went from 1 to 0.
    ///
    /// Bits of `self` past the end of `src` are cleared. This is the
    /// counterpart of [`merge_checked`](Self::merge_checked) for analyses
    /// that meet with intersection, such as dominators. The result never
    /// needs more room than `self` already has, so it cannot fail.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rt_bitvector::BitVector;
    /// let mut dom = BitVector::fixed(32);
    /// dom.set_initial_bits(8);
    /// let mut pred = BitVector::fixed(32);
    /// pred.set_bit(0);
    /// pred.set_bit(2);
    ///
    /// assert!(dom.intersect_checked(&pred));
    /// assert!(!dom.intersect_checked(&pred));
    /// assert_eq!(dom.count_set_bits(), 2);
    /// ```
    pub fn intersect_checked(&mut self, src: &Self) -> bool {
        let mut changed = false;
        for (i, dst) in self.words.iter_mut().enumerate() {
            let met = *dst & word_at(&src.words, i);
            if met != *dst {
                *dst = met;
                changed = true;
            }
        }
        changed
    }

    /// Returns `true` if any bit differs between `self` and `other`.
    ///
    /// Capacities may differ: words past the end of the shorter vector only
    /// count as a difference if they hold set bits. Growability is not
    /// compared.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rt_bitvector::BitVector;
    /// let mut a = BitVector::fixed(32);
    /// let mut b = BitVector::growable(128);
    /// a.set_bit(7);
    /// b.set_bit(7);
    /// assert!(!a.differs(&b));
    ///
    /// b.set_bit(100);
    /// assert!(a.differs(&b));
    /// ```
    #[must_use]
    pub fn differs(&self, other: &Self) -> bool {
        rtrim0(&self.words) != rtrim0(&other.words)
    }
}

#[inline(always)]
fn word_at(words: &[Word], i: usize) -> Word {
    words.get(i).copied().unwrap_or(0)
}
