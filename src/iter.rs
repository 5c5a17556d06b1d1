//! Iterator over the set bits of a `BitVector`.

use core::iter::{FromIterator, FusedIterator};

use crate::{
    BitVector,
    macros::bitpos,
    storage::{WORD_BITS, Word},
};

/// An iterator over the positions of set bits in a [`BitVector`].
///
/// Created by [`BitVector::iter`]. Positions are yielded in strictly
/// increasing order; once exhausted the iterator keeps returning `None`.
/// The bit capacity is captured when the iterator is created, and the
/// borrow keeps the vector from being modified while the iterator lives.
///
/// # Examples
///
/// ```
/// use rt_bitvector::BitVector;
/// let mut bits = BitVector::growable(0);
/// bits.set_bit(5);
/// bits.set_bit(70);
///
/// let positions: Vec<_> = bits.iter().collect();
/// assert_eq!(positions, vec![5, 70]);
/// ```
#[derive(Clone)]
pub struct Iter<'a> {
    words: &'a [Word],
    idx: usize,      // next bit position to inspect
    bit_size: usize, // capacity at creation
}

impl<'a> Iter<'a> {
    pub(crate) fn new(words: &'a [Word]) -> Self {
        Self {
            words,
            idx: 0,
            bit_size: words.len() * WORD_BITS,
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < self.bit_size {
            let (mut wi, bi) = bitpos!(self.idx);

            let word = self.words[wi] >> bi;
            if word == 0 {
                // Skip runs of empty words in one go
                wi += 1;
                while wi < self.words.len() && self.words[wi] == 0 {
                    wi += 1;
                }
                self.idx = wi * WORD_BITS;
                continue;
            }

            let pos = self.idx + word.trailing_zeros() as usize;
            self.idx = pos + 1;
            return Some(pos);
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Iter<'_> {
    fn len(&self) -> usize {
        if self.idx >= self.bit_size {
            return 0;
        }
        let (wi, bi) = bitpos!(self.idx);
        let head = (self.words[wi] >> bi).count_ones() as usize;
        let tail: usize = self.words[wi + 1..]
            .iter()
            .map(|w| w.count_ones() as usize)
            .sum();
        head + tail
    }
}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a BitVector {
    type IntoIter = Iter<'a>;
    type Item = usize;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<usize> for BitVector {
    /// Collects positions into a growable vector.
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut bits = Self::growable(0);
        bits.extend(iter);
        bits
    }
}

impl Extend<usize> for BitVector {
    /// Sets every yielded position, with the same growth and panic rules as
    /// [`BitVector::set_bit`].
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for bit in iter {
            self.set_bit(bit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_tracks_cursor_inside_a_word() {
        let words = [0b1011, 1 << 31, 0, 1];
        let mut it = Iter::new(&words);
        assert_eq!(it.len(), 5);
        assert_eq!(it.next(), Some(0));
        assert_eq!(it.len(), 4);
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), Some(3));
        assert_eq!(it.len(), 2);
        assert_eq!(it.next(), Some(63));
        assert_eq!(it.next(), Some(96));
        assert_eq!(it.len(), 0);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn empty_storage_ends_immediately() {
        let mut it = Iter::new(&[]);
        assert_eq!(it.len(), 0);
        assert_eq!(it.next(), None);
    }
}
