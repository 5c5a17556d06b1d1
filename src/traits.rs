//! Error types and trait implementations for `BitVector`.

use core::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use crate::{
    BitVector,
    storage::{WORD_BITS, Word},
};

/// Error returned when a fixed destination is too small to hold the result
/// of an aggregate operation.
///
/// Returned by [`BitVector::intersect`], [`BitVector::unify`] and
/// [`BitVector::merge_checked`]. The destination is left unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeMismatchError {
    /// Words the result needs
    pub required_words: usize,
    /// Words the destination has
    pub available_words: usize,
}

impl fmt::Display for SizeMismatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "result needs {} words but the fixed destination has {}",
            self.required_words, self.available_words
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SizeMismatchError {}

/// Errors that can occur when parsing a binary string into a [`BitVector`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBitVectorError {
    /// Invalid character found in the binary string.
    InvalidChar {
        /// The invalid character found
        ch: char,
        /// The position of the invalid character
        pos: usize,
    },

    /// Empty string provided.
    Empty,
}

impl fmt::Display for ParseBitVectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChar { ch, pos } => {
                write!(
                    f,
                    "invalid character '{ch}' at position {pos} in binary string"
                )
            }
            Self::Empty => write!(f, "cannot parse bit vector from empty string"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseBitVectorError {}

impl Default for BitVector {
    /// An empty growable vector.
    fn default() -> Self {
        Self::growable(0)
    }
}

impl AsRef<[Word]> for BitVector {
    fn as_ref(&self) -> &[Word] {
        self.as_words()
    }
}

impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(self, f)
    }
}

impl fmt::Binary for BitVector {
    /// Formats the set bits as a binary string, highest position first.
    ///
    /// Trailing zero words are omitted, so vectors that compare equal print
    /// the same.
    ///
    /// # Examples
    ///
    /// ```
    /// use rt_bitvector::BitVector;
    /// let bits: BitVector = [0, 2].into_iter().collect();
    /// assert_eq!(format!("{bits}"), "101");
    /// assert_eq!(format!("{bits:#b}"), "0b101");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [rem @ .., hi] = self.as_words_rtrim() else {
            return f.write_str(if f.alternate() { "0b0" } else { "0" });
        };

        if f.alternate() {
            write!(f, "0b{hi:b}")?;
        } else {
            write!(f, "{hi:b}")?;
        }
        for word in rem.iter().rev() {
            write!(f, "{word:0width$b}", width = WORD_BITS)?;
        }
        Ok(())
    }
}

impl FromStr for BitVector {
    type Err = ParseBitVectorError;

    /// Parses a binary string into a growable [`BitVector`].
    ///
    /// The string may start with `0b` and may use `_` as a separator. The
    /// rightmost digit is bit 0.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseBitVectorError`] if the string is empty or holds
    /// anything other than `0`, `1` and `_`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rt_bitvector::BitVector;
    ///
    /// let bits: BitVector = "0b1_0010".parse()?;
    /// assert_eq!(bits.iter().collect::<Vec<_>>(), vec![1, 4]);
    /// # Ok::<(), rt_bitvector::ParseBitVectorError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0b").unwrap_or(s).as_bytes();
        if digits.is_empty() {
            return Err(ParseBitVectorError::Empty);
        }

        let mut bits = Self::growable(digits.len());
        let mut n = 0;
        for (pos, &v) in digits.iter().enumerate().rev() {
            match v {
                b'1' => bits.set_bit(n),
                b'0' => {}
                b'_' => continue,
                _ => return Err(ParseBitVectorError::InvalidChar { ch: v as char, pos }),
            }
            n += 1;
        }
        Ok(bits)
    }
}

impl fmt::Debug for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl PartialEq for BitVector {
    /// Two vectors are equal when they hold the same set bits, regardless of
    /// capacity or growability. This is the negation of
    /// [`BitVector::differs`].
    fn eq(&self, other: &Self) -> bool {
        !self.differs(other)
    }
}

impl Eq for BitVector {}

impl Hash for BitVector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_words_rtrim().hash(state);
    }
}
