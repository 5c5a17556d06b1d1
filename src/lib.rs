//! A growable, word-packed bit vector for tracking integer-indexed resources.
//!
//! This crate provides [`BitVector`], a bitmap over positions
//! `0..capacity` stored as a contiguous array of 32-bit words. It is meant
//! for the inner loops of dataflow analyses (liveness, reachability,
//! dominance) that repeatedly set, clear, intersect, union and compare bit
//! sets until a fixed point is reached.
//!
//! # Features
//!
//! - **Fixed or growable** vectors, chosen at construction
//! - **First-fit allocation** of clear bits for resource tracking
//! - **Aggregate operations** (copy, intersect, unify, checked merge,
//!   compare)
//! - **Borrowing iterator** over set bit positions
//! - **Optional logging** of growth and contract violations via `tracing`
//! - **`no_std` support** with `alloc`
//!
//! # Examples
//!
//! ```
//! use rt_bitvector::BitVector;
//!
//! let mut live = BitVector::growable(32);
//! live.set_bit(3);
//! live.set_bit(40); // grows past the initial 32 bits
//!
//! let mut out = BitVector::growable(0);
//! assert_eq!(out.merge_checked(&live), Ok(true));
//! assert_eq!(out.merge_checked(&live), Ok(false)); // converged
//!
//! let bits: Vec<usize> = out.iter().collect();
//! assert_eq!(bits, vec![3, 40]);
//! ```
//!
//! # Error Model
//!
//! Calls outside the contract of a vector (touching a bit beyond the
//! capacity of a fixed vector, copying between vectors of different sizes)
//! panic. Outcomes a caller is expected to branch on are returned as values:
//! [`BitVector::allocate_first_clear_bit`] yields `None` when a fixed vector
//! is full, and the aggregate operations return [`SizeMismatchError`] when a
//! fixed destination cannot hold the result.
//!
//! # Thread Safety
//!
//! Nothing is synchronized. All mutation goes through `&mut self`, so
//! sharing a vector across threads requires external locking.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod bitvector;
mod iter;
mod macros;
mod set_ops;
pub mod storage;
pub mod traits;

pub use bitvector::BitVector;
pub use iter::Iter;
pub use storage::{WORD_BITS, Word};
pub use traits::{ParseBitVectorError, SizeMismatchError};
