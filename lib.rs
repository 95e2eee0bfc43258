/* ************************************************************************ **
** This file is part of rsp2, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
**                                                                          **
** Be aware that not all of rsp2 is provided under this permissive license, **
** and that the project as a whole is licensed under the GPL 3.0.           **
** ************************************************************************ */

//! Ranking, unranking and successors of permutations of `1..=n`.
//!
//! Two total orders are supported, each through a module of free functions and
//! a marker type implementing [`PermOrder`]:
//!
//! * [`lex`] / [`Lexicographic`]: dictionary order on the sequence of values.
//! * [`trotter_johnson`] / [`TrotterJohnson`]: the "plain changes" order, in which
//!   consecutive permutations differ by one adjacent transposition.
//!
//! ```rust
//! use perm_rank::{Permutation, PermOrder, Lexicographic, TrotterJohnson};
//!
//! let perm = Permutation::from_vec(vec![3, 1, 2]).unwrap();
//! assert_eq!(Lexicographic::rank(&perm), 4);
//! assert_eq!(TrotterJohnson::rank(&perm), 2);
//!
//! let next = TrotterJohnson::successor(&perm).unwrap();
//! assert_eq!(next.as_slice(), &[3, 2, 1]);
//! ```

use std::fmt;
use std::marker::PhantomData;

use thiserror::Error;

pub mod lex;
pub mod trotter_johnson;
mod parity;

pub use crate::parity::Parity;

/// The longest permutation that can be ranked, since `20!` is the largest
/// factorial that fits in a `u64`.
pub const MAX_LEN: usize = 20;

const FACTORIALS: [u64; MAX_LEN + 1] = {
    let mut table = [1u64; MAX_LEN + 1];
    let mut i = 1;
    while i <= MAX_LEN {
        table[i] = table[i - 1] * i as u64;
        i += 1;
    }
    table
};

/// `n!`, which is also the number of permutations of length `n`.
///
/// # Panics
///
/// Panics if `n > MAX_LEN`.
pub fn factorial(n: usize) -> u64
{ FACTORIALS[n] }

/// A permutation of the values `1..=n`, stored in one-line notation.
///
/// The element at index `i` is the (1-based) value that the permutation places
/// at position `i`.  Construction validates that every value appears exactly once
/// and that the length does not exceed [`MAX_LEN`], so every `Permutation` can be
/// ranked without overflow.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Permutation {
    values: Vec<usize>,
}

impl fmt::Debug for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.values, f)
    }
}

/// An error which indicates that a vector does not describe a rankable permutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidPermutationError {
    /// The vector does not contain every value in `1..=len` exactly once.
    #[error("tried to construct an invalid permutation (expected each of 1..={len} exactly once)")]
    NotABijection { len: usize },
    /// The vector is longer than [`MAX_LEN`].
    #[error("permutation of length {len} is longer than the maximum of {}", MAX_LEN)]
    TooLong { len: usize },
}

/// An error from reconstructing a permutation out of its rank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnrankError {
    #[error("permutation of length {len} is longer than the maximum of {}", MAX_LEN)]
    TooLong { len: usize },
    #[error("rank {rank} is out of range for permutations of length {len}")]
    OutOfRange { rank: u64, len: usize },
}

/// The permutation was the last one in its order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("permutation is the last in its order and has no successor")]
pub struct NoSuccessorError;

impl Permutation {
    /// Construct the identity permutation `[1, 2, ..., n]`.
    ///
    /// # Panics
    ///
    /// Panics if `n > MAX_LEN`.
    pub fn identity(n: usize) -> Permutation
    {
        assert!(n <= MAX_LEN, "permutation length {} exceeds {}", n, MAX_LEN);
        Permutation { values: (1..=n).collect() }
    }

    /// Construct a permutation from its one-line notation.
    ///
    /// This performs O(n log n) validation on the data to verify that it
    /// is a bijection onto `1..=vec.len()`.
    pub fn from_vec(vec: Vec<usize>) -> Result<Permutation, InvalidPermutationError>
    {
        if vec.len() > MAX_LEN {
            return Err(InvalidPermutationError::TooLong { len: vec.len() });
        }
        if !Self::validate_data(&vec) {
            return Err(InvalidPermutationError::NotABijection { len: vec.len() });
        }
        Ok(Permutation { values: vec })
    }

    /// Construct a uniformly random permutation of the given length.
    ///
    /// # Panics
    ///
    /// Panics if `n > MAX_LEN`.
    pub fn random(n: usize) -> Permutation
    {
        use rand::seq::SliceRandom;

        let mut perm = Permutation::identity(n);
        perm.values.shuffle(&mut rand::thread_rng());
        perm
    }

    /// Get the length of the permutation.
    pub fn len(&self) -> usize
    { self.values.len() }

    pub fn is_empty(&self) -> bool
    { self.values.is_empty() }

    pub fn as_slice(&self) -> &[usize]
    { &self.values }

    /// Recover the one-line notation.
    pub fn into_vec(self) -> Vec<usize>
    { self.values }

    /// Whether this permutation is a product of an even or odd number of transpositions.
    pub fn parity(&self) -> Parity
    { parity::parity_of(&self.values) }

    // Checks the bijection invariant.
    #[must_use = "doesn't assert"]
    fn validate_data(xs: &[usize]) -> bool {
        let mut vec = xs.to_vec();
        vec.sort_unstable();
        vec.into_iter().eq(1..=xs.len())
    }

    // For permutations built by the algorithms themselves.
    pub(crate) fn from_vec_unchecked(values: Vec<usize>) -> Permutation {
        debug_assert!(values.len() <= MAX_LEN);
        debug_assert!(Permutation::validate_data(&values));
        Permutation { values }
    }
}

impl AsRef<[usize]> for Permutation {
    fn as_ref(&self) -> &[usize]
    { &self.values }
}

impl From<Permutation> for Vec<usize> {
    fn from(perm: Permutation) -> Vec<usize>
    { perm.values }
}

pub(crate) fn check_unrank_args(len: usize, rank: u64) -> Result<(), UnrankError> {
    if len > MAX_LEN {
        return Err(UnrankError::TooLong { len });
    }
    if rank >= factorial(len) {
        return Err(UnrankError::OutOfRange { rank, len });
    }
    Ok(())
}

/// A total order on the permutations of each length, with a rank bijection onto `0..n!`.
///
/// # Laws
///
/// For every length `n <= MAX_LEN`:
///
/// * `unrank(n, rank(p)) == Ok(p)` for every permutation `p` of length `n`.
/// * `rank(&unrank(n, r)?) == r` for every `r` in `0..n!`.
/// * `successor(p)` is the permutation of rank `rank(p) + 1`, or `NoSuccessorError`
///   exactly when `rank(p) == n! - 1`.
pub trait PermOrder {
    /// The 0-based position of `perm` in this order.
    fn rank(perm: &Permutation) -> u64;

    /// The permutation of length `len` at position `rank`.
    fn unrank(len: usize, rank: u64) -> Result<Permutation, UnrankError>;

    /// The permutation immediately following `perm`.
    fn successor(perm: &Permutation) -> Result<Permutation, NoSuccessorError>;

    /// The final permutation of length `len` in this order.
    fn last(len: usize) -> Result<Permutation, UnrankError> {
        if len > MAX_LEN {
            return Err(UnrankError::TooLong { len });
        }
        Self::unrank(len, factorial(len) - 1)
    }
}

/// Dictionary order on one-line notation.  See [`lex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lexicographic {}

/// Minimal-change ("plain changes") order.  See [`trotter_johnson`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrotterJohnson {}

impl PermOrder for Lexicographic {
    fn rank(perm: &Permutation) -> u64
    { lex::rank(perm) }

    fn unrank(len: usize, rank: u64) -> Result<Permutation, UnrankError>
    { lex::unrank(len, rank) }

    fn successor(perm: &Permutation) -> Result<Permutation, NoSuccessorError>
    { lex::successor(perm) }
}

impl PermOrder for TrotterJohnson {
    fn rank(perm: &Permutation) -> u64
    { trotter_johnson::rank(perm) }

    fn unrank(len: usize, rank: u64) -> Result<Permutation, UnrankError>
    { trotter_johnson::unrank(len, rank) }

    fn successor(perm: &Permutation) -> Result<Permutation, NoSuccessorError>
    { trotter_johnson::successor(perm) }
}

/// Iterate over all `n!` permutations of length `n` in the order `O`,
/// starting from the identity.
///
/// # Panics
///
/// Panics if `n > MAX_LEN`.
pub fn walk<O: PermOrder>(n: usize) -> Walk<O>
{ Walk { next: Some(Permutation::identity(n)), _order: PhantomData } }

/// Iterator returned by [`walk`].
pub struct Walk<O> {
    next: Option<Permutation>,
    _order: PhantomData<fn() -> O>,
}

impl<O: PermOrder> Iterator for Walk<O> {
    type Item = Permutation;

    fn next(&mut self) -> Option<Permutation> {
        let current = self.next.take()?;
        self.next = O::successor(&current).ok();
        Some(current)
    }
}

impl<O: PermOrder> std::iter::FusedIterator for Walk<O> {}

impl<O> fmt::Debug for Walk<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Walk").field("next", &self.next).finish()
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn any_perm() -> impl Strategy<Value = Permutation> {
        (0..=MAX_LEN)
            .prop_flat_map(|n| Just((1..=n).collect::<Vec<_>>()).prop_shuffle())
            .prop_map(|vec| Permutation::from_vec(vec).unwrap())
    }

    fn any_rank() -> impl Strategy<Value = (usize, u64)> {
        (0..=MAX_LEN).prop_flat_map(|n| (Just(n), 0..factorial(n)))
    }

    #[test]
    fn factorials() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(5), 120);
        assert_eq!(factorial(20), 2_432_902_008_176_640_000);
        assert!(factorial(20).checked_mul(21).is_none());
    }

    #[test]
    fn invalid() {
        assert_eq!(
            Permutation::from_vec(vec![1, 2, 4, 4]),
            Err(InvalidPermutationError::NotABijection { len: 4 }),
        );
        assert!(matches!(
            Permutation::from_vec(vec![0, 1, 2]),
            Err(InvalidPermutationError::NotABijection { .. }),
        ));
        assert_eq!(
            Permutation::from_vec((1..=21).collect()),
            Err(InvalidPermutationError::TooLong { len: 21 }),
        );
        assert!(Permutation::from_vec(vec![]).is_ok());
    }

    #[test]
    fn random_is_valid() {
        for &len in &[0, 1, 7, MAX_LEN] {
            let perm = Permutation::random(len);
            assert_eq!(Permutation::from_vec(perm.clone().into_vec()), Ok(perm));
        }
    }

    #[test]
    fn unrank_rejects_bad_args() {
        assert_eq!(
            Lexicographic::unrank(3, 6),
            Err(UnrankError::OutOfRange { rank: 6, len: 3 }),
        );
        assert_eq!(
            TrotterJohnson::unrank(3, 6),
            Err(UnrankError::OutOfRange { rank: 6, len: 3 }),
        );
        assert_eq!(TrotterJohnson::unrank(21, 0), Err(UnrankError::TooLong { len: 21 }));
        assert_eq!(Lexicographic::last(21), Err(UnrankError::TooLong { len: 21 }));
    }

    #[test]
    fn empty() {
        let empty = Permutation::identity(0);
        assert_eq!(Lexicographic::rank(&empty), 0);
        assert_eq!(TrotterJohnson::rank(&empty), 0);
        assert_eq!(Lexicographic::unrank(0, 0), Ok(empty.clone()));
        assert_eq!(TrotterJohnson::unrank(0, 0), Ok(empty.clone()));
        assert_eq!(Lexicographic::successor(&empty), Err(NoSuccessorError));
        assert_eq!(TrotterJohnson::successor(&empty), Err(NoSuccessorError));
        assert_eq!(walk::<TrotterJohnson>(0).count(), 1);
    }

    fn check_walk<O: PermOrder>(n: usize) {
        let mut count = 0;
        let mut seen = std::collections::HashSet::new();
        for (i, perm) in walk::<O>(n).enumerate() {
            assert_eq!(O::rank(&perm), i as u64);
            assert_eq!(O::unrank(n, i as u64).as_ref(), Ok(&perm));
            assert!(seen.insert(perm));
            count += 1;
        }
        assert_eq!(count, factorial(n));

        let last = O::last(n).unwrap();
        assert_eq!(O::successor(&last), Err(NoSuccessorError));
    }

    #[test]
    fn walk_visits_everything_in_rank_order() {
        for n in 1..=7 {
            check_walk::<Lexicographic>(n);
            check_walk::<TrotterJohnson>(n);
        }
    }

    #[test]
    fn walk_is_fused() {
        let mut it = walk::<Lexicographic>(2);
        assert_eq!(it.next().map(Vec::from), Some(vec![1, 2]));
        assert_eq!(it.next().map(Vec::from), Some(vec![2, 1]));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    proptest! {
        #[test]
        fn lex_unrank_inverts_rank(perm in any_perm()) {
            let rank = Lexicographic::rank(&perm);
            prop_assert!(rank < factorial(perm.len()));
            prop_assert_eq!(Lexicographic::unrank(perm.len(), rank), Ok(perm));
        }

        #[test]
        fn tj_unrank_inverts_rank(perm in any_perm()) {
            let rank = TrotterJohnson::rank(&perm);
            prop_assert!(rank < factorial(perm.len()));
            prop_assert_eq!(TrotterJohnson::unrank(perm.len(), rank), Ok(perm));
        }

        #[test]
        fn rank_inverts_unrank((n, rank) in any_rank()) {
            prop_assert_eq!(Lexicographic::rank(&Lexicographic::unrank(n, rank).unwrap()), rank);
            prop_assert_eq!(TrotterJohnson::rank(&TrotterJohnson::unrank(n, rank).unwrap()), rank);
        }

        #[test]
        fn successor_increments_rank(perm in any_perm()) {
            let n = perm.len();
            let lex_rank = Lexicographic::rank(&perm);
            match Lexicographic::successor(&perm) {
                Ok(next) => { prop_assert_eq!(Lexicographic::rank(&next), lex_rank + 1); }
                Err(NoSuccessorError) => { prop_assert_eq!(lex_rank, factorial(n) - 1); }
            }
            let tj_rank = TrotterJohnson::rank(&perm);
            match TrotterJohnson::successor(&perm) {
                Ok(next) => { prop_assert_eq!(TrotterJohnson::rank(&next), tj_rank + 1); }
                Err(NoSuccessorError) => { prop_assert_eq!(tj_rank, factorial(n) - 1); }
            }
        }
    }
}
