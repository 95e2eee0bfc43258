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

//! Lexicographic order: permutations compared as sequences, left to right.
//!
//! Ranks are the factorial-number-system (Lehmer code) encoding of the
//! permutation.  The first permutation is the identity and the last is
//! `[n, n - 1, ..., 1]`.

use crate::{check_unrank_args, factorial, NoSuccessorError, Permutation, UnrankError};

/// Position of `perm` in lexicographic order.
pub fn rank(perm: &Permutation) -> u64 {
    let n = perm.len();
    // Values are renumbered in place so that each one counts only the
    // candidates still unused at its position.
    let mut rho = perm.as_slice().to_vec();
    let mut rank = 0;
    for j in 0..n {
        rank += (rho[j] as u64 - 1) * factorial(n - j - 1);
        for i in j + 1..n {
            if rho[i] > rho[j] {
                rho[i] -= 1;
            }
        }
    }
    rank
}

/// The permutation of length `len` at position `rank` in lexicographic order.
pub fn unrank(len: usize, rank: u64) -> Result<Permutation, UnrankError> {
    check_unrank_args(len, rank)?;
    if len == 0 {
        return Ok(Permutation::identity(0));
    }

    // Built from the right: each step peels one factorial digit off the rank,
    // then bumps everything already placed to make room for it.
    let mut perm = vec![0; len];
    perm[len - 1] = 1;
    let mut rank = rank;
    for j in 0..len - 1 {
        let digit = (rank % factorial(j + 2)) / factorial(j + 1);
        rank -= digit * factorial(j + 1);

        let digit = digit as usize;
        perm[len - j - 2] = digit + 1;
        for x in &mut perm[len - j - 1..] {
            if *x > digit {
                *x += 1;
            }
        }
    }
    Ok(Permutation::from_vec_unchecked(perm))
}

/// The lexicographically next permutation.
///
/// Fails on `[n, n - 1, ..., 1]`.
pub fn successor(perm: &Permutation) -> Result<Permutation, NoSuccessorError> {
    let p = perm.as_slice();
    let n = p.len();

    // Rightmost ascent.  Everything after it is decreasing.
    let pivot = match (0..n.saturating_sub(1)).rev().find(|&i| p[i] < p[i + 1]) {
        Some(i) => i,
        None => return Err(NoSuccessorError),
    };
    // Rightmost value exceeding the pivot; `pivot + 1` always qualifies.
    let mut swap_with = n - 1;
    while p[swap_with] < p[pivot] {
        swap_with -= 1;
    }

    let mut next = p.to_vec();
    next.swap(pivot, swap_with);
    next[pivot + 1..].reverse();
    Ok(Permutation::from_vec_unchecked(next))
}
