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

//! Trotter-Johnson ("plain changes") order.
//!
//! The permutations of `1..=n` are listed so that each differs from the previous
//! one by swapping two adjacent positions.  The order is recursive: take the
//! listing for `1..n` and, for each entry, sweep `n` through every slot, right to
//! left after an even-ranked entry and left to right after an odd-ranked one.
//!
//! For `n = 3` the order is
//! `123, 132, 312, 321, 231, 213`.

use crate::parity::{parity_of, Parity};
use crate::{check_unrank_args, factorial, NoSuccessorError, Permutation, UnrankError};

/// Position of `perm` in Trotter-Johnson order.
pub fn rank(perm: &Permutation) -> u64 {
    let p = perm.as_slice();
    let mut rank = 0;
    for j in 2..=p.len() {
        // 1-based slot of `j` among the values `1..=j`.
        let k = 1 + p.iter().take_while(|&&x| x != j).filter(|&&x| x < j).count();

        let (j, k) = (j as u64, k as u64);
        rank = match Parity::of_integer(rank) {
            Parity::Even => j * rank + j - k,
            Parity::Odd => j * rank + k - 1,
        };
    }
    rank
}

/// The permutation of length `len` at position `rank` in Trotter-Johnson order.
pub fn unrank(len: usize, rank: u64) -> Result<Permutation, UnrankError> {
    check_unrank_args(len, rank)?;
    if len == 0 {
        return Ok(Permutation::identity(0));
    }

    let mut perm = vec![0; len];
    perm[0] = 1;
    // Rank of the prefix `1..=j` restricted permutation at the previous step.
    let mut prev_rank = 0;
    for j in 1..len {
        // `floor(rank * (j + 1)! / len!)`, exact because `(j + 1)!` divides `len!`.
        let sub_rank = rank / (factorial(len) / factorial(j + 1));
        let k = (sub_rank - (j as u64 + 1) * prev_rank) as usize;
        let slot = match Parity::of_integer(prev_rank) {
            Parity::Even => j - k,
            Parity::Odd => k,
        };
        perm[slot..=j].rotate_right(1);
        perm[slot] = j + 1;
        prev_rank = sub_rank;
    }
    Ok(Permutation::from_vec_unchecked(perm))
}

/// The next permutation in Trotter-Johnson order.
///
/// The result differs from `perm` by a single adjacent transposition.  Fails on
/// the last permutation, which (unlike in lexicographic order) has no fixed
/// shape; it is found by the same search that produces successors.
pub fn successor(perm: &Permutation) -> Result<Permutation, NoSuccessorError> {
    let p = perm.as_slice();

    // The search narrows a window `start..start + m` of `p` that contains
    // exactly the values `1..=m`.  `rho[..m]` holds those values in order.
    let mut rho = p.to_vec();
    let mut start = 0;
    let mut m = p.len();
    while m > 1 {
        let mut d = 0;
        while rho[d] != m {
            d += 1;
        }
        rho.copy_within(d + 1..m, d);

        // The parity of the remaining values fixes which way `m` is sweeping.
        match parity_of(&rho[..m - 1]) {
            // Sweeping right, but already at the right edge.
            Parity::Odd if d == m - 1 => m -= 1,
            Parity::Odd => return Ok(swapped(p, start + d, start + d + 1)),
            // Sweeping left, but already at the left edge.
            Parity::Even if d == 0 => {
                m -= 1;
                start += 1;
            },
            Parity::Even => return Ok(swapped(p, start + d, start + d - 1)),
        }
    }
    Err(NoSuccessorError)
}

fn swapped(p: &[usize], a: usize, b: usize) -> Permutation {
    let mut next = p.to_vec();
    next.swap(a, b);
    Permutation::from_vec_unchecked(next)
}
