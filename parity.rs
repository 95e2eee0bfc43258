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

/// Parity of a permutation, i.e. of the number of transpositions it decomposes into.
///
/// Converts to `0` (even) or `1` (odd) with `as u8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    Even = 0,
    Odd = 1,
}

impl Parity {
    pub fn is_even(self) -> bool
    { self == Parity::Even }

    pub fn is_odd(self) -> bool
    { self == Parity::Odd }

    pub(crate) fn of_integer(x: u64) -> Parity {
        match x % 2 {
            0 => Parity::Even,
            _ => Parity::Odd,
        }
    }
}

/// A permutation of `n` elements with `c` cycles (fixed points included) has
/// sign `(-1)^(n - c)`.
///
/// `values` must be a permutation of `1..=values.len()` in one-line notation;
/// it need not be a full `Permutation`, which lets the Trotter-Johnson successor
/// ask about a prefix of its scratch buffer.
pub(crate) fn parity_of(values: &[usize]) -> Parity {
    let n = values.len();
    let mut visited = vec![false; n];
    let mut cycles = 0;
    for start in 0..n {
        if visited[start] {
            continue;
        }
        cycles += 1;
        let mut i = start;
        while !visited[i] {
            visited[i] = true;
            i = values[i] - 1;
        }
    }
    Parity::of_integer((n - cycles) as u64)
}
