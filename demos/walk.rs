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

//! Walks every permutation of a given length in both orders, checking that
//! ranks count up from zero and that unranking recovers each permutation.
//!
//! ```text
//! cargo run --example walk -- 4
//! ```

use std::error::Error;

use perm_rank::{walk, Lexicographic, PermOrder, TrotterJohnson, MAX_LEN};

const DEFAULT_LEN: usize = 8;

fn check<O: PermOrder>(name: &str, n: usize) -> Result<(), Box<dyn Error>> {
    println!("{} order, n = {}", name, n);
    let mut expected = 0;
    for perm in walk::<O>(n) {
        let rank = O::rank(&perm);
        let unranked = O::unrank(n, rank)?;
        println!("{} {:?} {:?}", rank, unranked, perm);
        if rank != expected || unranked != perm {
            return Err(format!("mismatch at {:?}: rank {}, expected {}", perm, rank, expected).into());
        }
        expected += 1;
    }
    println!("finished");
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let n = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<usize>()?,
        None => DEFAULT_LEN,
    };
    if n > MAX_LEN {
        return Err(format!("length {} exceeds the maximum of {}", n, MAX_LEN).into());
    }

    check::<Lexicographic>("lexicographic", n)?;
    check::<TrotterJohnson>("Trotter-Johnson", n)?;
    Ok(())
}
