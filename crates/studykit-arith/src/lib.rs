//! # Studykit Arithmetic
//!
//! Pure arithmetic helpers: generic addition and an iterative Fibonacci
//! computation.
//!
//! ```rust
//! use studykit_arith::{add, fib};
//!
//! assert_eq!(add(2, 3), 5);
//! assert_eq!(fib(10).unwrap(), 55);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::ops::Add;
use studykit_core::{Error, Result};
use tracing::trace;

/// Largest index whose Fibonacci number fits in a `u128`
pub const MAX_FIB_INDEX: i64 = 186;

/// Returns `a + b`.
///
/// Works for any type with an `Add` impl, so integers and floats alike.
#[inline]
pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

/// Returns the n-th Fibonacci number, with `fib(0) == 0` and `fib(1) == 1`.
///
/// Runs in O(n) time and constant space.
///
/// # Errors
///
/// - `Error::InvalidArgument` if `n` is negative
/// - `Error::Overflow` if `n > MAX_FIB_INDEX`
pub fn fib(n: i64) -> Result<u128> {
    if n < 0 {
        return Err(Error::InvalidArgument(format!("n must be >= 0, got {}", n)));
    }
    let result = if n < 2 {
        n as u128
    } else {
        let (mut a, mut b) = (0u128, 1u128);
        for _ in 2..=n {
            let next = a
                .checked_add(b)
                .ok_or_else(|| Error::Overflow(format!("fib({}) does not fit in u128", n)))?;
            a = b;
            b = next;
        }
        b
    };

    trace!(n, result = %result, "computed fibonacci number");
    Ok(result)
}
