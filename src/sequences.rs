//! Integer sequences: Fibonacci numbers and factorials.
//!
//! Both are computed iteratively with checked multiplication/addition,
//! so inputs past the ceilings below fail with `Overflow`.

use crate::arithmetic::{checked_add, checked_mul};
use crate::error::{NumberTheoryError, Result};

/// Largest `n` with `n!` representable as `i64` (`20! = 2_432_902_008_176_640_000`).
pub const MAX_FACTORIAL_INPUT: i64 = 20;

/// Largest `n` with `F(n)` representable as `i64` (`F(92) = 7_540_113_804_746_346_429`).
pub const MAX_FIBONACCI_INPUT: i64 = 92;

/// The `n`th Fibonacci number, `F(0) = 0`, `F(1) = 1`.
///
/// `O(n)` additions, constant space.
pub fn fibonacci(n: i64) -> Result<i64> {
    if n < 0 {
        return Err(NumberTheoryError::invalid_argument("fibonacci", n));
    }
    if n == 0 {
        return Ok(0);
    }

    let (mut prev, mut curr) = (0i64, 1i64);
    for _ in 2..=n {
        let next = checked_add(prev, curr, "fibonacci", n)?;
        prev = curr;
        curr = next;
    }
    Ok(curr)
}

/// `n! = 1 * 2 * ... * n`, with `0! = 1`.
pub fn factorial(n: i64) -> Result<i64> {
    if n < 0 {
        return Err(NumberTheoryError::invalid_argument("factorial", n));
    }
    if n > MAX_FACTORIAL_INPUT {
        return Err(NumberTheoryError::overflow("factorial", n));
    }

    let mut result = 1i64;
    for i in 2..=n {
        result = checked_mul(result, i, "factorial", n)?;
    }
    Ok(result)
}
