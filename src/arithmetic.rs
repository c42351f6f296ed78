//! Arithmetic primitives.
//!
//! Checked `i64` operations that turn overflow into
//! [`NumberTheoryError::Overflow`], plus an exact integer square root.
//! No float anywhere.

use crate::error::{NumberTheoryError, Result};

/// Checked addition. `operation` and `input` identify the public call
/// that is reported if the sum overflows.
pub fn checked_add(a: i64, b: i64, operation: &'static str, input: i64) -> Result<i64> {
    match a.checked_add(b) {
        Some(result) => Ok(result),
        None => Err(NumberTheoryError::overflow(operation, input)),
    }
}

/// Checked multiplication. Same reporting contract as [`checked_add`].
pub fn checked_mul(a: i64, b: i64, operation: &'static str, input: i64) -> Result<i64> {
    match a.checked_mul(b) {
        Some(result) => Ok(result),
        None => Err(NumberTheoryError::overflow(operation, input)),
    }
}

/// Narrow an unsigned magnitude back to `i64`.
pub fn to_i64(magnitude: u64, operation: &'static str, input: i64) -> Result<i64> {
    i64::try_from(magnitude).map_err(|_| NumberTheoryError::overflow(operation, input))
}

/// Floor of the square root, computed with Newton's iteration on integers.
///
/// Exact for every `u64`, including perfect squares where `f64::sqrt`
/// can land one below the true root.
pub fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    let mut x = n;
    // ceil(n / 2) without the overflow of (n + 1) / 2 at u64::MAX.
    let mut y = n / 2 + n % 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}
