//! Base-10 digit manipulation.
//!
//! Everything works on `n.unsigned_abs()`, so `i64::MIN` is valid input:
//! its 19-digit magnitude and any reversal of it still fit in `u64`.

use crate::arithmetic::to_i64;
use crate::error::Result;

/// Number of base-10 digits of `|n|`. Zero has one digit.
pub fn digit_count(n: i64) -> u32 {
    n.unsigned_abs().checked_ilog10().map_or(1, |log| log + 1)
}

/// Sum of the base-10 digits of `|n|`.
pub fn sum_of_digits(n: i64) -> i64 {
    let mut rest = n.unsigned_abs();
    let mut sum = 0i64;
    while rest != 0 {
        sum += (rest % 10) as i64;
        rest /= 10;
    }
    sum
}

/// Digits of `|n|` in reverse order. Trailing zeros vanish: `100 -> 1`.
///
/// Fails with `Overflow` when the reversal exceeds `i64::MAX`,
/// e.g. `1_999_999_999_999_999_999`.
pub fn reverse_number(n: i64) -> Result<i64> {
    let mut rest = n.unsigned_abs();
    let mut reversed = 0u64;
    while rest != 0 {
        reversed = reversed * 10 + rest % 10;
        rest /= 10;
    }
    to_i64(reversed, "reverse_number", n)
}

/// True iff `n` equals the sum of its digits each raised to the digit count.
///
/// Negative numbers are never Armstrong numbers; `0` is (`0^1 == 0`).
pub fn is_armstrong_number(n: i64) -> bool {
    if n < 0 {
        return false;
    }
    let width = digit_count(n);
    let mut rest = n as u64;
    // 19 * 9^19 fits comfortably in u128.
    let mut sum: u128 = 0;
    while rest != 0 {
        sum += u128::from(rest % 10).pow(width);
        rest /= 10;
    }
    sum == u128::from(n as u64)
}
