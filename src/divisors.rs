//! Divisor arithmetic: GCD, LCM, aliquot sums, perfect numbers.
//!
//! Sign convention: `gcd` and `lcm` work on magnitudes and always return
//! a non-negative value, whatever the signs of their inputs.

use crate::arithmetic::{isqrt, to_i64};
use crate::error::{NumberTheoryError, Result};

// ---------------------------------------------------------------------------
// GCD / LCM
// ---------------------------------------------------------------------------

/// Greatest common divisor by the Euclidean algorithm.
///
/// `gcd(a, 0) == |a|` and `gcd(0, 0) == 0`. The only overflow is a result
/// of `2^63`, reachable from `gcd(i64::MIN, 0)` and `gcd(i64::MIN, i64::MIN)`.
pub fn gcd(a: i64, b: i64) -> Result<i64> {
    let g = gcd_magnitude(a.unsigned_abs(), b.unsigned_abs());
    to_i64(g, "gcd", larger_magnitude(a, b))
}

/// Least common multiple, `|a * b| / gcd(a, b)`.
///
/// `lcm(a, 0) == 0` for any non-zero `a`; `lcm(0, 0)` is undefined.
pub fn lcm(a: i64, b: i64) -> Result<i64> {
    if a == 0 && b == 0 {
        return Err(NumberTheoryError::undefined("lcm", "gcd(0, 0) is zero"));
    }
    let (ma, mb) = (a.unsigned_abs(), b.unsigned_abs());
    let g = gcd_magnitude(ma, mb);
    // Divide before multiplying so only a genuinely oversized LCM overflows.
    let l = (ma / g)
        .checked_mul(mb)
        .ok_or_else(|| NumberTheoryError::overflow("lcm", larger_magnitude(a, b)))?;
    to_i64(l, "lcm", larger_magnitude(a, b))
}

fn gcd_magnitude(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let rem = a % b;
        a = b;
        b = rem;
    }
    a
}

fn larger_magnitude(a: i64, b: i64) -> i64 {
    if a.unsigned_abs() >= b.unsigned_abs() {
        a
    } else {
        b
    }
}

// ---------------------------------------------------------------------------
// Aliquot sums
// ---------------------------------------------------------------------------

/// Sum of the positive divisors of `n` other than `n` itself.
///
/// `Ok(0)` for every `n <= 1`. Fails with `Overflow` when the sum exceeds
/// `i64::MAX`, which only happens for very abundant `n` close to it.
pub fn sum_of_proper_divisors(n: i64) -> Result<i64> {
    i64::try_from(aliquot_sum(n))
        .map_err(|_| NumberTheoryError::overflow("sum_of_proper_divisors", n))
}

/// True iff `n` is positive and equals the sum of its proper divisors.
pub fn is_perfect_number(n: i64) -> bool {
    n > 0 && aliquot_sum(n) == i128::from(n)
}

/// Pairs each divisor `d <= sqrt(n)` with `n / d`, so the work is `O(sqrt n)`
/// and the total is the same as summing every divisor in `[1, n / 2]`.
fn aliquot_sum(n: i64) -> i128 {
    if n <= 1 {
        return 0;
    }
    let root = isqrt(n as u64) as i64;
    let mut sum: i128 = 1;
    let mut d = 2;
    while d <= root {
        if n % d == 0 {
            let pair = n / d;
            sum += i128::from(d);
            if pair != d {
                sum += i128::from(pair);
            }
        }
        d += 1;
    }
    sum
}
