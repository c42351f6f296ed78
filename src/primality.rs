//! Primality testing and next-prime search.
//!
//! Trial division by odd candidates up to the exact integer square root.
//! Worst case is a large prime near `i64::MAX`: about 1.5 billion divisions.
//! Nothing here is cancellable; callers that need bounded latency use
//! [`next_prime_bounded`].

use tracing::{debug, trace};

use crate::arithmetic::{checked_add, isqrt};
use crate::error::{NumberTheoryError, Result};

/// The largest prime representable as `i64` (`2^63 - 25`).
/// `next_prime` of anything at or above it overflows.
pub const LARGEST_I64_PRIME: i64 = 9_223_372_036_854_775_783;

/// True iff `n` is prime. Every `n <= 1` is not prime.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let limit = isqrt(n as u64) as i64;
    let mut divisor = 3;
    while divisor <= limit {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Smallest prime strictly greater than `n`.
///
/// Fails with `Overflow` when `n >= LARGEST_I64_PRIME`.
pub fn next_prime(n: i64) -> Result<i64> {
    search(n, None, "next_prime")
}

/// Like [`next_prime`], but examines at most `max_candidates` integers
/// before giving up with `SearchLimitExceeded`.
///
/// Integers below 2 are never candidates, so any `n < 2` finds 2 on the
/// first candidate.
pub fn next_prime_bounded(n: i64, max_candidates: u64) -> Result<i64> {
    search(n, Some(max_candidates), "next_prime_bounded")
}

fn search(n: i64, limit: Option<u64>, operation: &'static str) -> Result<i64> {
    // Nothing below 2 is prime; skip straight there for very negative n.
    let mut candidate = n.max(1);
    let mut examined: u64 = 0;
    loop {
        if let Some(limit) = limit {
            if examined >= limit {
                debug!(start = n, limit, "prime search limit reached");
                return Err(NumberTheoryError::SearchLimitExceeded { start: n, limit });
            }
        }
        candidate = checked_add(candidate, 1, operation, n)?;
        examined += 1;
        if is_prime(candidate) {
            trace!(start = n, prime = candidate, examined, "prime found");
            return Ok(candidate);
        }
    }
}
