//! One record of every classification the crate computes for an integer.
//!
//! Fallible entries are `None` when the underlying call fails; the error
//! itself is not recorded.

use serde::{Deserialize, Serialize};

use crate::digits::{is_armstrong_number, reverse_number, sum_of_digits};
use crate::divisors::is_perfect_number;
use crate::primality::{is_prime, next_prime};
use crate::sequences::{factorial, fibonacci};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NumberProfile {
    pub n: i64,
    pub is_prime: bool,
    pub next_prime: Option<i64>,
    pub is_perfect: bool,
    pub is_armstrong: bool,
    pub digit_sum: i64,
    pub reversed: Option<i64>,
    pub fibonacci: Option<i64>,
    pub factorial: Option<i64>,
}

impl NumberProfile {
    /// Evaluate every function on `n`.
    ///
    /// Cost is dominated by `is_prime`/`next_prime` and the divisor sum,
    /// all `O(sqrt n)`.
    pub fn of(n: i64) -> Self {
        Self {
            n,
            is_prime: is_prime(n),
            next_prime: next_prime(n).ok(),
            is_perfect: is_perfect_number(n),
            is_armstrong: is_armstrong_number(n),
            digit_sum: sum_of_digits(n),
            reversed: reverse_number(n).ok(),
            fibonacci: fibonacci(n).ok(),
            factorial: factorial(n).ok(),
        }
    }

    /// Profiles for every integer in `start..=end`, in order.
    pub fn range(start: i64, end: i64) -> Vec<Self> {
        (start..=end).map(Self::of).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_of_six() {
        let p = NumberProfile::of(6);
        assert_eq!(
            p,
            NumberProfile {
                n: 6,
                is_prime: false,
                next_prime: Some(7),
                is_perfect: true,
                is_armstrong: true,
                digit_sum: 6,
                reversed: Some(6),
                fibonacci: Some(8),
                factorial: Some(720),
            }
        );
    }

    #[test]
    fn test_profile_negative_has_no_sequences() {
        let p = NumberProfile::of(-12);
        assert!(!p.is_prime);
        assert_eq!(p.next_prime, Some(2));
        assert!(!p.is_perfect);
        assert!(!p.is_armstrong);
        assert_eq!(p.digit_sum, 3);
        assert_eq!(p.reversed, Some(21));
        assert_eq!(p.fibonacci, None);
        assert_eq!(p.factorial, None);
    }

    #[test]
    fn test_profile_range_is_ordered() {
        let profiles = NumberProfile::range(-2, 3);
        let ns: Vec<i64> = profiles.iter().map(|p| p.n).collect();
        assert_eq!(ns, vec![-2, -1, 0, 1, 2, 3]);
        assert!(NumberProfile::range(5, 4).is_empty());
    }

    #[test]
    fn test_profile_serde_roundtrip() {
        let p = NumberProfile::of(153);
        let json = serde_json::to_string(&p).unwrap();
        let back: NumberProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
        assert!(back.is_armstrong);
    }
}
