#![forbid(unsafe_code)]

//! Elementary number theory over `i64`.
//!
//! Every function is pure and stateless: no caches, no globals, no I/O.
//! Results that do not fit in `i64` are reported as
//! [`NumberTheoryError::Overflow`], never wrapped.

/// Version of the canonical profile layout. Part of every profile hash.
pub const PROFILE_SCHEMA_VERSION: u32 = 1;

pub mod error;
pub mod arithmetic;
pub mod primality;
pub mod divisors;
pub mod sequences;
pub mod digits;
pub mod profile;
pub mod hashing;

pub use digits::{digit_count, is_armstrong_number, reverse_number, sum_of_digits};
pub use divisors::{gcd, is_perfect_number, lcm, sum_of_proper_divisors};
pub use error::{NumberTheoryError, Result};
pub use primality::{is_prime, next_prime, next_prime_bounded, LARGEST_I64_PRIME};
pub use profile::NumberProfile;
pub use sequences::{factorial, fibonacci, MAX_FACTORIAL_INPUT, MAX_FIBONACCI_INPUT};
