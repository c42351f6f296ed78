//! Error taxonomy shared by every fallible operation.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NumberTheoryError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberTheoryError {
    /// The input lies outside the operation's domain (e.g. a negative factorial).
    #[error("{operation}: invalid argument {value}")]
    InvalidArgument { operation: &'static str, value: i64 },

    /// The result is mathematically undefined for these inputs.
    #[error("{operation}: undefined ({reason})")]
    UndefinedOperation {
        operation: &'static str,
        reason: &'static str,
    },

    /// The exact result does not fit in `i64`. `value` is the offending input.
    #[error("{operation}: result for {value} overflows i64")]
    Overflow { operation: &'static str, value: i64 },

    /// A bounded prime search examined `limit` candidates above `start`
    /// without finding a prime.
    #[error("no prime found within {limit} candidates above {start}")]
    SearchLimitExceeded { start: i64, limit: u64 },
}

impl NumberTheoryError {
    pub(crate) fn invalid_argument(operation: &'static str, value: i64) -> Self {
        tracing::debug!(operation, value, "rejected invalid argument");
        Self::InvalidArgument { operation, value }
    }

    pub(crate) fn undefined(operation: &'static str, reason: &'static str) -> Self {
        tracing::debug!(operation, reason, "undefined operation");
        Self::UndefinedOperation { operation, reason }
    }

    pub(crate) fn overflow(operation: &'static str, value: i64) -> Self {
        tracing::debug!(operation, value, "i64 overflow");
        Self::Overflow { operation, value }
    }
}
