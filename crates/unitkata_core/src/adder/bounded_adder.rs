//! Bounded integer addition.
//!
//! # Responsibility
//! - Add two fixed operands.
//! - Reject sums outside `[SUM_FLOOR, SUM_CEILING]`.
//!
//! # Invariants
//! - Operands are never validated at construction, only in `compute()`.
//! - `compute()` is pure; repeated calls return the same result.
//! - Both boundaries are inclusive.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lowest accepted sum.
pub const SUM_FLOOR: i32 = 0;
/// Highest accepted sum.
pub const SUM_CEILING: i32 = 100;

pub type AdderResult<T> = Result<T, AdderError>;

/// Bound violation reported by [`BoundedAdder::compute`].
///
/// `sum` is carried as `i64` because the raw sum of two `i32` operands may
/// not fit back into `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdderError {
    /// Sum fell below `SUM_FLOOR`.
    UnderLimitResult { sum: i64 },
    /// Sum exceeded `SUM_CEILING`.
    OverLimitResult { sum: i64 },
}

impl Display for AdderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnderLimitResult { sum } => {
                write!(f, "sum {sum} is below the accepted floor {SUM_FLOOR}")
            }
            Self::OverLimitResult { sum } => {
                write!(f, "sum {sum} exceeds the accepted ceiling {SUM_CEILING}")
            }
        }
    }
}

impl Error for AdderError {}

/// Adds two operands and enforces the `[0, 100]` output range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedAdder {
    augend: i32,
    addend: i32,
}

impl BoundedAdder {
    pub fn new(augend: i32, addend: i32) -> Self {
        Self { augend, addend }
    }

    pub fn augend(&self) -> i32 {
        self.augend
    }

    pub fn addend(&self) -> i32 {
        self.addend
    }

    /// Returns `augend + addend`.
    ///
    /// # Errors
    /// - `UnderLimitResult` when the sum is below `SUM_FLOOR`.
    /// - `OverLimitResult` when the sum is above `SUM_CEILING`.
    pub fn compute(&self) -> AdderResult<i32> {
        let sum = i64::from(self.augend) + i64::from(self.addend);

        if sum < i64::from(SUM_FLOOR) {
            return Err(AdderError::UnderLimitResult { sum });
        }
        if sum > i64::from(SUM_CEILING) {
            return Err(AdderError::OverLimitResult { sum });
        }

        // In range, so the narrowing cannot truncate.
        Ok(sum as i32)
    }
}
