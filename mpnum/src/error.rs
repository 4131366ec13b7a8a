//! Error type shared by every numeric value in the crate.
//!
//! Recoverable failures (bad numerals, inexact conversions) come back as
//! `Err(NumericError)`. Operator traits cannot return a `Result`, so they
//! go through [`trap`] instead.

use thiserror::Error;

/// Errors from construction, parsing and checked arithmetic.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NumericError {
    /// The text is not a numeral in the requested radix.
    #[error("invalid numeral {0:?}")]
    InvalidNumeral(String),
    /// Radix outside `0` (auto-detect) and `2..=36`.
    #[error("unsupported radix {0}")]
    InvalidRadix(u32),
    /// The mathematical result is negative but the type is unsigned.
    #[error("arithmetic overflow")]
    Overflow,
    #[error("division by zero")]
    DivisionByZero,
    /// NaN or infinity where a finite value is required.
    #[error("value is not finite")]
    NotFinite,
    /// The source cannot be represented without rounding or truncation.
    #[error("value is not exactly representable")]
    Inexact,
    #[error("precision {precision} outside supported range {min}..={max}")]
    InvalidPrecision { precision: u32, min: u32, max: u32 },
    #[error("root index {0} outside 1..=4294967295")]
    InvalidRootIndex(i64),
}

/// Abort the current operation with `err`.
///
/// Used by operator impls (`Sub`, `SubAssign`, ...) where the signature
/// leaves no room for a `Result`.
#[cold]
#[track_caller]
pub(crate) fn trap(err: NumericError) -> ! {
    tracing::error!(error = %err, "unrecoverable numeric error");
    panic!("{err}")
}
