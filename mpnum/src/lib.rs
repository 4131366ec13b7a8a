//! # mpnum
//!
//! Arbitrary-precision numeric value types that behave like native numbers.
//!
//! - [`SignedBig`]: signed integer with two's-complement bit semantics.
//! - [`UnsignedBig`]: unsigned integer whose width follows its value, with
//!   modular comparison and underflow-checked subtraction.
//! - [`RationalBig`]: exact fraction kept in lowest terms.
//! - [`FloatBig`]: binary float with per-value precision and rounding rule.
//!
//! All arithmetic is delegated to GMP and MPFR through [`rug`]. This crate
//! adapts their sign-magnitude results to the semantics above.
//!
//! ```
//! use mpnum::{SignedBig, UnsignedBig};
//!
//! let a: SignedBig = "12345678901234567890".parse().unwrap();
//! let b: SignedBig = "-12345678901234567890".parse().unwrap();
//! assert_eq!(a + b, 0);
//!
//! // -1 as an unsigned value is all ones at every width.
//! let ones = UnsignedBig::from_truncating(-1);
//! assert_eq!(ones, u8::MAX);
//! assert_eq!(ones, u64::MAX);
//! ```

mod ops;

pub mod bits;
pub mod error;
pub mod float;
pub mod rational;
pub mod signed;
pub mod source;
pub mod twos_complement;
pub mod unsigned;

mod radix;
mod serde;

pub use bits::Bits;
pub use error::NumericError;
pub use float::{
    default_precision, default_rounding, max_precision, min_precision, set_default_precision,
    set_default_rounding, FloatBig, FloatContext, RoundingRule, Sign, DOUBLE_PRECISION,
};
pub use radix::MAX_RADIX;
pub use rational::RationalBig;
pub use signed::SignedBig;
pub use source::NumericSource;
pub use twos_complement::{from_twos_complement, to_twos_complement};
pub use unsigned::UnsignedBig;
