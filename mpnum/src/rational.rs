//! Exact fractions kept in lowest terms.

use std::fmt;
use std::str::FromStr;

use rug::ops::Pow;
use rug::{Integer, Rational};

use crate::error::{trap, NumericError};
use crate::ops::{forward_binop, forward_shift, forward_unop, from_native, native_cmp};
use crate::radix::parse_integer;
use crate::signed::SignedBig;
use crate::source::NumericSource;
use crate::unsigned::UnsignedBig;

/// Arbitrary-precision rational number.
///
/// Every value is canonical: `gcd(|num|, den) == 1` and `den > 0`, so the
/// derived equality, ordering and hash see one representation per number.
///
/// ```
/// use mpnum::RationalBig;
///
/// let r = RationalBig::new(6, -4).unwrap();
/// assert_eq!(r.to_string(), "-3/2");
/// assert_eq!(r.den(), 2);
/// ```
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RationalBig {
    pub(crate) value: Rational,
}

impl RationalBig {
    #[inline]
    pub(crate) fn from_engine(value: Rational) -> Self {
        Self { value }
    }

    /// `num / den`, reduced.
    pub fn new(num: impl Into<SignedBig>, den: impl Into<SignedBig>) -> Result<Self, NumericError> {
        let den = den.into();
        if den.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self::from_engine(Rational::from((num.into().value, den.value))))
    }

    /// Exact conversion from any core or native number.
    pub fn from_source(src: impl Into<NumericSource>) -> Result<Self, NumericError> {
        src.into().exact_rational().map(Self::from_engine)
    }

    /// Parse `n` or `n/d`. Each part carries its own sign and, with radix 0,
    /// its own prefix.
    pub fn from_str_radix(src: &str, radix: u32) -> Result<Self, NumericError> {
        let (num, den) = match src.split_once('/') {
            Some((num, den)) => (parse_integer(num, radix)?, parse_integer(den, radix)?),
            None => (parse_integer(src, radix)?, Integer::from(1)),
        };
        if den.cmp0().is_eq() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self::from_engine(Rational::from((num, den))))
    }

    /// Numerator, sign included.
    pub fn num(&self) -> SignedBig {
        SignedBig::from_engine(self.value.numer().clone())
    }

    /// Denominator, always positive.
    pub fn den(&self) -> SignedBig {
        SignedBig::from_engine(self.value.denom().clone())
    }

    pub fn is_zero(&self) -> bool {
        self.value.cmp0().is_eq()
    }

    pub fn is_negative(&self) -> bool {
        self.value.cmp0().is_lt()
    }

    pub fn is_integer(&self) -> bool {
        *self.value.denom() == 1
    }

    /// -1, 0 or 1.
    pub fn signum(&self) -> Self {
        Self::from(self.value.cmp0() as i8)
    }

    pub fn magnitude(&self) -> Self {
        Self::from_engine(self.value.clone().abs())
    }

    pub fn negate(&mut self) {
        self.value = -std::mem::take(&mut self.value);
    }

    /// `1 / self`.
    pub fn recip(&self) -> Result<Self, NumericError> {
        if self.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self::from_engine(self.value.clone().recip()))
    }

    /// Integer power; negative exponents invert.
    pub fn pow(&self, exp: i32) -> Result<Self, NumericError> {
        let e = exp.unsigned_abs();
        let num = Integer::from(self.value.numer().pow(e));
        let den = Integer::from(self.value.denom().pow(e));
        if exp >= 0 {
            Ok(Self::from_engine(Rational::from((num, den))))
        } else if num.cmp0().is_eq() {
            Err(NumericError::DivisionByZero)
        } else {
            Ok(Self::from_engine(Rational::from((den, num))))
        }
    }

    /// Integer part, rounding toward zero.
    pub fn trunc(&self) -> SignedBig {
        SignedBig::from_engine(Integer::from(self.value.numer() / self.value.denom()))
    }

    /// Nearest `f64`.
    pub fn to_f64(&self) -> f64 {
        self.value.to_f64()
    }

    pub fn checked_div(&self, rhs: &Self) -> Result<Self, NumericError> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self::from_engine(Rational::from(&self.value / &rhs.value)))
    }
}

// ============================================================================
// Operators
// ============================================================================

impl RationalBig {
    fn add_ref(lhs: &Self, rhs: &Self) -> Self {
        Self::from_engine(Rational::from(&lhs.value + &rhs.value))
    }

    fn add_assign_ref(&mut self, rhs: &Self) {
        self.value += &rhs.value;
    }

    fn sub_ref(lhs: &Self, rhs: &Self) -> Self {
        Self::from_engine(Rational::from(&lhs.value - &rhs.value))
    }

    fn sub_assign_ref(&mut self, rhs: &Self) {
        self.value -= &rhs.value;
    }

    fn mul_ref(lhs: &Self, rhs: &Self) -> Self {
        Self::from_engine(Rational::from(&lhs.value * &rhs.value))
    }

    fn mul_assign_ref(&mut self, rhs: &Self) {
        self.value *= &rhs.value;
    }

    fn div_ref(lhs: &Self, rhs: &Self) -> Self {
        lhs.checked_div(rhs).unwrap_or_else(|err| trap(err))
    }

    fn div_assign_ref(&mut self, rhs: &Self) {
        *self = Self::div_ref(self, rhs);
    }

    /// Multiply by `2^bits`.
    fn shl_ref(lhs: &Self, bits: u32) -> Self {
        Self::from_engine(lhs.value.clone() << bits)
    }

    fn shl_assign_ref(&mut self, bits: u32) {
        self.value <<= bits;
    }

    /// Divide by `2^bits`.
    fn shr_ref(lhs: &Self, bits: u32) -> Self {
        Self::from_engine(lhs.value.clone() >> bits)
    }

    fn shr_assign_ref(&mut self, bits: u32) {
        self.value >>= bits;
    }

    fn neg_ref(v: &Self) -> Self {
        Self::from_engine(Rational::from(-&v.value))
    }
}

forward_binop!(RationalBig, Add::add => RationalBig::add_ref, AddAssign::add_assign => RationalBig::add_assign_ref);
forward_binop!(RationalBig, Sub::sub => RationalBig::sub_ref, SubAssign::sub_assign => RationalBig::sub_assign_ref);
forward_binop!(RationalBig, Mul::mul => RationalBig::mul_ref, MulAssign::mul_assign => RationalBig::mul_assign_ref);
forward_binop!(RationalBig, Div::div => RationalBig::div_ref, DivAssign::div_assign => RationalBig::div_assign_ref);
forward_shift!(RationalBig, Shl::shl => RationalBig::shl_ref, ShlAssign::shl_assign => RationalBig::shl_assign_ref);
forward_shift!(RationalBig, Shr::shr => RationalBig::shr_ref, ShrAssign::shr_assign => RationalBig::shr_assign_ref);
forward_unop!(RationalBig, Neg::neg => RationalBig::neg_ref);

// ============================================================================
// Conversions and comparisons
// ============================================================================

from_native!(RationalBig, Rational: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
native_cmp!(RationalBig, value: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl From<SignedBig> for RationalBig {
    fn from(v: SignedBig) -> Self {
        Self::from_engine(Rational::from(v.value))
    }
}

impl From<&SignedBig> for RationalBig {
    fn from(v: &SignedBig) -> Self {
        Self::from_engine(Rational::from(&v.value))
    }
}

impl From<UnsignedBig> for RationalBig {
    fn from(v: UnsignedBig) -> Self {
        Self::from(&v)
    }
}

impl From<&UnsignedBig> for RationalBig {
    fn from(v: &UnsignedBig) -> Self {
        Self::from_engine(Rational::from(v.canonical()))
    }
}

impl TryFrom<f64> for RationalBig {
    type Error = NumericError;

    /// Exact: every finite `f64` is a dyadic rational.
    fn try_from(v: f64) -> Result<Self, NumericError> {
        Rational::from_f64(v)
            .map(Self::from_engine)
            .ok_or(NumericError::NotFinite)
    }
}

impl PartialEq<SignedBig> for RationalBig {
    fn eq(&self, other: &SignedBig) -> bool {
        self.value == other.value
    }
}

impl PartialEq<RationalBig> for SignedBig {
    fn eq(&self, other: &RationalBig) -> bool {
        self.value == other.value
    }
}

// ============================================================================
// Text
// ============================================================================

impl FromStr for RationalBig {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, NumericError> {
        Self::from_str_radix(s, 0)
    }
}

impl fmt::Display for RationalBig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl fmt::Debug for RationalBig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let num = self.value.numer().as_abs();
        write!(
            f,
            "RationalBig(\"{sign}0x{:x}/0x{:x}\")",
            &*num,
            self.value.denom()
        )
    }
}

// ============================================================================
// num-traits
// ============================================================================

impl num_traits::Zero for RationalBig {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        RationalBig::is_zero(self)
    }
}

impl num_traits::One for RationalBig {
    fn one() -> Self {
        Self::from(1)
    }
}

impl num_traits::Inv for RationalBig {
    type Output = RationalBig;

    /// # Panics
    /// If `self` is zero.
    fn inv(self) -> RationalBig {
        self.recip().unwrap_or_else(|err| trap(err))
    }
}

impl num_traits::ToPrimitive for RationalBig {
    fn to_i64(&self) -> Option<i64> {
        self.trunc().value.to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.trunc().value.to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(RationalBig::to_f64(self))
    }
}

impl num_traits::FromPrimitive for RationalBig {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_f64(n: f64) -> Option<Self> {
        Self::try_from(n).ok()
    }
}

impl num_traits::CheckedAdd for RationalBig {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        Some(self + v)
    }
}

impl num_traits::CheckedSub for RationalBig {
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        Some(self - v)
    }
}

impl num_traits::CheckedDiv for RationalBig {
    fn checked_div(&self, v: &Self) -> Option<Self> {
        RationalBig::checked_div(self, v).ok()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: i64, d: i64) -> RationalBig {
        RationalBig::new(n, d).unwrap()
    }

    #[test]
    fn test_new_reduces() {
        let r = q(10, -4);
        assert_eq!(r.num(), -5);
        assert_eq!(r.den(), 2);
        assert_eq!(RationalBig::new(1, 0), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_num_den_are_copies() {
        let r = q(3, 7);
        let mut n = r.num();
        n += SignedBig::from(1);
        assert_eq!(r.num(), 3);
    }

    #[test]
    fn test_arithmetic_stays_reduced() {
        let sum = q(1, 6) + q(1, 3);
        assert_eq!(sum, q(1, 2));
        assert_eq!(sum.den(), 2);
        assert_eq!(q(2, 3) * q(3, 4), q(1, 2));
        assert_eq!(q(1, 2) / q(1, 4), 2);
        assert_eq!(q(1, 2) - q(1, 2), 0);
        assert_eq!(-q(1, 2), q(-1, 2));
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_div_by_zero_panics() {
        let _ = q(1, 2) / RationalBig::default();
    }

    #[test]
    fn test_shifts_scale_by_powers_of_two() {
        assert_eq!(q(3, 4) << 2, 3);
        assert_eq!(q(3, 1) >> 3, q(3, 8));
    }

    #[test]
    fn test_from_f64_is_exact() {
        assert_eq!(RationalBig::try_from(0.1).unwrap(), q(3602879701896397, 36028797018963968));
        assert_eq!(RationalBig::try_from(f64::NAN), Err(NumericError::NotFinite));
        assert_eq!(RationalBig::from_source(-0.75).unwrap(), q(-3, 4));
    }

    #[test]
    fn test_parse() {
        assert_eq!("3/6".parse::<RationalBig>().unwrap(), q(1, 2));
        assert_eq!("-0x10/0b11".parse::<RationalBig>().unwrap(), q(-16, 3));
        assert_eq!("7".parse::<RationalBig>().unwrap(), 7);
        assert_eq!(
            "1/0".parse::<RationalBig>(),
            Err(NumericError::DivisionByZero)
        );
        assert!("1/".parse::<RationalBig>().is_err());
        assert!("1/-2/3".parse::<RationalBig>().is_err());
    }

    #[test]
    fn test_display_and_debug() {
        assert_eq!(q(-31, 3).to_string(), "-31/3");
        assert_eq!(q(8, 2).to_string(), "4");
        assert_eq!(format!("{:?}", q(-31, 3)), "RationalBig(\"-0x1f/0x3\")");
    }

    #[test]
    fn test_comparisons() {
        assert!(q(1, 3) < q(1, 2));
        assert!(q(1, 2) < 1);
        assert!(0.5 == q(1, 2));
        assert!(q(-1, 2) < 0.0);
        assert_eq!(q(4, 2), SignedBig::from(2));
    }

    #[test]
    fn test_helpers() {
        assert_eq!(q(-3, 4).signum(), -1);
        assert_eq!(q(-3, 4).magnitude(), q(3, 4));
        assert_eq!(q(-3, 4).recip().unwrap(), q(-4, 3));
        assert!(RationalBig::default().recip().is_err());
        assert_eq!(q(2, 3).pow(-2).unwrap(), q(9, 4));
        assert_eq!(q(-7, 2).trunc(), -3);
        assert_eq!(q(1, 4).to_f64(), 0.25);
        let mut r = q(5, 2);
        r.negate();
        assert_eq!(r, q(-5, 2));
    }
}
