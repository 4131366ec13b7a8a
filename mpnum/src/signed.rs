//! Arbitrary-precision signed integer with two's-complement bit semantics.
//!
//! Arithmetic is delegated to the engine's sign-magnitude integer. The bit
//! views (`words`, `bits`, `count_ones`, bitwise operators) behave as if the
//! value were stored in two's complement with exactly `bit_width` bits.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use rug::integer::{IsPrime, Order};
use rug::ops::Pow;
use rug::Integer;

use crate::bits::Bits;
use crate::error::{trap, NumericError};
use crate::ops::{forward_binop, forward_shift, forward_unop, from_native, native_cmp};
use crate::radix::{check_radix, parse_integer};
use crate::source::NumericSource;
use crate::twos_complement::{from_twos_complement, to_twos_complement};
use crate::unsigned::UnsignedBig;

/// Miller-Rabin rounds used by [`SignedBig::is_probably_prime`].
pub(crate) const PRIMALITY_REPS: u32 = 32;

/// Arbitrary-precision signed integer.
///
/// ```
/// use mpnum::SignedBig;
///
/// let a: SignedBig = "12345678901234567890".parse().unwrap();
/// let b: SignedBig = "-12345678901234567890".parse().unwrap();
/// assert_eq!(a + b, 0);
/// ```
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SignedBig {
    pub(crate) value: Integer,
}

// ============================================================================
// Construction
// ============================================================================

impl SignedBig {
    #[inline]
    pub(crate) fn from_engine(value: Integer) -> Self {
        Self { value }
    }

    /// Zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a numeral in `radix` (2..=36), or auto-detect with radix 0.
    pub fn from_str_radix(src: &str, radix: u32) -> Result<Self, NumericError> {
        parse_integer(src, radix).map(Self::from_engine)
    }

    /// Convert from any core or native number, truncating toward zero.
    ///
    /// Only NaN and infinities are rejected.
    pub fn from_source(src: impl Into<NumericSource>) -> Result<Self, NumericError> {
        src.into().truncated_integer().map(Self::from_engine)
    }

    /// Convert only if the source is a whole number.
    pub fn exactly(src: impl Into<NumericSource>) -> Option<Self> {
        src.into().exact_integer().ok().map(Self::from_engine)
    }

    /// Build from little-endian two's-complement words.
    ///
    /// Inverse of [`words`](Self::words).
    pub fn from_words(words: &[u64]) -> Self {
        let (magnitude, negative) = from_twos_complement(words);
        let value = Integer::from_digits(&magnitude, Order::Lsf);
        Self::from_engine(if negative { -value } else { value })
    }
}

// ============================================================================
// Bit introspection
// ============================================================================

impl SignedBig {
    /// Bits needed to hold the value in two's complement: 1 for zero,
    /// otherwise the magnitude's bit length plus a sign bit.
    pub fn bit_width(&self) -> u32 {
        if self.is_zero() {
            1
        } else {
            self.value.significant_bits() + 1
        }
    }

    /// Minimal two's-complement encoding, least significant word first.
    pub fn words(&self) -> Vec<u64> {
        let magnitude = self.value.to_digits::<u64>(Order::Lsf);
        to_twos_complement(&magnitude, self.is_negative())
    }

    /// Set bits in the `bit_width`-bit two's-complement pattern.
    pub fn count_ones(&self) -> u32 {
        if self.is_negative() {
            Integer::from(self.value.keep_bits_ref(self.bit_width()))
                .count_ones()
                .unwrap_or(0)
        } else {
            self.value.count_ones().unwrap_or(0)
        }
    }

    /// Zero bits below the lowest set bit; 0 for zero.
    pub fn trailing_zeros(&self) -> u32 {
        self.value.find_one(0).unwrap_or(0)
    }

    /// Bit `index` of the two's-complement pattern. Bits above `bit_width`
    /// repeat the sign.
    pub fn bit(&self, index: u32) -> bool {
        self.value.get_bit(index)
    }

    pub fn set_bit(&mut self, index: u32, bit: bool) {
        self.value.set_bit(index, bit);
    }

    /// The `bit_width` bits of the value as a random-access sequence.
    pub fn bits(&self) -> Bits<'_> {
        Bits::new(&self.value, self.bit_width())
    }
}

// ============================================================================
// Arithmetic helpers
// ============================================================================

impl SignedBig {
    pub fn is_zero(&self) -> bool {
        self.value.cmp0() == Ordering::Equal
    }

    pub fn is_negative(&self) -> bool {
        self.value.cmp0() == Ordering::Less
    }

    pub fn is_positive(&self) -> bool {
        self.value.cmp0() == Ordering::Greater
    }

    /// -1, 0 or 1.
    pub fn signum(&self) -> Self {
        Self::from(match self.value.cmp0() {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        })
    }

    pub fn abs(&self) -> Self {
        Self::from_engine(self.value.clone().abs())
    }

    /// Absolute value as an unsigned integer.
    pub fn magnitude(&self) -> UnsignedBig {
        UnsignedBig::from_engine(self.value.clone().abs())
    }

    /// Negate in place.
    pub fn negate(&mut self) {
        self.value = -std::mem::take(&mut self.value);
    }

    pub fn pow(&self, exp: u32) -> Self {
        Self::from_engine(Integer::from((&self.value).pow(exp)))
    }

    /// Truncating quotient and remainder in one step.
    ///
    /// # Panics
    /// If `rhs` is zero.
    pub fn quotient_and_remainder(&self, rhs: &Self) -> (Self, Self) {
        match self.checked_div_rem(rhs) {
            Ok(qr) => qr,
            Err(err) => trap(err),
        }
    }

    pub fn checked_div_rem(&self, rhs: &Self) -> Result<(Self, Self), NumericError> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        let (q, r) = self.value.clone().div_rem(rhs.value.clone());
        Ok((Self::from_engine(q), Self::from_engine(r)))
    }

    pub fn checked_div(&self, rhs: &Self) -> Result<Self, NumericError> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self::from_engine(Integer::from(&self.value / &rhs.value)))
    }

    pub fn checked_rem(&self, rhs: &Self) -> Result<Self, NumericError> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self::from_engine(Integer::from(&self.value % &rhs.value)))
    }

    pub fn gcd(lhs: &Self, rhs: &Self) -> Self {
        Self::from_engine(Integer::from(lhs.value.gcd_ref(&rhs.value)))
    }

    pub fn lcm(lhs: &Self, rhs: &Self) -> Self {
        Self::from_engine(Integer::from(lhs.value.lcm_ref(&rhs.value)))
    }

    pub fn factorial(n: u32) -> Self {
        Self::from_engine(Integer::from(Integer::factorial(n)))
    }

    /// Probabilistic primality test. `false` means definitely composite.
    pub fn is_probably_prime(&self) -> bool {
        self.value.is_probably_prime(PRIMALITY_REPS) != IsPrime::No
    }

    /// Nearest `f64`, rounding toward zero; infinite when out of range.
    pub fn to_f64(&self) -> f64 {
        self.value.to_f64()
    }

    /// Render in `radix` (2..=36), lowercase digits.
    pub fn to_str_radix(&self, radix: u32) -> Result<String, NumericError> {
        match check_radix(radix) {
            Ok(()) if radix != 0 => Ok(self.value.to_string_radix(radix as i32)),
            _ => Err(NumericError::InvalidRadix(radix)),
        }
    }
}

// ============================================================================
// Operators
// ============================================================================

impl SignedBig {
    fn add_ref(lhs: &Self, rhs: &Self) -> Self {
        Self::from_engine(Integer::from(&lhs.value + &rhs.value))
    }

    fn add_assign_ref(&mut self, rhs: &Self) {
        self.value += &rhs.value;
    }

    fn sub_ref(lhs: &Self, rhs: &Self) -> Self {
        Self::from_engine(Integer::from(&lhs.value - &rhs.value))
    }

    fn sub_assign_ref(&mut self, rhs: &Self) {
        self.value -= &rhs.value;
    }

    fn mul_ref(lhs: &Self, rhs: &Self) -> Self {
        Self::from_engine(Integer::from(&lhs.value * &rhs.value))
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

    fn rem_ref(lhs: &Self, rhs: &Self) -> Self {
        lhs.checked_rem(rhs).unwrap_or_else(|err| trap(err))
    }

    fn rem_assign_ref(&mut self, rhs: &Self) {
        *self = Self::rem_ref(self, rhs);
    }

    fn and_ref(lhs: &Self, rhs: &Self) -> Self {
        Self::from_engine(Integer::from(&lhs.value & &rhs.value))
    }

    fn and_assign_ref(&mut self, rhs: &Self) {
        self.value &= &rhs.value;
    }

    fn or_ref(lhs: &Self, rhs: &Self) -> Self {
        Self::from_engine(Integer::from(&lhs.value | &rhs.value))
    }

    fn or_assign_ref(&mut self, rhs: &Self) {
        self.value |= &rhs.value;
    }

    fn xor_ref(lhs: &Self, rhs: &Self) -> Self {
        Self::from_engine(Integer::from(&lhs.value ^ &rhs.value))
    }

    fn xor_assign_ref(&mut self, rhs: &Self) {
        self.value ^= &rhs.value;
    }

    fn shl_ref(lhs: &Self, bits: u32) -> Self {
        Self::from_engine(Integer::from(&lhs.value << bits))
    }

    fn shl_assign_ref(&mut self, bits: u32) {
        self.value <<= bits;
    }

    /// Floor shift: negative values round toward negative infinity.
    fn shr_ref(lhs: &Self, bits: u32) -> Self {
        Self::from_engine(Integer::from(&lhs.value >> bits))
    }

    fn shr_assign_ref(&mut self, bits: u32) {
        self.value >>= bits;
    }

    fn neg_ref(v: &Self) -> Self {
        Self::from_engine(Integer::from(-&v.value))
    }

    fn not_ref(v: &Self) -> Self {
        Self::from_engine(Integer::from(!&v.value))
    }
}

forward_binop!(SignedBig, Add::add => SignedBig::add_ref, AddAssign::add_assign => SignedBig::add_assign_ref);
forward_binop!(SignedBig, Sub::sub => SignedBig::sub_ref, SubAssign::sub_assign => SignedBig::sub_assign_ref);
forward_binop!(SignedBig, Mul::mul => SignedBig::mul_ref, MulAssign::mul_assign => SignedBig::mul_assign_ref);
forward_binop!(SignedBig, Div::div => SignedBig::div_ref, DivAssign::div_assign => SignedBig::div_assign_ref);
forward_binop!(SignedBig, Rem::rem => SignedBig::rem_ref, RemAssign::rem_assign => SignedBig::rem_assign_ref);
forward_binop!(SignedBig, BitAnd::bitand => SignedBig::and_ref, BitAndAssign::bitand_assign => SignedBig::and_assign_ref);
forward_binop!(SignedBig, BitOr::bitor => SignedBig::or_ref, BitOrAssign::bitor_assign => SignedBig::or_assign_ref);
forward_binop!(SignedBig, BitXor::bitxor => SignedBig::xor_ref, BitXorAssign::bitxor_assign => SignedBig::xor_assign_ref);
forward_shift!(SignedBig, Shl::shl => SignedBig::shl_ref, ShlAssign::shl_assign => SignedBig::shl_assign_ref);
forward_shift!(SignedBig, Shr::shr => SignedBig::shr_ref, ShrAssign::shr_assign => SignedBig::shr_assign_ref);
forward_unop!(SignedBig, Neg::neg => SignedBig::neg_ref);
forward_unop!(SignedBig, Not::not => SignedBig::not_ref);

// ============================================================================
// Conversions and comparisons with native numbers
// ============================================================================

from_native!(SignedBig, Integer: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
native_cmp!(SignedBig, value: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

macro_rules! try_into_native {
    ($($n:ty => $to:ident),*) => {$(
        impl TryFrom<&SignedBig> for $n {
            type Error = NumericError;

            fn try_from(v: &SignedBig) -> Result<$n, NumericError> {
                v.value.$to().ok_or(NumericError::Overflow)
            }
        }

        impl TryFrom<SignedBig> for $n {
            type Error = NumericError;

            fn try_from(v: SignedBig) -> Result<$n, NumericError> {
                <$n>::try_from(&v)
            }
        }
    )*};
}

try_into_native!(
    i8 => to_i8, i16 => to_i16, i32 => to_i32, i64 => to_i64, i128 => to_i128, isize => to_isize,
    u8 => to_u8, u16 => to_u16, u32 => to_u32, u64 => to_u64, u128 => to_u128, usize => to_usize
);

impl From<UnsignedBig> for SignedBig {
    fn from(v: UnsignedBig) -> Self {
        Self::from_engine(v.canonical())
    }
}

impl From<&UnsignedBig> for SignedBig {
    fn from(v: &UnsignedBig) -> Self {
        Self::from_engine(v.canonical())
    }
}

// ============================================================================
// Text
// ============================================================================

impl FromStr for SignedBig {
    type Err = NumericError;

    /// Radix is detected from the prefix (`0x`, `0b`, leading `0`).
    fn from_str(s: &str) -> Result<Self, NumericError> {
        Self::from_str_radix(s, 0)
    }
}

impl fmt::Display for SignedBig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl fmt::Debug for SignedBig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.value.as_abs();
        write!(f, "SignedBig(\"{sign}0x{:x}\")", &*abs)
    }
}

macro_rules! radix_fmt {
    ($($tr:ident),*) => {$(
        impl fmt::$tr for SignedBig {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::$tr::fmt(&self.value, f)
            }
        }
    )*};
}

radix_fmt!(LowerHex, UpperHex, Binary, Octal);

// ============================================================================
// num-traits
// ============================================================================

impl num_traits::Zero for SignedBig {
    fn zero() -> Self {
        Self::new()
    }

    fn is_zero(&self) -> bool {
        SignedBig::is_zero(self)
    }
}

impl num_traits::One for SignedBig {
    fn one() -> Self {
        Self::from(1)
    }
}

impl num_traits::Num for SignedBig {
    type FromStrRadixErr = NumericError;

    fn from_str_radix(src: &str, radix: u32) -> Result<Self, NumericError> {
        SignedBig::from_str_radix(src, radix)
    }
}

impl num_traits::Signed for SignedBig {
    fn abs(&self) -> Self {
        SignedBig::abs(self)
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            Self::new()
        } else {
            self - other
        }
    }

    fn signum(&self) -> Self {
        SignedBig::signum(self)
    }

    fn is_positive(&self) -> bool {
        SignedBig::is_positive(self)
    }

    fn is_negative(&self) -> bool {
        SignedBig::is_negative(self)
    }
}

impl num_traits::ToPrimitive for SignedBig {
    fn to_i64(&self) -> Option<i64> {
        self.value.to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.value.to_u64()
    }

    fn to_i128(&self) -> Option<i128> {
        self.value.to_i128()
    }

    fn to_u128(&self) -> Option<u128> {
        self.value.to_u128()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.value.to_f64())
    }
}

impl num_traits::FromPrimitive for SignedBig {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_i128(n: i128) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_u128(n: u128) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_f64(n: f64) -> Option<Self> {
        Self::from_source(n).ok()
    }
}

impl num_traits::Pow<u32> for SignedBig {
    type Output = SignedBig;

    fn pow(self, exp: u32) -> SignedBig {
        SignedBig::pow(&self, exp)
    }
}

impl num_traits::Pow<u32> for &SignedBig {
    type Output = SignedBig;

    fn pow(self, exp: u32) -> SignedBig {
        SignedBig::pow(self, exp)
    }
}

impl num_traits::CheckedAdd for SignedBig {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        Some(self + v)
    }
}

impl num_traits::CheckedSub for SignedBig {
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        Some(self - v)
    }
}

impl num_traits::CheckedDiv for SignedBig {
    fn checked_div(&self, v: &Self) -> Option<Self> {
        SignedBig::checked_div(self, v).ok()
    }
}

// ============================================================================
// Tests
// ============================================================================
