//! Arbitrary-precision unsigned integer with implicit, value-dependent width.
//!
//! The stored engine value may be negative: a truncating conversion keeps
//! the source's infinite two's-complement pattern, so it agrees with a
//! native unsigned truncation at every width. Observers see the canonical
//! value `value & mask`, and comparisons first wrap both sides to their
//! common width.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use rug::integer::{IsPrime, Order};
use rug::ops::Pow;
use rug::Integer;

use crate::bits::Bits;
use crate::error::{trap, NumericError};
use crate::ops::{forward_binop, forward_shift, forward_unop};
use crate::radix::{check_radix, parse_integer};
use crate::signed::{SignedBig, PRIMALITY_REPS};
use crate::source::NumericSource;

/// Arbitrary-precision unsigned integer with wrap-around comparison.
///
/// Equality is not transitive across widths (`3` and `u64::MAX` both equal
/// a truncated `-1`), so the type is `PartialEq`/`PartialOrd` only.
///
/// ```
/// use mpnum::UnsignedBig;
///
/// let v: UnsignedBig = "25000".parse().unwrap();
/// assert_eq!(v, 25000u32);
/// assert!(UnsignedBig::from(3u8).try_sub(&UnsignedBig::from(5u8)).is_err());
/// ```
#[derive(Clone, Default)]
pub struct UnsignedBig {
    pub(crate) value: Integer,
}

// ============================================================================
// Construction
// ============================================================================

impl UnsignedBig {
    #[inline]
    pub(crate) fn from_engine(value: Integer) -> Self {
        Self { value }
    }

    /// Zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a non-negative numeral; radix 0 auto-detects the prefix.
    pub fn from_str_radix(src: &str, radix: u32) -> Result<Self, NumericError> {
        let value = parse_integer(src, radix)?;
        if value.cmp0() == Ordering::Less {
            return Err(NumericError::Overflow);
        }
        Ok(Self::from_engine(value))
    }

    /// Convert from any core or native number, truncating toward zero.
    ///
    /// Negative sources fail with `Overflow`.
    pub fn from_source(src: impl Into<NumericSource>) -> Result<Self, NumericError> {
        let src = src.into();
        if src.is_negative() {
            return Err(NumericError::Overflow);
        }
        src.truncated_integer().map(Self::from_engine)
    }

    /// Convert only if the source is a non-negative whole number.
    pub fn exactly(src: impl Into<NumericSource>) -> Option<Self> {
        let src = src.into();
        if src.is_negative() {
            return None;
        }
        src.exact_integer().ok().map(Self::from_engine)
    }

    /// Reinterpret the two's-complement pattern of `src` as unsigned.
    pub fn from_truncating(src: impl Into<SignedBig>) -> Self {
        Self::from_engine(src.into().value)
    }

    /// Negative values become zero.
    pub fn from_clamping(src: impl Into<SignedBig>) -> Self {
        let value = src.into().value;
        if value.cmp0() == Ordering::Less {
            Self::new()
        } else {
            Self::from_engine(value)
        }
    }

    /// Build from little-endian magnitude words.
    pub fn from_words(words: &[u64]) -> Self {
        Self::from_engine(Integer::from_digits(words, Order::Lsf))
    }
}

// ============================================================================
// Width and wrapping
// ============================================================================

impl UnsignedBig {
    fn is_raw_negative(&self) -> bool {
        self.value.cmp0() == Ordering::Less
    }

    /// Magnitude bit length (at least 1), plus one for a negative pattern.
    pub fn bit_width(&self) -> u32 {
        self.value.significant_bits().max(1) + u32::from(self.is_raw_negative())
    }

    /// `2^bit_width - 1`.
    pub fn mask(&self) -> Self {
        let mut mask = Integer::new();
        mask.set_bit(self.bit_width(), true);
        mask -= 1;
        Self::from_engine(mask)
    }

    /// The low `width` bits of the value.
    pub fn wrap_to(&self, width: u32) -> Self {
        Self::from_engine(Integer::from(self.value.keep_bits_ref(width)))
    }

    /// The value seen through its own mask.
    pub(crate) fn canonical(&self) -> Integer {
        if self.is_raw_negative() {
            Integer::from(self.value.keep_bits_ref(self.bit_width()))
        } else {
            self.value.clone()
        }
    }

    /// Both operands wrapped to their common width.
    fn wrapped_pair(&self, rhs: &Self) -> (Integer, Integer) {
        let width = self.bit_width().max(rhs.bit_width());
        (
            Integer::from(self.value.keep_bits_ref(width)),
            Integer::from(rhs.value.keep_bits_ref(width)),
        )
    }

    fn wrapping_cmp(&self, rhs: &Self) -> Ordering {
        if !self.is_raw_negative() && !rhs.is_raw_negative() {
            return self.value.cmp(&rhs.value);
        }
        let (lhs, rhs) = self.wrapped_pair(rhs);
        lhs.cmp(&rhs)
    }
}

// ============================================================================
// Bit introspection
// ============================================================================

impl UnsignedBig {
    /// Canonical value as little-endian words; zero is `[0]`.
    pub fn words(&self) -> Vec<u64> {
        let words = self.canonical().to_digits::<u64>(Order::Lsf);
        if words.is_empty() {
            vec![0]
        } else {
            words
        }
    }

    pub fn count_ones(&self) -> u32 {
        self.canonical().count_ones().unwrap_or(0)
    }

    /// Zero bits below the lowest set bit; 0 for zero.
    pub fn trailing_zeros(&self) -> u32 {
        self.value.find_one(0).unwrap_or(0)
    }

    pub fn bit(&self, index: u32) -> bool {
        self.value.get_bit(index)
    }

    pub fn set_bit(&mut self, index: u32, bit: bool) {
        self.value.set_bit(index, bit);
    }

    pub fn bits(&self) -> Bits<'_> {
        Bits::new(&self.value, self.bit_width())
    }
}

// ============================================================================
// Arithmetic helpers
// ============================================================================

impl UnsignedBig {
    pub fn is_zero(&self) -> bool {
        self.value.cmp0() == Ordering::Equal
    }

    /// 0 or 1.
    pub fn signum(&self) -> Self {
        Self::from(u8::from(!self.is_zero()))
    }

    /// The canonical value.
    pub fn magnitude(&self) -> Self {
        Self::from_engine(self.canonical())
    }

    /// Subtract at the operands' common width.
    ///
    /// Fails with `Overflow` when `rhs` is the larger operand.
    pub fn try_sub(&self, rhs: &Self) -> Result<Self, NumericError> {
        let (lhs, rhs) = self.wrapped_pair(rhs);
        let diff = lhs - rhs;
        if diff.cmp0() == Ordering::Less {
            return Err(NumericError::Overflow);
        }
        Ok(Self::from_engine(diff))
    }

    pub fn pow(&self, exp: u32) -> Self {
        Self::from_engine(Integer::from((&self.value).pow(exp)))
    }

    pub fn quotient_and_remainder(&self, rhs: &Self) -> (Self, Self) {
        match self.checked_div_rem(rhs) {
            Ok(qr) => qr,
            Err(err) => trap(err),
        }
    }

    pub fn checked_div_rem(&self, rhs: &Self) -> Result<(Self, Self), NumericError> {
        let divisor = rhs.canonical();
        if divisor.cmp0() == Ordering::Equal {
            return Err(NumericError::DivisionByZero);
        }
        let (q, r) = self.canonical().div_rem(divisor);
        Ok((Self::from_engine(q), Self::from_engine(r)))
    }

    pub fn checked_div(&self, rhs: &Self) -> Result<Self, NumericError> {
        self.checked_div_rem(rhs).map(|(q, _)| q)
    }

    pub fn checked_rem(&self, rhs: &Self) -> Result<Self, NumericError> {
        self.checked_div_rem(rhs).map(|(_, r)| r)
    }

    pub fn gcd(lhs: &Self, rhs: &Self) -> Self {
        Self::from_engine(lhs.canonical().gcd(&rhs.canonical()))
    }

    pub fn lcm(lhs: &Self, rhs: &Self) -> Self {
        Self::from_engine(lhs.canonical().lcm(&rhs.canonical()))
    }

    pub fn factorial(n: u32) -> Self {
        Self::from_engine(Integer::from(Integer::factorial(n)))
    }

    pub fn is_probably_prime(&self) -> bool {
        self.canonical().is_probably_prime(PRIMALITY_REPS) != IsPrime::No
    }

    pub fn to_f64(&self) -> f64 {
        self.canonical().to_f64()
    }

    /// Render the canonical value in `radix` (2..=36).
    pub fn to_str_radix(&self, radix: u32) -> Result<String, NumericError> {
        match check_radix(radix) {
            Ok(()) if radix != 0 => Ok(self.canonical().to_string_radix(radix as i32)),
            _ => Err(NumericError::InvalidRadix(radix)),
        }
    }
}

// ============================================================================
// Operators
// ============================================================================

impl UnsignedBig {
    fn add_ref(lhs: &Self, rhs: &Self) -> Self {
        Self::from_engine(Integer::from(&lhs.value + &rhs.value))
    }

    fn add_assign_ref(&mut self, rhs: &Self) {
        self.value += &rhs.value;
    }

    fn sub_ref(lhs: &Self, rhs: &Self) -> Self {
        lhs.try_sub(rhs).unwrap_or_else(|err| trap(err))
    }

    fn sub_assign_ref(&mut self, rhs: &Self) {
        *self = Self::sub_ref(self, rhs);
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

    fn shr_ref(lhs: &Self, bits: u32) -> Self {
        Self::from_engine(lhs.canonical() >> bits)
    }

    fn shr_assign_ref(&mut self, bits: u32) {
        *self = Self::shr_ref(self, bits);
    }

    fn not_ref(v: &Self) -> Self {
        Self::from_engine(Integer::from(!&v.value))
    }
}

forward_binop!(UnsignedBig, Add::add => UnsignedBig::add_ref, AddAssign::add_assign => UnsignedBig::add_assign_ref);
forward_binop!(UnsignedBig, Sub::sub => UnsignedBig::sub_ref, SubAssign::sub_assign => UnsignedBig::sub_assign_ref);
forward_binop!(UnsignedBig, Mul::mul => UnsignedBig::mul_ref, MulAssign::mul_assign => UnsignedBig::mul_assign_ref);
forward_binop!(UnsignedBig, Div::div => UnsignedBig::div_ref, DivAssign::div_assign => UnsignedBig::div_assign_ref);
forward_binop!(UnsignedBig, Rem::rem => UnsignedBig::rem_ref, RemAssign::rem_assign => UnsignedBig::rem_assign_ref);
forward_binop!(UnsignedBig, BitAnd::bitand => UnsignedBig::and_ref, BitAndAssign::bitand_assign => UnsignedBig::and_assign_ref);
forward_binop!(UnsignedBig, BitOr::bitor => UnsignedBig::or_ref, BitOrAssign::bitor_assign => UnsignedBig::or_assign_ref);
forward_binop!(UnsignedBig, BitXor::bitxor => UnsignedBig::xor_ref, BitXorAssign::bitxor_assign => UnsignedBig::xor_assign_ref);
forward_shift!(UnsignedBig, Shl::shl => UnsignedBig::shl_ref, ShlAssign::shl_assign => UnsignedBig::shl_assign_ref);
forward_shift!(UnsignedBig, Shr::shr => UnsignedBig::shr_ref, ShrAssign::shr_assign => UnsignedBig::shr_assign_ref);
forward_unop!(UnsignedBig, Not::not => UnsignedBig::not_ref);

// ============================================================================
// Comparison
// ============================================================================

impl PartialEq for UnsignedBig {
    fn eq(&self, other: &Self) -> bool {
        self.wrapping_cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for UnsignedBig {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.wrapping_cmp(other))
    }
}

/// Native integers compare through their truncated pattern, so a negative
/// native meets the value as its modular residue.
macro_rules! native_int_cmp {
    ($($n:ty),*) => {$(
        impl PartialEq<$n> for UnsignedBig {
            fn eq(&self, other: &$n) -> bool {
                *self == UnsignedBig::from_truncating(*other)
            }
        }

        impl PartialEq<UnsignedBig> for $n {
            fn eq(&self, other: &UnsignedBig) -> bool {
                UnsignedBig::from_truncating(*self) == *other
            }
        }

        impl PartialOrd<$n> for UnsignedBig {
            fn partial_cmp(&self, other: &$n) -> Option<Ordering> {
                self.partial_cmp(&UnsignedBig::from_truncating(*other))
            }
        }

        impl PartialOrd<UnsignedBig> for $n {
            fn partial_cmp(&self, other: &UnsignedBig) -> Option<Ordering> {
                UnsignedBig::from_truncating(*self).partial_cmp(other)
            }
        }
    )*};
}

native_int_cmp!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! native_float_cmp {
    ($($n:ty),*) => {$(
        impl PartialEq<$n> for UnsignedBig {
            fn eq(&self, other: &$n) -> bool {
                self.canonical() == *other
            }
        }

        impl PartialEq<UnsignedBig> for $n {
            fn eq(&self, other: &UnsignedBig) -> bool {
                *self == other.canonical()
            }
        }

        impl PartialOrd<$n> for UnsignedBig {
            fn partial_cmp(&self, other: &$n) -> Option<Ordering> {
                self.canonical().partial_cmp(other)
            }
        }

        impl PartialOrd<UnsignedBig> for $n {
            fn partial_cmp(&self, other: &UnsignedBig) -> Option<Ordering> {
                self.partial_cmp(&other.canonical())
            }
        }
    )*};
}

native_float_cmp!(f32, f64);

// ============================================================================
// Conversions
// ============================================================================

macro_rules! from_unsigned_native {
    ($($n:ty),*) => {$(
        impl From<$n> for UnsignedBig {
            #[inline]
            fn from(v: $n) -> Self {
                Self::from_engine(Integer::from(v))
            }
        }
    )*};
}

from_unsigned_native!(u8, u16, u32, u64, u128, usize);

macro_rules! try_from_signed_native {
    ($($n:ty),*) => {$(
        impl TryFrom<$n> for UnsignedBig {
            type Error = NumericError;

            fn try_from(v: $n) -> Result<Self, NumericError> {
                if v < 0 {
                    return Err(NumericError::Overflow);
                }
                Ok(Self::from_engine(Integer::from(v)))
            }
        }
    )*};
}

try_from_signed_native!(i8, i16, i32, i64, i128, isize);

impl TryFrom<SignedBig> for UnsignedBig {
    type Error = NumericError;

    fn try_from(v: SignedBig) -> Result<Self, NumericError> {
        if v.is_negative() {
            return Err(NumericError::Overflow);
        }
        Ok(Self::from_engine(v.value))
    }
}

impl TryFrom<&SignedBig> for UnsignedBig {
    type Error = NumericError;

    fn try_from(v: &SignedBig) -> Result<Self, NumericError> {
        Self::try_from(v.clone())
    }
}

macro_rules! try_into_native {
    ($($n:ty => $to:ident),*) => {$(
        impl TryFrom<&UnsignedBig> for $n {
            type Error = NumericError;

            fn try_from(v: &UnsignedBig) -> Result<$n, NumericError> {
                v.canonical().$to().ok_or(NumericError::Overflow)
            }
        }

        impl TryFrom<UnsignedBig> for $n {
            type Error = NumericError;

            fn try_from(v: UnsignedBig) -> Result<$n, NumericError> {
                <$n>::try_from(&v)
            }
        }
    )*};
}

try_into_native!(
    i8 => to_i8, i16 => to_i16, i32 => to_i32, i64 => to_i64, i128 => to_i128, isize => to_isize,
    u8 => to_u8, u16 => to_u16, u32 => to_u32, u64 => to_u64, u128 => to_u128, usize => to_usize
);

// ============================================================================
// Text
// ============================================================================

impl FromStr for UnsignedBig {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, NumericError> {
        Self::from_str_radix(s, 0)
    }
}

impl fmt::Display for UnsignedBig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.canonical(), f)
    }
}

impl fmt::Debug for UnsignedBig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.canonical())
    }
}

macro_rules! radix_fmt {
    ($($tr:ident),*) => {$(
        impl fmt::$tr for UnsignedBig {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::$tr::fmt(&self.canonical(), f)
            }
        }
    )*};
}

radix_fmt!(LowerHex, UpperHex, Binary, Octal);

// ============================================================================
// num-traits
// ============================================================================

impl num_traits::Zero for UnsignedBig {
    fn zero() -> Self {
        Self::new()
    }

    fn is_zero(&self) -> bool {
        UnsignedBig::is_zero(self)
    }
}

impl num_traits::One for UnsignedBig {
    fn one() -> Self {
        Self::from(1u8)
    }
}

impl num_traits::Num for UnsignedBig {
    type FromStrRadixErr = NumericError;

    fn from_str_radix(src: &str, radix: u32) -> Result<Self, NumericError> {
        UnsignedBig::from_str_radix(src, radix)
    }
}

impl num_traits::Unsigned for UnsignedBig {}

impl num_traits::ToPrimitive for UnsignedBig {
    fn to_i64(&self) -> Option<i64> {
        self.canonical().to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.canonical().to_u64()
    }

    fn to_u128(&self) -> Option<u128> {
        self.canonical().to_u128()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(UnsignedBig::to_f64(self))
    }
}

impl num_traits::FromPrimitive for UnsignedBig {
    fn from_i64(n: i64) -> Option<Self> {
        Self::try_from(n).ok()
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_f64(n: f64) -> Option<Self> {
        Self::from_source(n).ok()
    }
}

impl num_traits::Pow<u32> for UnsignedBig {
    type Output = UnsignedBig;

    fn pow(self, exp: u32) -> UnsignedBig {
        UnsignedBig::pow(&self, exp)
    }
}

impl num_traits::CheckedAdd for UnsignedBig {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        Some(self + v)
    }
}

impl num_traits::CheckedSub for UnsignedBig {
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        self.try_sub(v).ok()
    }
}

impl num_traits::CheckedDiv for UnsignedBig {
    fn checked_div(&self, v: &Self) -> Option<Self> {
        UnsignedBig::checked_div(self, v).ok()
    }
}

// ============================================================================
// Tests
// ============================================================================
