//! Arbitrary-precision binary floating point with per-value rounding.
//!
//! A [`FloatBig`] owns one engine float and the [`RoundingRule`] applied to
//! every result produced into it. Binary operations return a value at the
//! larger of the two precisions, rounded under the left operand's rule;
//! compound assignment keeps the receiver's own precision and rule.

mod context;
mod format;
mod math;

use std::cmp::Ordering;

use rug::float::{Constant, Round, Special};
use rug::ops::NegAssign;
use rug::Float;

use crate::error::NumericError;
use crate::ops::{forward_binop, forward_shift, forward_unop, native_cmp};
use crate::rational::RationalBig;
use crate::signed::SignedBig;
use crate::source::NumericSource;
use crate::unsigned::UnsignedBig;

pub use context::{
    default_precision, default_rounding, max_precision, min_precision, set_default_precision,
    set_default_rounding, FloatContext, RoundingRule, DOUBLE_PRECISION,
};
pub(crate) use format::describe_hex;

/// Sign of a float, zero and NaN included.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    Plus,
    Minus,
}

/// Arbitrary-precision floating-point number.
///
/// ```
/// use mpnum::{FloatBig, FloatContext, RoundingRule};
///
/// let ctx = FloatContext::new(200, RoundingRule::NearestEven).unwrap();
/// let half_pi = FloatBig::pi(ctx) >> 1;
/// assert_eq!(half_pi.sin(), 1);
/// ```
#[derive(Clone)]
pub struct FloatBig {
    pub(crate) value: Float,
    pub(crate) rounding: RoundingRule,
}

// ============================================================================
// Construction
// ============================================================================

/// Round any source into `ctx`.
fn round_source(src: &NumericSource, ctx: &FloatContext) -> (Float, Ordering) {
    match src {
        NumericSource::SignedInt(v) => ctx.round_ordered(*v),
        NumericSource::UnsignedInt(v) => ctx.round_ordered(*v),
        NumericSource::Decimal(v) => ctx.round_ordered(*v),
        NumericSource::Signed(v) => ctx.round_ordered(&v.value),
        NumericSource::Unsigned(v) => ctx.round_ordered(v.canonical()),
        NumericSource::Rational(v) => ctx.round_ordered(&v.value),
        NumericSource::Float(v) => ctx.round_ordered(&v.value),
    }
}

impl FloatBig {
    #[inline]
    pub(crate) fn from_engine(value: Float, rounding: RoundingRule) -> Self {
        Self { value, rounding }
    }

    #[inline]
    pub(crate) fn in_context(ctx: &FloatContext, value: Float) -> Self {
        Self::from_engine(value, ctx.rounding())
    }

    /// Positive zero in the process-wide default context.
    pub fn new() -> Self {
        Self::zero(FloatContext::default())
    }

    pub fn zero(ctx: FloatContext) -> Self {
        Self::in_context(&ctx, Float::new(ctx.precision()))
    }

    pub fn nan(ctx: FloatContext) -> Self {
        Self::in_context(&ctx, Float::with_val(ctx.precision(), Special::Nan))
    }

    pub fn infinity(ctx: FloatContext) -> Self {
        Self::in_context(&ctx, Float::with_val(ctx.precision(), Special::Infinity))
    }

    /// π rounded to `ctx`.
    pub fn pi(ctx: FloatContext) -> Self {
        Self::in_context(&ctx, ctx.round(Constant::Pi))
    }

    /// Convert from any core or native number, rounding to `ctx`.
    pub fn from_source(src: impl Into<NumericSource>, ctx: FloatContext) -> Self {
        let (value, _) = round_source(&src.into(), &ctx);
        Self::in_context(&ctx, value)
    }

    /// Convert only if `ctx` holds the source without rounding.
    ///
    /// NaN sources are never exact.
    pub fn exactly(src: impl Into<NumericSource>, ctx: FloatContext) -> Option<Self> {
        let (value, ord) = round_source(&src.into(), &ctx);
        (ord == Ordering::Equal && !value.is_nan()).then(|| Self::in_context(&ctx, value))
    }

    /// Parse decimal, `0x` hexadecimal float, or any radix 2..=36.
    pub fn from_str_radix(src: &str, radix: u32, ctx: FloatContext) -> Result<Self, NumericError> {
        format::parse_float(src, radix, &ctx).map(|value| Self::in_context(&ctx, value))
    }
}

impl Default for FloatBig {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Context
// ============================================================================

impl FloatBig {
    pub fn context(&self) -> FloatContext {
        FloatContext::from_parts_unchecked(self.value.prec(), self.rounding)
    }

    /// Significand precision in bits.
    pub fn precision(&self) -> u32 {
        self.value.prec()
    }

    /// Change the precision, re-rounding the stored value immediately.
    pub fn set_precision(&mut self, precision: u32) -> Result<(), NumericError> {
        let precision = context::check_precision(precision)?;
        let from = self.value.prec();
        let ord = context::reround(&mut self.value, precision, self.rounding);
        tracing::trace!(from, to = precision, exact = ord.is_eq(), "float re-rounded");
        Ok(())
    }

    pub fn rounding(&self) -> RoundingRule {
        self.rounding
    }

    /// Rule for future results; the current value is left as is.
    pub fn set_rounding(&mut self, rounding: RoundingRule) {
        self.rounding = rounding;
    }

    /// Always 2.
    pub const fn radix() -> u32 {
        2
    }

    /// Result context of `self op rhs`.
    pub(crate) fn binary_context(&self, rhs: &Self) -> FloatContext {
        FloatContext::from_parts_unchecked(self.precision().max(rhs.precision()), self.rounding)
    }
}

// ============================================================================
// Classification
// ============================================================================

impl FloatBig {
    pub fn is_nan(&self) -> bool {
        self.value.is_nan()
    }

    pub fn is_infinite(&self) -> bool {
        self.value.is_infinite()
    }

    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Finite and nonzero.
    pub fn is_normal(&self) -> bool {
        self.value.is_normal()
    }

    /// The engine's exponent range has no subnormals.
    pub fn is_subnormal(&self) -> bool {
        false
    }

    pub fn is_canonical(&self) -> bool {
        true
    }

    pub fn is_signaling_nan(&self) -> bool {
        false
    }

    pub fn is_sign_negative(&self) -> bool {
        self.value.is_sign_negative()
    }

    pub fn is_sign_positive(&self) -> bool {
        self.value.is_sign_positive()
    }

    pub fn sign(&self) -> Sign {
        if self.is_sign_negative() {
            Sign::Minus
        } else {
            Sign::Plus
        }
    }
}

// ============================================================================
// Decomposition
// ============================================================================

impl FloatBig {
    /// `e` such that `2^e <= |self| < 2^(e+1)`; 0 for zero and non-finite
    /// values.
    pub fn exponent(&self) -> i32 {
        self.value.get_exp().map_or(0, |e| e - 1)
    }

    /// `|self| / 2^exponent`, in `[1, 2)` for finite nonzero values.
    pub fn significand(&self) -> Self {
        let mut value = self.value.clone().abs();
        if value.is_normal() {
            value >>= self.exponent();
        }
        Self::from_engine(value, self.rounding)
    }

    /// `sign * |significand| * 2^exponent`, exact, in the significand's
    /// context.
    pub fn from_parts(sign: Sign, exponent: i32, significand: &Self) -> Self {
        let mut value = significand.value.clone().abs();
        if value.is_normal() {
            value <<= exponent;
        }
        if sign == Sign::Minus {
            value.neg_assign();
        }
        Self::from_engine(value, significand.rounding)
    }

    /// The engine exponent: `|self| = 0.1b…b × 2^exponent_bit_pattern`.
    pub fn exponent_bit_pattern(&self) -> i32 {
        self.value.get_exp().unwrap_or(0)
    }

    /// All `precision` significand bits as an integer; zero for non-finite
    /// values.
    pub fn significand_bit_pattern(&self) -> UnsignedBig {
        let bits = self
            .value
            .to_integer_exp()
            .map(|(mantissa, _)| mantissa.abs())
            .unwrap_or_default();
        UnsignedBig::from_engine(bits)
    }

    /// Inverse of [`exponent_bit_pattern`](Self::exponent_bit_pattern) and
    /// [`significand_bit_pattern`](Self::significand_bit_pattern).
    pub fn from_bit_patterns(
        sign: Sign,
        exponent_bit_pattern: i32,
        significand_bit_pattern: &UnsignedBig,
        ctx: FloatContext,
    ) -> Self {
        let mantissa = significand_bit_pattern.canonical();
        let width = mantissa.significant_bits().max(1);
        let mut exact = Float::with_val(width, &mantissa);
        if exact.is_normal() {
            let shift = i64::from(exponent_bit_pattern) - i64::from(width);
            exact <<= shift.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        }
        if sign == Sign::Minus {
            exact.neg_assign();
        }
        Self::in_context(&ctx, ctx.round(&exact))
    }

    /// `±2^exponent`: the power of two at the bottom of this value's binade.
    pub fn binade(&self) -> Self {
        if !self.is_finite() {
            return Self::nan(self.context());
        }
        if self.is_zero() {
            return self.clone();
        }
        let unit = if self.is_sign_negative() { -1 } else { 1 };
        let mut value = Float::with_val(self.precision(), unit);
        value <<= self.exponent();
        Self::from_engine(value, self.rounding)
    }

    /// Weight of the last significand bit. Zero gives the smallest positive
    /// value; NaN and infinities give NaN.
    pub fn ulp(&self) -> Self {
        let precision = self.precision();
        match self.value.get_exp() {
            Some(exp) => {
                let mut value = Float::with_val(precision, 1);
                value <<= exp - precision as i32;
                Self::from_engine(value, self.rounding)
            }
            None if self.is_zero() => {
                let mut value = Float::new(precision);
                value.next_up();
                Self::from_engine(value, self.rounding)
            }
            None => Self::nan(self.context()),
        }
    }

    /// Least value greater than `self` at this precision.
    pub fn next_up(&self) -> Self {
        let mut value = self.value.clone();
        value.next_up();
        Self::from_engine(value, self.rounding)
    }

    /// Greatest value less than `self` at this precision.
    pub fn next_down(&self) -> Self {
        let mut value = self.value.clone();
        value.next_down();
        Self::from_engine(value, self.rounding)
    }

    /// IEEE 754 total order: `-NaN < -inf < … < -0 < +0 < … < +inf < +NaN`.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self.is_sign_negative(), other.is_sign_negative()) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (negative, _) => {
                let by_magnitude = magnitude_total_cmp(&self.value, &other.value);
                if negative {
                    by_magnitude.reverse()
                } else {
                    by_magnitude
                }
            }
        }
    }
}

fn magnitude_rank(value: &Float) -> u8 {
    if value.is_nan() {
        2
    } else if value.is_infinite() {
        1
    } else {
        0
    }
}

fn magnitude_total_cmp(lhs: &Float, rhs: &Float) -> Ordering {
    match magnitude_rank(lhs).cmp(&magnitude_rank(rhs)) {
        Ordering::Equal if magnitude_rank(lhs) == 0 => {
            lhs.cmp_abs(rhs).unwrap_or(Ordering::Equal)
        }
        ord => ord,
    }
}

// ============================================================================
// Integral rounding and sign helpers
// ============================================================================

impl FloatBig {
    /// Round to an integral value in place.
    pub fn round(&mut self, rule: RoundingRule) {
        match rule {
            RoundingRule::NearestEven | RoundingRule::Faithful => self.value.round_even_mut(),
            RoundingRule::NearestTiesAway => self.value.round_mut(),
            RoundingRule::TowardZero => self.value.trunc_mut(),
            RoundingRule::Up => self.value.ceil_mut(),
            RoundingRule::Down => self.value.floor_mut(),
            RoundingRule::AwayFromZero if self.value.is_sign_negative() => {
                self.value.floor_mut()
            }
            RoundingRule::AwayFromZero => self.value.ceil_mut(),
        }
    }

    /// Integral value nearest under `rule`.
    pub fn rounded(&self, rule: RoundingRule) -> Self {
        let mut copy = self.clone();
        copy.round(rule);
        copy
    }

    /// `|magnitude_of|` carrying the sign of `sign_of`.
    pub fn from_sign_of(sign_of: &Self, magnitude_of: &Self) -> Self {
        let mut value = magnitude_of.value.clone().abs();
        if sign_of.is_sign_negative() {
            value.neg_assign();
        }
        Self::from_engine(value, magnitude_of.rounding)
    }

    pub fn abs(&self) -> Self {
        Self::from_engine(self.value.clone().abs(), self.rounding)
    }

    /// Same as [`abs`](Self::abs).
    pub fn magnitude(&self) -> Self {
        self.abs()
    }

    /// -1, +1, or `self` for zeros and NaN.
    pub fn signum(&self) -> Self {
        if self.is_nan() || self.is_zero() {
            return self.clone();
        }
        let unit = if self.is_sign_negative() { -1 } else { 1 };
        Self::from_engine(Float::with_val(self.precision(), unit), self.rounding)
    }

    pub fn negate(&mut self) {
        self.value.neg_assign();
    }

    /// `other - self`.
    pub fn distance_to(&self, other: &Self) -> Self {
        let ctx = self.binary_context(other);
        Self::in_context(&ctx, ctx.round(&other.value - &self.value))
    }

    /// `self + n`.
    pub fn advanced_by(&self, n: &Self) -> Self {
        self + n
    }

    /// Nearest `f64`.
    pub fn to_f64(&self) -> f64 {
        self.value.to_f64()
    }
}

// ============================================================================
// Operators
// ============================================================================

impl FloatBig {
    fn add_ref(lhs: &Self, rhs: &Self) -> Self {
        let ctx = lhs.binary_context(rhs);
        Self::in_context(&ctx, ctx.round(&lhs.value + &rhs.value))
    }

    fn add_assign_ref(&mut self, rhs: &Self) {
        self.value = self.context().round(&self.value + &rhs.value);
    }

    fn sub_ref(lhs: &Self, rhs: &Self) -> Self {
        let ctx = lhs.binary_context(rhs);
        Self::in_context(&ctx, ctx.round(&lhs.value - &rhs.value))
    }

    fn sub_assign_ref(&mut self, rhs: &Self) {
        self.value = self.context().round(&self.value - &rhs.value);
    }

    fn mul_ref(lhs: &Self, rhs: &Self) -> Self {
        let ctx = lhs.binary_context(rhs);
        Self::in_context(&ctx, ctx.round(&lhs.value * &rhs.value))
    }

    fn mul_assign_ref(&mut self, rhs: &Self) {
        self.value = self.context().round(&self.value * &rhs.value);
    }

    /// Division by zero yields an infinity or NaN, as in IEEE 754.
    fn div_ref(lhs: &Self, rhs: &Self) -> Self {
        let ctx = lhs.binary_context(rhs);
        Self::in_context(&ctx, ctx.round(&lhs.value / &rhs.value))
    }

    fn div_assign_ref(&mut self, rhs: &Self) {
        self.value = self.context().round(&self.value / &rhs.value);
    }

    /// Multiply by `2^bits`; exact unless the exponent overflows.
    fn shl_ref(lhs: &Self, bits: u32) -> Self {
        let mut value = lhs.value.clone();
        value <<= bits;
        Self::from_engine(value, lhs.rounding)
    }

    fn shl_assign_ref(&mut self, bits: u32) {
        self.value <<= bits;
    }

    fn shr_ref(lhs: &Self, bits: u32) -> Self {
        let mut value = lhs.value.clone();
        value >>= bits;
        Self::from_engine(value, lhs.rounding)
    }

    fn shr_assign_ref(&mut self, bits: u32) {
        self.value >>= bits;
    }

    fn neg_ref(v: &Self) -> Self {
        Self::from_engine(Float::with_val(v.precision(), -&v.value), v.rounding)
    }
}

forward_binop!(FloatBig, Add::add => FloatBig::add_ref, AddAssign::add_assign => FloatBig::add_assign_ref);
forward_binop!(FloatBig, Sub::sub => FloatBig::sub_ref, SubAssign::sub_assign => FloatBig::sub_assign_ref);
forward_binop!(FloatBig, Mul::mul => FloatBig::mul_ref, MulAssign::mul_assign => FloatBig::mul_assign_ref);
forward_binop!(FloatBig, Div::div => FloatBig::div_ref, DivAssign::div_assign => FloatBig::div_assign_ref);
forward_shift!(FloatBig, Shl::shl => FloatBig::shl_ref, ShlAssign::shl_assign => FloatBig::shl_assign_ref);
forward_shift!(FloatBig, Shr::shr => FloatBig::shr_ref, ShrAssign::shr_assign => FloatBig::shr_assign_ref);
forward_unop!(FloatBig, Neg::neg => FloatBig::neg_ref);

// ============================================================================
// Comparison and conversion
// ============================================================================

impl PartialEq for FloatBig {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl PartialOrd for FloatBig {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

native_cmp!(FloatBig, value: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Native numbers convert through the process-wide default context.
macro_rules! from_with_default_context {
    ($($t:ty),*) => {$(
        impl From<$t> for FloatBig {
            fn from(v: $t) -> Self {
                Self::from_source(v, FloatContext::default())
            }
        }
    )*};
}

from_with_default_context!(
    i8, i16, i32, i64, u8, u16, u32, u64, f32, f64,
    SignedBig, &SignedBig, UnsignedBig, &UnsignedBig, RationalBig, &RationalBig
);

// ============================================================================
// num-traits
// ============================================================================

impl num_traits::Zero for FloatBig {
    fn zero() -> Self {
        Self::new()
    }

    fn is_zero(&self) -> bool {
        FloatBig::is_zero(self)
    }
}

impl num_traits::One for FloatBig {
    fn one() -> Self {
        Self::from(1)
    }
}

impl num_traits::ToPrimitive for FloatBig {
    fn to_i64(&self) -> Option<i64> {
        self.value.to_integer_round(Round::Zero)?.0.to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.value.to_integer_round(Round::Zero)?.0.to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(FloatBig::to_f64(self))
    }
}

impl num_traits::FromPrimitive for FloatBig {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_f64(n: f64) -> Option<Self> {
        Some(Self::from(n))
    }
}

// ============================================================================
// Tests
// ============================================================================
