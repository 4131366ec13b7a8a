//! The closed set of values every numeric type can be built from.

use rug::float::Round;
use rug::{Integer, Rational};

use crate::error::NumericError;
use crate::float::FloatBig;
use crate::rational::RationalBig;
use crate::signed::SignedBig;
use crate::unsigned::UnsignedBig;

/// A conversion source for [`SignedBig::from_source`] and friends.
///
/// Native integers widen into `SignedInt`/`UnsignedInt`, native floats into
/// `Decimal`.
#[derive(Clone, Debug, PartialEq)]
pub enum NumericSource {
    SignedInt(i64),
    UnsignedInt(u64),
    Decimal(f64),
    Signed(SignedBig),
    Unsigned(UnsignedBig),
    Rational(RationalBig),
    Float(FloatBig),
}

macro_rules! from_native {
    ($variant:ident, $wide:ty: $($t:ty),*) => {$(
        impl From<$t> for NumericSource {
            #[inline]
            fn from(v: $t) -> Self {
                NumericSource::$variant(<$wide>::from(v))
            }
        }
    )*};
}

from_native!(SignedInt, i64: i8, i16, i32, i64);
from_native!(UnsignedInt, u64: u8, u16, u32, u64);
from_native!(Decimal, f64: f32, f64);

macro_rules! from_core {
    ($($variant:ident($t:ty)),*) => {$(
        impl From<$t> for NumericSource {
            #[inline]
            fn from(v: $t) -> Self {
                NumericSource::$variant(v)
            }
        }

        impl From<&$t> for NumericSource {
            #[inline]
            fn from(v: &$t) -> Self {
                NumericSource::$variant(v.clone())
            }
        }
    )*};
}

from_core!(
    Signed(SignedBig),
    Unsigned(UnsignedBig),
    Rational(RationalBig),
    Float(FloatBig)
);

impl NumericSource {
    /// Integer part, rounding toward zero. Fails only for NaN and infinity.
    pub(crate) fn truncated_integer(&self) -> Result<Integer, NumericError> {
        let value = match self {
            NumericSource::SignedInt(v) => Integer::from(*v),
            NumericSource::UnsignedInt(v) => Integer::from(*v),
            NumericSource::Decimal(v) => {
                Integer::from_f64(v.trunc()).ok_or(NumericError::NotFinite)?
            }
            NumericSource::Signed(v) => v.value.clone(),
            NumericSource::Unsigned(v) => v.canonical(),
            NumericSource::Rational(v) => Integer::from(v.value.numer() / v.value.denom()),
            NumericSource::Float(v) => v
                .value
                .to_integer_round(Round::Zero)
                .map(|(int, _)| int)
                .ok_or(NumericError::NotFinite)?,
        };
        if !self.is_integral() {
            tracing::trace!(source = ?self, "truncating non-integral source");
        }
        Ok(value)
    }

    /// Integer value, or `Inexact` when the source has a fractional part.
    pub(crate) fn exact_integer(&self) -> Result<Integer, NumericError> {
        if !self.is_integral() {
            return Err(NumericError::Inexact);
        }
        self.truncated_integer()
    }

    /// Exact rational value. Fails only for NaN and infinity.
    pub(crate) fn exact_rational(&self) -> Result<Rational, NumericError> {
        match self {
            NumericSource::Decimal(v) => Rational::from_f64(*v).ok_or(NumericError::NotFinite),
            NumericSource::Rational(v) => Ok(v.value.clone()),
            NumericSource::Float(v) => v.value.to_rational().ok_or(NumericError::NotFinite),
            _ => self.truncated_integer().map(Rational::from),
        }
    }

    /// Whether the source holds a finite whole number.
    pub(crate) fn is_integral(&self) -> bool {
        match self {
            NumericSource::Decimal(v) => v.is_finite() && v.fract() == 0.0,
            NumericSource::Rational(v) => *v.value.denom() == 1,
            NumericSource::Float(v) => v.value.is_integer(),
            _ => true,
        }
    }

    pub(crate) fn is_negative(&self) -> bool {
        match self {
            NumericSource::SignedInt(v) => *v < 0,
            NumericSource::UnsignedInt(_) | NumericSource::Unsigned(_) => false,
            NumericSource::Decimal(v) => *v < 0.0,
            NumericSource::Signed(v) => v.value.cmp0().is_lt(),
            NumericSource::Rational(v) => v.value.cmp0().is_lt(),
            NumericSource::Float(v) => v.value.is_sign_negative() && !v.value.is_zero(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_widening() {
        assert_eq!(NumericSource::from(-3i8), NumericSource::SignedInt(-3));
        assert_eq!(NumericSource::from(7u16), NumericSource::UnsignedInt(7));
        assert_eq!(NumericSource::from(0.5f32), NumericSource::Decimal(0.5));
    }

    #[test]
    fn test_truncated_integer() {
        assert_eq!(NumericSource::from(-2.75).truncated_integer().unwrap(), -2);
        assert_eq!(
            NumericSource::from(RationalBig::new(-7, 2).unwrap())
                .truncated_integer()
                .unwrap(),
            -3
        );
        assert_eq!(
            NumericSource::from(f64::NAN).truncated_integer(),
            Err(NumericError::NotFinite)
        );
    }

    #[test]
    fn test_exact_integer() {
        assert_eq!(NumericSource::from(4.0).exact_integer().unwrap(), 4);
        assert_eq!(
            NumericSource::from(4.5).exact_integer(),
            Err(NumericError::Inexact)
        );
        assert_eq!(
            NumericSource::from(f64::INFINITY).exact_integer(),
            Err(NumericError::Inexact)
        );
    }

    #[test]
    fn test_exact_rational_from_decimal() {
        let r = NumericSource::from(0.375).exact_rational().unwrap();
        assert_eq!(r, Rational::from((3, 8)));
    }

    #[test]
    fn test_negative_detection() {
        assert!(NumericSource::from(-1).is_negative());
        assert!(!NumericSource::from(-0.0).is_negative());
        assert!(NumericSource::from(SignedBig::from(-5)).is_negative());
        assert!(!NumericSource::from(0u64).is_negative());
    }
}
