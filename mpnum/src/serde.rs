//! `serde` support.
//!
//! Integers and rationals serialize as decimal text, so any magnitude
//! survives formats with 64-bit number limits. They also deserialize from
//! native JSON numbers. A [`FloatBig`] serializes as its context plus the
//! exact hexadecimal rendering of its value.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::NumericError;
use crate::float::{describe_hex, FloatBig, FloatContext, RoundingRule};
use crate::rational::RationalBig;
use crate::signed::SignedBig;
use crate::source::NumericSource;
use crate::unsigned::UnsignedBig;

/// Types carried as numeral text.
trait Numeral: FromStr<Err = NumericError> + Sized {
    const EXPECTING: &'static str;

    fn from_native(src: NumericSource) -> Result<Self, NumericError>;
}

struct NumeralVisitor<T>(PhantomData<T>);

impl<T: Numeral> Visitor<'_> for NumeralVisitor<T> {
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(T::EXPECTING)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<T, E> {
        T::from_native(v.into()).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<T, E> {
        T::from_native(v.into()).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
        v.parse().map_err(E::custom)
    }
}

macro_rules! numeral_serde {
    ($($t:ty => $expecting:literal),*) => {$(
        impl Numeral for $t {
            const EXPECTING: &'static str = $expecting;

            fn from_native(src: NumericSource) -> Result<Self, NumericError> {
                <$t>::from_source(src)
            }
        }

        impl Serialize for $t {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $t {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                deserializer.deserialize_any(NumeralVisitor::<$t>(PhantomData))
            }
        }
    )*};
}

numeral_serde!(
    SignedBig => "an integer or integer numeral",
    UnsignedBig => "a non-negative integer or integer numeral",
    RationalBig => "an integer or a fraction numeral such as \"-3/4\""
);

// ============================================================================
// FloatBig
// ============================================================================

#[derive(Serialize, Deserialize)]
#[serde(rename = "FloatBig")]
struct FloatRepr {
    precision: u32,
    #[serde(default)]
    rounding: RoundingRule,
    value: String,
}

impl Serialize for FloatBig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FloatRepr {
            precision: self.precision(),
            rounding: self.rounding(),
            value: describe_hex(&self.value),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FloatBig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = FloatRepr::deserialize(deserializer)?;
        let ctx = FloatContext::new(repr.precision, repr.rounding).map_err(de::Error::custom)?;
        FloatBig::from_str_radix(&repr.value, 0, ctx).map_err(de::Error::custom)
    }
}
