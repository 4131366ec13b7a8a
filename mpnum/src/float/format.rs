//! Text rendering and parsing for [`FloatBig`].
//!
//! `Display` prints a normalized decimal `d.ddd…e±x`. `Debug` prints an
//! exact hexadecimal float `0xh.hhh…p±x`, which [`FromStr`] reads back
//! without loss.

use std::fmt;
use std::str::FromStr;

use rug::float::{Round, Special};
use rug::{Float, Integer};

use super::context::{FloatContext, RoundingRule};
use super::FloatBig;
use crate::error::NumericError;
use crate::radix::{check_radix, split_sign};

/// Digits of `radix` needed to represent `precision` bits, as MPFR counts
/// them for `mpfr_get_str_ndigits`.
pub(crate) fn digits_for_precision(radix: u32, precision: u32) -> usize {
    if radix.is_power_of_two() {
        let k = u64::from(radix.trailing_zeros());
        let bits = u64::from(precision.saturating_sub(1));
        1 + ((bits + k - 1) / k) as usize
    } else {
        let digits = f64::from(precision) * std::f64::consts::LN_2 / f64::from(radix).ln();
        1 + digits.ceil() as usize
    }
}

fn sign_prefix(value: &Float) -> &'static str {
    if value.is_sign_negative() {
        "-"
    } else {
        ""
    }
}

/// Renders NaN and infinities; `None` for finite values.
fn special_text(value: &Float) -> Option<&'static str> {
    if value.is_nan() {
        Some("nan")
    } else if value.is_infinite() {
        Some(if value.is_sign_negative() { "-inf" } else { "inf" })
    } else {
        None
    }
}

/// True when `value` lies exactly halfway between two `digits`-digit
/// decimals: one more digit renders exactly and ends in 5.
fn is_decimal_tie(value: &Float, digits: usize) -> bool {
    let (_, below, below_exp) = value.to_sign_string_exp_round(10, Some(digits + 1), Round::Down);
    let (_, above, above_exp) = value.to_sign_string_exp_round(10, Some(digits + 1), Round::Up);
    below == above && below_exp == above_exp && below.ends_with('5')
}

pub(crate) fn describe(value: &Float, rule: RoundingRule) -> String {
    if let Some(text) = special_text(value) {
        return text.to_string();
    }
    let digits = digits_for_precision(10, value.prec().saturating_add(2)).max(7);
    let sign = sign_prefix(value);
    if value.is_zero() {
        return format!("{sign}0.{}e+0", "0".repeat(digits - 1));
    }
    // the engine has no ties-away mode for text either
    let round = match rule {
        RoundingRule::NearestTiesAway if is_decimal_tie(value, digits) => Round::AwayZero,
        rule => rule.engine(),
    };
    let (_, mantissa, exp) = value.to_sign_string_exp_round(10, Some(digits), round);
    let exp = exp.unwrap_or(0) - 1;
    format!("{sign}{}.{}e{exp:+}", &mantissa[..1], &mantissa[1..])
}

/// Hexadecimal rendering; always exact because the digit count covers two
/// bits more than the precision.
pub(crate) fn describe_hex(value: &Float) -> String {
    if let Some(text) = special_text(value) {
        return text.to_string();
    }
    let sign = sign_prefix(value);
    if value.is_zero() {
        return format!("{sign}0x0p+0");
    }
    let digits = digits_for_precision(16, value.prec().saturating_add(2)).max(7);
    let (_, mantissa, exp) = value.to_sign_string_exp_round(16, Some(digits), Round::Nearest);
    let exp = 4 * (i64::from(exp.unwrap_or(0)) - 1);
    format!("{sign}0x{}.{}p{exp:+}", &mantissa[..1], &mantissa[1..])
}

// ============================================================================
// Parsing
// ============================================================================

fn invalid(src: &str) -> NumericError {
    NumericError::InvalidNumeral(src.to_string())
}

fn parse_special(body: &str, negative: bool, ctx: &FloatContext) -> Option<Float> {
    let special = if body.eq_ignore_ascii_case("nan") {
        Special::Nan
    } else if body.eq_ignore_ascii_case("inf") || body.eq_ignore_ascii_case("infinity") {
        if negative {
            Special::NegInfinity
        } else {
            Special::Infinity
        }
    } else {
        return None;
    };
    Some(Float::with_val(ctx.precision(), special))
}

/// `h.hhhp±d` after the `0x` prefix: hex digits with an optional point,
/// then an optional binary exponent in decimal.
fn parse_hex_body(body: &str) -> Option<(Integer, i64)> {
    let (mantissa, exp) = match body.find(['p', 'P']) {
        Some(at) => (&body[..at], body[at + 1..].parse::<i64>().ok()?),
        None => (body, 0),
    };
    let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let digits = format!("{int}{frac}");
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let significand = Integer::from_str_radix(&digits, 16).ok()?;
    let frac_bits = i64::try_from(frac.len()).ok()?.checked_mul(4)?;
    Some((significand, exp.checked_sub(frac_bits)?))
}

fn parse_hex(src: &str, body: &str, negative: bool, ctx: &FloatContext) -> Result<Float, NumericError> {
    let (significand, exp) = parse_hex_body(body).ok_or_else(|| invalid(src))?;
    let mut exact = Float::with_val(significand.significant_bits().max(1), &significand);
    let shift = i32::try_from(exp).map_err(|_| invalid(src))?;
    exact <<= shift;
    if negative {
        exact = -exact;
    }
    Ok(ctx.round(&exact))
}

/// Parse `src` into a float rounded to `ctx`.
///
/// Radix 0 reads decimal, or hexadecimal floats with a `0x` prefix. `nan`,
/// `inf` and `infinity` are accepted in any radix.
pub(crate) fn parse_float(src: &str, radix: u32, ctx: &FloatContext) -> Result<Float, NumericError> {
    check_radix(radix)?;
    let text = src.trim();
    let (negative, body) = split_sign(text);
    if let Some(value) = parse_special(body, negative, ctx) {
        return Ok(value);
    }
    if radix == 0 || radix == 16 {
        if let Some(hex) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
            return parse_hex(src, hex, negative, ctx);
        }
    }
    let radix = if radix == 0 { 10 } else { radix };
    let parsed = Float::parse_radix(text, radix as i32).map_err(|_| invalid(src))?;
    Ok(ctx.round(parsed))
}

// ============================================================================
// Trait impls
// ============================================================================

impl fmt::Display for FloatBig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&describe(&self.value, self.rounding))
    }
}

impl fmt::Debug for FloatBig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&describe_hex(&self.value))
    }
}

impl FromStr for FloatBig {
    type Err = NumericError;

    /// Parses with the process-wide default context.
    fn from_str(s: &str) -> Result<Self, NumericError> {
        FloatBig::from_str_radix(s, 0, FloatContext::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(precision: u32) -> FloatContext {
        FloatContext::new(precision, RoundingRule::NearestEven).unwrap()
    }

    #[test]
    fn test_digits_for_precision() {
        assert_eq!(digits_for_precision(10, 55), 18);
        assert_eq!(digits_for_precision(10, 4), 3);
        assert_eq!(digits_for_precision(16, 55), 15);
        assert_eq!(digits_for_precision(2, 10), 10);
    }

    #[test]
    fn test_describe_decimal() {
        let v = Float::with_val(53, 1.5);
        assert_eq!(describe(&v, RoundingRule::NearestEven), "1.50000000000000000e+0");
        let v = Float::with_val(8, -0.046875);
        assert_eq!(describe(&v, RoundingRule::NearestEven), "-4.687500e-2");
        let v = Float::with_val(8, 1200);
        assert_eq!(describe(&v, RoundingRule::NearestEven), "1.200000e+3");
    }

    #[test]
    fn test_describe_decimal_ties() {
        // 2^-11 = 0.00048828125 sits halfway between two 7-digit decimals
        let tie = Float::with_val(2, Float::i_exp(1, -11));
        assert_eq!(describe(&tie, RoundingRule::NearestEven), "4.882812e-4");
        assert_eq!(describe(&tie, RoundingRule::NearestTiesAway), "4.882813e-4");
        assert_eq!(describe(&-tie.clone(), RoundingRule::NearestTiesAway), "-4.882813e-4");
        assert_eq!(describe(&tie, RoundingRule::TowardZero), "4.882812e-4");

        // off the midpoint ties-away matches nearest
        let v = Float::with_val(8, -0.046875);
        assert_eq!(describe(&v, RoundingRule::NearestTiesAway), "-4.687500e-2");
        let third = Float::with_val(53, 1) / 3u32;
        assert_eq!(
            describe(&third, RoundingRule::NearestTiesAway),
            describe(&third, RoundingRule::NearestEven)
        );
    }

    #[test]
    fn test_digits_near_max_precision() {
        let top = u32::MAX - 1;
        assert_eq!(digits_for_precision(16, top.saturating_add(2)), 1 + (u32::MAX as usize - 1 + 3) / 4);
        assert_eq!(digits_for_precision(2, top.saturating_add(2)), u32::MAX as usize);
        assert!(digits_for_precision(10, top.saturating_add(2)) > 1_000_000_000);
    }

    #[test]
    fn test_describe_specials() {
        assert_eq!(describe(&Float::with_val(8, Special::Nan), RoundingRule::NearestEven), "nan");
        assert_eq!(
            describe(&Float::with_val(8, Special::NegInfinity), RoundingRule::NearestEven),
            "-inf"
        );
        assert_eq!(describe(&Float::new(8), RoundingRule::NearestEven), "0.000000e+0");
        assert_eq!(describe_hex(&Float::with_val(8, Special::NegZero)), "-0x0p+0");
    }

    #[test]
    fn test_describe_hex() {
        let v = Float::with_val(8, 12);
        assert_eq!(describe_hex(&v), "0xc.000000p+0");
        let v = Float::with_val(8, -0.5);
        assert_eq!(describe_hex(&v), "-0x8.000000p-4");
    }

    #[test]
    fn test_parse_hex_round_trip() {
        for x in [0.1, -3.75, 1e300, 5e-324, 123456.789] {
            let v = Float::with_val(53, x);
            let back = parse_float(&describe_hex(&v), 0, &ctx(53)).unwrap();
            assert_eq!(back, x, "{x}");
        }
    }

    #[test]
    fn test_parse_decimal_and_specials() {
        assert_eq!(parse_float("2.5e3", 0, &ctx(53)).unwrap(), 2500.0);
        assert_eq!(parse_float(" -0.25 ", 10, &ctx(53)).unwrap(), -0.25);
        assert!(parse_float("nan", 0, &ctx(53)).unwrap().is_nan());
        let inf = parse_float("-Infinity", 16, &ctx(53)).unwrap();
        assert!(inf.is_infinite() && inf.is_sign_negative());
        assert_eq!(parse_float("0x1.8p1", 0, &ctx(53)).unwrap(), 3.0);
        assert_eq!(parse_float("ff", 16, &ctx(53)).unwrap(), 255.0);
    }

    #[test]
    fn test_parse_rounds_into_context() {
        let v = parse_float("0x1.ffp0", 0, &ctx(4)).unwrap();
        assert_eq!(v, 2.0);
        assert_eq!(v.prec(), 4);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_float("", 0, &ctx(53)).is_err());
        assert!(parse_float("1.2.3", 0, &ctx(53)).is_err());
        assert!(parse_float("0x", 0, &ctx(53)).is_err());
        assert!(parse_float("0x1p", 0, &ctx(53)).is_err());
        assert_eq!(
            parse_float("1", 99, &ctx(53)),
            Err(NumericError::InvalidRadix(99))
        );
    }
}
