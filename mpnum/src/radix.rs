//! Numeral splitting shared by every text parser in the crate.
//!
//! Radix `0` means auto-detect from the prefix: `0x`/`0X` is hexadecimal,
//! `0b`/`0B` binary, any other leading `0` octal, and everything else
//! decimal. The sign always comes before the prefix (`-0x1f`).

use rug::Integer;

use crate::error::NumericError;

/// Largest radix the engine renders and parses.
pub const MAX_RADIX: u32 = 36;

/// A numeral with its sign, radix and prefix peeled off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Numeral<'a> {
    pub negative: bool,
    pub radix: u32,
    pub digits: &'a str,
}

pub(crate) fn check_radix(radix: u32) -> Result<(), NumericError> {
    if radix == 0 || (2..=MAX_RADIX).contains(&radix) {
        Ok(())
    } else {
        Err(NumericError::InvalidRadix(radix))
    }
}

/// Strip an optional leading `+` or `-`.
pub(crate) fn split_sign(text: &str) -> (bool, &str) {
    match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    }
}

/// Resolve radix `0` from the numeral's prefix.
pub(crate) fn detect_radix(body: &str) -> (u32, &str) {
    match body.as_bytes() {
        [b'0', b'x' | b'X', ..] => (16, &body[2..]),
        [b'0', b'b' | b'B', ..] => (2, &body[2..]),
        [b'0', _, ..] => (8, &body[1..]),
        _ => (10, body),
    }
}

/// Split `src` into sign, radix and digit run, validating every digit.
pub(crate) fn split_numeral(src: &str, radix: u32) -> Result<Numeral<'_>, NumericError> {
    check_radix(radix)?;
    let (negative, body) = split_sign(src.trim());
    let (radix, digits) = if radix == 0 {
        detect_radix(body)
    } else {
        (radix, body)
    };
    if !is_digit_run(digits, radix) {
        return Err(NumericError::InvalidNumeral(src.to_string()));
    }
    Ok(Numeral {
        negative,
        radix,
        digits,
    })
}

/// Digits in `radix`, `_` allowed as a separator after the first digit.
fn is_digit_run(digits: &str, radix: u32) -> bool {
    let mut chars = digits.chars();
    match chars.next() {
        Some(first) if first.is_digit(radix) => chars.all(|c| c == '_' || c.is_digit(radix)),
        _ => false,
    }
}

/// Parse a signed integer numeral into an engine integer.
pub(crate) fn parse_integer(src: &str, radix: u32) -> Result<Integer, NumericError> {
    let numeral = split_numeral(src, radix)?;
    let magnitude = Integer::from_str_radix(numeral.digits, numeral.radix as i32)
        .map_err(|_| NumericError::InvalidNumeral(src.to_string()))?;
    Ok(if numeral.negative { -magnitude } else { magnitude })
}
