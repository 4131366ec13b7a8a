//! Two's-complement word encoding for sign-magnitude integers.
//!
//! Words are little-endian `u64` limbs (`words[0]` is least significant).
//! An encoding is minimal: its top bit is the sign bit and no extra
//! sign-extension word is present unless the top word needs one.

// ============================================================================
// Low-level helpers
// ============================================================================

/// Add with carry: (result, carry) = a + b + carry_in
#[inline(always)]
const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let tmp = a as u128 + b as u128 + carry as u128;
    (tmp as u64, (tmp >> 64) as u64)
}

/// Subtract with borrow: (result, borrow) = a - b - borrow_in
#[inline(always)]
const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let tmp = (a as u128)
        .wrapping_sub(b as u128)
        .wrapping_sub(borrow as u128);
    (tmp as u64, (tmp >> 127) as u64)
}

/// Number of words once high zero words are dropped.
#[inline]
fn significant_len(words: &[u64]) -> usize {
    words.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1)
}

#[inline]
fn top_bit_set(words: &[u64]) -> bool {
    words.last().is_some_and(|&w| w >> 63 == 1)
}

// ============================================================================
// Encoding
// ============================================================================

/// Encode a magnitude and sign as two's-complement words.
///
/// Non-negative magnitudes come back verbatim. Negative magnitudes are
/// complemented and then incremented with a rippling carry. Zero encodes as
/// `[0]`.
pub fn to_twos_complement(magnitude: &[u64], negative: bool) -> Vec<u64> {
    let len = significant_len(magnitude);
    if len == 0 {
        return vec![0];
    }
    let mut words = magnitude[..len].to_vec();
    if negative {
        let mut carry = 1;
        for word in words.iter_mut() {
            let (sum, c) = adc(!*word, 0, carry);
            *word = sum;
            carry = c;
        }
    }
    if top_bit_set(&words) != negative {
        words.push(if negative { u64::MAX } else { 0 });
    }
    words
}

/// Decode two's-complement words into `(magnitude, negative)`.
///
/// The returned magnitude has no high zero words; zero decodes to an empty
/// magnitude and `negative == false`.
pub fn from_twos_complement(words: &[u64]) -> (Vec<u64>, bool) {
    let negative = top_bit_set(words);
    let mut magnitude = if negative {
        // 0 - words
        let mut borrow = 0;
        words
            .iter()
            .map(|&w| {
                let (diff, b) = sbb(0, w, borrow);
                borrow = b;
                diff
            })
            .collect()
    } else {
        words.to_vec()
    };
    magnitude.truncate(significant_len(&magnitude));
    (magnitude, negative)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(to_twos_complement(&[], false), vec![0]);
        assert_eq!(to_twos_complement(&[0, 0], true), vec![0]);
        assert_eq!(from_twos_complement(&[0]), (vec![], false));
        assert_eq!(from_twos_complement(&[]), (vec![], false));
    }

    #[test]
    fn test_native_i64_encodings() {
        for n in [0i64, 1, -1, 42, -42, i64::MAX, i64::MIN, -(1 << 40)] {
            let negative = n < 0;
            let magnitude = [n.unsigned_abs()];
            assert_eq!(to_twos_complement(&magnitude, negative), vec![n as u64], "{n}");
        }
    }

    #[test]
    fn test_positive_with_top_bit_gets_extension_word() {
        assert_eq!(to_twos_complement(&[1 << 63], false), vec![1 << 63, 0]);
        assert_eq!(to_twos_complement(&[u64::MAX], false), vec![u64::MAX, 0]);
    }

    #[test]
    fn test_negative_beyond_one_word() {
        // -(2^63 + 1) needs a second all-ones word
        assert_eq!(
            to_twos_complement(&[(1 << 63) + 1], true),
            vec![0x7fff_ffff_ffff_ffff, u64::MAX]
        );
        // -(2^64): the increment carries into the upper word
        assert_eq!(to_twos_complement(&[0, 1], true), vec![0, u64::MAX]);
    }

    #[test]
    fn test_high_zero_words_are_ignored() {
        assert_eq!(to_twos_complement(&[5, 0, 0], true), vec![(-5i64) as u64]);
    }

    #[test]
    fn test_decode_negative() {
        assert_eq!(from_twos_complement(&[u64::MAX]), (vec![1], true));
        assert_eq!(from_twos_complement(&[0, u64::MAX]), (vec![0, 1], true));
        assert_eq!(
            from_twos_complement(&[i64::MIN as u64]),
            (vec![1 << 63], true)
        );
    }

    #[test]
    fn test_decode_strips_sign_extension() {
        assert_eq!(from_twos_complement(&[1 << 63, 0]), (vec![1 << 63], false));
        assert_eq!(from_twos_complement(&[7, 0, 0]), (vec![7], false));
    }

    #[test]
    fn test_round_trip_multiword() {
        let cases: &[(&[u64], bool)] = &[
            (&[1, 2, 3], false),
            (&[1, 2, 3], true),
            (&[0, 0, 1 << 63], true),
            (&[u64::MAX, u64::MAX], true),
            (&[u64::MAX, u64::MAX], false),
        ];
        for &(magnitude, negative) in cases {
            let words = to_twos_complement(magnitude, negative);
            assert_eq!(
                from_twos_complement(&words),
                (magnitude.to_vec(), negative),
                "{magnitude:?} {negative}"
            );
        }
    }
}
