//! Integration tests for `UnsignedBig`: implicit width, modular comparison
//! and underflow-checked subtraction.

use mpnum::{NumericError, SignedBig, UnsignedBig};

fn u(text: &str) -> UnsignedBig {
    text.parse().unwrap()
}

#[test]
fn test_parse_matches_native() {
    assert_eq!(u("25000"), 25000);
    assert_eq!(25000u16, u("25000"));
    assert_eq!(u("0xffff_ffff_ffff_ffff"), u64::MAX);
    assert_eq!(
        UnsignedBig::from_str_radix("-1", 10),
        Err(NumericError::Overflow)
    );
    assert!(matches!(
        "1.5".parse::<UnsignedBig>(),
        Err(NumericError::InvalidNumeral(_))
    ));
}

#[test]
fn test_negative_native_is_overflow() {
    assert_eq!(UnsignedBig::try_from(-1i32), Err(NumericError::Overflow));
    assert_eq!(UnsignedBig::from_source(-3), Err(NumericError::Overflow));
    assert_eq!(UnsignedBig::try_from(7i64).unwrap(), 7u8);
}

#[test]
fn test_truncating_matches_every_width() {
    let v = UnsignedBig::from_truncating(-2);
    assert_eq!(v, -2i8 as u8);
    assert_eq!(v, -2i16 as u16);
    assert_eq!(v, -2i64 as u64);
    assert_eq!(v, (-2i128) as u128);
    assert_eq!(v, -2);
}

#[test]
fn test_clamping() {
    assert_eq!(UnsignedBig::from_clamping(-100), 0u8);
    assert_eq!(UnsignedBig::from_clamping(100), 100u8);
}

#[test]
fn test_equality_is_wrap_invariant() {
    let ones = UnsignedBig::from_truncating(-1);
    let byte = UnsignedBig::from(0xffu8);
    let word = UnsignedBig::from(u64::MAX);
    assert_eq!(ones, byte);
    assert_eq!(ones, word);
    // both sides are already canonical, so no wrap takes place
    assert_ne!(byte, word);
    assert!(byte < word);
}

#[test]
fn test_width_and_mask() {
    assert_eq!(UnsignedBig::new().bit_width(), 1);
    assert_eq!(UnsignedBig::from(255u8).bit_width(), 8);
    assert_eq!(UnsignedBig::from(256u16).bit_width(), 9);
    assert_eq!(UnsignedBig::from(5u8).mask(), 7u8);
    assert_eq!(UnsignedBig::from(0x1234u16).wrap_to(8), 0x34u8);
    assert_eq!(UnsignedBig::from_truncating(-1).wrap_to(12), 0xfffu16);
}

#[test]
fn test_subtraction_underflow() {
    let small = UnsignedBig::from(3u8);
    let big = UnsignedBig::from(5u8);
    assert_eq!(&big - &small, 2u8);
    assert_eq!(small.try_sub(&big), Err(NumericError::Overflow));
    assert_eq!(small.try_sub(&small).unwrap(), 0u8);
}

#[test]
#[should_panic(expected = "arithmetic overflow")]
fn test_subtraction_operator_traps() {
    let _ = UnsignedBig::from(3u8) - UnsignedBig::from(5u8);
}

#[test]
#[should_panic(expected = "arithmetic overflow")]
fn test_sub_assign_traps() {
    let mut v = UnsignedBig::new();
    v -= UnsignedBig::from(1u8);
}

#[test]
fn test_arithmetic_and_bitwise() {
    let a = UnsignedBig::from(12u8);
    let b = UnsignedBig::from(10u8);
    assert_eq!(&a + &b, 22u8);
    assert_eq!(&a * &b, 120u8);
    assert_eq!(&a / &b, 1u8);
    assert_eq!(&a % &b, 2u8);
    assert_eq!(&a & &b, 8u8);
    assert_eq!(&a | &b, 14u8);
    assert_eq!(&a ^ &b, 6u8);
    assert_eq!(&a << 4, 192u8);
    assert_eq!(&a >> 2, 3u8);
}

#[test]
fn test_not_matches_native_widths() {
    // !12 is the infinite pattern ...110011
    let v = !UnsignedBig::from(12u8);
    assert_eq!(v, !12u8);
    assert_eq!(v, !12u32);
    assert_eq!(v.bit_width(), 5);
    assert_eq!(v.to_string(), "19");
}

#[test]
fn test_rendering_uses_canonical_value() {
    let ones = UnsignedBig::from_truncating(-1);
    assert_eq!(ones.to_string(), "3");
    assert_eq!(format!("{ones:?}"), "0x3");
    assert_eq!(format!("{:?}", UnsignedBig::from(255u8)), "0xff");
    assert_eq!(format!("{:b}", UnsignedBig::from(5u8)), "101");
}

#[test]
fn test_words_and_bits() {
    assert_eq!(UnsignedBig::new().words(), vec![0]);
    assert_eq!(UnsignedBig::from(u64::MAX).words(), vec![u64::MAX]);
    let v = UnsignedBig::from_words(&[0, 1]);
    assert_eq!(v, UnsignedBig::from(1u8) << 64);
    assert_eq!(v.trailing_zeros(), 64);
    assert_eq!(v.count_ones(), 1);
    assert!(v.bit(64));
    let bits: Vec<bool> = UnsignedBig::from(6u8).bits().collect();
    assert_eq!(bits, vec![false, true, true]);
}

#[test]
fn test_number_theory_helpers() {
    let a = UnsignedBig::from(12u8);
    let b = UnsignedBig::from(18u8);
    assert_eq!(UnsignedBig::gcd(&a, &b), 6u8);
    assert_eq!(UnsignedBig::lcm(&a, &b), 36u8);
    assert_eq!(UnsignedBig::factorial(5), 120u8);
    assert!(UnsignedBig::from(65537u32).is_probably_prime());
    assert_eq!(a.pow(2), 144u8);
    assert_eq!(a.signum(), 1u8);
}

#[test]
fn test_conversions_to_native_and_signed() {
    assert_eq!(u8::try_from(UnsignedBig::from(255u8)), Ok(255));
    assert_eq!(u8::try_from(UnsignedBig::from(256u16)), Err(NumericError::Overflow));
    assert_eq!(SignedBig::from(UnsignedBig::from(9u8)), 9);
    assert_eq!(
        UnsignedBig::try_from(SignedBig::from(-9)),
        Err(NumericError::Overflow)
    );
}
