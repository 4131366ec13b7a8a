//! Integration tests for `RationalBig`.

use mpnum::{NumericError, RationalBig, SignedBig, UnsignedBig};

fn q(num: i64, den: i64) -> RationalBig {
    RationalBig::new(num, den).unwrap()
}

fn assert_reduced(r: &RationalBig) {
    let g = SignedBig::gcd(&r.num(), &r.den());
    assert_eq!(g, 1, "{r:?} not reduced");
    assert!(r.den().is_positive(), "{r:?} has non-positive denominator");
}

#[test]
fn test_construction_reduces() {
    let r = q(6, -4);
    assert_eq!(r.num(), -3);
    assert_eq!(r.den(), 2);
    assert_reduced(&r);
    assert_eq!(q(0, -7).den(), 1);
    assert_eq!(RationalBig::new(1, 0), Err(NumericError::DivisionByZero));
}

#[test]
fn test_arithmetic_stays_reduced() {
    let a = q(1, 6);
    let b = q(1, 3);
    let results = [&a + &b, &a - &b, &a * &b, &a / &b, -&a];
    let expected = [q(1, 2), q(-1, 6), q(1, 18), q(1, 2), q(-1, 6)];
    for (got, want) in results.iter().zip(&expected) {
        assert_eq!(got, want);
        assert_reduced(got);
    }
}

#[test]
fn test_compound_assignment() {
    let mut r = q(3, 4);
    r += q(1, 4);
    assert!(r.is_integer());
    r -= &q(1, 2);
    r *= q(4, 3);
    r /= q(2, 1);
    assert_eq!(r, q(1, 3));
    r <<= 3;
    assert_eq!(r, q(8, 3));
    r >>= 4;
    assert_eq!(r, q(1, 6));
}

#[test]
#[should_panic(expected = "division by zero")]
fn test_division_by_zero_traps() {
    let _ = q(1, 2) / RationalBig::default();
}

#[test]
fn test_text() {
    assert_eq!(q(-3, 4).to_string(), "-3/4");
    assert_eq!(q(8, 4).to_string(), "2");
    assert_eq!(format!("{:?}", q(-31, 3)), r#"RationalBig("-0x1f/0x3")"#);
    assert_eq!("-3/4".parse::<RationalBig>().unwrap(), q(-3, 4));
    assert_eq!("0x10/0b11".parse::<RationalBig>().unwrap(), q(16, 3));
    assert_eq!("6/-8".parse::<RationalBig>().unwrap(), q(-3, 4));
    assert_eq!("7".parse::<RationalBig>().unwrap(), q(7, 1));
    assert_eq!(RationalBig::from_str_radix("z/10", 36).unwrap(), q(35, 36));
    assert_eq!("1/0".parse::<RationalBig>(), Err(NumericError::DivisionByZero));
    assert!("1/2/3".parse::<RationalBig>().is_err());
    assert!("/2".parse::<RationalBig>().is_err());
}

#[test]
fn test_exact_float_conversion() {
    assert_eq!(RationalBig::try_from(0.1).unwrap(), q(3602879701896397, 36028797018963968));
    assert_eq!(RationalBig::from_source(-0.75).unwrap(), q(-3, 4));
    assert_eq!(RationalBig::try_from(f64::NAN), Err(NumericError::NotFinite));
    assert_eq!(q(1, 3).to_f64(), 1.0 / 3.0);
}

#[test]
fn test_from_integers() {
    assert_eq!(RationalBig::from(SignedBig::from(-5)), -5);
    assert_eq!(RationalBig::from(&UnsignedBig::from(9u8)), 9u8);
    assert_eq!(RationalBig::from(u128::MAX).den(), 1);
    assert_eq!(RationalBig::from(SignedBig::from(4)), SignedBig::from(4));
    assert_eq!(SignedBig::from(4), RationalBig::from(4));
}

#[test]
fn test_ordering_and_native_comparison() {
    assert!(q(1, 3) < q(1, 2));
    assert!(q(-1, 2) < 0);
    assert!(1 > q(1, 2));
    assert!(q(1, 2) == 0.5);
    assert!(q(1, 3) != 0.333);
}

#[test]
fn test_helpers() {
    let mut r = q(-3, 4);
    assert_eq!(r.signum(), -1);
    assert_eq!(r.magnitude(), q(3, 4));
    assert_eq!(r.recip().unwrap(), q(-4, 3));
    assert_eq!(r.pow(2).unwrap(), q(9, 16));
    assert_eq!(r.pow(-3).unwrap(), q(-64, 27));
    assert_eq!(r.trunc(), 0);
    assert_eq!(q(-7, 2).trunc(), -3);
    r.negate();
    assert_eq!(r, q(3, 4));
    assert_eq!(RationalBig::default().recip(), Err(NumericError::DivisionByZero));
    assert_eq!(RationalBig::default().pow(-1), Err(NumericError::DivisionByZero));
    assert_eq!(RationalBig::default().pow(0).unwrap(), 1);
}
