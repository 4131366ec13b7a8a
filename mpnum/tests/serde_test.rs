//! Serialization of the numeric types inside caller-defined structures.

use mpnum::{FloatBig, FloatContext, RationalBig, RoundingRule, SignedBig, UnsignedBig};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Ledger {
    balance: SignedBig,
    supply: UnsignedBig,
    rate: RationalBig,
    price: FloatBig,
}

#[derive(Deserialize)]
struct Settings {
    float: FloatContext,
}

#[test]
fn test_struct_round_trip() {
    let ctx = FloatContext::new(96, RoundingRule::NearestTiesAway).unwrap();
    let ledger = Ledger {
        balance: SignedBig::from(-1) << 100,
        supply: UnsignedBig::from(u64::MAX) * UnsignedBig::from(u64::MAX),
        rate: RationalBig::new(7, 365).unwrap(),
        price: FloatBig::from_source(RationalBig::new(2, 3).unwrap(), ctx),
    };
    let json = serde_json::to_string(&ledger).unwrap();
    let back: Ledger = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ledger);
    assert_eq!(back.price.context(), ctx);
}

#[test]
fn test_context_from_config() {
    let settings: Settings =
        serde_json::from_str(r#"{"float":{"precision":256,"rounding":"down"}}"#).unwrap();
    assert_eq!(settings.float.precision(), 256);
    assert_eq!(settings.float.rounding(), RoundingRule::Down);
    let third = FloatBig::from_source(RationalBig::new(1, 3).unwrap(), settings.float);
    assert_eq!(third.precision(), 256);
    assert_eq!(third.rounding(), RoundingRule::Down);

    assert!(serde_json::from_str::<Settings>(r#"{"float":{"precision":0}}"#).is_err());
    assert!(serde_json::from_str::<Settings>(r#"{"float":{"precision":8,"rounding":"sideways"}}"#).is_err());
}
