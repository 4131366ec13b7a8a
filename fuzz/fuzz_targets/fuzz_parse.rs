#![no_main]

use libfuzzer_sys::fuzz_target;
use mpnum::{FloatBig, FloatContext, RationalBig, SignedBig, UnsignedBig};

// Parsing never panics, and whatever parses renders back to an equal value.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let radix = u32::from(data.first().copied().unwrap_or(0) % 38);

    if let Ok(v) = SignedBig::from_str_radix(text, radix) {
        assert_eq!(v.to_string().parse::<SignedBig>().ok(), Some(v));
    }
    if let Ok(v) = UnsignedBig::from_str_radix(text, radix) {
        assert_eq!(v.to_string().parse::<UnsignedBig>().ok(), Some(v));
    }
    if let Ok(v) = RationalBig::from_str_radix(text, radix) {
        assert_eq!(v.to_string().parse::<RationalBig>().ok(), Some(v));
    }
    let ctx = FloatContext::double();
    if let Ok(v) = FloatBig::from_str_radix(text, radix, ctx) {
        let back = FloatBig::from_str_radix(&format!("{v:?}"), 0, ctx);
        assert!(back.is_ok_and(|b| b == v || (b.is_nan() && v.is_nan())));
    }
});
