#![no_main]

use libfuzzer_sys::fuzz_target;
use mpnum::{from_twos_complement, to_twos_complement, SignedBig};

// Any word sequence decodes, and re-encoding yields its minimal form.
fuzz_target!(|words: Vec<u64>| {
    let value = SignedBig::from_words(&words);
    let minimal = value.words();
    assert_eq!(SignedBig::from_words(&minimal), value);
    assert!(minimal.len() <= words.len().max(1));

    let (magnitude, negative) = from_twos_complement(&minimal);
    assert_eq!(to_twos_complement(&magnitude, negative), minimal);
});
