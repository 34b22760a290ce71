//! Fuzz testing for the field-level quoting codec.
//!
//! This fuzz target checks the codec's central symmetry on arbitrary
//! strings: encoding any value and decoding it back must return the
//! original, and an encoded line must split back into its field list.

#![no_main]

use libfuzzer_sys::fuzz_target;

use timerlog::csv::{decode_field, decode_line, encode_field, encode_line};

fuzz_target!(|fields: Vec<String>| {
    if fields.is_empty() || fields.len() > 64 {
        return;
    }

    for field in &fields {
        let encoded = encode_field(field);
        let decoded = decode_field(&encoded).expect("own encoding must decode");
        assert_eq!(&decoded, field);
    }

    let line = encode_line(&fields).expect("non-empty field list must encode");
    let decoded = decode_line(&line).expect("own encoding must decode");
    assert_eq!(decoded, fields);
});
