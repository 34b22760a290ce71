//! Fuzz testing for record reconstruction.
//!
//! This fuzz target drives the full parse path with arbitrary bytes to
//! ensure corrupt lines surface as typed errors, and re-encodes any
//! record that does parse to check the result stays parseable.

#![no_main]

use libfuzzer_sys::fuzz_target;

use timerlog::{LineDecoder, Record};

fuzz_target!(|data: &[u8]| {
    if data.len() > 64 * 1024 {
        return;
    }

    let mut buf = data.to_vec();
    let mut decoder = LineDecoder::new();

    if let Ok(record) = Record::parse_line(&mut buf, &mut decoder) {
        let line = record.to_line().expect("parsed record must re-encode");
        let mut buf = line.into_bytes();
        let reparsed =
            Record::parse_line(&mut buf, &mut decoder).expect("re-encoded line must parse");
        assert_eq!(reparsed.type_code(), record.type_code());
    }
});
