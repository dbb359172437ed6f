#![no_main]
use fse::{EntropyCoder, StatisticsTable};
use libfuzzer_sys::fuzz_target;
use num::BigUint;

fuzz_target!(|data: (Vec<u8>, Vec<u8>)| {
    let (input, raw_code) = data;

    if input.is_empty() || raw_code.len() > 64 {
        return;
    }

    // Table counted from the input itself, first-seen order.
    let table = match StatisticsTable::from_sequence(input.iter().copied()) {
        Ok(table) => table,
        Err(_) => return,
    };
    let coder = EntropyCoder::new(table);

    let code = coder.encode(&input).unwrap();
    assert_eq!(coder.decode(&code).unwrap(), input);

    // Arbitrary integers must decode or fail cleanly, never panic or hang.
    let raw = BigUint::from_bytes_le(&raw_code);
    if let Ok(symbols) = coder.decode(&raw) {
        assert_eq!(coder.encode(&symbols).unwrap(), raw);
    }
});
