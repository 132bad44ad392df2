#![no_main]

use libfuzzer_sys::fuzz_target;
use chess_arbiter::Move;

fuzz_target!(|data: &[u8]| {
    if let Ok(m) = Move::from_ascii(data) {
        let roundtripped = Move::from_ascii(m.to_string().as_bytes()).expect("roundtrip");
        assert_eq!(m, roundtripped);
    }
});
