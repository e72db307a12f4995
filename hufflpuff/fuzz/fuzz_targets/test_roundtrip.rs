#![no_main]

use huffcode::encode;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let encoding = encode(data).unwrap();
    assert_eq!(encoding.decode().unwrap(), data);
});
