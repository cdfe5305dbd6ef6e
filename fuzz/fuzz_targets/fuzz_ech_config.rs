#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = ech_config::decode_ech_bytes(data.to_vec());
    let text = String::from_utf8_lossy(data);
    let _ = ech_config::decode_ech_config(&text);
    let _ = ech_config::SvcParams::parse(&text);
});
