#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Header probe and full decode must never panic
    let _ = zentga::probe(data);
    let _ = zentga::decode_tga(data, enough::Unstoppable);

    let limits = zentga::Limits {
        max_pixels: Some(1 << 20),
        ..Default::default()
    };
    let _ = zentga::DecodeRequest::new(data)
        .with_limits(&limits)
        .decode(enough::Unstoppable);
});
