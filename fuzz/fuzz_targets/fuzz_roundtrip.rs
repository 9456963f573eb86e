#![no_main]
use libfuzzer_sys::fuzz_target;
use zentga::*;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding either way and decoding again must
    // reproduce identical pixels
    let Ok(decoded) = decode_tga(data, enough::Unstoppable) else {
        return;
    };

    for rle in [false, true] {
        let Ok(reencoded) = encode_tga(&decoded, rle, enough::Unstoppable) else {
            panic!("decoded image failed to re-encode");
        };
        let Ok(decoded2) = decode_tga(&reencoded, enough::Unstoppable) else {
            panic!("re-encoded data failed to decode");
        };

        assert_eq!(decoded.pixels(), decoded2.pixels(), "roundtrip pixel mismatch");
        assert_eq!(decoded.width(), decoded2.width());
        assert_eq!(decoded.height(), decoded2.height());
        assert_eq!(decoded.format(), decoded2.format());
    }
});
