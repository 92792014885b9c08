#![no_main]
use libfuzzer_sys::fuzz_target;
use bmpdraw::*;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding and decoding again must reproduce it exactly
    let limits = Limits {
        max_pixels: Some(1 << 24),
        ..Default::default()
    };
    let Ok(decoded) = DecodeRequest::new(data).with_limits(&limits).decode() else {
        return;
    };
    // Pixels written below the headers' end overwrite header bytes on encode
    if decoded.header().pixel_data_offset < 54 {
        return;
    }

    let reencoded = decoded.to_bytes().expect("decoded bitmap must re-encode");
    let Ok(decoded2) = Bitmap::from_bytes(&reencoded) else {
        panic!("re-encoded data failed to decode");
    };

    assert_eq!(decoded.header(), decoded2.header(), "roundtrip header mismatch");
    assert_eq!(decoded.info(), decoded2.info(), "roundtrip info block mismatch");
    assert_eq!(decoded.pixels(), decoded2.pixels(), "roundtrip pixel mismatch");
});
