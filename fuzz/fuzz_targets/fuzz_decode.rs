#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Header probe and full decode must never panic
    let _ = bmpdraw::ImageInfo::from_bytes(data);

    let limits = bmpdraw::Limits {
        max_pixels: Some(1 << 24),
        ..Default::default()
    };
    let _ = bmpdraw::DecodeRequest::new(data).with_limits(&limits).decode();
});
