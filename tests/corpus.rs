//! Test corpus: roundtrips across sizes and patterns, plus byte-level layout checks.

use bmpdraw::*;

fn noise_bitmap(w: u32, h: u32) -> Bitmap {
    let mut bitmap = Bitmap::new(w, h).unwrap();
    let mut state: u32 = 0xDEAD_BEEF;
    for y in 1..=h as i32 {
        for x in 1..=w as i32 {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            bitmap.put_pixel(x, y, hex_to_rgb(state)).unwrap();
        }
    }
    bitmap
}

fn checkerboard_bitmap(w: u32, h: u32) -> Bitmap {
    let mut bitmap = Bitmap::new(w, h).unwrap();
    for y in 1..=h as i32 {
        for x in 1..=w as i32 {
            let color = if (x + y) % 2 == 0 { 0xC8DCF0 } else { 0x0A2846 };
            bitmap.put_pixel(x, y, hex_to_rgb(color)).unwrap();
        }
    }
    bitmap
}

fn expected_padding(width: usize) -> usize {
    (3 * width).div_ceil(4) * 4 - 3 * width
}

// ── Roundtrips ───────────────────────────────────────────────────────

#[test]
fn roundtrip_all_padding_classes() {
    for w in 1..=13 {
        for h in [1, 2, 7] {
            let bitmap = noise_bitmap(w, h);
            let bytes = bitmap.to_bytes().unwrap();
            let decoded = Bitmap::from_bytes(&bytes).unwrap();
            assert_eq!(decoded, bitmap, "{w}x{h}");
        }
    }
}

#[test]
fn roundtrip_checkerboard_odd_size() {
    let bitmap = checkerboard_bitmap(31, 17);
    let decoded = Bitmap::from_bytes(&bitmap.to_bytes().unwrap()).unwrap();
    assert_eq!(decoded, bitmap);
    assert_eq!(decoded.get_pixel(1, 1).unwrap(), RGB8::new(0xC8, 0xDC, 0xF0));
    assert_eq!(decoded.get_pixel(2, 1).unwrap(), RGB8::new(0x0A, 0x28, 0x46));
}

#[test]
fn reencode_is_byte_exact() {
    let bytes = noise_bitmap(11, 6).to_bytes().unwrap();
    let again = Bitmap::from_bytes(&bytes).unwrap().to_bytes().unwrap();
    assert_eq!(again, bytes);
}

// ── Layout ───────────────────────────────────────────────────────────

#[test]
fn encoded_size_includes_row_padding() {
    for w in 1..=16usize {
        let h = 3usize;
        let bytes = Bitmap::new(w as u32, h as u32).unwrap().to_bytes().unwrap();
        let stride = 3 * w + expected_padding(w);
        assert_eq!(bytes.len(), 54 + stride * h, "width {w}");
    }
}

#[test]
fn width_five_has_one_pad_byte() {
    let mut bitmap = Bitmap::new(5, 2).unwrap();
    for y in 1..=2 {
        for x in 1..=5 {
            bitmap.set_pixel(x, y, 1, 2, 3).unwrap();
        }
    }
    let bytes = bitmap.to_bytes().unwrap();
    assert_eq!(bytes.len(), 54 + 2 * 16);
    for row in bytes[54..].chunks_exact(16) {
        for px in row[..15].chunks_exact(3) {
            assert_eq!(px, &[3, 2, 1]);
        }
        assert_eq!(row[15], 0);
    }
}

#[test]
fn decoder_skips_exactly_the_padding() {
    // Non-zero pad bytes must be ignored, not read as pixels.
    let mut bytes = checkerboard_bitmap(5, 3).to_bytes().unwrap();
    for row in 0..3 {
        bytes[54 + row * 16 + 15] = 0xFF;
    }
    let decoded = Bitmap::from_bytes(&bytes).unwrap();
    assert_eq!(decoded, checkerboard_bitmap(5, 3));
}

#[test]
fn header_field_offsets() {
    let bytes = Bitmap::new(300, 200).unwrap().to_bytes().unwrap();
    let u32_at = |off: usize| u32::from_le_bytes(bytes[off..off + 4].try_into().unwrap());
    let u16_at = |off: usize| u16::from_le_bytes(bytes[off..off + 2].try_into().unwrap());

    assert_eq!(&bytes[0..2], b"BM");
    assert_eq!(u32_at(2), 0); // file size left for the caller
    assert_eq!(u32_at(6), 0);
    assert_eq!(u32_at(10), 54);
    assert_eq!(u32_at(14), 40);
    assert_eq!(u32_at(18), 300);
    assert_eq!(u32_at(22), 200);
    assert_eq!(u16_at(26), 1);
    assert_eq!(u16_at(28), 24);
    assert_eq!(u32_at(30), 0);
    assert_eq!(u32_at(34), 3 * 300 * 200);
    assert_eq!(u32_at(38), 0);
    assert_eq!(u32_at(42), 0);
    assert_eq!(u32_at(46), 0);
    assert_eq!(u32_at(50), 0);
}

#[test]
fn top_row_is_stored_last() {
    let mut bitmap = Bitmap::new(2, 3).unwrap();
    bitmap.set_pixel(1, 1, 0xAA, 0xBB, 0xCC).unwrap();
    let bytes = bitmap.to_bytes().unwrap();
    // stride 8; y = 1 is the third stored row
    assert_eq!(&bytes[54 + 16..54 + 19], &[0xCC, 0xBB, 0xAA]);
    assert_eq!(bitmap.get_pixels().buf()[4], RGB8::new(0xAA, 0xBB, 0xCC));
}

#[test]
fn larger_info_block_is_skipped_via_offset() {
    // A 124-byte V5 info header: the extra fields are skipped by seeking.
    let source = checkerboard_bitmap(3, 2);
    let plain = source.to_bytes().unwrap();
    let mut v5 = Vec::new();
    v5.extend_from_slice(&plain[..54]);
    v5[10..14].copy_from_slice(&(14u32 + 124).to_le_bytes());
    v5[14..18].copy_from_slice(&124u32.to_le_bytes());
    v5.resize(14 + 124, 0);
    v5.extend_from_slice(&plain[54..]);

    let decoded = Bitmap::from_bytes(&v5).unwrap();
    assert_eq!(decoded.info().info_block_size, 124);
    assert_eq!(decoded.header().pixel_data_offset, 138);
    assert_eq!(decoded.pixels(), source.pixels());
}
