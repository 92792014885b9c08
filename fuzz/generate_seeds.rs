#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn bmp_24bit(width: u32, height: u32, offset: u32) -> Vec<u8> {
    let stride = (width as usize * 3).div_ceil(4) * 4;
    let mut bmp = vec![0u8; offset as usize + stride * height as usize];
    bmp[0] = b'B'; bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&(bmp.len() as u32).to_le_bytes()); // file size
    bmp[10..14].copy_from_slice(&offset.to_le_bytes()); // data offset
    bmp[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
    bmp[18..22].copy_from_slice(&width.to_le_bytes());
    bmp[22..26].copy_from_slice(&height.to_le_bytes());
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    bmp[28..30].copy_from_slice(&24u16.to_le_bytes()); // bpp
    for (i, b) in bmp[offset as usize..].iter_mut().enumerate() {
        *b = (i * 37) as u8;
    }
    bmp
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    fs::write(format!("{dir}/bmp_1x1.bmp"), bmp_24bit(1, 1, 54)).unwrap();
    fs::write(format!("{dir}/bmp_5x3.bmp"), bmp_24bit(5, 3, 54)).unwrap();
    fs::write(format!("{dir}/bmp_4x2_gap.bmp"), bmp_24bit(4, 2, 70)).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    let mut no_pixels = bmp_24bit(3, 3, 54);
    no_pixels.truncate(60);
    fs::write(format!("{dir}/bmp_truncated.bin"), no_pixels).unwrap();

    println!("Generated seed corpus in {dir}/");
}
