#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn header(width: u32, height: u32, bpp: u16, palette_entries: u32, stride: u32) -> Vec<u8> {
    let data_offset = 54 + palette_entries * 4;
    let file_size = data_offset + stride * height;
    let mut bmp = vec![0u8; 54];
    bmp[0] = b'B'; bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&file_size.to_le_bytes());
    bmp[10..14].copy_from_slice(&data_offset.to_le_bytes());
    bmp[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
    bmp[18..22].copy_from_slice(&width.to_le_bytes());
    bmp[22..26].copy_from_slice(&height.to_le_bytes());
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    bmp[28..30].copy_from_slice(&bpp.to_le_bytes());
    bmp
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // 1x1 24-bit
    let mut bmp = header(1, 1, 24, 0, 4);
    bmp.extend_from_slice(&[0xff, 0x00, 0x00, 0x00]); // BGR + padding
    fs::write(format!("{dir}/bgr24_1x1.bmp"), bmp).unwrap();

    // 2x2 32-bit
    let mut bmp = header(2, 2, 32, 0, 8);
    bmp.extend_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16]);
    fs::write(format!("{dir}/bgra32_2x2.bmp"), bmp).unwrap();

    // 3x2 8-bit, grayscale palette
    let mut bmp = header(3, 2, 8, 256, 4);
    for i in 0..=255u8 {
        bmp.extend_from_slice(&[i, i, i, 0]);
    }
    bmp.extend_from_slice(&[0, 128, 255, 0, 1, 2, 3, 0]);
    fs::write(format!("{dir}/pal8_3x2.bmp"), bmp).unwrap();

    // 3x1 4-bit, odd width
    let mut bmp = header(3, 1, 4, 16, 4);
    for i in 0..16u8 {
        bmp.extend_from_slice(&[i * 16, 0, 255 - i * 16, 0]);
    }
    bmp.extend_from_slice(&[0x12, 0x3f, 0, 0]);
    fs::write(format!("{dir}/pal4_3x1.bmp"), bmp).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    let os2 = {
        let mut h = header(1, 1, 24, 0, 4);
        h[14..18].copy_from_slice(&12u32.to_le_bytes());
        h
    };
    fs::write(format!("{dir}/os2_header.bin"), os2).unwrap();

    println!("Generated seed corpus in {dir}/");
}
