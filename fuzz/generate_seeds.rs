#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn header(data_type: u8, width: u16, height: u16, bpp: u8, descriptor: u8) -> Vec<u8> {
    let mut h = vec![0u8, 0, data_type, 0, 0, 0, 0, 0, 0, 0, 0, 0];
    h.extend_from_slice(&width.to_le_bytes());
    h.extend_from_slice(&height.to_le_bytes());
    h.push(bpp);
    h.push(descriptor);
    h
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // Uncompressed BGR 2x2, top-left
    let mut bgr = header(2, 2, 2, 24, 0x20);
    bgr.extend_from_slice(&[255, 0, 0, 0, 255, 0, 0, 0, 255, 128, 128, 128]);
    fs::write(format!("{dir}/bgr_2x2.tga"), bgr).unwrap();

    // Uncompressed grayscale 3x2, bottom-left
    let mut gray = header(3, 3, 2, 8, 0x00);
    gray.extend_from_slice(&[0x00, 0x40, 0x80, 0xc0, 0xff, 0x64]);
    fs::write(format!("{dir}/gray_3x2_bottom_left.tga"), gray).unwrap();

    // RLE BGRA 2x2: one replicate packet per row
    let mut rle_bgra = header(10, 2, 2, 32, 0x28);
    rle_bgra.extend_from_slice(&[0x81, 0, 0, 0, 255]);
    rle_bgra.extend_from_slice(&[0x01, 1, 2, 3, 4, 0, 0, 0, 255]);
    fs::write(format!("{dir}/rle_bgra_2x2.tga"), rle_bgra).unwrap();

    // RLE grayscale 4x1: literal + replicate
    let mut rle_gray = header(11, 4, 1, 8, 0x20);
    rle_gray.extend_from_slice(&[0x01, 9, 8, 0x81, 7]);
    fs::write(format!("{dir}/rle_gray_4x1.tga"), rle_gray).unwrap();

    // Image ID field present
    let mut with_id = header(3, 1, 1, 8, 0x20);
    with_id[0] = 4;
    with_id.extend_from_slice(b"seed");
    with_id.push(42);
    fs::write(format!("{dir}/gray_1x1_with_id.tga"), with_id).unwrap();

    println!("Generated seed corpus in {dir}");
}
