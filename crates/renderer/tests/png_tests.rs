//! Tests for PNG encoding functionality.
//!
//! Tests the indexed PNG and RGBA PNG encoders, including:
//! - Palette extraction (sequential and parallel)
//! - PNG format selection (auto mode)
//! - Decoded scanlines matching the input pixels

use profile_renderer::png::{create_png, create_png_auto, PngError};
use profile_renderer::{color_at, Domain, Palette, PixelBuffer, Scale};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::io::Read;

// ============================================================================
// Helper functions
// ============================================================================

const SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Color type byte of the IHDR chunk.
fn color_type(png: &[u8]) -> u8 {
    png[25]
}

/// Walk the chunk list, returning `(type, data)` pairs.
fn chunks(png: &[u8]) -> Vec<([u8; 4], Vec<u8>)> {
    let mut out = Vec::new();
    let mut pos = 8;
    while pos + 8 <= png.len() {
        let len = u32::from_be_bytes([png[pos], png[pos + 1], png[pos + 2], png[pos + 3]]) as usize;
        let kind = [png[pos + 4], png[pos + 5], png[pos + 6], png[pos + 7]];
        out.push((kind, png[pos + 8..pos + 8 + len].to_vec()));
        pos += 12 + len;
    }
    out
}

/// Inflate the IDAT stream back into filtered scanlines.
fn inflate_idat(png: &[u8]) -> Vec<u8> {
    let idat: Vec<u8> = chunks(png)
        .into_iter()
        .filter(|(kind, _)| kind == b"IDAT")
        .flat_map(|(_, data)| data)
        .collect();
    let mut decoder = flate2::read::ZlibDecoder::new(&idat[..]);
    let mut raw = Vec::new();
    decoder.read_to_end(&mut raw).unwrap();
    raw
}

/// Pixels drawn at random from the first `colors` shades of a palette,
/// like a block-rendered section with many small blocks.
fn section_pixels(width: usize, height: usize, colors: usize, seed: u64) -> Vec<u8> {
    let domain = Domain::new(0.0, (colors - 1) as f64, Scale::Linear);
    let shades: Vec<[u8; 4]> = (0..colors)
        .map(|i| color_at(i as f64, &domain, Palette::Viridis).to_array())
        .collect();

    let mut rng = StdRng::seed_from_u64(seed);
    let mut pixels = Vec::with_capacity(width * height * 4);
    for _ in 0..width * height {
        pixels.extend_from_slice(&shades[rng.gen_range(0..colors)]);
    }
    pixels
}

fn count_unique_colors(pixels: &[u8]) -> usize {
    pixels
        .chunks_exact(4)
        .map(|c| [c[0], c[1], c[2], c[3]])
        .collect::<HashSet<_>>()
        .len()
}

// ============================================================================
// Basic PNG creation tests
// ============================================================================

#[test]
fn test_create_png_simple() {
    let pixels = [
        255, 0, 0, 255, // red
        0, 255, 0, 255, // green
        0, 255, 0, 255, // green
        255, 0, 0, 255, // red
    ];

    let png = create_png_auto(&pixels, 2, 2).unwrap();
    assert_eq!(&png[0..8], &SIGNATURE);
    assert_eq!(color_type(&png), 3);
}

#[test]
fn test_create_png_rgba_scanlines() {
    let pixels = [
        255, 0, 0, 255, // red
        0, 255, 0, 255, // green
        0, 0, 255, 255, // blue
        255, 255, 0, 255, // yellow
    ];

    let png = create_png(&pixels, 2, 2).unwrap();
    assert_eq!(color_type(&png), 6);

    let raw = inflate_idat(&png);
    assert_eq!(raw.len(), 2 * (1 + 8));
    assert_eq!(raw[0], 0);
    assert_eq!(&raw[1..9], &pixels[0..8]);
    assert_eq!(raw[9], 0);
    assert_eq!(&raw[10..18], &pixels[8..16]);
}

#[test]
fn test_no_data_pixels_get_trns() {
    let pixels = [
        255, 0, 0, 255, // red, opaque
        0, 0, 0, 0, // no data
        0, 0, 255, 255, // blue, opaque
        0, 0, 0, 0, // no data
    ];

    let png = create_png_auto(&pixels, 2, 2).unwrap();
    let kinds: Vec<[u8; 4]> = chunks(&png).into_iter().map(|(k, _)| k).collect();
    assert_eq!(kinds, vec![*b"IHDR", *b"PLTE", *b"tRNS", *b"IDAT", *b"IEND"]);
}

#[test]
fn test_opaque_image_has_no_trns() {
    let pixels = [10, 20, 30, 255].repeat(9);
    let png = create_png_auto(&pixels, 3, 3).unwrap();
    assert!(chunks(&png).iter().all(|(k, _)| k != b"tRNS"));
}

#[test]
fn test_size_mismatch_is_error() {
    let err = create_png(&[0, 0, 0], 1, 1).unwrap_err();
    assert!(matches!(err, PngError::SizeMismatch { expected: 4, actual: 3, .. }));
    assert!(create_png_auto(&[0; 8], 3, 1).is_err());
}

// ============================================================================
// Format selection tests
// ============================================================================

#[test]
fn test_create_png_rgba_fallback_many_colors() {
    let mut pixels = Vec::with_capacity(300 * 4);
    for i in 0..300 {
        pixels.push((i % 256) as u8);
        pixels.push(((i / 2) % 256) as u8);
        pixels.push(((i / 3) % 256) as u8);
        pixels.push(255);
    }

    let png = create_png_auto(&pixels, 300, 1).unwrap();
    assert_eq!(color_type(&png), 6);
}

#[test]
fn test_indexed_smaller_for_few_colors() {
    let pixels = section_pixels(64, 64, 12, 3);
    assert!(count_unique_colors(&pixels) <= 12);

    let indexed = create_png_auto(&pixels, 64, 64).unwrap();
    let rgba = create_png(&pixels, 64, 64).unwrap();
    assert!(
        indexed.len() < rgba.len(),
        "Indexed PNG ({} bytes) should be smaller than RGBA ({} bytes)",
        indexed.len(),
        rgba.len()
    );
}

// ============================================================================
// Large image tests (parallel processing)
// ============================================================================

#[test]
fn test_large_image_parallel_extraction() {
    // 128x128 = 16384 pixels, above the parallel threshold
    let pixels = section_pixels(128, 128, 40, 11);
    let png = create_png_auto(&pixels, 128, 128).unwrap();
    assert_eq!(&png[0..8], &SIGNATURE);
    assert_eq!(color_type(&png), 3);

    // One filter byte plus one index per pixel
    let raw = inflate_idat(&png);
    assert_eq!(raw.len(), 128 * 129);
}

// ============================================================================
// Edge case tests
// ============================================================================

#[test]
fn test_single_pixel() {
    assert!(create_png_auto(&[255, 0, 0, 255], 1, 1).is_ok());
}

#[test]
fn test_all_transparent_buffer() {
    let buffer = PixelBuffer::new(10, 10);
    let png = buffer.to_png().unwrap();
    assert_eq!(color_type(&png), 3);
}

#[test]
fn test_grayscale_gradient_limits() {
    let mut pixels = Vec::with_capacity(257 * 4);
    for i in 0..256 {
        let v = i as u8;
        pixels.extend_from_slice(&[v, v, v, 255]);
    }

    // Exactly 256 colors still fits a palette
    let png = create_png_auto(&pixels, 256, 1).unwrap();
    assert_eq!(color_type(&png), 3);

    // One more forces RGBA
    pixels.extend_from_slice(&[128, 0, 0, 255]);
    let png = create_png_auto(&pixels, 257, 1).unwrap();
    assert_eq!(color_type(&png), 6);
}
