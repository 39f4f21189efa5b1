//! blue channel passes: embedding a frame and erasing it again
//!
//! All passes walk the raster row-major, top-left to bottom-right, and
//! touch nothing but the blue channel of each pixel.

use image::RgbaImage;

const BLUE: usize = 2;

/// writes the frame repeatedly into the blue channel LSB of every pixel
///
/// Two passes: the first normalizes every odd blue value to an even one
/// (255 steps down, everything else steps up), so the second pass can
/// embed each bit by plain addition. The frame wraps end-to-end across
/// the whole raster; the returned count holds the number of complete
/// repetitions, a trailing partial one is written but not counted.
pub fn embed(image: &mut RgbaImage, frame: &[u8]) -> u32 {
    if frame.is_empty() {
        return 0;
    }

    for (_, _, pixel) in image.enumerate_pixels_mut() {
        let blue = &mut pixel.0[BLUE];
        if *blue % 2 == 1 {
            if *blue > 254 {
                *blue -= 1;
            } else {
                *blue += 1;
            }
        }
    }

    let mut cursor = 0;
    let mut redundancy = 0;
    for (_, _, pixel) in image.enumerate_pixels_mut() {
        pixel.0[BLUE] += frame[cursor];
        if cursor < frame.len() - 1 {
            cursor += 1;
        } else {
            cursor = 0;
            redundancy += 1;
        }
    }

    redundancy
}

/// resets the blue channel LSB of every pixel to zero
///
/// Odd blue values are decremented by one; even values are already
/// clear, which makes the pass idempotent.
pub fn clear(image: &mut RgbaImage) {
    for (_, _, pixel) in image.enumerate_pixels_mut() {
        let blue = &mut pixel.0[BLUE];
        if *blue % 2 == 1 {
            *blue -= 1;
        }
    }
}
