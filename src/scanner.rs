//! row-wise search for the indicator across four orientation variants
//!
//! A watermarked image may have been mirrored or rotated by 180 degrees
//! after embedding, and a consumer may read the LSBs with 0 and 1
//! swapped. Geometry and bit sense are compensated independently, which
//! gives four interpretations of every row.

use image::RgbaImage;

use crate::frame::indicator_bits;

/// one of the four bit/geometry interpretations of a pixel row
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Orientation {
    RegularForward,
    RegularBackward,
    InvertedForward,
    InvertedBackward,
}

/// fixed priority order; a row satisfying several variants resolves to the first
const ORIENTATIONS: [Orientation; 4] = [
    Orientation::RegularForward,
    Orientation::RegularBackward,
    Orientation::InvertedForward,
    Orientation::InvertedBackward,
];

impl Orientation {
    fn apply(&self, row: &[u8]) -> Vec<u8> {
        match self {
            Orientation::RegularForward => row.to_vec(),
            Orientation::RegularBackward => row.iter().rev().copied().collect(),
            Orientation::InvertedForward => row.iter().map(|bit| bit ^ 1).collect(),
            Orientation::InvertedBackward => row.iter().rev().map(|bit| bit ^ 1).collect(),
        }
    }
}

/// a sampled row whose bit string contains the indicator
#[derive(Debug, Eq, PartialEq)]
pub struct RowMatch {
    pub orientation: Orientation,
    pub bits: Vec<u8>,
}

/// samples rows of the image and returns the first orientation variant
/// containing the indicator pattern
///
/// The blue channel LSBs are pulled into a bit grid once, then rows are
/// visited at a stride of `height / 100 + 1`, which bounds the search to
/// roughly one hundred rows on tall images. Scanning stops at the first
/// matching variant.
pub fn scan(image: &RgbaImage) -> Option<RowMatch> {
    let grid: Vec<Vec<u8>> = image
        .rows()
        .map(|row| row.map(|pixel| pixel.0[2] % 2).collect())
        .collect();

    let step = grid.len() / 100 + 1;
    let indicator = indicator_bits();

    for row in grid.iter().step_by(step) {
        for orientation in ORIENTATIONS {
            let bits = orientation.apply(row);
            if bits.windows(indicator.len()).any(|w| w == indicator) {
                return Some(RowMatch { orientation, bits });
            }
        }
    }

    None
}

#[cfg(test)]
mod scanner_tests {
    use super::*;
    use crate::channel;
    use crate::frame::build_frame;
    use crate::test_utils::prepare_gradient_image;

    fn prepare_watermarked_image(width: u32, height: u32, payload: &str) -> RgbaImage {
        let mut image = prepare_gradient_image(width, height);
        let frame = build_frame(payload, width).expect("frame was not built");
        channel::embed(&mut image, &frame);
        image
    }

    #[test]
    fn it_should_find_a_plain_watermark_forward() {
        let image = prepare_watermarked_image(128, 8, "abc");

        let found = scan(&image).expect("no row matched");
        assert_eq!(found.orientation, Orientation::RegularForward);
        assert_eq!(found.bits.len(), 128);
    }

    #[test]
    fn it_should_find_a_mirrored_watermark_backward() {
        let mut image = prepare_watermarked_image(128, 8, "abc");
        image = image::imageops::flip_horizontal(&image);

        let found = scan(&image).expect("no row matched");
        assert_eq!(found.orientation, Orientation::RegularBackward);
    }

    #[test]
    fn it_should_find_an_inverted_watermark() {
        let mut image = prepare_watermarked_image(128, 8, "abc");
        for (_, _, pixel) in image.enumerate_pixels_mut() {
            pixel.0[2] ^= 1;
        }

        let found = scan(&image).expect("no row matched");
        assert_eq!(found.orientation, Orientation::InvertedForward);
    }

    #[test]
    fn it_should_find_a_mirrored_and_inverted_watermark() {
        let mut image = prepare_watermarked_image(128, 8, "abc");
        image = image::imageops::flip_horizontal(&image);
        for (_, _, pixel) in image.enumerate_pixels_mut() {
            pixel.0[2] ^= 1;
        }

        let found = scan(&image).expect("no row matched");
        assert_eq!(found.orientation, Orientation::InvertedBackward);
    }

    #[test]
    fn it_should_prefer_regular_forward_when_a_row_satisfies_two_variants() {
        let indicator = indicator_bits();

        // indicator followed by its mirror image reads the same in both
        // directions, so the forward and backward variants both contain it
        let mut row_bits = indicator.clone();
        row_bits.extend(indicator.iter().rev().copied());
        let reversed: Vec<u8> = row_bits.iter().rev().copied().collect();
        assert!(reversed.windows(indicator.len()).any(|w| w == indicator));

        let mut image = RgbaImage::from_pixel(
            row_bits.len() as u32,
            1,
            image::Rgba([10, 20, 30, 255]),
        );
        for (x, bit) in row_bits.iter().enumerate() {
            image.get_pixel_mut(x as u32, 0).0[2] = 30 + bit;
        }

        let found = scan(&image).expect("no row matched");
        assert_eq!(found.orientation, Orientation::RegularForward);
        assert_eq!(found.bits, row_bits);
    }

    #[test]
    fn it_should_find_nothing_on_a_cleared_image() {
        let mut image = prepare_gradient_image(128, 8);
        channel::clear(&mut image);
        assert_eq!(scan(&image), None);
    }

    #[test]
    fn it_should_find_nothing_on_a_row_narrower_than_the_indicator() {
        let image = prepare_gradient_image(32, 8);
        assert_eq!(scan(&image), None);
    }
}
