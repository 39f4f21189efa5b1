//! # Bluemark Core API
//!
//! A least-significant-bit watermark codec for raster images. A short
//! text payload is packed into a self-describing frame and written
//! redundantly into the blue channel of every pixel; reading searches
//! the image under four bit/geometry orientations, so the watermark
//! survives horizontal mirroring, 180 degree rotation and a swapped
//! reading of the LSB sense.
//!
//! The codec works on in-memory [`image::RgbaImage`] rasters only.
//! Decoding image files, encryption and robustness against lossy
//! recompression are out of scope.
//!
//! # Usage Examples
//!
//! ## Embed and recover a watermark
//!
//! ```rust
//! use bluemark::WatermarkCodec;
//! use image::RgbaImage;
//!
//! let mut image = RgbaImage::new(240, 100);
//!
//! let redundancy = WatermarkCodec::write(&mut image, "hi")
//!     .expect("Failed to embed watermark");
//! assert_eq!(redundancy, 375);
//! assert_eq!(WatermarkCodec::read(&image), "hi");
//! ```
//!
//! ## Erase a watermark
//!
//! ```rust
//! use bluemark::WatermarkCodec;
//! use image::RgbaImage;
//!
//! let mut image = RgbaImage::new(240, 100);
//!
//! WatermarkCodec::write(&mut image, "hi").expect("Failed to embed watermark");
//! assert!(WatermarkCodec::erase(&mut image));
//! assert_eq!(WatermarkCodec::read(&image), "");
//! ```

pub mod bits;
pub mod channel;
pub mod error;
pub mod frame;
pub mod result;
pub mod scanner;

pub use crate::error::WatermarkError;
pub use crate::frame::{max_payload_len, INDICATOR, MAX_PAYLOAD_CHARS};
pub use crate::result::Result;
pub use crate::scanner::{Orientation, RowMatch};

use image::RgbaImage;

/// the watermark codec entry point
///
/// All operations borrow the raster for the duration of the call and
/// keep no state behind, so the codec is freely reusable across images.
/// Callers needing concurrent access to one raster have to serialize it
/// themselves.
pub struct WatermarkCodec;

impl WatermarkCodec {
    /// embeds the payload into the blue channel of the image
    ///
    /// The frame is repeated across all pixels; the returned value is
    /// the number of complete repetitions. Embedding is verified by
    /// reading the watermark back. On a failed verification the raster
    /// keeps the written bits, there is no rollback.
    pub fn write(image: &mut RgbaImage, payload: &str) -> Result<u32> {
        let frame = frame::build_frame(payload, image.width())?;
        let redundancy = channel::embed(image, &frame);

        if Self::read(image).is_empty() {
            return Err(WatermarkError::VerificationFailed);
        }

        Ok(redundancy)
    }

    /// reads the embedded watermark, or an empty string when none is found
    pub fn read(image: &RgbaImage) -> String {
        match scanner::scan(image) {
            Some(row) => frame::extract_payload(&row.bits),
            None => String::new(),
        }
    }

    /// clears every blue channel LSB and verifies the watermark is gone
    pub fn erase(image: &mut RgbaImage) -> bool {
        channel::clear(image);
        Self::read(image).is_empty()
    }
}


#[cfg(test)]
mod test_utils {
    use image::{ImageBuffer, RgbaImage};

    /// carrier with varied channel values, blue LSBs deliberately mixed
    pub fn prepare_gradient_image(width: u32, height: u32) -> RgbaImage {
        ImageBuffer::from_fn(width, height, |x, y| {
            let i = (3 * x + 7 * y) as u8;
            image::Rgba([i, i.wrapping_add(40), i.wrapping_add(80), 255])
        })
    }
}
