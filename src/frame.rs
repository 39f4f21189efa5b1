//! packing and unpacking of the watermark frame
//!
//! A frame is the bit sequence `indicator ‖ length byte ‖ payload`.
//! The length byte holds the payload length in bits, so the payload is
//! capped at 30 characters and additionally by the carrier width: one
//! complete frame has to fit into a single row of pixels, which is what
//! makes the row-wise orientation scan work.

use crate::bits::{bits_to_byte, byte_to_bits};
use crate::error::WatermarkError;
use crate::result::Result;

/// marker preceding every embedded frame
pub const INDICATOR: &str = "start";

/// hard ceiling for the payload character count
pub const MAX_PAYLOAD_CHARS: usize = 30;

/// the indicator translated to its 40-bit pattern
pub(crate) fn indicator_bits() -> Vec<u8> {
    INDICATOR
        .bytes()
        .flat_map(|c| byte_to_bits(c).into_iter())
        .collect()
}

/// maximum number of payload characters for a carrier of the given width
///
/// One character occupies 8 pixels, and a row must hold the indicator,
/// the length byte and the payload. Narrow images may allow nothing at all.
pub fn max_payload_len(width: u32) -> usize {
    let available = (width as usize / 8).saturating_sub(INDICATOR.len() + 1);
    available.min(MAX_PAYLOAD_CHARS)
}

/// packs a payload into the frame bit sequence for a carrier of the given width
pub fn build_frame(payload: &str, width: u32) -> Result<Vec<u8>> {
    if payload.is_empty() {
        return Err(WatermarkError::EmptyPayload);
    }

    let len = payload.chars().count();
    let max = max_payload_len(width);
    if len > max {
        return Err(WatermarkError::PayloadTooLong { len, max });
    }
    if let Some(c) = payload.chars().find(|c| *c as u32 > 0xFF) {
        return Err(WatermarkError::UnencodableCharacter(c));
    }

    let mut frame = Vec::with_capacity(8 * (INDICATOR.len() + 1 + len));
    frame.extend(indicator_bits());
    frame.extend(byte_to_bits((len * 8) as u8));
    for c in payload.chars() {
        frame.extend(byte_to_bits(c as u8));
    }

    Ok(frame)
}

/// unpacks the payload out of a row bit string that contains the indicator
///
/// Returns an empty string when no indicator is present or the length
/// byte reads zero. A frame that wraps past the end of the row yields
/// only the characters whose bits are fully available.
pub fn extract_payload(bits: &[u8]) -> String {
    let indicator = indicator_bits();
    let start = match bits.windows(indicator.len()).position(|w| w == indicator) {
        Some(pos) => pos + indicator.len(),
        None => return String::new(),
    };

    if start + 8 > bits.len() {
        return String::new();
    }
    let payload_bits = bits_to_byte(&bits[start..start + 8]) as usize;
    let payload_start = start + 8;

    let mut payload = String::new();
    let mut i = 0;
    while i < payload_bits && payload_start + i + 8 <= bits.len() {
        payload.push(char::from(bits_to_byte(
            &bits[payload_start + i..payload_start + i + 8],
        )));
        i += 8;
    }

    payload
}
