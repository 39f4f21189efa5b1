//! byte to bit buffer conversions, most significant bit first

/// encodes a byte into its 8 binary digits, MSB first
///
/// ## Example of usage
/// ```rust
/// use bluemark::bits::byte_to_bits;
///
/// assert_eq!(byte_to_bits(b'a'), [0, 1, 1, 0, 0, 0, 0, 1]);
/// ```
pub fn byte_to_bits(value: u8) -> [u8; 8] {
    let mut bits = [0u8; 8];
    let mut rest = value;
    for slot in bits.iter_mut().rev() {
        *slot = rest % 2;
        rest /= 2;
    }
    bits
}

/// decodes up to 8 binary digits (MSB first) back into a byte
///
/// Callers pass exactly 8 bits for a full byte; shorter slices decode
/// the digits they contain.
pub fn bits_to_byte(bits: &[u8]) -> u8 {
    bits.iter().fold(0u8, |value, bit| (value << 1) | (bit & 1))
}
