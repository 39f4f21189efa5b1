use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum WatermarkError {
    /// Represents a write attempt with nothing to embed
    #[error("Payload is empty")]
    EmptyPayload,

    /// Represents a payload that does not fit a single row of the carrier image
    #[error("Payload of {len} characters exceeds the capacity of {max} for this image")]
    PayloadTooLong { len: usize, max: usize },

    /// Represents a payload character outside the single-byte range.
    /// Each payload character occupies exactly 8 bits in the frame,
    /// so anything above U+00FF cannot be embedded.
    #[error("Payload character {0:?} is not representable in 8 bits")]
    UnencodableCharacter(char),

    /// Represents a watermark that could not be read back after embedding
    #[error("Embedded watermark could not be verified")]
    VerificationFailed,
}
