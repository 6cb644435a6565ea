use thiserror::Error;

/// Failure modes of [`c32dec`](crate::c32dec). Encoding is total and has no
/// error type.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A character survived normalization without mapping into the alphabet.
    /// `position` is the character offset into the input.
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter { position: usize, character: char },

    /// The final partial symbol carried non-zero bits where the encoder only
    /// ever writes zero padding, so the input cannot be a Crock32 encoding.
    #[error("non-zero padding bits in final symbol")]
    TrailingBits,
}
