use thiserror::Error;

use crate::Width;

/// Errors produced while walking, decoding or encoding UTF-8.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// The walk hit a byte sequence it cannot step over.
    #[error("malformed UTF-8 at byte {offset}: {reason}")]
    MalformedEncoding {
        /// Offset of the start byte of the offending sequence.
        offset: usize,
        /// What is wrong with the sequence.
        reason: Malformation,
    },
    /// The requested codepoint index is past the last codepoint.
    #[error("codepoint index {index} out of range")]
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
    },
    /// A scalar value to encode exceeds U+10FFFF.
    #[error("scalar value {0:#X} is not encodable")]
    InvalidScalarValue(u32),
}

/// Reason attached to [`CodecError::MalformedEncoding`].
///
/// Lenient decoding only ever reports [`Malformation::InvalidStartByte`] and
/// [`Malformation::Truncated`]; the rest come from strict validation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformation {
    /// A continuation byte or an unused high-bit pattern in start position.
    #[error("invalid start byte {0:#04X}")]
    InvalidStartByte(u8),
    /// The buffer ends before the sequence does.
    #[error("{width}-byte sequence truncated after {available} byte(s)")]
    Truncated {
        /// Width announced by the start byte.
        width: Width,
        /// Bytes actually left in the buffer, start byte included.
        available: usize,
    },
    /// A byte inside the sequence does not match `10xxxxxx`.
    #[error("invalid continuation byte {0:#04X}")]
    InvalidContinuation(u8),
    /// The scalar fits in a shorter sequence.
    #[error("overlong encoding of U+{0:04X}")]
    Overlong(u32),
    /// The scalar lies in U+D800..=U+DFFF.
    #[error("encoded surrogate U+{0:04X}")]
    Surrogate(u32),
    /// The scalar exceeds U+10FFFF.
    #[error("encoded value {0:#X} exceeds U+10FFFF")]
    OutOfRange(u32),
}

impl CodecError {
    pub(crate) fn malformed(offset: usize, reason: Malformation) -> Self {
        CodecError::MalformedEncoding { offset, reason }
    }

    /// Whether this is an [`CodecError::IndexOutOfRange`] error.
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, CodecError::IndexOutOfRange { .. })
    }
}
