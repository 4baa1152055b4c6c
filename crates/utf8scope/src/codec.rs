use core::{fmt, ops::Deref};

use bstr::BStr;

use crate::{CodecError, CodecOptions, MAX_SCALAR, Malformation, Validation, Width};

/// Codepoint-level operations over UTF-8 byte buffers.
///
/// A `Codec` only carries its [`CodecOptions`]; every operation is a pure
/// function of the buffer passed in. Index lookups walk the buffer from the
/// start, so each call is linear in the buffer length.
///
/// The indexer methods live in `index.rs`, the analysis methods in
/// `analysis.rs`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Codec {
    options: CodecOptions,
}

impl Codec {
    /// Creates a codec with the given options.
    #[must_use]
    pub const fn new(options: CodecOptions) -> Self {
        Self { options }
    }

    /// Shorthand for a codec using [`Validation::Strict`].
    #[must_use]
    pub const fn strict() -> Self {
        Self::new(CodecOptions::strict())
    }

    /// The options this codec was built with.
    #[must_use]
    pub const fn options(&self) -> CodecOptions {
        self.options
    }

    pub(crate) const fn validation(&self) -> Validation {
        self.options.validation
    }

    /// Decodes the scalar value of the codepoint at `index`.
    ///
    /// # Errors
    ///
    /// - [`CodecError::IndexOutOfRange`] if the buffer has `index` or fewer
    ///   codepoints.
    /// - [`CodecError::MalformedEncoding`] if the walk meets an invalid start
    ///   byte before reaching `index`, or if the sequence at `index` runs past
    ///   the end of the buffer. In strict mode any invalid sequence on the way
    ///   is reported too.
    pub fn decode_at(&self, bytes: &[u8], index: usize) -> Result<u32, CodecError> {
        let span = self.span_at(bytes, index)?;
        decode_sequence(bytes, span.offset, span.width, self.validation())
    }
}

/// Decodes the sequence of `width` bytes starting at `offset`.
///
/// The start byte contributes its payload bits, every following byte six
/// bits. Continuation tags are only checked under [`Validation::Strict`],
/// together with overlong forms, surrogates and values past U+10FFFF.
pub(crate) fn decode_sequence(
    bytes: &[u8],
    offset: usize,
    width: Width,
    validation: Validation,
) -> Result<u32, CodecError> {
    let malformed = |reason| CodecError::malformed(offset, reason);

    let Some(seq) = bytes.get(offset..offset + width.len()) else {
        return Err(malformed(Malformation::Truncated {
            width,
            available: bytes.len().saturating_sub(offset),
        }));
    };
    let strict = validation == Validation::Strict;

    let mut scalar = u32::from(seq[0] & width.payload_mask());
    for &byte in &seq[1..] {
        if strict && byte & 0xC0 != 0x80 {
            return Err(malformed(Malformation::InvalidContinuation(byte)));
        }
        scalar = (scalar << 6) | u32::from(byte & 0x3F);
    }

    if strict {
        if scalar < width.min_scalar() {
            return Err(malformed(Malformation::Overlong(scalar)));
        }
        if (0xD800..=0xDFFF).contains(&scalar) {
            return Err(malformed(Malformation::Surrogate(scalar)));
        }
        if scalar > MAX_SCALAR {
            return Err(malformed(Malformation::OutOfRange(scalar)));
        }
    }
    Ok(scalar)
}

/// Encodes `scalar` into its shortest UTF-8 form.
///
/// Surrogates are encoded like any other value in range; the result is then
/// not valid UTF-8, which [`Encoded`]'s `Display` renders lossily.
///
/// ```rust
/// use utf8scope::{CodecError, encode};
///
/// assert_eq!(encode(0x4E2D).unwrap().as_bytes(), "中".as_bytes());
/// assert_eq!(encode(0x11_0000), Err(CodecError::InvalidScalarValue(0x11_0000)));
/// ```
///
/// # Errors
///
/// [`CodecError::InvalidScalarValue`] if `scalar` exceeds U+10FFFF.
#[allow(clippy::cast_possible_truncation)]
pub fn encode(scalar: u32) -> Result<Encoded, CodecError> {
    let width = Width::for_scalar(scalar).ok_or(CodecError::InvalidScalarValue(scalar))?;

    let mut bytes = [0u8; 4];
    let mut rest = scalar;
    for slot in bytes[1..width.len()].iter_mut().rev() {
        *slot = 0x80 | (rest & 0x3F) as u8;
        rest >>= 6;
    }
    bytes[0] = width.tag() | rest as u8;

    Ok(Encoded { bytes, width })
}

/// One encoded scalar value, 1 to 4 bytes, held inline.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Encoded {
    bytes: [u8; 4],
    width: Width,
}

impl Encoded {
    /// The encoded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.width.len()]
    }

    /// The encoded bytes as a byte string.
    #[must_use]
    pub fn as_bstr(&self) -> &BStr {
        BStr::new(self.as_bytes())
    }

    /// Number of bytes in the encoding.
    #[must_use]
    pub fn width(&self) -> Width {
        self.width
    }
}

impl Deref for Encoded {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for Encoded {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for Encoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_bstr(), f)
    }
}

impl fmt::Display for Encoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_bstr(), f)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Encoded {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
