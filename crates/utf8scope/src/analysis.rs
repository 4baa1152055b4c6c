use alloc::collections::BTreeSet;

use bstr::BString;

use crate::{Codec, CodecError, Encoded, encode};

/// Whether every byte is in the ASCII range.
#[must_use]
pub fn is_ascii(bytes: &[u8]) -> bool {
    bytes.is_ascii()
}

/// Uppercases `a`-`z` in place and returns how many bytes changed.
///
/// Bytes outside `a`-`z` are left alone. No UTF-8 start or continuation byte
/// of a multi-byte sequence falls in that range, so encoded text stays
/// intact.
pub fn uppercase_ascii(bytes: &mut [u8]) -> usize {
    let mut changed = 0;
    for byte in bytes {
        if byte.is_ascii_lowercase() {
            byte.make_ascii_uppercase();
            changed += 1;
        }
    }
    changed
}

/// Owned variant of [`uppercase_ascii`].
///
/// ```rust
/// use utf8scope::to_uppercase_ascii;
///
/// let (upper, changed) = to_uppercase_ascii("héllo".as_bytes());
/// assert_eq!(upper, "HéLLO");
/// assert_eq!(changed, 4);
/// ```
#[must_use]
pub fn to_uppercase_ascii(bytes: &[u8]) -> (BString, usize) {
    let mut owned = BString::from(bytes);
    let changed = uppercase_ascii(&mut owned);
    (owned, changed)
}

impl Codec {
    /// Bytes of the codepoints in `start..end`.
    ///
    /// An empty range (`end <= start`) gives an empty slice without looking
    /// at the buffer. An `end` past the last codepoint clamps to the end of
    /// the buffer.
    ///
    /// ```rust
    /// use utf8scope::Codec;
    ///
    /// let codec = Codec::default();
    /// let text = "añ中🐩".as_bytes();
    /// assert_eq!(codec.substring(text, 1, 3), Ok("ñ中".as_bytes()));
    /// assert_eq!(codec.substring(text, 0, 6), Ok(text));
    /// assert_eq!(codec.substring(text, 2, 2), Ok(&b""[..]));
    /// ```
    ///
    /// # Errors
    ///
    /// [`CodecError::IndexOutOfRange`] if `start` is not a codepoint of the
    /// buffer; [`CodecError::MalformedEncoding`] if the walk fails at or
    /// before `end`.
    pub fn substring<'a>(
        &self,
        bytes: &'a [u8],
        start: usize,
        end: usize,
    ) -> Result<&'a [u8], CodecError> {
        if end <= start {
            return Ok(&[]);
        }

        let mut from = None;
        for (index, span) in self.codepoints(bytes).enumerate() {
            let span = span?;
            if index == start {
                from = Some(span.offset);
            } else if index == end {
                if let Some(from) = from {
                    return Ok(&bytes[from..span.offset]);
                }
            }
        }

        match from {
            Some(from) => Ok(&bytes[from..]),
            None => Err(CodecError::IndexOutOfRange { index: start }),
        }
    }

    /// Whether the codepoint at `index` is one of `targets`.
    ///
    /// # Errors
    ///
    /// Whatever [`Codec::decode_at`] reports for `index`.
    pub fn has_codepoint(
        &self,
        bytes: &[u8],
        index: usize,
        targets: &BTreeSet<u32>,
    ) -> Result<bool, CodecError> {
        let scalar = self.decode_at(bytes, index)?;
        Ok(targets.contains(&scalar))
    }

    /// Encodes the scalar value following the codepoint at `index`.
    ///
    /// ```rust
    /// use utf8scope::Codec;
    ///
    /// let next = Codec::default().next_char(b"Zebra", 0).unwrap();
    /// assert_eq!(next.as_bytes(), b"[");
    /// ```
    ///
    /// # Errors
    ///
    /// Whatever [`Codec::decode_at`] reports for `index`, or
    /// [`CodecError::InvalidScalarValue`] if the successor exceeds U+10FFFF.
    pub fn next_char(&self, bytes: &[u8], index: usize) -> Result<Encoded, CodecError> {
        let scalar = self.decode_at(bytes, index)?;
        let next = scalar
            .checked_add(1)
            .ok_or(CodecError::InvalidScalarValue(scalar))?;
        encode(next)
    }
}
